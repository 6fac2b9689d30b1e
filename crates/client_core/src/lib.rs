pub mod config;
pub mod draft;
pub mod error;
pub mod form;
pub mod payload;
pub mod preview;
pub mod transport;

pub use draft::{encode_list, split_list, EventDraft};
pub use error::{PreviewError, SubmitError};
pub use form::{CreateEventForm, EventSubmission, Navigator, Route};
pub use payload::{EventPayload, ImageAttachment};
pub use preview::{decode_data_url, encode_data_url, load_preview, ImageSelection};
pub use transport::{CreatedEvent, EventSubmitter, EventsClient, EVENTS_PATH};
