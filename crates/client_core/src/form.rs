//! State and submit workflow of the create-event form.

use std::path::Path;

use shared::domain::EventField;
use tracing::{debug, info, warn};

use crate::{
    draft::EventDraft,
    error::SubmitError,
    preview::ImageSelection,
    transport::{CreatedEvent, EventSubmitter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    CreateEvent,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::CreateEvent => "/events/create",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/events/create" => Some(Self::CreateEvent),
            _ => None,
        }
    }
}

/// Where the form goes after a successful submit.
pub trait Navigator {
    fn push(&mut self, route: Route);
    /// Re-fetch server data for the current route.
    fn refresh(&mut self);
}

/// Snapshot handed to the submitter once local checks pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSubmission {
    pub draft: EventDraft,
    pub image: ImageSelection,
}

#[derive(Debug, Default)]
pub struct CreateEventForm {
    draft: EventDraft,
    image: Option<ImageSelection>,
    preview: Option<String>,
    loading: bool,
    error: String,
}

impl CreateEventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn value(&self, field: EventField) -> &str {
        self.draft.get(field)
    }

    pub fn set_field(&mut self, field: EventField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn field_mut(&mut self, field: EventField) -> &mut String {
        self.draft.get_mut(field)
    }

    pub fn image(&self) -> Option<&ImageSelection> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Replaces the selection. The old preview is dropped until the new one loads.
    pub fn select_image(&mut self, selection: ImageSelection) {
        debug!(file_name = %selection.file_name, "form: image selected");
        self.image = Some(selection);
        self.preview = None;
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.preview = None;
    }

    /// Installs a preview if it still belongs to the current selection.
    pub fn apply_preview(&mut self, path: &Path, data_url: String) -> bool {
        match &self.image {
            Some(selection) if selection.path == path => {
                self.preview = Some(data_url);
                true
            }
            _ => {
                debug!(path = %path.display(), "form: dropping stale preview");
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        (!self.error.is_empty()).then_some(self.error.as_str())
    }

    pub fn dismiss_error(&mut self) {
        self.error.clear();
    }

    /// Starts a submit. Returns `None` when one is already running or a local check failed.
    pub fn begin_submit(&mut self) -> Option<EventSubmission> {
        if self.loading {
            debug!("form: submit already in flight");
            return None;
        }
        self.error.clear();
        self.loading = true;

        match self.local_submission() {
            Ok(submission) => Some(submission),
            Err(err) => {
                self.fail(err.user_message());
                None
            }
        }
    }

    fn local_submission(&self) -> Result<EventSubmission, SubmitError> {
        if let Some(field) = self.draft.missing_required() {
            return Err(SubmitError::MissingField(field));
        }
        let image = self.image.clone().ok_or(SubmitError::MissingImage)?;
        Ok(EventSubmission {
            draft: self.draft.clone(),
            image,
        })
    }

    /// Applies the submit outcome. Returns `true` when the form navigated away.
    pub fn finish_submit(
        &mut self,
        result: Result<CreatedEvent, SubmitError>,
        navigator: &mut impl Navigator,
    ) -> bool {
        self.loading = false;
        match result {
            Ok(created) => {
                info!(status = created.status, "form: event created, returning home");
                navigator.push(Route::Home);
                navigator.refresh();
                true
            }
            Err(err) => {
                warn!(local = err.is_local(), status = ?err.status(), "form: submit failed: {err}");
                self.error = err.user_message();
                false
            }
        }
    }

    /// Fails the current submit with a message that did not come from the submitter.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = message.into();
    }

    /// The submit was abandoned; no error is shown.
    pub fn cancel_submit(&mut self) {
        if self.loading {
            info!("form: submit cancelled");
        }
        self.loading = false;
    }

    /// Runs the whole workflow in place. Returns the server response on success.
    pub async fn submit<S, N>(&mut self, submitter: &S, navigator: &mut N) -> Option<CreatedEvent>
    where
        S: EventSubmitter + ?Sized,
        N: Navigator,
    {
        let submission = self.begin_submit()?;
        match submitter.create_event(&submission).await {
            Ok(created) => {
                self.finish_submit(Ok(created.clone()), navigator);
                Some(created)
            }
            Err(err) => {
                self.finish_submit(Err(err), navigator);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
