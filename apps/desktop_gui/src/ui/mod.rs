//! UI layer for the desktop GUI: app shell, events page, and the create-event form.

pub mod app;
mod form;
mod page;

pub use app::EventDeskApp;
