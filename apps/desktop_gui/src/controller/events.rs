//! Backend-to-UI events and error modeling for the desktop GUI controller.

use std::path::PathBuf;

use client_core::{CreatedEvent, SubmitError};
use shared::protocol::EventSummary;

use crate::media::PreviewImage;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    ImagePreviewLoaded {
        path: PathBuf,
        data_url: String,
        image: PreviewImage,
    },
    ImagePreviewFailed {
        path: PathBuf,
        reason: String,
    },
    SubmitFinished {
        submission_id: u64,
        result: Result<CreatedEvent, SubmitError>,
    },
    EventsRefreshed(Vec<EventSummary>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Refresh,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("connect")
            || message_lower.contains("network")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
            || message_lower.contains("failed to reach")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Errors that should interrupt the user with a banner rather than a status line.
    pub fn wants_banner(&self) -> bool {
        self.context == UiErrorContext::BackendStartup
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
