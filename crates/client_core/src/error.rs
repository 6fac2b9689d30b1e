//! Failure taxonomy for the create-event workflow.

use std::{io, path::PathBuf};

use shared::domain::EventField;
use thiserror::Error;

pub const MISSING_IMAGE_MESSAGE: &str = "Please select an image";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to create event";
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please fill in the {} field", .0.label())]
    MissingField(EventField),
    #[error("{}", MISSING_IMAGE_MESSAGE)]
    MissingImage,
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("failed to read image '{}': {source}", .path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response from server: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl SubmitError {
    /// Detected before any request was attempted.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::MissingImage)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Single line shown in the form's error banner.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a base64 data url")]
    NotDataUrl,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
