//! Backend commands queued from UI to backend worker.

use client_core::{EventSubmission, ImageSelection};

pub enum BackendCommand {
    LoadImagePreview {
        selection: ImageSelection,
    },
    SubmitEvent {
        submission_id: u64,
        submission: EventSubmission,
    },
    CancelSubmit {
        submission_id: u64,
    },
    RefreshEvents,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadImagePreview { .. } => "load_image_preview",
            Self::SubmitEvent { .. } => "submit_event",
            Self::CancelSubmit { .. } => "cancel_submit",
            Self::RefreshEvents => "refresh_events",
        }
    }
}
