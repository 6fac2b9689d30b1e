//! HTTP access to the events API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ErrorBody,
    protocol::{EventListResponse, EventSummary},
};
use tracing::{info, warn};
use url::Url;

use crate::{
    error::{SubmitError, REJECTED_FALLBACK_MESSAGE},
    form::EventSubmission,
    payload::EventPayload,
};

pub const EVENTS_PATH: &str = "/api/events";

/// Response of a successful create call. The body is kept as returned.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEvent {
    pub status: u16,
    pub body: serde_json::Value,
}

#[async_trait]
pub trait EventSubmitter: Send + Sync {
    async fn create_event(&self, submission: &EventSubmission) -> Result<CreatedEvent, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct EventsClient {
    http: Client,
    base_url: Url,
}

impl EventsClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn parse(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .with_context(|| format!("invalid server url '{base_url}'"))?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The endpoint is always rooted at the server origin.
    pub fn events_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(EVENTS_PATH);
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    pub async fn send_payload(&self, payload: EventPayload) -> Result<CreatedEvent, SubmitError> {
        let url = self.events_url();
        let image_bytes = payload.image.bytes.len();
        let form = payload.into_form()?;
        info!(%url, image_bytes, "events: creating event");

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(err) => {
                warn!(status = status.as_u16(), "events: response body is not json");
                return Err(err.into());
            }
        };

        if !status.is_success() {
            let message = ErrorBody::from_value(&body)
                .message
                .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string());
            warn!(status = status.as_u16(), %message, "events: create rejected");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        info!(status = status.as_u16(), "events: event created");
        Ok(CreatedEvent {
            status: status.as_u16(),
            body,
        })
    }

    pub async fn list_events(&self) -> Result<Vec<EventSummary>> {
        let url = self.events_url();
        let listing: EventListResponse = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?
            .error_for_status()?
            .json()
            .await
            .context("invalid event listing payload")?;
        Ok(listing.into_events())
    }
}

#[async_trait]
impl EventSubmitter for EventsClient {
    async fn create_event(&self, submission: &EventSubmission) -> Result<CreatedEvent, SubmitError> {
        let image = submission.image.read().await?;
        let payload = EventPayload::new(&submission.draft, image);
        self.send_payload(payload).await
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
