use serde::{Deserialize, Serialize};

/// One entry of the event listing shown on the home route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

/// The listing endpoint answers either with a bare array or wrapped in `events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventListResponse {
    Bare(Vec<EventSummary>),
    Wrapped { events: Vec<EventSummary> },
}

impl EventListResponse {
    pub fn into_events(self) -> Vec<EventSummary> {
        match self {
            Self::Bare(events) | Self::Wrapped { events } => events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_wrapped_listings() {
        let bare: EventListResponse =
            serde_json::from_str(r#"[{"title":"React Summit","date":"2026-05-01"}]"#)
                .expect("bare");
        let wrapped: EventListResponse = serde_json::from_str(
            r#"{"message":"ok","events":[{"title":"React Summit","venue":"Hall A","extra":1}]}"#,
        )
        .expect("wrapped");

        let bare = bare.into_events();
        assert_eq!(bare[0].title, "React Summit");
        assert_eq!(bare[0].date.as_deref(), Some("2026-05-01"));

        let wrapped = wrapped.into_events();
        assert_eq!(wrapped[0].venue.as_deref(), Some("Hall A"));
        assert!(wrapped[0].date.is_none());
    }
}
