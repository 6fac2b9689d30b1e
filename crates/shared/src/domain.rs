use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownValue;

/// Where an event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    #[default]
    Offline,
    Online,
    Hybrid,
}

impl EventMode {
    pub const ALL: [EventMode; 3] = [EventMode::Offline, EventMode::Online, EventMode::Hybrid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
            Self::Hybrid => "hybrid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Offline => "Offline",
            Self::Online => "Online",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventMode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownValue::new("event mode", s))
    }
}

/// Text fields of an event, in the order they are sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventField {
    Title,
    Description,
    Overview,
    Venue,
    Location,
    Date,
    Time,
    Mode,
    Audience,
    Organizer,
    Tags,
    Agenda,
}

impl EventField {
    pub const ALL: [EventField; 12] = [
        EventField::Title,
        EventField::Description,
        EventField::Overview,
        EventField::Venue,
        EventField::Location,
        EventField::Date,
        EventField::Time,
        EventField::Mode,
        EventField::Audience,
        EventField::Organizer,
        EventField::Tags,
        EventField::Agenda,
    ];

    /// Multipart key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Overview => "overview",
            Self::Venue => "venue",
            Self::Location => "location",
            Self::Date => "date",
            Self::Time => "time",
            Self::Mode => "mode",
            Self::Audience => "audience",
            Self::Organizer => "organizer",
            Self::Tags => "tags",
            Self::Agenda => "agenda",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Event Title",
            Self::Description => "Description",
            Self::Overview => "Overview",
            Self::Venue => "Venue",
            Self::Location => "Location",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Mode => "Event Mode",
            Self::Audience => "Target Audience",
            Self::Organizer => "Organizer",
            Self::Tags => "Tags",
            Self::Agenda => "Agenda",
        }
    }

    /// Fields entered as comma-separated text and sent as a JSON array.
    pub fn is_list(self) -> bool {
        matches!(self, Self::Tags | Self::Agenda)
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EventField {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownValue::new("event field", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_wire_names_only() {
        assert_eq!("hybrid".parse::<EventMode>().expect("mode"), EventMode::Hybrid);
        let err = "Hybrid".parse::<EventMode>().expect_err("case sensitive");
        assert_eq!(err.to_string(), "unknown event mode 'Hybrid'");
    }

    #[test]
    fn fields_keep_wire_order() {
        let keys: Vec<_> = EventField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            [
                "title",
                "description",
                "overview",
                "venue",
                "location",
                "date",
                "time",
                "mode",
                "audience",
                "organizer",
                "tags",
                "agenda"
            ]
        );
        assert!(EventField::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_tags_and_agenda_are_lists() {
        let lists: Vec<_> = EventField::ALL.into_iter().filter(|f| f.is_list()).collect();
        assert_eq!(lists, [EventField::Tags, EventField::Agenda]);
    }
}
