use std::collections::BTreeMap;

use shared::domain::{EventField, EventMode};

/// Text state of the create-event form, keyed by field.
///
/// Every field is always present; `mode` starts as `offline` and the rest start empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    values: BTreeMap<EventField, String>,
}

impl Default for EventDraft {
    fn default() -> Self {
        let values = EventField::ALL
            .into_iter()
            .map(|field| {
                let initial = match field {
                    EventField::Mode => EventMode::default().as_str().to_string(),
                    _ => String::new(),
                };
                (field, initial)
            })
            .collect();
        Self { values }
    }
}

impl EventDraft {
    pub fn get(&self, field: EventField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: EventField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Mutable handle for widgets that edit in place.
    pub fn get_mut(&mut self, field: EventField) -> &mut String {
        self.values.entry(field).or_default()
    }

    /// `None` when the mode text is not one of the known modes.
    pub fn mode(&self) -> Option<EventMode> {
        self.get(EventField::Mode).parse().ok()
    }

    pub fn set_mode(&mut self, mode: EventMode) {
        self.set(EventField::Mode, mode.as_str());
    }

    /// First field, in wire order, that is empty. Whitespace counts as a value.
    pub fn missing_required(&self) -> Option<EventField> {
        EventField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventField, &str)> + '_ {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Value as it goes on the wire: list fields become a JSON array, the rest pass through.
    pub fn wire_value(&self, field: EventField) -> String {
        let raw = self.get(field);
        if field.is_list() {
            encode_list(raw)
        } else {
            raw.to_string()
        }
    }
}

/// Splits comma-separated input into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn encode_list(raw: &str) -> String {
    serde_json::Value::Array(
        split_list(raw)
            .into_iter()
            .map(serde_json::Value::from)
            .collect(),
    )
    .to_string()
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
