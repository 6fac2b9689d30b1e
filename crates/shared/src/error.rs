use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body the events endpoint returns alongside a non-success status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Reads `message` out of an arbitrary JSON body. Truthy scalars are rendered
    /// as text; empty strings, `0`, `false`, `null` and containers count as absent.
    pub fn from_value(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        let message = match value.get("message") {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            Some(Value::Number(number)) if number.as_f64() != Some(0.0) => {
                Some(number.to_string())
            }
            Some(Value::Bool(true)) => Some("true".to_string()),
            _ => None,
        };
        Self { message }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
