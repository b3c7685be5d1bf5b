//! Audit log entries

use propertyobject_core::{Error, Map, Result, Timestamp, Value};
use serde::{Deserialize, Serialize};

/// One audit log message and when it was appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Append time, milliseconds since Unix epoch
    pub timestamp: Timestamp,
    /// Message text
    pub message: String,
}

impl LogEntry {
    /// Entry stamped with the current time
    pub fn now(message: impl Into<String>) -> Self {
        Self::at(Timestamp::now(), message)
    }

    /// Entry with an explicit timestamp
    pub fn at(timestamp: Timestamp, message: impl Into<String>) -> Self {
        LogEntry {
            timestamp,
            message: message.into(),
        }
    }

    /// Serialized form: `{"message": .., "timestamp": ..}`
    pub fn to_value(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("message".to_string(), Value::String(self.message.clone()));
        fields.insert(
            "timestamp".to_string(),
            Value::from(self.timestamp.as_millis()),
        );
        Value::Object(fields)
    }

    /// Parse one entry of a serialized log
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `value` is an object with a string `message`
    /// and a non-negative integer `timestamp`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| {
            Error::invalid_argument(format!("log entry must be an object, got {}", value))
        })?;
        let message = fields
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_argument("log entry requires a string message"))?;
        let timestamp = fields
            .get("timestamp")
            .and_then(timestamp_millis)
            .ok_or_else(|| {
                Error::invalid_argument("log entry requires a non-negative integer timestamp")
            })?;
        Ok(LogEntry::at(Timestamp::from_millis(timestamp), message))
    }
}

fn timestamp_millis(value: &Value) -> Option<u64> {
    match value {
        Value::Int(i) => u64::try_from(*i).ok(),
        // Integral floats, e.g. from text forms beyond i64
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 && *f >= 0.0 => Some(*f as u64),
        _ => None,
    }
}
