//! Serialized form of a property
//!
//! Exactly six fields: `key`, `value`, `validator`, `display`, `editable`,
//! `logs`. The same shape backs the text form, the `DEFAULT` display and
//! reconstruction.

use super::field::Field;
use super::log::LogEntry;
use propertyobject_core::{Error, Map, Result, Value};
use serde::{Deserialize, Serialize};

/// Plain snapshot of a property's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedProperty {
    /// Identifying value
    pub key: Value,
    /// Wrapped payload
    pub value: Value,
    /// Validator name
    pub validator: String,
    /// Display name
    pub display: String,
    /// Editable gate
    pub editable: bool,
    /// Audit log, oldest first
    pub logs: Vec<LogEntry>,
}

impl SerializedProperty {
    /// Convert to a `Value::Object` with exactly the six fields
    pub fn to_value(&self) -> Value {
        let mut fields = Map::new();
        fields.insert(Field::Key.as_str().to_string(), self.key.deep_copy());
        fields.insert(Field::Value.as_str().to_string(), self.value.deep_copy());
        fields.insert(
            Field::Validator.as_str().to_string(),
            Value::String(self.validator.clone()),
        );
        fields.insert(
            Field::Display.as_str().to_string(),
            Value::String(self.display.clone()),
        );
        fields.insert(Field::Editable.as_str().to_string(), Value::Bool(self.editable));
        fields.insert(
            Field::Logs.as_str().to_string(),
            Value::Array(self.logs.iter().map(LogEntry::to_value).collect()),
        );
        Value::Object(fields)
    }

    /// Read the six fields out of a serialized-shape value
    ///
    /// Fields beyond the six are ignored.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `source` is not an object, a field is absent,
    /// `logs` is not an array, a log entry is malformed, `editable` is not a
    /// boolean, or `validator`/`display` are not strings.
    pub fn from_value(source: &Value) -> Result<Self> {
        let fields = source.as_object().ok_or_else(|| {
            Error::invalid_argument(format!(
                "serialized property must be an object, got {}",
                source.type_name()
            ))
        })?;

        let key = field(fields, Field::Key)?.deep_copy();
        let value = field(fields, Field::Value)?.deep_copy();
        let validator = string_field(fields, Field::Validator)?;
        let display = string_field(fields, Field::Display)?;
        let editable = field(fields, Field::Editable)?
            .as_bool()
            .ok_or_else(|| Error::invalid_argument("'editable' must be a boolean"))?;
        let logs = field(fields, Field::Logs)?
            .as_array()
            .ok_or_else(|| Error::invalid_argument("'logs' must be an array"))?
            .iter()
            .map(LogEntry::from_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(SerializedProperty {
            key,
            value,
            validator,
            display,
            editable,
            logs,
        })
    }

    /// Compact JSON text with sorted keys
    pub fn to_json_string(&self) -> String {
        self.to_value().to_string()
    }
}

fn field(fields: &Map, name: Field) -> Result<&Value> {
    fields
        .get(name.as_str())
        .ok_or_else(|| Error::invalid_argument(format!("serialized property is missing '{}'", name)))
}

fn string_field(fields: &Map, name: Field) -> Result<String> {
    field(fields, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_argument(format!("'{}' must be a string", name)))
}
