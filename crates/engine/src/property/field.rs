//! Property field names
//!
//! Used by the dynamic accessors [`PropertyObject::get`](super::PropertyObject::get)
//! and [`PropertyObject::assign`](super::PropertyObject::assign), and as the
//! key set of the serialized form.

use propertyobject_core::Error;
use std::fmt;
use std::str::FromStr;

/// One of the six fields of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Identifying value
    Key,
    /// Wrapped payload
    Value,
    /// Validator name
    Validator,
    /// Display name
    Display,
    /// Editable gate
    Editable,
    /// Audit log
    Logs,
}

impl Field {
    /// All fields, in serialized order
    pub const ALL: [Field; 6] = [
        Field::Key,
        Field::Value,
        Field::Validator,
        Field::Display,
        Field::Editable,
        Field::Logs,
    ];

    /// Field name as it appears in the serialized form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Key => "key",
            Field::Value => "value",
            Field::Validator => "validator",
            Field::Display => "display",
            Field::Editable => "editable",
            Field::Logs => "logs",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown property field: {}", s)))
    }
}
