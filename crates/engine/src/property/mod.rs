//! The property object
//!
//! A [`PropertyObject`] wraps a single [`Value`] together with:
//! - a `key` identifying it
//! - the name of the validator every new value must satisfy
//! - the name of the display used to present it
//! - an `editable` gate guarding every setter
//! - an append-only audit log
//!
//! ## Editable gate
//!
//! Properties start locked. While locked, `set_key`, `set_value`,
//! `set_validator` and `set_display` fail with `NotEditable`. Logging is
//! never gated.
//!
//! ## Validation
//!
//! `set_value` runs the current validator against the candidate. Changing
//! the validator does not re-check the value already stored, so a property
//! can hold a value its current validator would reject.
//!
//! ## Copy semantics
//!
//! `key()` and `value()` return deep copies; mutating them never affects the
//! property. Serialization and reconstruction copy as well.

pub mod field;
pub mod log;
pub mod serialized;

pub use field::Field;
pub use log::LogEntry;
pub use serialized::SerializedProperty;

use crate::registry::{self, Registries, DEFAULT_DISPLAY, DEFAULT_VALIDATOR};
use propertyobject_core::{EntryKind, Error, Result, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace};

/// Self-validating value wrapper
///
/// # Example
///
/// ```
/// use propertyobject_engine::{PropertyObject, Value};
///
/// let mut property = PropertyObject::new();
/// assert!(property.set_key("answer").is_err()); // locked
///
/// property.set_editable(true);
/// property.set_key("answer").unwrap();
/// property.set_validator("is.number").unwrap();
/// property.set_value(42).unwrap();
/// assert!(property.set_value("forty-two").is_err());
///
/// property.log("answered");
/// let copy: PropertyObject = property.to_string().parse().unwrap();
/// assert_eq!(copy.to_string(), property.to_string());
/// assert_eq!(copy.value(), Value::Int(42));
/// ```
#[derive(Clone)]
pub struct PropertyObject {
    registries: Arc<Registries>,
    editable: bool,
    key: Value,
    value: Value,
    validator: String,
    display: String,
    logs: Vec<LogEntry>,
}

impl PropertyObject {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Default property bound to the global registries
    ///
    /// Locked, `key` and `value` null, `"DEFAULT"` validator and display, no logs.
    pub fn new() -> Self {
        Self::with_registries(registry::global())
    }

    /// Default property bound to `registries`
    pub fn with_registries(registries: Arc<Registries>) -> Self {
        PropertyObject {
            registries,
            editable: false,
            key: Value::Null,
            value: Value::Null,
            validator: DEFAULT_VALIDATOR.to_string(),
            display: DEFAULT_DISPLAY.to_string(),
            logs: Vec::new(),
        }
    }

    /// Independent copy of `other`, bound to the same registries
    pub fn from_property(other: &PropertyObject) -> Result<Self> {
        Self::from_serialized_in(Arc::clone(&other.registries), &other.serialize())
    }

    /// Rebuild from a serialized snapshot using the global registries
    ///
    /// # Errors
    ///
    /// `NotFound` if the snapshot names an unregistered validator or display.
    pub fn from_serialized(source: &SerializedProperty) -> Result<Self> {
        Self::from_serialized_in(registry::global(), source)
    }

    /// Rebuild from a serialized snapshot using `registries`
    ///
    /// The value is applied before the validator so any snapshot produced by
    /// [`serialize`](Self::serialize) can be rebuilt; `editable` is applied last.
    pub fn from_serialized_in(
        registries: Arc<Registries>,
        source: &SerializedProperty,
    ) -> Result<Self> {
        let mut property = Self::with_registries(registries);
        property.editable = true;
        property.set_key(source.key.deep_copy())?;
        property.set_value(source.value.deep_copy())?;
        property.set_validator(&source.validator)?;
        property.set_display(&source.display)?;
        property.logs = source.logs.clone();
        property.editable = source.editable;
        Ok(property)
    }

    /// Rebuild from a serialized-shape value using the global registries
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `source` does not have the serialized shape
    /// (see [`SerializedProperty::from_value`]); `NotFound` for unknown names.
    pub fn from_value(source: &Value) -> Result<Self> {
        Self::from_value_in(registry::global(), source)
    }

    /// Rebuild from a serialized-shape value using `registries`
    pub fn from_value_in(registries: Arc<Registries>, source: &Value) -> Result<Self> {
        let serialized = SerializedProperty::from_value(source)?;
        Self::from_serialized_in(registries, &serialized)
    }

    /// Rebuild from the JSON text form using `registries`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the text is not JSON or lacks the serialized shape.
    pub fn from_json_str_in(registries: Arc<Registries>, text: &str) -> Result<Self> {
        let source: Value = serde_json::from_str(text)?;
        Self::from_value_in(registries, &source)
    }

    /// Registries this property resolves names against
    pub fn registries(&self) -> &Arc<Registries> {
        &self.registries
    }

    // =========================================================================
    // Editable gate
    // =========================================================================

    /// Whether setters are currently allowed
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// Lock or unlock the property
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    fn ensure_editable(&self, field: Field) -> Result<()> {
        if self.editable {
            Ok(())
        } else {
            debug!(field = %field, "rejected write to locked property");
            Err(Error::NotEditable {
                field: field.as_str(),
            })
        }
    }

    // =========================================================================
    // Key
    // =========================================================================

    /// Deep copy of the key
    pub fn key(&self) -> Value {
        self.key.deep_copy()
    }

    /// Borrow the key without copying
    pub fn key_ref(&self) -> &Value {
        &self.key
    }

    /// Replace the key
    ///
    /// # Errors
    ///
    /// `NotEditable` while locked.
    pub fn set_key(&mut self, key: impl Into<Value>) -> Result<()> {
        self.ensure_editable(Field::Key)?;
        self.key = key.into();
        Ok(())
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Deep copy of the value
    pub fn value(&self) -> Value {
        self.value.deep_copy()
    }

    /// Borrow the value without copying
    pub fn value_ref(&self) -> &Value {
        &self.value
    }

    /// Replace the value after checking it against the current validator
    ///
    /// # Errors
    ///
    /// - `NotEditable` while locked
    /// - `ValidationFailed` if the validator rejects `value`
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        self.ensure_editable(Field::Value)?;
        let candidate = value.into();
        let accepted = self
            .registries
            .validators()
            .validate(&self.validator, self, &candidate)?;
        if !accepted {
            debug!(validator = %self.validator, value = %candidate, "value failed validation");
            return Err(Error::ValidationFailed {
                validator: self.validator.clone(),
                value: candidate.to_string(),
            });
        }
        self.value = candidate;
        Ok(())
    }

    // =========================================================================
    // Validator & display
    // =========================================================================

    /// Name of the validator governing new values
    pub fn validator(&self) -> &str {
        &self.validator
    }

    /// Select a registered validator
    ///
    /// The stored value is not re-checked.
    ///
    /// # Errors
    ///
    /// - `NotEditable` while locked
    /// - `NotFound` if `name` is not registered
    pub fn set_validator(&mut self, name: &str) -> Result<()> {
        self.ensure_editable(Field::Validator)?;
        if !self.registries.validators().contains(name) {
            return Err(Error::not_found(EntryKind::Validator, name));
        }
        self.validator = name.to_string();
        Ok(())
    }

    /// Name of the display used by [`run_display`](Self::run_display)
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Select a registered display
    ///
    /// # Errors
    ///
    /// - `NotEditable` while locked
    /// - `NotFound` if `name` is not registered
    pub fn set_display(&mut self, name: &str) -> Result<()> {
        self.ensure_editable(Field::Display)?;
        if !self.registries.displays().contains(name) {
            return Err(Error::not_found(EntryKind::Display, name));
        }
        self.display = name.to_string();
        Ok(())
    }

    /// Run the selected display on this property
    ///
    /// # Errors
    ///
    /// `NotFound` if the display is not registered in this property's registries.
    pub fn run_display(&self) -> Result<Value> {
        self.registries.displays().invoke_display(&self.display, self)
    }

    // =========================================================================
    // Logs
    // =========================================================================

    /// Audit log, oldest first
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Append a message stamped with the current time
    ///
    /// Allowed whether or not the property is editable.
    pub fn log(&mut self, message: impl Into<String>) {
        let entry = LogEntry::now(message);
        trace!(timestamp = %entry.timestamp, message = %entry.message, "log appended");
        self.logs.push(entry);
    }

    /// Append a message given as a dynamic value
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `message` is a string.
    pub fn log_value(&mut self, message: &Value) -> Result<()> {
        let text = message.as_str().ok_or_else(|| {
            Error::invalid_argument(format!("log message must be a string, got {}", message))
        })?;
        self.log(text);
        Ok(())
    }

    /// The log cannot be replaced as a whole
    ///
    /// # Errors
    ///
    /// Always `ReadOnly`.
    pub fn set_logs(&mut self, _logs: Vec<LogEntry>) -> Result<()> {
        Err(Error::ReadOnly {
            field: Field::Logs.as_str(),
        })
    }

    // =========================================================================
    // Dynamic access
    // =========================================================================

    /// Read a field as a dynamic value
    pub fn get(&self, field: Field) -> Value {
        match field {
            Field::Key => self.key(),
            Field::Value => self.value(),
            Field::Validator => Value::String(self.validator.clone()),
            Field::Display => Value::String(self.display.clone()),
            Field::Editable => Value::Bool(self.editable),
            Field::Logs => Value::Array(self.logs.iter().map(LogEntry::to_value).collect()),
        }
    }

    /// Assign a field from a dynamic value
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `editable` is given a non-boolean, or
    ///   `validator`/`display` a non-string
    /// - `ReadOnly` for `logs`
    /// - otherwise as the typed setter for the field
    pub fn assign(&mut self, field: Field, value: Value) -> Result<()> {
        match field {
            Field::Key => self.set_key(value),
            Field::Value => self.set_value(value),
            Field::Editable => match value {
                Value::Bool(editable) => {
                    self.set_editable(editable);
                    Ok(())
                }
                other => Err(Error::invalid_argument(format!(
                    "Unable to set editable to something other than a boolean: {}",
                    other
                ))),
            },
            Field::Validator | Field::Display => {
                self.ensure_editable(field)?;
                let name = value.as_str().ok_or_else(|| {
                    Error::invalid_argument(format!("{} name must be a string, got {}", field, value))
                })?;
                if field == Field::Validator {
                    self.set_validator(name)
                } else {
                    self.set_display(name)
                }
            }
            Field::Logs => Err(Error::ReadOnly {
                field: Field::Logs.as_str(),
            }),
        }
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Deep-copied snapshot of the six fields
    pub fn serialize(&self) -> SerializedProperty {
        SerializedProperty {
            key: self.key.deep_copy(),
            value: self.value.deep_copy(),
            validator: self.validator.clone(),
            display: self.display.clone(),
            editable: self.editable,
            logs: self.logs.clone(),
        }
    }
}

impl Default for PropertyObject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PropertyObject {
    /// JSON text of [`serialize`](PropertyObject::serialize)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.serialize().to_value())
    }
}

impl fmt::Debug for PropertyObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyObject")
            .field("editable", &self.editable)
            .field("key", &self.key)
            .field("value", &self.value)
            .field("validator", &self.validator)
            .field("display", &self.display)
            .field("log_count", &self.logs.len())
            .finish()
    }
}

impl FromStr for PropertyObject {
    type Err = Error;

    /// Parse the JSON text form against the global registries
    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str_in(registry::global(), s)
    }
}
