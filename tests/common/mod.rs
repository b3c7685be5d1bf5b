//! Shared test utilities for the integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub use propertyobject::{
    EntryKind, Error, ErrorKind, Field, LogEntry, Map, PropertyObject, Registries,
    RegistrationTree, RegistryConfig, SerializedProperty, Timestamp, Validator, Value,
};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Name that no other test in the process has used.
///
/// Needed whenever a test registers into the global registries.
pub fn unique_name(prefix: &str) -> String {
    format!("{}_{}", prefix, COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Fresh registries with the default bootstrap.
pub fn fresh_registries() -> Arc<Registries> {
    Arc::new(Registries::new())
}

/// Unlocked default property bound to `registries`.
pub fn unlocked(registries: &Arc<Registries>) -> PropertyObject {
    let mut property = PropertyObject::with_registries(Arc::clone(registries));
    property.set_editable(true);
    property
}

/// Register `INC`: accepts integers exactly one above the current value.
pub fn register_inc(registries: &Registries) {
    registries
        .validators()
        .register_validator("INC", |subject, candidate| {
            match (subject.value_ref(), candidate) {
                (Value::Int(current), Value::Int(next)) => current + 1 == *next,
                _ => false,
            }
        })
        .expect("INC registration");
}

/// Register `GET_KEY_STRING`: the key's text form.
pub fn register_key_string(registries: &Registries) {
    registries
        .displays()
        .register_display("GET_KEY_STRING", |property| {
            Value::String(property.key_ref().to_string())
        })
        .expect("GET_KEY_STRING registration");
}

/// Build a `Value` from JSON literal syntax.
pub fn json(value: serde_json::Value) -> Value {
    Value::from(value)
}
