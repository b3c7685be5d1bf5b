//! propertyobject - self-validating value wrappers
//!
//! A [`PropertyObject`] holds one dynamic [`Value`] and refuses any new value
//! its named validator rejects. Validators and displays live in shared,
//! append-only [`Registries`]; a property can be serialized to a plain
//! six-field form and rebuilt from it.
//!
//! # Quick Start
//!
//! ```
//! use propertyobject::{PropertyObject, Registries, Value};
//! use std::sync::Arc;
//!
//! let registries = Arc::new(Registries::new());
//! registries
//!     .validators()
//!     .register_validator("INC", |subject, candidate| {
//!         match (subject.value_ref(), candidate) {
//!             (Value::Int(current), Value::Int(next)) => current + 1 == *next,
//!             _ => false,
//!         }
//!     })
//!     .unwrap();
//!
//! let mut counter = PropertyObject::with_registries(registries);
//! counter.set_editable(true);
//! counter.set_value(1).unwrap();
//! counter.set_validator("INC").unwrap();
//! counter.set_value(2).unwrap();
//! assert!(counter.set_value(5).is_err());
//! ```
//!
//! # Architecture
//!
//! - `propertyobject-core`: [`Value`], [`Error`], [`Timestamp`]
//! - `propertyobject-engine`: properties, registries and configuration

pub use propertyobject_core::{EntryKind, Error, ErrorKind, Map, Result, Timestamp, Value};
pub use propertyobject_engine::{
    config, property, registry, DisplayRegistry, DisplayTransform, Field, LogEntry,
    PropertyObject, Registries, RegistrationTree, RegistryConfig, SerializedProperty, Validator,
    ValidatorRegistry, DEFAULT_DISPLAY, DEFAULT_VALIDATOR,
};
