//! Property objects and the registries behind them
//!
//! This crate provides:
//! - [`PropertyObject`]: a value wrapper with key, editable gate, validator,
//!   display and audit log
//! - [`Registries`]: named validators and displays, shared by properties
//! - [`RegistryConfig`]: TOML-backed bootstrap options for registries
//!
//! Names are resolved at the time they are used, so a property only ever
//! stores validator and display names, never the functions themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod property;
pub mod registry;

pub use config::RegistryConfig;
pub use property::{Field, LogEntry, PropertyObject, SerializedProperty};
pub use registry::{
    DisplayRegistry, DisplayTransform, Registries, RegistrationTree, Validator,
    ValidatorRegistry, DEFAULT_DISPLAY, DEFAULT_VALIDATOR,
};

pub use propertyobject_core::{EntryKind, Error, ErrorKind, Map, Result, Timestamp, Value};
