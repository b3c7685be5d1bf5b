//! Validator and display registries
//!
//! A [`Registries`] value owns one [`ValidatorRegistry`] and one
//! [`DisplayRegistry`]. Properties hold an `Arc<Registries>` and resolve
//! their validator and display names through it.
//!
//! ## Lifecycle
//!
//! Registries are append-only: names are unique and permanent. The usual
//! pattern is to register everything once at startup, then create
//! properties. Hosts that want isolation build their own `Registries`;
//! everyone else shares the process-wide instance from [`global()`].
//!
//! ## Usage
//!
//! ```
//! use propertyobject_engine::{registry, PropertyObject, Value};
//!
//! let registries = registry::global();
//! assert!(registries.validators().contains("is.string"));
//!
//! let mut property = PropertyObject::with_registries(registries);
//! property.set_editable(true);
//! property.set_validator("is.string").unwrap();
//! assert!(property.set_value(Value::Int(1)).is_err());
//! ```

mod catalog;
pub mod display;
pub mod predicates;
pub mod tree;
pub mod validator;

pub use display::{DisplayRegistry, DisplayTransform, DEFAULT_DISPLAY};
pub use tree::RegistrationTree;
pub use validator::{Validator, ValidatorRegistry, DEFAULT_VALIDATOR};

use crate::config::RegistryConfig;
use once_cell::sync::Lazy;
use propertyobject_core::Result;
use std::sync::Arc;
use tracing::debug;

/// Process-wide registries, bootstrapped with the default configuration
static GLOBAL: Lazy<Arc<Registries>> = Lazy::new(|| Arc::new(Registries::new()));

/// Shared handle to the process-wide registries
pub fn global() -> Arc<Registries> {
    Arc::clone(&GLOBAL)
}

/// A validator registry and a display registry used together
#[derive(Debug)]
pub struct Registries {
    validators: ValidatorRegistry,
    displays: DisplayRegistry,
}

impl Registries {
    /// Bootstrap with the default configuration
    ///
    /// Holds `"DEFAULT"` in both registries plus the `is.*` predicate library.
    pub fn new() -> Self {
        Self::bootstrap(&RegistryConfig::default())
    }

    /// Bootstrap from an explicit configuration
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the configuration does not validate.
    pub fn with_config(config: &RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::bootstrap(config))
    }

    fn bootstrap(config: &RegistryConfig) -> Self {
        let validators = ValidatorRegistry::new();
        let displays = DisplayRegistry::new();

        if config.import_predicates {
            let imported = validators.seed_tree(&config.predicate_prefix, predicates::library());
            debug!(
                prefix = %config.predicate_prefix,
                imported,
                "imported predicate library"
            );
        }

        Registries {
            validators,
            displays,
        }
    }

    /// The validator registry
    pub fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    /// The display registry
    pub fn displays(&self) -> &DisplayRegistry {
        &self.displays
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::new()
    }
}
