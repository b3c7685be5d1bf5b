//! Registry bootstrap configuration
//!
//! Controls what a freshly built [`Registries`](crate::Registries) contains
//! beyond the always-present `DEFAULT` entries. Parsed from TOML so hosts can
//! keep it alongside the rest of their settings.

use propertyobject_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default root segment for imported predicate names
pub const DEFAULT_PREDICATE_PREFIX: &str = "is";

/// Bootstrap configuration for a registry set.
///
/// # Example
///
/// ```toml
/// # Import the built-in value predicates as validators (default: true)
/// import_predicates = true
///
/// # Root segment of imported names, e.g. "is.string" (default: "is")
/// predicate_prefix = "is"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Import the built-in predicate library at bootstrap.
    #[serde(default = "default_import_predicates")]
    pub import_predicates: bool,
    /// Root segment of imported predicate names.
    #[serde(default = "default_predicate_prefix")]
    pub predicate_prefix: String,
}

fn default_import_predicates() -> bool {
    true
}

fn default_predicate_prefix() -> String {
    DEFAULT_PREDICATE_PREFIX.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            import_predicates: default_import_predicates(),
            predicate_prefix: default_predicate_prefix(),
        }
    }
}

impl RegistryConfig {
    /// Check the configuration for values bootstrap cannot use.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if predicates are imported under an empty prefix.
    pub fn validate(&self) -> Result<()> {
        if self.import_predicates && self.predicate_prefix.is_empty() {
            return Err(Error::invalid_argument(
                "predicate_prefix must not be empty when import_predicates is enabled",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Property registry configuration
#
# Import the built-in value predicates ("is.string", "is.not.empty", ...)
# as validators when the registry is built (default: true)
import_predicates = true

# Root segment of imported predicate names (default: "is")
predicate_prefix = "is"
"#
    }

    /// Parse and validate a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the text cannot be parsed or fails [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(content).map_err(|e| {
            Error::invalid_argument(format!("Failed to parse registry config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this config to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            Error::invalid_argument(format!("Failed to serialize registry config: {}", e))
        })
    }
}
