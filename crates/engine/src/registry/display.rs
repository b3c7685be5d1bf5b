//! Display registry
//!
//! Maps display names to transforms producing a presentation value from a
//! property. `"DEFAULT"` is always present and yields the serialized form.

use super::catalog::Catalog;
use super::tree::RegistrationTree;
use crate::property::PropertyObject;
use propertyobject_core::{EntryKind, Result, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Name of the serializing display
pub const DEFAULT_DISPLAY: &str = "DEFAULT";

type TransformFn = dyn Fn(&PropertyObject) -> Value + Send + Sync;

/// A registered display transform
#[derive(Clone)]
pub struct DisplayTransform(Arc<TransformFn>);

impl DisplayTransform {
    /// Wrap a transform
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&PropertyObject) -> Value + Send + Sync + 'static,
    {
        DisplayTransform(Arc::new(transform))
    }

    /// Transform producing the property's serialized form
    pub fn serialized() -> Self {
        DisplayTransform::new(|property| property.serialize().to_value())
    }

    /// Run the transform
    pub fn apply(&self, property: &PropertyObject) -> Value {
        (self.0)(property)
    }
}

impl fmt::Debug for DisplayTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayTransform(..)")
    }
}

/// Registry of named display transforms
pub struct DisplayRegistry {
    catalog: Catalog<DisplayTransform>,
}

impl DisplayRegistry {
    /// Create a registry holding only `"DEFAULT"`
    pub fn new() -> Self {
        let catalog = Catalog::new(EntryKind::Display);
        catalog.seed(vec![(DEFAULT_DISPLAY.to_string(), DisplayTransform::serialized())]);
        DisplayRegistry { catalog }
    }

    /// Add a new display
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `name` is empty
    /// - `AlreadyExists` if `name` is already registered
    pub fn register_display<F>(&self, name: impl Into<String>, transform: F) -> Result<()>
    where
        F: Fn(&PropertyObject) -> Value + Send + Sync + 'static,
    {
        self.catalog.register(name.into(), DisplayTransform::new(transform))
    }

    /// Add a pre-built display
    pub fn register(&self, name: impl Into<String>, display: DisplayTransform) -> Result<()> {
        self.catalog.register(name.into(), display)
    }

    /// Add every leaf of `tree` under its dotted path rooted at `prefix`
    ///
    /// Returns the number of displays added. Stops at the first failure;
    /// displays added before it stay registered.
    pub fn register_displays_from_tree(
        &self,
        prefix: &str,
        tree: RegistrationTree<DisplayTransform>,
    ) -> Result<usize> {
        self.catalog.register_tree(prefix, tree)
    }

    /// Read-only discovery view: `{name -> name}`
    pub fn displays(&self) -> BTreeMap<String, String> {
        self.catalog.view()
    }

    /// Run display `name` on `property`
    ///
    /// # Errors
    ///
    /// `NotFound` if `name` is not registered.
    pub fn invoke_display(&self, name: &str, property: &PropertyObject) -> Result<Value> {
        let display = self.catalog.get(name)?;
        Ok(display.apply(property))
    }

    /// Check if a display is registered
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Sorted registered names
    pub fn names(&self) -> Vec<String> {
        self.catalog.names()
    }

    /// Number of registered displays
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Never true: `"DEFAULT"` is always present
    pub fn is_empty(&self) -> bool {
        self.catalog.len() == 0
    }
}

impl Default for DisplayRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DisplayRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayRegistry")
            .field("kind", &self.catalog.kind())
            .field("display_count", &self.catalog.len())
            .finish()
    }
}
