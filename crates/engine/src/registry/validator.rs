//! Validator registry
//!
//! Maps validator names to predicates deciding whether a candidate value may
//! be stored in a property. `"DEFAULT"` is always present and accepts
//! everything.

use super::catalog::Catalog;
use super::tree::RegistrationTree;
use crate::property::PropertyObject;
use propertyobject_core::{EntryKind, Result, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Name of the always-accepting validator
pub const DEFAULT_VALIDATOR: &str = "DEFAULT";

type PredicateFn = dyn Fn(&PropertyObject, &Value) -> bool + Send + Sync;

/// A registered validation predicate
///
/// Called as `(subject, candidate)` where `subject` is the property being
/// written and `candidate` the value it would take.
#[derive(Clone)]
pub struct Validator(Arc<PredicateFn>);

impl Validator {
    /// Wrap a `(subject, candidate)` predicate
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&PropertyObject, &Value) -> bool + Send + Sync + 'static,
    {
        Validator(Arc::new(predicate))
    }

    /// Wrap a predicate that only inspects the candidate value
    pub fn from_value_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Validator(Arc::new(move |_subject: &PropertyObject, candidate: &Value| {
            predicate(candidate)
        }))
    }

    /// Validator that accepts every value
    pub fn accept_all() -> Self {
        Validator::from_value_predicate(|_| true)
    }

    /// Run the predicate
    pub fn check(&self, subject: &PropertyObject, candidate: &Value) -> bool {
        (self.0)(subject, candidate)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Registry of named validators
pub struct ValidatorRegistry {
    catalog: Catalog<Validator>,
}

impl ValidatorRegistry {
    /// Create a registry holding only `"DEFAULT"`
    pub fn new() -> Self {
        let catalog = Catalog::new(EntryKind::Validator);
        catalog.seed(vec![(DEFAULT_VALIDATOR.to_string(), Validator::accept_all())]);
        ValidatorRegistry { catalog }
    }

    /// Add a new validator
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `name` is empty
    /// - `AlreadyExists` if `name` is already registered
    pub fn register_validator<F>(&self, name: impl Into<String>, predicate: F) -> Result<()>
    where
        F: Fn(&PropertyObject, &Value) -> bool + Send + Sync + 'static,
    {
        self.catalog.register(name.into(), Validator::new(predicate))
    }

    /// Add a pre-built validator
    pub fn register(&self, name: impl Into<String>, validator: Validator) -> Result<()> {
        self.catalog.register(name.into(), validator)
    }

    /// Add every leaf of `tree` under its dotted path rooted at `prefix`
    ///
    /// Returns the number of validators added. Stops at the first failure;
    /// validators added before it stay registered.
    pub fn register_validators_from_tree(
        &self,
        prefix: &str,
        tree: RegistrationTree<Validator>,
    ) -> Result<usize> {
        self.catalog.register_tree(prefix, tree)
    }

    /// Bootstrap entries, skipping names that are already taken
    pub(crate) fn seed_tree(&self, prefix: &str, tree: RegistrationTree<Validator>) -> usize {
        self.catalog.seed(tree.flatten(prefix))
    }

    /// Read-only discovery view: `{name -> name}`
    pub fn validators(&self) -> BTreeMap<String, String> {
        self.catalog.view()
    }

    /// Run validator `name` against `candidate`
    ///
    /// # Errors
    ///
    /// `NotFound` if `name` is not registered.
    pub fn validate(&self, name: &str, subject: &PropertyObject, candidate: &Value) -> Result<bool> {
        let validator = self.catalog.get(name)?;
        Ok(validator.check(subject, candidate))
    }

    /// Check if a validator is registered
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Sorted registered names
    pub fn names(&self) -> Vec<String> {
        self.catalog.names()
    }

    /// Number of registered validators
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Never true: `"DEFAULT"` is always present
    pub fn is_empty(&self) -> bool {
        self.catalog.len() == 0
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("kind", &self.catalog.kind())
            .field("validator_count", &self.catalog.len())
            .finish()
    }
}
