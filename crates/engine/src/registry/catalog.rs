//! Append-only name catalog shared by the validator and display registries
//!
//! A catalog maps unique names to callables. Entries are permanent: once a
//! name is registered it can be neither removed nor overwritten.

use super::tree::RegistrationTree;
use parking_lot::RwLock;
use propertyobject_core::{EntryKind, Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Name -> entry mapping guarded by a reader/writer lock
///
/// Lookups clone the entry out so no lock is held while it runs.
pub(crate) struct Catalog<F> {
    kind: EntryKind,
    entries: RwLock<BTreeMap<String, F>>,
}

impl<F: Clone> Catalog<F> {
    pub(crate) fn new(kind: EntryKind) -> Self {
        Catalog {
            kind,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Register a new entry
    ///
    /// Fails with `InvalidArgument` on an empty name and `AlreadyExists` on a
    /// duplicate; the existing entry stays active.
    pub(crate) fn register(&self, name: String, entry: F) -> Result<()> {
        if name.is_empty() {
            return Err(Error::invalid_argument(format!(
                "Invalid name for {}: name must not be empty",
                self.kind
            )));
        }
        let mut entries = self.entries.write();
        if entries.contains_key(&name) {
            return Err(Error::already_exists(self.kind, name));
        }
        debug!(kind = %self.kind, name = %name, "registered");
        entries.insert(name, entry);
        Ok(())
    }

    /// Register every leaf of `tree` under its dotted path
    ///
    /// Stops at the first failure; earlier leaves stay registered.
    pub(crate) fn register_tree(&self, prefix: &str, tree: RegistrationTree<F>) -> Result<usize> {
        let mut count = 0;
        for (name, entry) in tree.flatten(prefix) {
            self.register(name, entry)?;
            count += 1;
        }
        Ok(count)
    }

    /// Insert bootstrap entries, keeping any entry that already holds a name
    pub(crate) fn seed(&self, entries: Vec<(String, F)>) -> usize {
        let mut map = self.entries.write();
        let mut count = 0;
        for (name, entry) in entries {
            if let std::collections::btree_map::Entry::Vacant(slot) = map.entry(name) {
                slot.insert(entry);
                count += 1;
            }
        }
        count
    }

    pub(crate) fn get(&self, name: &str) -> Result<F> {
        self.entries
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(self.kind, name))
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Sorted registered names
    pub(crate) fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Discovery view: every name mapped to itself
    pub(crate) fn view(&self) -> BTreeMap<String, String> {
        self.entries
            .read()
            .keys()
            .map(|name| (name.clone(), name.clone()))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub(crate) fn kind(&self) -> EntryKind {
        self.kind
    }
}
