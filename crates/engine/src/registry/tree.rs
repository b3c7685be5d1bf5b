//! Nested registration trees
//!
//! A tree groups callables under named branches so a whole library can be
//! registered in one call. Leaves are registered under their dotted path:
//!
//! ```text
//! is
//! ├── string        -> "is.string"
//! └── not
//!     └── string    -> "is.not.string"
//! ```

use propertyobject_core::Value;

/// Named hierarchy of registrable entries
#[derive(Debug, Clone)]
pub enum RegistrationTree<T> {
    /// A registrable entry
    Leaf(T),
    /// Named children, walked in insertion order
    Branch(Vec<(String, RegistrationTree<T>)>),
    /// Inert data, skipped during registration
    Data(Value),
}

impl<T> RegistrationTree<T> {
    /// Create a leaf
    pub fn leaf(entry: T) -> Self {
        RegistrationTree::Leaf(entry)
    }

    /// Create an empty branch
    pub fn branch() -> Self {
        RegistrationTree::Branch(Vec::new())
    }

    /// Append a named child, builder style
    ///
    /// A leaf or data node becomes a branch holding only the new child.
    pub fn with(self, name: impl Into<String>, child: RegistrationTree<T>) -> Self {
        match self {
            RegistrationTree::Branch(mut children) => {
                children.push((name.into(), child));
                RegistrationTree::Branch(children)
            }
            _ => RegistrationTree::Branch(vec![(name.into(), child)]),
        }
    }

    /// Append a named leaf, builder style
    pub fn with_leaf(self, name: impl Into<String>, entry: T) -> Self {
        self.with(name, RegistrationTree::Leaf(entry))
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            RegistrationTree::Leaf(_) => 1,
            RegistrationTree::Branch(children) => {
                children.iter().map(|(_, child)| child.leaf_count()).sum()
            }
            RegistrationTree::Data(_) => 0,
        }
    }

    /// Flatten into `(dotted path, entry)` pairs in traversal order.
    ///
    /// An empty `prefix` contributes no leading segment; a bare leaf is
    /// named `prefix` itself.
    pub fn flatten(self, prefix: &str) -> Vec<(String, T)> {
        let mut out = Vec::new();
        self.flatten_into(prefix.to_string(), &mut out);
        out
    }

    fn flatten_into(self, path: String, out: &mut Vec<(String, T)>) {
        match self {
            RegistrationTree::Leaf(entry) => out.push((path, entry)),
            RegistrationTree::Branch(children) => {
                for (name, child) in children {
                    let child_path = if path.is_empty() {
                        name
                    } else {
                        format!("{}.{}", path, name)
                    };
                    child.flatten_into(child_path, out);
                }
            }
            RegistrationTree::Data(_) => {}
        }
    }
}
