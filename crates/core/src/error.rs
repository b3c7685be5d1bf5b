//! Error types for property objects and their registries
//!
//! Every failure is local to the call that raised it: nothing is retried and
//! no partially applied state is left behind.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::fmt;
use thiserror::Error;

/// Result type alias for property operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which registry a name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Validator registry entry
    Validator,
    /// Display registry entry
    Display,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Validator => f.write_str("validator"),
            EntryKind::Display => f.write_str("display"),
        }
    }
}

/// Error types for property objects and registries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Wrong type or shape for a name, message, flag or reconstruction source
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Name already registered
    #[error("The given {kind} name already exists: {name}")]
    AlreadyExists {
        /// Registry the name was registered in
        kind: EntryKind,
        /// Duplicate name
        name: String,
    },

    /// Reference to an unregistered name
    #[error("The {kind} does not exist: {name}")]
    NotFound {
        /// Registry that was searched
        kind: EntryKind,
        /// Missing name
        name: String,
    },

    /// Mutation attempted while the property is locked
    #[error("Cannot set '{field}': property is not editable")]
    NotEditable {
        /// Field that was being written
        field: &'static str,
    },

    /// Assignment to a field that can never be assigned as a whole
    #[error("Cannot set '{field}': field is read-only")]
    ReadOnly {
        /// Field that was being written
        field: &'static str,
    },

    /// Candidate value rejected by the active validator
    #[error("Value {value} failed to validate against '{validator}'")]
    ValidationFailed {
        /// Validator that rejected the value
        validator: String,
        /// Text form of the rejected value
        value: String,
    },
}

/// Payload-free discriminant of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidArgument`]
    InvalidArgument,
    /// See [`Error::AlreadyExists`]
    AlreadyExists,
    /// See [`Error::NotFound`]
    NotFound,
    /// See [`Error::NotEditable`]
    NotEditable,
    /// See [`Error::ReadOnly`]
    ReadOnly,
    /// See [`Error::ValidationFailed`]
    ValidationFailed,
}

impl Error {
    /// Create an `InvalidArgument` error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Create an `AlreadyExists` error
    pub fn already_exists(kind: EntryKind, name: impl Into<String>) -> Self {
        Error::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    /// Create a `NotFound` error
    pub fn not_found(kind: EntryKind, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::NotEditable { .. } => ErrorKind::NotEditable,
            Error::ReadOnly { .. } => ErrorKind::ReadOnly,
            Error::ValidationFailed { .. } => ErrorKind::ValidationFailed,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidArgument(format!("malformed JSON: {}", e))
    }
}
