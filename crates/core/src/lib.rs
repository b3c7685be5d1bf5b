//! Core types for property objects
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: JSON-model value held by a property, with deep copy
//! - Timestamp: millisecond timestamps for audit log entries
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod timestamp;
pub mod value;

pub use error::{EntryKind, Error, ErrorKind, Result};
pub use timestamp::Timestamp;
pub use value::{Map, Value};
