//! Millisecond-precision timestamp type
//!
//! Every audit log entry records when it was appended.
//!
//! ## Precision
//!
//! Timestamps are stored as milliseconds since Unix epoch (1970-01-01 00:00:00 UTC)
//! and serialize as a bare non-negative integer.
//!
//! ## Usage
//!
//! ```
//! use propertyobject_core::Timestamp;
//!
//! let now = Timestamp::now();
//! let earlier = Timestamp::from_millis(1_000_000);
//! assert!(now > earlier);
//! assert_eq!(earlier.to_string(), "1000.000");
//! ```

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond-precision timestamp
///
/// ## Invariants
///
/// - Timestamps are always non-negative (u64)
/// - Timestamps are always in milliseconds
/// - The zero timestamp represents Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp for the current moment
    ///
    /// Returns epoch (0) if system clock is before Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(duration.as_millis() as u64)
    }

    /// Create a timestamp from milliseconds since epoch
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    /// Get milliseconds since Unix epoch
    #[inline]
    pub const fn as_millis(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // "seconds.millis"
        write!(f, "{}.{:03}", self.0 / 1_000, self.0 % 1_000)
    }
}
