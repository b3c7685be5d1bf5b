//! Property Test Suite
//!
//! ## Structure
//!
//! - **scenarios**: end-to-end usage of properties and registries
//! - **invariants**: editable gate, validation and copy guarantees
//! - **round_trip**: serialize / text form / reconstruction laws
//! - **registries**: registration, trees and configuration
//! - **global**: the process-wide registries

#[path = "../common/mod.rs"]
mod common;

mod registries;
mod round_trip;
mod scenarios;
