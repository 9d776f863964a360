//! # bblearn Domain
//!
//! Domain types and models for the Blackboard Learn client.
//!
//! This crate contains:
//! - The client error type and `Result` alias
//! - Connection configuration (`ClientConfig`)
//! - Reshaped records (`GradeEntry`, `UserIdentity`) and JSON aliases
//! - Endpoint-independent constants
//!
//! ## Architecture
//! - No dependencies on other bblearn crates
//! - No I/O; pure data structures and conversions

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
