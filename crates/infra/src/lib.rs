//! # bblearn Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The shared reqwest-based HTTP client
//! - The Blackboard Learn REST client (`BlackboardClient`)
//! - reqwest error conversion into `LearnError`
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements `LearnApi` defined in `bblearn-core`
//! - Depends on `bblearn-domain` and `bblearn-core`
//! - Contains all "impure" code (network, filesystem)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::transport_error;
pub use http::*;
pub use integrations::blackboard::BlackboardClient;
