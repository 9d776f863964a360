//! # bblearn CLI
//!
//! Command-line layer - argument parsing, wiring and command execution.
//!
//! This crate contains:
//! - clap argument definitions
//! - Application context (dependency injection)
//! - Command dispatch onto the Blackboard client and report service
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command};
pub use commands::execute;
pub use context::AppContext;
