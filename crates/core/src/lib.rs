//! # bblearn Core
//!
//! Business logic over the Blackboard Learn API - no HTTP code.
//!
//! This crate contains:
//! - The [`LearnApi`] port implemented by the infrastructure client
//! - [`ReportService`], which turns API data into plain-text reports
//!
//! ## Architecture Principles
//! - Only depends on `bblearn-domain`
//! - All I/O goes through the port trait
//! - Pure, testable rendering

pub mod learn_ports;
pub mod reports;

pub use learn_ports::LearnApi;
pub use reports::ReportService;
