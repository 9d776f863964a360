//! Blackboard Learn integration
//!
//! REST client for the public Learn API: OAuth2 token endpoints plus the
//! user, course, gradebook and content reads.

pub mod client;
pub mod endpoints;

pub use client::BlackboardClient;
