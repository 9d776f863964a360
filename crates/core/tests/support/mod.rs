//! Shared test helpers for `bblearn-core` integration tests.
//!
//! Provides an in-memory `LearnApi` so report tests can focus on behaviour
//! instead of HTTP plumbing.

pub mod learn_api;
