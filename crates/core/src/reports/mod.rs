//! Plain-text reports over Blackboard Learn data
//!
//! Rendering is split from fetching: [`render`] holds pure formatting
//! functions, [`service::ReportService`] fetches through a [`crate::LearnApi`]
//! and hands the data to them.

pub mod render;
pub mod service;

pub use service::ReportService;
