//! Client constants
//!
//! Centralized location for domain-level constants shared by every crate.

// Transport
/// Whole-request timeout applied to every HTTP call
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Gradebook
/// `grading.type` of columns excluded from assignments
pub const CALCULATED_GRADING_TYPE: &str = "Calculated";
/// Key holding the item array in collection responses
pub const RESULTS_KEY: &str = "results";

// Environment variables
/// Instance base URL
pub const ENV_BASE_URL: &str = "BLACKBOARD_URL";
/// Registered application key
pub const ENV_APP_KEY: &str = "BLACKBOARD_APP_KEY";
/// Registered application secret
pub const ENV_APP_SECRET: &str = "BLACKBOARD_APP_SECRET";
/// Bearer token read by the CLI
pub const ENV_ACCESS_TOKEN: &str = "BLACKBOARD_ACCESS_TOKEN";

// Reports
/// Announcement body characters shown before truncation
pub const ANNOUNCEMENT_PREVIEW_CHARS: usize = 200;
/// Leading token characters kept in the token report
pub const TOKEN_PREVIEW_CHARS: usize = 8;
