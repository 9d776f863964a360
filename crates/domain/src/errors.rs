//! Error types used throughout the client

use thiserror::Error;

/// Main error type for Blackboard Learn operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LearnError {
    /// Upstream answered with a status other than 200.
    #[error("Upstream request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request did not complete within the client timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// DNS, connect, TLS or body-read failure.
    #[error("Network error: {0}")]
    Network(String),

    /// A 200 response whose body is not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Missing or invalid configuration, or an HTTP client that cannot be built.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command output could not be encoded.
    #[error("Output encoding failed: {0}")]
    Output(String),
}

impl LearnError {
    /// Build an upstream error from a status code and raw body.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream { status, body: body.into() }
    }

    /// True for failures raised by the HTTP layer rather than by upstream.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Network(_))
    }

    /// HTTP status carried by an upstream error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upstream { .. } => "upstream",
            Self::Timeout(_) => "timeout",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::Config(_) => "config",
            Self::Output(_) => "output",
        }
    }
}

/// Result type alias for Blackboard Learn operations
pub type Result<T> = std::result::Result<T, LearnError>;
