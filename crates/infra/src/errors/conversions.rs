//! Conversions from external infrastructure errors into domain errors.

use bblearn_domain::LearnError;
use reqwest::Error as HttpError;

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LearnError */
/* -------------------------------------------------------------------------- */

/// Classify a reqwest failure as a domain error.
///
/// Timeouts and connection failures are transport errors; builder failures
/// are configuration errors.
pub fn transport_error(err: HttpError) -> LearnError {
    if err.is_timeout() {
        return LearnError::Timeout(format!("HTTP request timed out: {err}"));
    }

    if err.is_connect() {
        return LearnError::Network(format!("HTTP connection failure: {err}"));
    }

    if err.is_builder() {
        return LearnError::Config(format!("invalid HTTP request: {err}"));
    }

    if err.is_decode() {
        return LearnError::Decode(err.to_string());
    }

    LearnError::Network(err.to_string())
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
