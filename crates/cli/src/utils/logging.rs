use std::time::Duration;

use bblearn_domain::LearnError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "bblearn_cli=info,bblearn_core=info,bblearn_infra=info";

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` must not carry tokens or other secrets.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&LearnError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error = err.label(),
            status = err.status(),
            "command_execution_failure"
        ),
    }
}
