//! Configuration loader
//!
//! Loads [`ClientConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If any is missing, falls back to loading from file
//! 3. Probes the working directory for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BLACKBOARD_URL`: Instance base URL
//! - `BLACKBOARD_APP_KEY`: Registered application key
//! - `BLACKBOARD_APP_SECRET`: Registered application secret
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./bblearn.toml`, `./bblearn.json`
//! 2. `./config.toml`, `./config.json`

use std::path::{Path, PathBuf};

use bblearn_domain::constants::{ENV_APP_KEY, ENV_APP_SECRET, ENV_BASE_URL};
use bblearn_domain::{ClientConfig, LearnError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["bblearn.toml", "bblearn.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `LearnError::Config` if neither the environment nor any config
/// file provides a complete configuration.
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `LearnError::Config` if a variable is missing or empty.
pub fn load_from_env() -> Result<ClientConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build a configuration from an arbitrary key lookup.
fn from_lookup<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| {
        lookup(key).filter(|value| !value.trim().is_empty()).ok_or_else(|| {
            LearnError::Config(format!("Missing required environment variable: {key}"))
        })
    };

    Ok(ClientConfig::new(
        required(ENV_BASE_URL)?,
        required(ENV_APP_KEY)?,
        required(ENV_APP_SECRET)?,
    ))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the working directory via
/// [`probe_config_paths`]. Format is picked by file extension.
///
/// # Errors
/// Returns `LearnError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or a key is missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LearnError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LearnError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LearnError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LearnError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LearnError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(LearnError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the working directory for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    std::env::current_dir().ok().and_then(|cwd| probe_dir(&cwd))
}

fn probe_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.exists())
}
