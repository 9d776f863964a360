//! Application context - wires configuration, client and services

use std::path::PathBuf;
use std::sync::Arc;

use bblearn_core::ReportService;
use bblearn_domain::{ClientConfig, Result};
use bblearn_infra::{config, BlackboardClient};

/// Application context - holds the client and the services built on it
pub struct AppContext {
    pub client: Arc<BlackboardClient>,
    pub reports: ReportService,
}

impl AppContext {
    /// Load configuration and build the context.
    ///
    /// An explicit `config_path` is used as-is; otherwise the environment is
    /// tried first, then the standard config file locations.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => config::load_from_file(Some(path))?,
            None => config::load()?,
        };

        Self::from_config(config)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(BlackboardClient::new(config)?))
    }

    pub fn from_client(client: BlackboardClient) -> Self {
        let client = Arc::new(client);
        let reports = ReportService::new(client.clone());

        Self { client, reports }
    }
}
