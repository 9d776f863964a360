//! Connection configuration

use std::fmt;

use serde::Deserialize;

/// Immutable connection settings for a Blackboard Learn instance.
///
/// The base URL is stored without trailing slashes so that endpoint paths can
/// be appended directly. Values loaded from files go through the same
/// normalisation as [`ClientConfig::new`].
///
/// The type is deserialize-only so the secret cannot be written back out:
///
/// ```compile_fail
/// fn requires_serialize<T: serde::Serialize>() {}
/// requires_serialize::<bblearn_domain::ClientConfig>();
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawClientConfig")]
pub struct ClientConfig {
    base_url: String,
    app_key: String,
    app_secret: String,
}

impl ClientConfig {
    /// Create a configuration, stripping trailing slashes from `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { base_url, app_key: app_key.into(), app_secret: app_secret.into() }
    }

    /// Instance root, e.g. `https://school.blackboard.com`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// OAuth client id registered for the application.
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Secret paired with [`Self::app_key`] for the token endpoint.
    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
struct RawClientConfig {
    base_url: String,
    app_key: String,
    app_secret: String,
}

impl From<RawClientConfig> for ClientConfig {
    fn from(raw: RawClientConfig) -> Self {
        Self::new(raw.base_url, raw.app_key, raw.app_secret)
    }
}
