//! Configuration for the gateway invoker.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Where the invoker finds the gateway.
///
/// The test page used the host it was served from; outside a browser the
/// host has to be configured.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Gateway host with optional port, e.g. `localhost:9000`.
    #[serde(default = "default_host")]
    pub host: String,
    /// URL scheme (default: https).
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            scheme: default_scheme(),
        }
    }
}

fn default_host() -> String {
    "localhost:9000".to_string()
}
fn default_scheme() -> String {
    "https".to_string()
}

impl Config {
    pub fn new(host: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            scheme: scheme.into(),
        }
    }

    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (INVOKER__KEY format)
    /// 2. invoker.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("host", default_host())?
            .set_default("scheme", default_scheme())?
            .add_source(File::with_name("invoker").required(false))
            .add_source(
                Environment::with_prefix("INVOKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Full URL of the gateway endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}://{}/gateway",
            self.scheme,
            self.host.trim_end_matches('/')
        )
    }
}
