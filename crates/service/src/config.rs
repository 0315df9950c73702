//! Configuration loading and validation for the codec service.
//!
//! Values come from an optional TOML file named by `HEXSEAL_CONFIG_FILE`,
//! overridden by `HEXSEAL_`-prefixed environment variables. The process exits
//! with a clear error message if the key is missing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_FILE_VAR: &str = "HEXSEAL_CONFIG_FILE";

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "HEXSEAL";

/// Validated service configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Hex-encoded codec key. **Required.**
    pub key: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// OTLP collector endpoint. Spans are only exported when this is set.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8080
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration, reading the file named by
    /// [`CONFIG_FILE_VAR`] if it is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is absent or any value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let file = std::env::var_os(CONFIG_FILE_VAR).map(PathBuf::from);
        Self::load(file.as_deref())
    }

    /// Load and validate configuration from `file` (if any) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a value cannot be parsed,
    /// or validation fails.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let cfg = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to build configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            anyhow::bail!("HEXSEAL_KEY is required and must not be empty");
        }
        if self.otel_exporter_otlp_endpoint.as_deref().is_some_and(|e| e.trim().is_empty()) {
            anyhow::bail!("HEXSEAL_OTEL_EXPORTER_OTLP_ENDPOINT must not be empty when set");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("key", &"[REDACTED]")
            .field("listen_port", &self.listen_port)
            .field("otel_exporter_otlp_endpoint", &self.otel_exporter_otlp_endpoint)
            .field("log_level", &self.log_level)
            .finish()
    }
}
