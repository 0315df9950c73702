//! Configuration loading and validation for the `hexseal` CLI.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated CLI configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Hex-encoded codec key. **Required.**
    pub key: String,

    /// Tracing log level for diagnostics on stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from `file` (if given), overridden by
    /// `HEXSEAL_*` environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let cfg = builder
            .add_source(config::Environment::with_prefix("HEXSEAL"))
            .build()
            .context("failed to build hexseal configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise hexseal configuration (is HEXSEAL_KEY set?)")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            anyhow::bail!("HEXSEAL_KEY is required and must not be empty");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("key", &"[REDACTED]")
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_blank_key() {
        let cfg = Config {
            key: "".into(),
            log_level: "info".into(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn loads_key_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "key = \"00112233445566778899aabbccddeeff\"").unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let cfg = Config::load(Some(file.path())).unwrap();
        assert_eq!(cfg.key, "00112233445566778899aabbccddeeff");
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn log_level_defaults_to_info_when_unset() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "key = \"00112233445566778899aabbccddeeff\"").unwrap();

        let cfg = Config::load(Some(file.path())).unwrap();
        assert_eq!(cfg.log_level, "info");
    }
}
