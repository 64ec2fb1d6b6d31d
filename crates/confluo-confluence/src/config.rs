//! Configuration for the Confluence client.
//!
//! Parses a `[confluence]` TOML table with serde. String values support
//! environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields: `base_url`, `username`, `api_token`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Error loading or expanding configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// I/O error reading the config file.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("TOML parse error")]
    Parse(#[from] toml::de::Error),

    /// Environment variable expansion failed.
    #[error("{field}: {message}")]
    EnvVar {
        /// Config field being expanded.
        field: String,
        /// What went wrong.
        message: String,
    },
}

/// Confluence connection settings.
#[derive(Clone, Debug, Deserialize)]
pub struct ConfluenceConfig {
    /// Base URL of the Confluence instance.
    pub base_url: String,
    /// Account username (email address for Confluence Cloud).
    pub username: String,
    /// API token (or password for server installations).
    pub api_token: String,
    /// Default space key for title lookups.
    #[serde(default)]
    pub space: Option<String>,
}

/// Top-level config file shape.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    confluence: ConfluenceConfig,
}

impl ConfluenceConfig {
    /// Load from a TOML file containing a `[confluence]` table.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parse from a TOML string containing a `[confluence]` table.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.confluence.expanded()
    }

    /// Expand `${VAR}` references in the credential fields.
    fn expanded(mut self) -> Result<Self, ConfigError> {
        self.base_url = expand_env(&self.base_url, "confluence.base_url")?;
        self.username = expand_env(&self.username, "confluence.username")?;
        self.api_token = expand_env(&self.api_token, "confluence.api_token")?;
        Ok(self)
    }
}

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}
