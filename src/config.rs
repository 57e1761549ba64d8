//! # Configuration
//!
//! [`SystemConfig`] holds the few knobs the system has. Every field has a
//! default, so an empty YAML document (or no file at all) is a valid
//! configuration.
//!
//! ```yaml
//! email_policy: strict     # or non_empty
//! log_filter: info         # RUST_LOG takes precedence when set
//! ```

use crate::user_service::EmailPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Email acceptance rule applied by `create_user`.
    #[serde(default)]
    pub email_policy: EmailPolicy,

    /// Fallback `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            email_policy: EmailPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl SystemConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as a unit value, not an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}
