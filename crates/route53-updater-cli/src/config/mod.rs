//! Configuration file handling.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output::OutputFormat;

/// Defaults read from `config.toml`.
///
/// Every field is optional; flags and environment variables win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Hosted zone ID
    pub zone_id: Option<String>,

    /// Parent domain
    pub domain: Option<String>,

    /// Record TTL in seconds
    pub ttl: Option<i64>,

    /// Record type
    pub record_type: Option<String>,

    /// AWS region used for signing
    pub region: Option<String>,

    /// Route 53 endpoint override
    pub endpoint_url: Option<String>,

    /// Instance metadata base URL
    pub metadata_url: Option<String>,

    /// Instance metadata request timeout.
    pub metadata_timeout_secs: Option<u64>,

    /// Route 53 request timeout.
    pub provider_timeout_secs: Option<u64>,

    /// Total Route 53 attempts (1 = no retry)
    pub max_attempts: Option<u32>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the default config file path, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "route53-updater").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional; when it is
    /// absent (or the platform has no config dir) defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}
