//! Configuration loading and timelog path resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::TimeDelta;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Timelog location relative to the home directory.
const DEFAULT_TIMELOG: &str = ".gtimelog/timelog.txt";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the timelog; defaults to `~/.gtimelog/timelog.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Length of the expected workday in minutes.
    pub workday_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: None,
            workday_minutes: 7 * 60,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (GTL_*)
        figment = figment.merge(Env::prefixed("GTL_"));

        figment.extract()
    }

    /// Picks the timelog to read: the explicit override, then the configured
    /// path, then `~/.gtimelog/timelog.txt`.
    pub fn timelog_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path.or(self.log_path.as_deref()) {
            return Ok(path.to_path_buf());
        }
        let home = dirs::home_dir().context("could not determine home directory")?;
        Ok(home.join(DEFAULT_TIMELOG))
    }

    pub fn workday(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.workday_minutes))
    }
}

/// Returns the platform-specific config directory for gtl.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("gtl"))
}
