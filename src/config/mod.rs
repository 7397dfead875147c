use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SETTLE_SECS_ENV: &str = "NETREPAIR_SETTLE_SECS";
const SKIP_ELEVATION_ENV: &str = "NETREPAIR_SKIP_ELEVATION";

const DEFAULT_SETTLE_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seconds to let the stack settle between releasing and renewing the IP.
    pub settle_secs: u64,
    /// Skips the elevation gate. Development only; the repair commands
    /// themselves still require administrator rights to have any effect.
    pub skip_elevation_check: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_secs: DEFAULT_SETTLE_SECS,
            skip_elevation_check: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(file_config) = Self::from_conf_file()? {
            config.apply_file(file_config);
        }

        if let Ok(secs) = std::env::var(SETTLE_SECS_ENV) {
            config.settle_secs = secs.parse().unwrap_or(DEFAULT_SETTLE_SECS);
        }

        if let Ok(skip) = std::env::var(SKIP_ELEVATION_ENV) {
            config.skip_elevation_check = matches!(skip.as_str(), "1" | "true");
        }

        Ok(config)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_secs)
    }

    fn from_conf_file() -> Result<Option<FileConfig>> {
        let path = crate::paths::conf_path()?;
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let file_config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(Some(file_config))
    }

    fn apply_file(&mut self, file_config: FileConfig) {
        if let Some(settle_secs) = file_config.settle_secs {
            self.settle_secs = settle_secs;
        }
        if let Some(skip) = file_config.skip_elevation_check {
            self.skip_elevation_check = skip;
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    settle_secs: Option<u64>,
    skip_elevation_check: Option<bool>,
}
