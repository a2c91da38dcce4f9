use crate::error::{ZombieError, ZombieResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.nationstates.net/cgi-bin/api.cgi";
pub const DEFAULT_REGION: &str = "pony_lands";
pub const DEFAULT_OUTPUT: &str = "zombies.json";

/// Just below 50 requests per 30 seconds.
pub const DEFAULT_PACE_SECS: f64 = 0.65;

/// Upper bound on `pace_secs`. The longest backoff is 60 paces.
pub const MAX_PACE_SECS: f64 = 600.0;

/// Suffix of the scratch file written before each atomic rename.
pub const PART_SUFFIX: &str = ".part";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub base_url:             String,
    pub region:               String,
    pub output_path:          PathBuf,
    pub user_agent:           String,
    /// Delay between consecutive requests, and unit of the retry backoff.
    pub pace_secs:            f64,
    pub request_timeout_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            base_url:             DEFAULT_BASE_URL.to_string(),
            region:               DEFAULT_REGION.to_string(),
            output_path:          PathBuf::from(DEFAULT_OUTPUT),
            user_agent:           format!("zombie-watch/{}", env!("CARGO_PKG_VERSION")),
            pace_secs:            DEFAULT_PACE_SECS,
            request_timeout_secs: 30,
        }
    }
}

impl WatchConfig {
    /// Load a JSON config file. Keys that are absent keep their defaults.
    pub fn load(path: &Path) -> ZombieResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ZombieError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: WatchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ZombieResult<()> {
        if !(0.0..=MAX_PACE_SECS).contains(&self.pace_secs) {
            return Err(ZombieError::Config(format!(
                "pace_secs must be between 0 and {MAX_PACE_SECS}, got {}",
                self.pace_secs
            )));
        }
        if self.region.trim().is_empty() {
            return Err(ZombieError::Config("region must not be empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ZombieError::Config("output_path must not be empty".into()));
        }
        Ok(())
    }

    pub fn pace(&self) -> ZombieResult<Duration> {
        Duration::try_from_secs_f64(self.pace_secs).map_err(|e| {
            ZombieError::Config(format!("invalid pace_secs {}: {e}", self.pace_secs))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `<output_path>.part`, on the same filesystem as the output file.
    pub fn part_path(&self) -> PathBuf {
        part_path_for(&self.output_path)
    }
}

pub fn part_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(PART_SUFFIX);
    PathBuf::from(name)
}
