use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::denylist::{Denylist, DEFAULT_KEYWORDS};
use crate::error::{PlaylistError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category keywords whose entries are dropped
    pub keywords: Vec<String>,
    /// Fetch timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with the playlist request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("m3uclean/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load the config from the default location.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// reported and the defaults are used instead.
    pub fn load() -> Result<Self> {
        let Some(config_path) = Self::get_config_path() else {
            log::debug!("No config directory on this platform, using defaults");
            return Ok(Config::default());
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        match Self::load_from(&config_path) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring config file {:?}: {}", config_path, e);
                Ok(Config::default())
            }
        }
    }

    /// Load the config from an explicit path. The file must exist and parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            PlaylistError::config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file means "all defaults"
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_json::from_str(&data).map_err(|e| {
            PlaylistError::config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        config.validate()?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("m3uclean").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(PlaylistError::config("timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    pub fn denylist(&self) -> Denylist {
        Denylist::new(self.keywords.iter().cloned())
    }

    /// Replace the configured keywords (from the command line)
    pub fn set_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = keywords;
    }

    pub fn set_timeout_secs(&mut self, secs: u64) -> Result<()> {
        if secs == 0 {
            return Err(PlaylistError::config("timeout must be greater than 0"));
        }
        self.timeout_secs = secs;
        Ok(())
    }
}
