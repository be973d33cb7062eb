use crate::{TodoError, TodoResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TICK_RATE_MS: u64 = 16;

/// User settings read from `config.toml`.
///
/// Every field is optional so a partial file still loads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// View shown at startup: `all`, `important` or `others`.
    #[serde(default)]
    pub default_filter: Option<String>,

    /// Event poll interval in milliseconds.
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todo\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config location, falling back to defaults on
    /// any problem.
    pub fn load() -> Self {
        let Some(config_path) = Self::config_path() else {
            return Self::default();
        };
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. Unlike [`AppConfig::load`], a missing or
    /// malformed file is an error.
    pub fn load_from(path: &Path) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> TodoResult<Self> {
        toml::from_str(content).map_err(|e| TodoError::Config(e.to_string()))
    }

    pub fn effective_default_filter(&self) -> &str {
        self.default_filter.as_deref().unwrap_or("all")
    }

    pub fn effective_tick_rate_ms(&self) -> u64 {
        match self.tick_rate_ms {
            Some(0) | None => DEFAULT_TICK_RATE_MS,
            Some(ms) => ms,
        }
    }
}
