use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;
use todo_core::{AppConfig, TodoError, TodoResult};
use todo_domain::ViewFilter;

/// Startup settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config_path: Option<PathBuf>,
    pub filter: ViewFilter,
    pub tick_rate: Duration,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> TodoResult<Self> {
        let (config, config_path) = match &cli.config {
            Some(path) => (AppConfig::load_from(path)?, Some(path.clone())),
            None => (AppConfig::load(), AppConfig::config_path()),
        };

        let filter = match cli.filter {
            Some(filter) => filter,
            None => config
                .effective_default_filter()
                .parse::<ViewFilter>()
                .map_err(|e| TodoError::Config(format!("default_filter: {}", e)))?,
        };

        Ok(Self {
            config_path,
            filter,
            tick_rate: Duration::from_millis(config.effective_tick_rate_ms()),
        })
    }

    pub fn describe(&self) -> String {
        let path = self
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        format!(
            "config: {}\nfilter: {}\ntick_rate_ms: {}",
            path,
            self.filter,
            self.tick_rate.as_millis()
        )
    }
}
