//! Runtime settings read from the environment.

use std::env;
use std::path::PathBuf;

pub const LOG_PATH_ENV: &str = "MAZE_LOG_PATH";
pub const LOG_FILTER_ENV: &str = "MAZE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Log file. The game owns the terminal, so without a file logs are dropped.
    pub log_path: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `debug` or `tui_maze_game=trace`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup(LOG_PATH_ENV)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_filter = lookup(LOG_FILTER_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_path,
            log_filter,
        }
    }
}
