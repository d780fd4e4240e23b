//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Resolution never fails; every field has a default.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "FINTRACK_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "FINTRACK_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "FINTRACK_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "fintrack.sqlite3";

/// Storage and logging settings for a host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Reads `FINTRACK_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: non_blank(LOG_LEVEL_VAR)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_VAR).map(PathBuf::from),
        }
    }

    /// Applies caller-supplied logging settings; blank values keep the
    /// configured ones.
    pub fn with_logging_overrides(&self, level: &str, log_dir: &str) -> Self {
        let level = level.trim();
        let log_dir = log_dir.trim();
        Self {
            db_path: self.db_path.clone(),
            log_level: if level.is_empty() {
                self.log_level.clone()
            } else {
                level.to_string()
            },
            log_dir: if log_dir.is_empty() {
                self.log_dir.clone()
            } else {
                Some(PathBuf::from(log_dir))
            },
        }
    }
}
