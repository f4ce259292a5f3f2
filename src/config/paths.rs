//! Path management for MoneyGrep
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYGREP_HOME` environment variable (if set)
//! 2. The platform config directory (`~/.config/moneygrep` on Linux,
//!    `~/Library/Application Support/moneygrep` on macOS, `%APPDATA%\moneygrep`
//!    on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::MoneyGrepError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "MONEYGREP_HOME";

/// Manages all paths used by MoneyGrep
#[derive(Debug, Clone)]
pub struct MoneyGrepPaths {
    /// Base directory for all MoneyGrep data
    base_dir: PathBuf,
}

impl MoneyGrepPaths {
    /// Create a new MoneyGrepPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, MoneyGrepError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MoneyGrepPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("expense.db")
    }

    /// Get the directory holding one importer folder per account
    pub fn importers_dir(&self) -> PathBuf {
        self.base_dir.join("importers")
    }

    /// Get the importer folder of a single account
    pub fn account_importers_dir(&self, account_name: &str) -> PathBuf {
        self.importers_dir().join(account_name)
    }

    /// Ensure the base and importers directories exist
    pub fn ensure_directories(&self) -> Result<(), MoneyGrepError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyGrepError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.importers_dir()).map_err(|e| {
            MoneyGrepError::Io(format!("Failed to create importers directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if MoneyGrep has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, MoneyGrepError> {
    ProjectDirs::from("", "", "moneygrep")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            MoneyGrepError::Config(format!(
                "Could not determine a config directory; set {} instead",
                HOME_ENV_VAR
            ))
        })
}
