//! User settings for MoneyGrep
//!
//! Manages user preferences such as the shell used for transformations and
//! how the import review is rendered.

use serde::{Deserialize, Serialize};

use super::paths::MoneyGrepPaths;
use crate::error::MoneyGrepError;
use crate::models::Currency;

/// User settings for MoneyGrep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency preselected when creating accounts
    #[serde(default)]
    pub default_currency: Currency,

    /// Shell program that runs transformation commands
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Leave out candidates identical to already stored transactions
    #[serde(default = "default_skip_duplicates")]
    pub skip_duplicates: bool,

    /// Width of the description column in the import review
    #[serde(default = "default_description_width")]
    pub description_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

#[cfg(not(windows))]
fn default_shell() -> String {
    "sh".to_string()
}

#[cfg(windows)]
fn default_shell() -> String {
    "cmd".to_string()
}

fn default_skip_duplicates() -> bool {
    true
}

fn default_description_width() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            shell: default_shell(),
            skip_duplicates: default_skip_duplicates(),
            description_width: default_description_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MoneyGrepPaths) -> Result<Self, MoneyGrepError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MoneyGrepError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MoneyGrepError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            log::debug!("Loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MoneyGrepPaths) -> Result<(), MoneyGrepError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MoneyGrepError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            MoneyGrepError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_currency, Currency::Usd);
        assert!(settings.skip_duplicates);
        assert_eq!(settings.description_width, 30);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyGrepPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_currency = Currency::Chf;
        settings.skip_duplicates = false;

        settings.save(&paths).unwrap();
        assert!(paths.is_initialized());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_currency, Currency::Chf);
        assert!(!loaded.skip_duplicates);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"default_currency": "EUR"}"#).unwrap();
        assert_eq!(loaded.default_currency, Currency::Eur);
        assert_eq!(loaded.shell, default_shell());
        assert!(loaded.skip_duplicates);
    }
}
