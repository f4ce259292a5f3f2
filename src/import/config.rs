//! Importer configuration files
//!
//! Each account owns a folder of YAML files. A file names how many header
//! lines to skip and one shell command per transaction field:
//!
//! ```yaml
//! header_lines: 1
//! transformations:
//!   description: "cut -d, -f2"
//!   original_value: "cut -d, -f3"
//!   original_currency: "cut -d, -f4"
//!   value_in_account_currency: "cut -d, -f5"
//!   date: "cut -d, -f1"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MoneyGrepError, MoneyGrepResult};

/// Shell commands extracting each field from a statement line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformations {
    pub description: String,
    pub original_value: String,
    pub original_currency: String,
    pub value_in_account_currency: String,
    pub date: String,
}

/// Field of a transaction produced by a transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    OriginalValue,
    OriginalCurrency,
    ValueInAccountCurrency,
    Date,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Self::Description,
        Self::OriginalValue,
        Self::OriginalCurrency,
        Self::ValueInAccountCurrency,
        Self::Date,
    ];

    /// Key of the field in the YAML file
    pub fn key(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::OriginalValue => "original_value",
            Self::OriginalCurrency => "original_currency",
            Self::ValueInAccountCurrency => "value_in_account_currency",
            Self::Date => "date",
        }
    }
}

impl Transformations {
    /// The command configured for a field
    pub fn command(&self, field: Field) -> &str {
        match field {
            Field::Description => &self.description,
            Field::OriginalValue => &self.original_value,
            Field::OriginalCurrency => &self.original_currency,
            Field::ValueInAccountCurrency => &self.value_in_account_currency,
            Field::Date => &self.date,
        }
    }
}

/// A parsed importer configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Number of leading lines to skip
    #[serde(default)]
    pub header_lines: usize,

    pub transformations: Transformations,
}

impl ImporterConfig {
    /// Parse a configuration from YAML text
    pub fn from_yaml(yaml: &str) -> MoneyGrepResult<Self> {
        let config: ImporterConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> MoneyGrepResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MoneyGrepError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&contents).map_err(|e| {
            MoneyGrepError::Config(format!("Invalid importer {}: {}", path.display(), e))
        })
    }

    fn validate(&self) -> MoneyGrepResult<()> {
        for field in Field::ALL {
            if self.transformations.command(field).trim().is_empty() {
                return Err(MoneyGrepError::Validation(format!(
                    "Transformation '{}' is empty",
                    field.key()
                )));
            }
        }
        Ok(())
    }
}

/// List the importer files (`*.yaml`, `*.yml`) in a directory, sorted by name
pub fn discover_importers(dir: &Path) -> MoneyGrepResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MoneyGrepError::Import(format!(
            "Directory {} does not exist.",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
