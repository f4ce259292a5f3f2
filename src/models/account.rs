//! Account model
//!
//! An account is a named bucket of transactions kept in one currency. Its name
//! also names the folder holding its importer configurations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::ids::AccountId;

/// Maximum length of an account name
pub const MAX_ACCOUNT_NAME_LEN: usize = 50;

/// A stored account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Account name (e.g., "Revolut"), unique across all accounts
    pub name: String,

    /// Currency the account is kept in
    pub currency: Currency,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.currency)
    }
}

/// An account that has not been inserted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub currency: Currency,
}

impl NewAccount {
    /// Create a new account draft; the name is trimmed
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            name: name.into().trim().to_string(),
            currency,
        }
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_ACCOUNT_NAME_LEN {
            return Err(AccountValidationError::NameTooLong(self.name.chars().count()));
        }

        // The name becomes a directory below the importers folder
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            return Err(AccountValidationError::InvalidName(self.name.clone()));
        }

        Ok(())
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidName(String),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Account name too long ({} characters, max {})",
                len, MAX_ACCOUNT_NAME_LEN
            ),
            Self::InvalidName(name) => {
                write!(f, "Account name cannot be used as a folder name: '{}'", name)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
