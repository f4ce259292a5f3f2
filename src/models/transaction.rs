//! Transaction model
//!
//! A transaction records one statement line: what it was, what it cost in the
//! currency it was charged in, and what it cost in the account's currency.
//! The date is kept verbatim as extracted by the importer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::ids::{AccountId, TransactionId};
use super::money::Money;

/// Maximum length of a transaction description
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Maximum length of the raw date text
pub const MAX_DATE_LEN: usize = 20;

/// A stored transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    pub description: String,
    /// Amount in the currency the transaction was made in
    pub original_value: Money,
    pub original_currency: Currency,
    /// Amount as booked on the account
    pub value_in_account_currency: Money,
    /// Date text as produced by the importer
    pub date_str: String,
    pub imported_at: DateTime<Utc>,
}

/// A transaction that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub description: String,
    pub original_value: Money,
    pub original_currency: Currency,
    pub value_in_account_currency: Money,
    pub date_str: String,
}

impl NewTransaction {
    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        let len = self.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(TransactionValidationError::DescriptionTooLong(len));
        }

        if self.date_str.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDate);
        }

        let len = self.date_str.chars().count();
        if len > MAX_DATE_LEN {
            return Err(TransactionValidationError::DateTooLong(len));
        }

        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    EmptyDate,
    DateTooLong(usize),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} characters, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
            Self::EmptyDate => write!(f, "Date cannot be empty"),
            Self::DateTooLong(len) => {
                write!(f, "Date too long ({} characters, max {})", len, MAX_DATE_LEN)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewTransaction {
        NewTransaction {
            account_id: AccountId::new(1),
            description: "Coffee".into(),
            original_value: Money::from_cents(-450),
            original_currency: Currency::Chf,
            value_in_account_currency: Money::from_cents(-470),
            date_str: "2026-01-15".into(),
        }
    }

    #[test]
    fn test_valid_transaction() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_description_limits() {
        let mut txn = sample();
        txn.description = " ".into();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyDescription));

        txn.description = "d".repeat(MAX_DESCRIPTION_LEN + 1);
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::DescriptionTooLong(MAX_DESCRIPTION_LEN + 1))
        );
    }

    #[test]
    fn test_date_limits() {
        let mut txn = sample();
        txn.date_str = "15 January 2026, 10:42:17".into();
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::DateTooLong(_))
        ));
    }
}
