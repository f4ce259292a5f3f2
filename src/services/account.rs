//! Account service
//!
//! Provides business logic for account management: creation with validation,
//! lookup by name or id, and listing with computed balances.

use crate::config::MoneyGrepPaths;
use crate::error::{MoneyGrepError, MoneyGrepResult};
use crate::models::{Account, AccountId, Currency, Money, NewAccount};
use crate::storage::Session;

/// Service for account management
pub struct AccountService<'a> {
    session: &'a Session<'a>,
    paths: &'a MoneyGrepPaths,
}

/// Summary of an account with computed fields
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account: Account,
    /// Sum of all transactions in the account's currency
    pub balance: Money,
    pub transaction_count: usize,
}

impl<'a> AccountService<'a> {
    pub fn new(session: &'a Session<'a>, paths: &'a MoneyGrepPaths) -> Self {
        Self { session, paths }
    }

    /// Create a new account and its importer folder
    pub fn create(&self, name: &str, currency: Currency) -> MoneyGrepResult<Account> {
        let draft = NewAccount::new(name, currency);
        draft
            .validate()
            .map_err(|e| MoneyGrepError::Validation(e.to_string()))?;

        let repo = self.session.accounts();
        if repo.name_exists(&draft.name)? {
            return Err(MoneyGrepError::Duplicate {
                entity_type: "Account",
                identifier: draft.name,
            });
        }

        let account = repo.insert(&draft)?;

        let importer_dir = self.paths.account_importers_dir(&account.name);
        std::fs::create_dir_all(&importer_dir).map_err(|e| {
            MoneyGrepError::Io(format!(
                "Failed to create importer folder {}: {}",
                importer_dir.display(),
                e
            ))
        })?;

        log::info!("Created account '{}' ({})", account.name, account.currency);
        Ok(account)
    }

    pub fn get(&self, id: AccountId) -> MoneyGrepResult<Option<Account>> {
        self.session.accounts().get(id)
    }

    /// Find an account by name (case-insensitive) or numeric ID
    pub fn find(&self, identifier: &str) -> MoneyGrepResult<Option<Account>> {
        if let Some(account) = self.session.accounts().get_by_name(identifier)? {
            return Ok(Some(account));
        }

        if let Ok(id) = identifier.parse::<AccountId>() {
            return self.get(id);
        }

        Ok(None)
    }

    /// Like [`find`](Self::find), but a missing account is an error
    pub fn require(&self, identifier: &str) -> MoneyGrepResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| MoneyGrepError::account_not_found(identifier))
    }

    /// Get all accounts, ordered by name
    pub fn list(&self) -> MoneyGrepResult<Vec<Account>> {
        self.session.accounts().get_all()
    }

    /// Get all accounts with their balances
    pub fn list_with_balances(&self) -> MoneyGrepResult<Vec<AccountSummary>> {
        self.list()?
            .into_iter()
            .map(|account| self.get_summary(account))
            .collect()
    }

    pub fn get_summary(&self, account: Account) -> MoneyGrepResult<AccountSummary> {
        let transactions = self.session.transactions();
        Ok(AccountSummary {
            balance: transactions.balance_by_account(account.id)?,
            transaction_count: transactions.count_by_account(account.id)?,
            account,
        })
    }
}
