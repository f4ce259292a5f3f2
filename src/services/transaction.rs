//! Transaction service
//!
//! Read access to the transactions of an account.

use crate::error::MoneyGrepResult;
use crate::models::{AccountId, Transaction};
use crate::storage::Session;

/// Service for transaction queries
pub struct TransactionService<'a> {
    session: &'a Session<'a>,
}

impl<'a> TransactionService<'a> {
    pub fn new(session: &'a Session<'a>) -> Self {
        Self { session }
    }

    /// Transactions of an account, newest first, at most `limit` of them
    pub fn list(
        &self,
        account_id: AccountId,
        limit: Option<usize>,
    ) -> MoneyGrepResult<Vec<Transaction>> {
        self.session.transactions().get_by_account(account_id, limit)
    }

    /// Transactions of an account in the order they were imported
    pub fn list_chronological(&self, account_id: AccountId) -> MoneyGrepResult<Vec<Transaction>> {
        let mut txns = self.list(account_id, None)?;
        txns.reverse();
        Ok(txns)
    }
}
