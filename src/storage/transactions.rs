//! Transaction repository
//!
//! Reads and writes rows of the `transactions` table.

use chrono::Utc;
use rusqlite::{params, Connection, Row};

use crate::error::MoneyGrepResult;
use crate::models::{AccountId, Money, NewTransaction, Transaction, TransactionId};

const TRANSACTION_COLUMNS: &str = "id, account_id, description, original_value, \
     original_currency, value_in_account_currency, date_str, imported_at";

fn row_to_transaction(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        account_id: row.get(1)?,
        description: row.get(2)?,
        original_value: row.get(3)?,
        original_currency: row.get(4)?,
        value_in_account_currency: row.get(5)?,
        date_str: row.get(6)?,
        imported_at: row.get(7)?,
    })
}

/// Repository for transaction persistence
pub struct TransactionRepository<'a> {
    conn: &'a Connection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a transaction and return it with its assigned id
    pub fn insert(&self, txn: &NewTransaction) -> MoneyGrepResult<Transaction> {
        let imported_at = Utc::now();
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO transactions (account_id, description, original_value, original_currency, \
             value_in_account_currency, date_str, imported_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        stmt.execute(params![
            txn.account_id,
            txn.description,
            txn.original_value,
            txn.original_currency,
            txn.value_in_account_currency,
            txn.date_str,
            imported_at,
        ])?;

        Ok(Transaction {
            id: TransactionId::new(self.conn.last_insert_rowid()),
            account_id: txn.account_id,
            description: txn.description.clone(),
            original_value: txn.original_value,
            original_currency: txn.original_currency,
            value_in_account_currency: txn.value_in_account_currency,
            date_str: txn.date_str.clone(),
            imported_at,
        })
    }

    /// Insert several transactions in order
    pub fn insert_many<'t, I>(&self, txns: I) -> MoneyGrepResult<Vec<Transaction>>
    where
        I: IntoIterator<Item = &'t NewTransaction>,
    {
        txns.into_iter().map(|txn| self.insert(txn)).collect()
    }

    /// Get transactions of an account, newest first
    pub fn get_by_account(
        &self,
        account_id: AccountId,
        limit: Option<usize>,
    ) -> MoneyGrepResult<Vec<Transaction>> {
        let sql = format!(
            "SELECT {} FROM transactions WHERE account_id = ?1 ORDER BY id DESC LIMIT ?2",
            TRANSACTION_COLUMNS
        );
        // SQLite treats a negative LIMIT as "no limit"
        let limit = limit.map(|l| l as i64).unwrap_or(-1);

        let mut stmt = self.conn.prepare(&sql)?;
        let txns = stmt
            .query_map(params![account_id, limit], row_to_transaction)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(txns)
    }

    /// Count transactions of an account
    pub fn count_by_account(&self, account_id: AccountId) -> MoneyGrepResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT count(*) FROM transactions WHERE account_id = ?1",
            params![account_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Sum of all amounts booked on an account
    pub fn balance_by_account(&self, account_id: AccountId) -> MoneyGrepResult<Money> {
        Ok(self.conn.query_row(
            "SELECT COALESCE(SUM(value_in_account_currency), 0) FROM transactions \
             WHERE account_id = ?1",
            params![account_id],
            |row| row.get(0),
        )?)
    }

    /// Check whether an identical transaction is already stored
    pub fn exists_identical(&self, txn: &NewTransaction) -> MoneyGrepResult<bool> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT 1 FROM transactions WHERE account_id = ?1 AND date_str = ?2 \
             AND description = ?3 AND original_value = ?4 AND original_currency = ?5 \
             AND value_in_account_currency = ?6",
        )?;
        Ok(stmt.exists(params![
            txn.account_id,
            txn.date_str,
            txn.description,
            txn.original_value,
            txn.original_currency,
            txn.value_in_account_currency,
        ])?)
    }
}
