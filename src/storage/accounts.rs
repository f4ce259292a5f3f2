//! Account repository
//!
//! Reads and writes rows of the `accounts` table.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::MoneyGrepResult;
use crate::models::{Account, AccountId, NewAccount};

const ACCOUNT_COLUMNS: &str = "id, name, currency, created_at";

fn row_to_account(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        currency: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Repository for account persistence
pub struct AccountRepository<'a> {
    conn: &'a Connection,
}

impl<'a> AccountRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert an account and return it with its assigned id
    pub fn insert(&self, account: &NewAccount) -> MoneyGrepResult<Account> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO accounts (name, currency, created_at) VALUES (?1, ?2, ?3)",
            params![account.name, account.currency, created_at],
        )?;

        Ok(Account {
            id: AccountId::new(self.conn.last_insert_rowid()),
            name: account.name.clone(),
            currency: account.currency,
            created_at,
        })
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> MoneyGrepResult<Option<Account>> {
        let sql = format!("SELECT {} FROM accounts WHERE id = ?1", ACCOUNT_COLUMNS);
        Ok(self
            .conn
            .query_row(&sql, params![id], row_to_account)
            .optional()?)
    }

    /// Get an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> MoneyGrepResult<Option<Account>> {
        let sql = format!(
            "SELECT {} FROM accounts WHERE name = ?1 COLLATE NOCASE",
            ACCOUNT_COLUMNS
        );
        Ok(self
            .conn
            .query_row(&sql, params![name.trim()], row_to_account)
            .optional()?)
    }

    /// Get all accounts, ordered by name
    pub fn get_all(&self) -> MoneyGrepResult<Vec<Account>> {
        let sql = format!(
            "SELECT {} FROM accounts ORDER BY name COLLATE NOCASE, id",
            ACCOUNT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let accounts = stmt
            .query_map([], row_to_account)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(accounts)
    }

    /// Check if an account name is taken (case-insensitive)
    pub fn name_exists(&self, name: &str) -> MoneyGrepResult<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM accounts WHERE name = ?1 COLLATE NOCASE")?;
        Ok(stmt.exists(params![name.trim()])?)
    }

    /// Count all accounts
    pub fn count(&self) -> MoneyGrepResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM accounts", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use crate::storage::Database;

    #[test]
    fn test_insert_and_get() {
        let mut db = Database::open_in_memory().unwrap();
        db.with_session(|session| {
            let repo = session.accounts();
            let created = repo.insert(&NewAccount::new("Revolut", Currency::Eur))?;

            let loaded = repo.get(created.id)?.unwrap();
            assert_eq!(loaded.name, "Revolut");
            assert_eq!(loaded.currency, Currency::Eur);
            assert_eq!(loaded.created_at.timestamp(), created.created_at.timestamp());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_get_by_name_is_case_insensitive() {
        let mut db = Database::open_in_memory().unwrap();
        db.with_session(|session| {
            let repo = session.accounts();
            repo.insert(&NewAccount::new("Checking", Currency::Usd))?;

            assert!(repo.get_by_name("checking")?.is_some());
            assert!(repo.name_exists("CHECKING")?);
            assert!(repo.get_by_name("Savings")?.is_none());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let mut db = Database::open_in_memory().unwrap();
        db.with_session(|session| {
            let repo = session.accounts();
            repo.insert(&NewAccount::new("Zurich Cash", Currency::Chf))?;
            repo.insert(&NewAccount::new("amex", Currency::Usd))?;
            repo.insert(&NewAccount::new("Bank", Currency::Gbp))?;

            let names: Vec<_> = repo.get_all()?.into_iter().map(|a| a.name).collect();
            assert_eq!(names, vec!["amex", "Bank", "Zurich Cash"]);
            assert_eq!(repo.count()?, 3);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_unique_name_constraint() {
        let mut db = Database::open_in_memory().unwrap();
        let result = db.with_session(|session| {
            let repo = session.accounts();
            repo.insert(&NewAccount::new("Cash", Currency::Usd))?;
            repo.insert(&NewAccount::new("cash", Currency::Eur))?;
            Ok(())
        });
        assert!(result.is_err());
    }
}
