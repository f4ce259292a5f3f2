//! Storage layer for MoneyGrep
//!
//! A single SQLite file holds all accounts and transactions. All reads and
//! writes go through a [`Session`], a unit of work that commits when the work
//! succeeds and rolls back when it fails.

pub mod accounts;
pub mod columns;
pub mod migrations;
pub mod transactions;

pub use accounts::AccountRepository;
pub use transactions::TransactionRepository;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::MoneyGrepResult;

/// Owner of the SQLite connection
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the database file and bring its schema up to date
    pub fn open(path: impl AsRef<Path>) -> MoneyGrepResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        log::debug!("Opened database {}", path.display());
        Self::prepare(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> MoneyGrepResult<Self> {
        Self::prepare(Connection::open_in_memory()?, None)
    }

    fn prepare(mut conn: Connection, path: Option<PathBuf>) -> MoneyGrepResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let applied = migrations::run_migrations(&mut conn)?;
        if applied > 0 {
            log::info!("Database schema migrated ({} step(s))", applied);
        }
        Ok(Self { conn, path })
    }

    /// Path of the database file, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `work` inside a session
    ///
    /// The session commits when `work` returns `Ok` and rolls back when it
    /// returns `Err`; the error is passed on to the caller.
    pub fn with_session<T, F>(&mut self, work: F) -> MoneyGrepResult<T>
    where
        F: FnOnce(&Session<'_>) -> MoneyGrepResult<T>,
    {
        let session = Session {
            tx: self.conn.transaction()?,
        };

        match work(&session) {
            Ok(value) => {
                session.tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = session.tx.rollback() {
                    log::warn!("Rollback failed: {}", rollback_err);
                }
                log::debug!("Session rolled back: {}", err);
                Err(err)
            }
        }
    }
}

/// A unit of work over one SQL transaction
///
/// Dropping a session without committing rolls it back.
pub struct Session<'conn> {
    tx: rusqlite::Transaction<'conn>,
}

impl<'conn> Session<'conn> {
    pub fn accounts(&self) -> AccountRepository<'_> {
        AccountRepository::new(&self.tx)
    }

    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(&self.tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoneyGrepError;
    use crate::models::{Currency, NewAccount};
    use tempfile::TempDir;

    #[test]
    fn test_commit_on_success() {
        let mut db = Database::open_in_memory().unwrap();
        db.with_session(|s| s.accounts().insert(&NewAccount::new("Cash", Currency::Usd)))
            .unwrap();

        let count = db.with_session(|s| s.accounts().count()).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_rollback_on_error() {
        let mut db = Database::open_in_memory().unwrap();
        let result: MoneyGrepResult<()> = db.with_session(|s| {
            s.accounts().insert(&NewAccount::new("Cash", Currency::Usd))?;
            Err(MoneyGrepError::Import("user aborted".into()))
        });
        assert!(matches!(result, Err(MoneyGrepError::Import(_))));

        let count = db.with_session(|s| s.accounts().count()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_rollback_on_panic() {
        let mut db = Database::open_in_memory().unwrap();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            db.with_session(|s| -> MoneyGrepResult<()> {
                s.accounts().insert(&NewAccount::new("Cash", Currency::Usd))?;
                panic!("interrupted mid-session");
            })
        }));
        assert!(outcome.is_err());

        let count = db.with_session(|s| s.accounts().count()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_file_database_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.db");

        {
            let mut db = Database::open(&path).unwrap();
            assert_eq!(db.path(), Some(path.as_path()));
            db.with_session(|s| s.accounts().insert(&NewAccount::new("Cash", Currency::Chf)))
                .unwrap();
        }

        let mut db = Database::open(&path).unwrap();
        let account = db
            .with_session(|s| s.accounts().get_by_name("cash"))
            .unwrap()
            .unwrap();
        assert_eq!(account.currency, Currency::Chf);
    }
}
