//! Schema migrations
//!
//! Migrations are applied in order. The number of applied migrations is kept
//! in SQLite's `user_version` pragma, so opening a database only runs the ones
//! it has not seen yet.

use rusqlite::Connection;

use crate::error::{MoneyGrepError, MoneyGrepResult};

/// Ordered schema migrations; never edit an entry once released, append instead
const MIGRATIONS: &[&str] = &[
    // 1: accounts and transactions
    "CREATE TABLE accounts (
        id          INTEGER PRIMARY KEY,
        name        TEXT NOT NULL UNIQUE COLLATE NOCASE,
        currency    TEXT NOT NULL,
        created_at  TEXT NOT NULL
    );
    CREATE TABLE transactions (
        id                         INTEGER PRIMARY KEY,
        account_id                 INTEGER NOT NULL REFERENCES accounts(id),
        description                TEXT NOT NULL,
        original_value             INTEGER NOT NULL,
        original_currency          TEXT NOT NULL,
        value_in_account_currency  INTEGER NOT NULL,
        date_str                   TEXT NOT NULL
    );",
    // 2: import timestamp and lookup index
    "ALTER TABLE transactions ADD COLUMN imported_at TEXT NOT NULL DEFAULT '1970-01-01 00:00:00+00:00';
    CREATE INDEX idx_transactions_account ON transactions(account_id, date_str);",
];

/// Number of migrations a fully migrated database has applied
pub fn latest_version() -> u32 {
    MIGRATIONS.len() as u32
}

/// Read the schema version of a database
pub fn current_version(conn: &Connection) -> MoneyGrepResult<u32> {
    let version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    u32::try_from(version)
        .map_err(|_| MoneyGrepError::Database(format!("Invalid schema version: {}", version)))
}

/// Apply all pending migrations, returning how many were run
pub fn run_migrations(conn: &mut Connection) -> MoneyGrepResult<usize> {
    let current = current_version(conn)? as usize;
    let latest = latest_version() as usize;

    if current > latest {
        return Err(MoneyGrepError::Database(format!(
            "Database schema version {} is newer than this program supports ({})",
            current, latest
        )));
    }

    for (index, sql) in MIGRATIONS.iter().enumerate().skip(current) {
        let version = index + 1;
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version as i64)?;
        tx.commit()?;
        log::info!("Applied database migration {}", version);
    }

    Ok(latest - current)
}
