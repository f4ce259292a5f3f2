//! MoneyGrep - personal expense tracking from bank statements
//!
//! Accounts and their transactions live in a local SQLite database. Statements
//! are imported line by line: every account owns a folder of importer files,
//! each naming one shell command per transaction field, and the commands'
//! output becomes the transaction. Imports are reviewed before they are
//! committed.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, money, currencies)
//! - `storage`: SQLite storage with sessions and migrations
//! - `import`: Importer files and shell transformations
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use moneygrep::config::MoneyGrepPaths;
//! use moneygrep::storage::Database;
//!
//! let paths = MoneyGrepPaths::new()?;
//! let mut db = Database::open(paths.database_file())?;
//! let accounts = db.with_session(|s| s.accounts().get_all())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod services;
pub mod storage;

pub use error::MoneyGrepError;
