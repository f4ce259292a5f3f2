//! Export module for MoneyGrep
//!
//! - CSV: transactions of an account (spreadsheet-compatible)

pub mod csv;

pub use self::csv::export_transactions_csv;
