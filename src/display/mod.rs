//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod account;
pub mod import;
pub mod transaction;

pub use account::{format_account_choices, format_account_list};
pub use import::{format_review_table, format_row_issues};
pub use transaction::{format_transaction_register, format_transaction_row};
