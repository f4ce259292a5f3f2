//! CSV Export functionality
//!
//! Exports the transactions of an account to CSV.

use std::io::Write;

use serde::Serialize;

use crate::error::MoneyGrepResult;
use crate::models::{Account, Transaction};

/// Column names, in record field order
const HEADERS: [&str; 9] = [
    "ID",
    "Date",
    "Account",
    "Description",
    "Original Value",
    "Original Currency",
    "Value",
    "Account Currency",
    "Imported At",
];

/// One exported row
#[derive(Debug, Serialize)]
struct TransactionRecord<'a> {
    id: i64,
    date: &'a str,
    account: &'a str,
    description: &'a str,
    original_value: String,
    original_currency: &'static str,
    value: String,
    account_currency: &'static str,
    imported_at: String,
}

/// Export an account's transactions to CSV, in the order given
///
/// The header row is always written, also when there are no transactions.
pub fn export_transactions_csv<W: Write>(
    account: &Account,
    transactions: &[Transaction],
    writer: W,
) -> MoneyGrepResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for txn in transactions {
        csv_writer.serialize(TransactionRecord {
            id: txn.id.get(),
            date: &txn.date_str,
            account: &account.name,
            description: &txn.description,
            original_value: txn.original_value.to_string(),
            original_currency: txn.original_currency.code(),
            value: txn.value_in_account_currency.to_string(),
            account_currency: account.currency.code(),
            imported_at: txn.imported_at.to_rfc3339(),
        })?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}
