//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::{Account, Transaction};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, account: &Account) -> String {
    let original = if txn.original_currency != account.currency {
        format!("  ({})", txn.original_value.format_with_currency(txn.original_currency))
    } else {
        String::new()
    };

    format!(
        "{:>5} {:<12} {} {:>12}{}",
        txn.id,
        txn.date_str,
        pad_truncate(&txn.description, 30),
        txn.value_in_account_currency,
        original
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], account: &Account) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Transactions of {}\n", account));
    output.push_str(&format!(
        "{:>5} {:<12} {:<30} {:>12}\n",
        "ID", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, account));
        output.push('\n');
    }

    output
}

/// Cut `s` to at most `max_chars` characters
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate with an ellipsis and pad to exactly `width` characters
fn pad_truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        format!("{}...", truncate(s, width.saturating_sub(3)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Currency, Money, TransactionId};
    use chrono::Utc;

    fn account() -> Account {
        Account {
            id: AccountId::new(1),
            name: "Checking".into(),
            currency: Currency::Usd,
            created_at: Utc::now(),
        }
    }

    fn txn(description: &str, currency: Currency) -> Transaction {
        Transaction {
            id: TransactionId::new(5),
            account_id: AccountId::new(1),
            description: description.into(),
            original_value: Money::from_cents(-4500),
            original_currency: currency,
            value_in_account_currency: Money::from_cents(-5000),
            date_str: "2026-01-15".into(),
            imported_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&txn("Test Store", Currency::Usd), &account());
        assert!(formatted.contains("2026-01-15"));
        assert!(formatted.contains("Test Store"));
        assert!(formatted.contains("-50.00"));
        assert!(!formatted.contains("USD"));
    }

    #[test]
    fn test_foreign_currency_shows_original_value() {
        let formatted = format_transaction_row(&txn("Hotel", Currency::Eur), &account());
        assert!(formatted.ends_with("(-45.00 EUR)"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], &account());
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        assert_eq!(truncate("Zürich Hauptbahnhof", 6), "Zürich");
        assert_eq!(pad_truncate("A very long string", 10), "A very ...");
        assert_eq!(pad_truncate("Short", 7), "Short  ");
    }
}
