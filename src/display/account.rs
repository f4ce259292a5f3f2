//! Account display formatting
//!
//! Formats accounts for terminal output in table and menu views.

use crate::models::Account;
use crate::services::AccountSummary;

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[AccountSummary]) -> String {
    if summaries.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.account.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<4}  {:>12}  {:>6}\n",
        "ID",
        "Name",
        "Curr",
        "Balance",
        "Count",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<4}  {:->12}  {:->6}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<4}  {:>12}  {:>6}\n",
            summary.account.id,
            summary.account.name,
            summary.account.currency,
            summary.balance,
            summary.transaction_count,
            name_width = name_width,
        ));
    }

    output
}

/// Format the numbered account choices of the interactive menu
pub fn format_account_choices(accounts: &[Account]) -> String {
    let mut output = String::from("\nSelect Account:\n");
    for (idx, account) in accounts.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, account));
    }
    output
}
