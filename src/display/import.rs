//! Import review formatting
//!
//! Renders the candidates of an import and the lines that were left out, so
//! the user can check them before confirming.

use crate::services::{CandidateStatus, ImportPreview, RowIssue, RowIssueKind};

use super::transaction::truncate;

/// Format the lines that did not produce a candidate
pub fn format_row_issues(issues: &[RowIssue]) -> String {
    let mut output = String::new();
    for issue in issues {
        let line = match issue.kind {
            RowIssueKind::Skipped => {
                format!("Skipping line {}: {}.\n", issue.line_number, issue.message)
            }
            RowIssueKind::DataError => {
                format!("Data error on line {}: {}\n", issue.line_number, issue.message)
            }
        };
        output.push_str(&line);
    }
    output
}

/// Format the review table of an import
///
/// Columns: date, description (cut two characters short of
/// `description_width`), amount in the account's currency and the original
/// currency code. Duplicates are marked, and labelled as skipped when
/// `skip_duplicates` is set.
pub fn format_review_table(
    preview: &ImportPreview,
    description_width: usize,
    skip_duplicates: bool,
) -> String {
    let width = description_width.max(3);
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} | {:<width$} | {:<10} | {}\n",
        "Date",
        "Description",
        "Amount",
        "Curr",
        width = width
    ));
    output.push_str(&"-".repeat(width + 35));
    output.push('\n');

    for candidate in &preview.candidates {
        let txn = &candidate.transaction;
        let marker = match (candidate.status, skip_duplicates) {
            (CandidateStatus::New, _) => "",
            (CandidateStatus::Duplicate, true) => "  (duplicate, skipped)",
            (CandidateStatus::Duplicate, false) => "  (duplicate)",
        };

        output.push_str(&format!(
            "{:<12} | {:<width$} | {:<10} | {}{}\n",
            txn.date_str,
            truncate(&txn.description, width - 2),
            txn.value_in_account_currency,
            txn.original_currency,
            marker,
            width = width
        ));
    }

    output
}
