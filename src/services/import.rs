//! Statement import service
//!
//! Turns a statement file into candidate transactions by running the
//! importer's shell transformations over every data line, flags candidates
//! that are already stored, and inserts the confirmed ones.

use std::path::{Path, PathBuf};

use crate::config::MoneyGrepPaths;
use crate::error::{MoneyGrepError, MoneyGrepResult};
use crate::import::{discover_importers, Field, ImporterConfig, LineTransform};
use crate::models::{Account, Currency, Money, NewTransaction, TransactionId};
use crate::storage::Session;

/// Message for rows where a transformation produced nothing
pub const EMPTY_VALUES_MESSAGE: &str = "Transformation returned empty values";

/// Whether a candidate is new or already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    New,
    Duplicate,
}

/// A transaction extracted from one statement line
#[derive(Debug, Clone)]
pub struct ImportCandidate {
    /// 1-based line number in the statement file
    pub line_number: usize,
    pub transaction: NewTransaction,
    pub status: CandidateStatus,
}

/// Why a line did not produce a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssueKind {
    /// A transformation failed or produced an empty value
    Skipped,
    /// The extracted values could not be turned into a transaction
    DataError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub line_number: usize,
    pub kind: RowIssueKind,
    pub message: String,
}

/// Everything the review step needs to show before committing
#[derive(Debug, Clone)]
pub struct ImportPreview {
    pub account: Account,
    pub candidates: Vec<ImportCandidate>,
    pub issues: Vec<RowIssue>,
}

impl ImportPreview {
    pub fn new_count(&self) -> usize {
        self.count_status(CandidateStatus::New)
    }

    pub fn duplicate_count(&self) -> usize {
        self.count_status(CandidateStatus::Duplicate)
    }

    fn count_status(&self, status: CandidateStatus) -> usize {
        self.candidates.iter().filter(|c| c.status == status).count()
    }

    /// Candidates that a commit would insert
    pub fn importable(&self, skip_duplicates: bool) -> impl Iterator<Item = &ImportCandidate> {
        self.candidates
            .iter()
            .filter(move |c| !skip_duplicates || c.status == CandidateStatus::New)
    }
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    pub duplicates_skipped: usize,
    pub imported_ids: Vec<TransactionId>,
}

/// Service for statement import
pub struct ImportService<'a> {
    session: &'a Session<'a>,
    transform: &'a dyn LineTransform,
}

impl<'a> ImportService<'a> {
    pub fn new(session: &'a Session<'a>, transform: &'a dyn LineTransform) -> Self {
        Self { session, transform }
    }

    /// List the importer files configured for an account
    pub fn list_importers(
        paths: &MoneyGrepPaths,
        account: &Account,
    ) -> MoneyGrepResult<Vec<PathBuf>> {
        discover_importers(&paths.account_importers_dir(&account.name))
    }

    /// Run the importer over a statement file
    pub fn preview_file(
        &self,
        account: &Account,
        config: &ImporterConfig,
        csv_path: &Path,
    ) -> MoneyGrepResult<ImportPreview> {
        if !csv_path.is_file() {
            return Err(MoneyGrepError::Import(format!(
                "File not found: {}",
                csv_path.display()
            )));
        }

        let content = std::fs::read_to_string(csv_path).map_err(|e| {
            MoneyGrepError::Import(format!("Failed to read {}: {}", csv_path.display(), e))
        })?;

        self.preview_text(account, config, &content)
    }

    /// Run the importer over statement text
    pub fn preview_text(
        &self,
        account: &Account,
        config: &ImporterConfig,
        content: &str,
    ) -> MoneyGrepResult<ImportPreview> {
        let mut preview = ImportPreview {
            account: account.clone(),
            candidates: Vec::new(),
            issues: Vec::new(),
        };
        let transactions = self.session.transactions();

        for (index, raw_line) in content.lines().enumerate().skip(config.header_lines) {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let values = match self.extract_fields(config, line) {
                Ok(values) => values,
                Err(reason) => {
                    log::warn!("Skipping line {}: {}", line_number, reason);
                    preview.issues.push(RowIssue {
                        line_number,
                        kind: RowIssueKind::Skipped,
                        message: reason,
                    });
                    continue;
                }
            };

            let transaction = match build_transaction(account, values) {
                Ok(transaction) => transaction,
                Err(message) => {
                    preview.issues.push(RowIssue {
                        line_number,
                        kind: RowIssueKind::DataError,
                        message,
                    });
                    continue;
                }
            };

            let status = if transactions.exists_identical(&transaction)? {
                CandidateStatus::Duplicate
            } else {
                CandidateStatus::New
            };

            preview.candidates.push(ImportCandidate {
                line_number,
                transaction,
                status,
            });
        }

        log::info!(
            "Prepared import for '{}': {} new, {} duplicate, {} issue(s)",
            account.name,
            preview.new_count(),
            preview.duplicate_count(),
            preview.issues.len()
        );

        Ok(preview)
    }

    /// Run every transformation over a line
    ///
    /// All five commands run even when one fails, so the skip message names
    /// every broken command of the row.
    fn extract_fields(
        &self,
        config: &ImporterConfig,
        line: &str,
    ) -> Result<ExtractedFields, String> {
        let mut failures = Vec::new();
        let mut any_empty = false;
        let mut run = |field: Field| -> String {
            let command = config.transformations.command(field);
            match self.transform.apply(command, line) {
                Ok(value) => {
                    any_empty |= value.is_empty();
                    value
                }
                Err(e) => {
                    failures.push(e.to_string());
                    String::new()
                }
            }
        };

        let fields = ExtractedFields {
            description: run(Field::Description),
            original_value: run(Field::OriginalValue),
            original_currency: run(Field::OriginalCurrency),
            value_in_account_currency: run(Field::ValueInAccountCurrency),
            date: run(Field::Date),
        };

        if !failures.is_empty() {
            Err(format!("{} ({})", EMPTY_VALUES_MESSAGE, failures.join("; ")))
        } else if any_empty {
            Err(EMPTY_VALUES_MESSAGE.to_string())
        } else {
            Ok(fields)
        }
    }

    /// Insert the importable candidates of a preview
    pub fn commit(
        &self,
        preview: &ImportPreview,
        skip_duplicates: bool,
    ) -> MoneyGrepResult<ImportResult> {
        let to_insert: Vec<&NewTransaction> = preview
            .importable(skip_duplicates)
            .map(|c| &c.transaction)
            .collect();

        let inserted = self.session.transactions().insert_many(to_insert)?;

        let result = ImportResult {
            imported: inserted.len(),
            duplicates_skipped: if skip_duplicates {
                preview.duplicate_count()
            } else {
                0
            },
            imported_ids: inserted.into_iter().map(|t| t.id).collect(),
        };

        log::info!(
            "Imported {} transaction(s) into '{}'",
            result.imported,
            preview.account.name
        );
        Ok(result)
    }
}

/// Raw field values of one line
struct ExtractedFields {
    description: String,
    original_value: String,
    original_currency: String,
    value_in_account_currency: String,
    date: String,
}

fn build_transaction(account: &Account, values: ExtractedFields) -> Result<NewTransaction, String> {
    let original_value = Money::parse(&values.original_value).map_err(|e| e.to_string())?;
    let original_currency = values
        .original_currency
        .parse::<Currency>()
        .map_err(|e| e.to_string())?;
    let value_in_account_currency =
        Money::parse(&values.value_in_account_currency).map_err(|e| e.to_string())?;

    let transaction = NewTransaction {
        account_id: account.id,
        description: values.description,
        original_value,
        original_currency,
        value_in_account_currency,
        date_str: values.date,
    };
    transaction.validate().map_err(|e| e.to_string())?;

    Ok(transaction)
}
