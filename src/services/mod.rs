//! Service layer for MoneyGrep
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and the import pipeline. Services
//! borrow a [`Session`](crate::storage::Session), so everything they do is
//! committed or rolled back together.

pub mod account;
pub mod import;
pub mod transaction;

pub use account::{AccountService, AccountSummary};
pub use import::{
    CandidateStatus, ImportCandidate, ImportPreview, ImportResult, ImportService, RowIssue,
    RowIssueKind,
};
pub use transaction::TransactionService;
