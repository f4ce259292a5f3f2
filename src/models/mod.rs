//! Core data models for MoneyGrep
//!
//! Accounts, transactions and the value types they are built from.

pub mod account;
pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, NewAccount};
pub use currency::Currency;
pub use ids::{AccountId, TransactionId};
pub use money::Money;
pub use transaction::{NewTransaction, Transaction};
