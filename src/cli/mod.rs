//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive menu, bridging the clap argument parsing with the service
//! layer.

pub mod account;
pub mod import;
pub mod menu;
pub mod prompt;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use import::{handle_import_command, run_import_wizard, ImportArgs};
pub use menu::{run_menu, LICENSE_NOTICE};
pub use prompt::Prompter;
pub use transaction::{handle_transaction_command, TransactionCommands};
