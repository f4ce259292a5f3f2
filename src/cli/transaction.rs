//! Transaction CLI commands
//!
//! Listing and CSV export of an account's transactions.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::MoneyGrepPaths;
use crate::display::format_transaction_register;
use crate::error::{MoneyGrepError, MoneyGrepResult};
use crate::export::export_transactions_csv;
use crate::services::{AccountService, TransactionService};
use crate::storage::Session;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions, newest first
    List {
        /// Account name or ID
        #[arg(short, long)]
        account: String,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Export transactions to CSV
    Export {
        /// Account name or ID
        #[arg(short, long)]
        account: String,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    session: &Session<'_>,
    paths: &MoneyGrepPaths,
    cmd: TransactionCommands,
) -> MoneyGrepResult<()> {
    let accounts = AccountService::new(session, paths);
    let service = TransactionService::new(session);

    match cmd {
        TransactionCommands::List { account, limit } => {
            let account = accounts.require(&account)?;
            let transactions = service.list(account.id, Some(limit))?;
            print!("{}", format_transaction_register(&transactions, &account));
        }

        TransactionCommands::Export { account, output } => {
            let account = accounts.require(&account)?;
            let transactions = service.list_chronological(account.id)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        MoneyGrepError::Export(format!(
                            "Failed to create {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let count =
                        export_transactions_csv(&account, &transactions, BufWriter::new(file))?;
                    println!("Exported {} transaction(s) to {}", count, path.display());
                }
                None => {
                    export_transactions_csv(&account, &transactions, io::stdout().lock())?;
                }
            }
        }
    }

    Ok(())
}
