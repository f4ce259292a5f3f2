//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::{MoneyGrepPaths, Settings};
use crate::display::format_account_list;
use crate::error::{MoneyGrepError, MoneyGrepResult};
use crate::models::Currency;
use crate::services::AccountService;
use crate::storage::Session;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account and its importer folder
    Create {
        /// Account name
        name: String,
        /// Currency code (USD, EUR, CHF, GBP); defaults to the configured one
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// List all accounts with balances
    List,
}

/// Handle an account command
pub fn handle_account_command(
    session: &Session<'_>,
    paths: &MoneyGrepPaths,
    settings: &Settings,
    cmd: AccountCommands,
) -> MoneyGrepResult<()> {
    let service = AccountService::new(session, paths);

    match cmd {
        AccountCommands::Create { name, currency } => {
            let currency = match currency {
                Some(code) => code
                    .parse::<Currency>()
                    .map_err(|e| MoneyGrepError::Validation(e.to_string()))?,
                None => settings.default_currency,
            };

            let account = service.create(&name, currency)?;

            println!("Created account: {}", account.name);
            println!("  Currency: {}", account.currency);
            println!("  ID: {}", account.id);
            println!(
                "  Importers: {}",
                paths.account_importers_dir(&account.name).display()
            );
        }

        AccountCommands::List => {
            let summaries = service.list_with_balances()?;
            print!("{}", format_account_list(&summaries));
        }
    }

    Ok(())
}
