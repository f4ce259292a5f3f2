//! Interactive menu
//!
//! Shown when `moneygrep` runs without a subcommand. Every action runs in its
//! own session; a failed action is reported and the menu is shown again.

use std::io::{BufRead, Write};

use super::import::{pick, run_import_wizard};
use super::prompt::Prompter;
use crate::config::{MoneyGrepPaths, Settings};
use crate::display::format_account_choices;
use crate::error::MoneyGrepResult;
use crate::models::{Account, Currency};
use crate::services::AccountService;
use crate::storage::{Database, Session};

const BANNER: &str = r#"
  __  __                       _____
 |  \/  |                     / ____|
 | \  / | ___  _ __   ___ _ _| |  __ _ __ ___ _ __
 | |\/| |/ _ \| '_ \ / _ \ ' \ | |_ | '__/ _ \ '_ \
 | |  | | (_) | | | |  __/ | | |__| | | |  __/ |_) |
 |_|  |_|\___/|_| |_|\___|_|  \_____|_|  \___| .__/
                                            | |
                                            |_|"#;

/// Short notice shown on every start
const STARTUP_NOTICE: &str = "Copyright (C) 2026 Philipp Heller\n\
MoneyGrep comes with ABSOLUTELY NO WARRANTY. This is free software.\n\
Type '9' for license details.";

/// License and warranty text
pub const LICENSE_NOTICE: &str = "This program comes with ABSOLUTELY NO WARRANTY.\n\
This is free software, and you are welcome to redistribute it\n\
under certain conditions (GNU GPL v3).\n\
\n\
For the full license, see the LICENSE.md file in the root directory.";

/// Run the menu until the user exits or the input ends
pub fn run_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    db: &mut Database,
    paths: &MoneyGrepPaths,
    settings: &Settings,
) -> MoneyGrepResult<()> {
    loop {
        prompter.line(BANNER)?;
        prompter.line(&format!(
            "{:>24}MoneyGrep v{}",
            "",
            env!("CARGO_PKG_VERSION")
        ))?;
        prompter.line(STARTUP_NOTICE)?;
        prompter.line(&"-".repeat(30))?;
        prompter.line("1. Select Account / Import")?;
        prompter.line("2. Create New Account")?;
        prompter.line("9. Show License & Warranty")?;
        prompter.line("0. Exit")?;

        let choice = match prompter.ask("Choice")? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        let outcome = match choice.as_str() {
            "1" => db.with_session(|s| {
                match select_account(prompter, s)? {
                    Some(account) => run_import_wizard(prompter, s, paths, settings, &account),
                    None => Ok(()),
                }
            }),
            "2" => db.with_session(|s| create_account(prompter, s, paths, settings)),
            "9" => show_license(prompter),
            "0" => return Ok(()),
            _ => prompter.line("Invalid choice"),
        };

        if let Err(e) = outcome {
            log::debug!("Menu action failed: {:?}", e);
            prompter.line(&format!("Error: {}", e))?;
        }
    }
}

fn print_header<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    text: &str,
) -> MoneyGrepResult<()> {
    prompter.line(&format!("\n--- {} ---", text))
}

/// Let the user pick an account by number; `c` cancels
fn select_account<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &Session<'_>,
) -> MoneyGrepResult<Option<Account>> {
    let accounts = session.accounts().get_all()?;
    if accounts.is_empty() {
        prompter.line("No accounts found.")?;
        return Ok(None);
    }

    prompter.say(&format_account_choices(&accounts))?;

    let choice = match prompter.ask("Enter number (or 'c' to cancel)")? {
        Some(choice) if !choice.eq_ignore_ascii_case("c") => choice,
        _ => return Ok(None),
    };

    match pick(&accounts, &choice) {
        Some(account) => Ok(Some(account.clone())),
        None => {
            prompter.line("Invalid selection.")?;
            Ok(None)
        }
    }
}

fn create_account<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &Session<'_>,
    paths: &MoneyGrepPaths,
    settings: &Settings,
) -> MoneyGrepResult<()> {
    print_header(prompter, "Create New Account")?;

    let name = match prompter.ask("Account Name")? {
        Some(name) => name,
        None => return Ok(()),
    };
    let code = match prompter.ask(&format!("Currency ({})", Currency::codes()))? {
        Some(code) => code,
        None => return Ok(()),
    };

    let currency = if code.is_empty() {
        settings.default_currency
    } else {
        match Currency::parse(&code) {
            Some(currency) => currency,
            None => return prompter.line("Invalid currency code."),
        }
    };

    let account = AccountService::new(session, paths).create(&name, currency)?;

    prompter.line(&format!(
        "Account '{}' created and importer folder initialized.",
        account.name
    ))
}

fn show_license<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> MoneyGrepResult<()> {
    print_header(prompter, "Legal Information")?;
    prompter.line(LICENSE_NOTICE)?;
    prompter.ask("\nPress Enter to return to menu")?;
    Ok(())
}
