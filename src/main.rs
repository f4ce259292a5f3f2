use anyhow::Result;
use clap::{Parser, Subcommand};

use moneygrep::cli::{
    handle_account_command, handle_import_command, handle_transaction_command, run_menu,
    AccountCommands, ImportArgs, Prompter, TransactionCommands, LICENSE_NOTICE,
};
use moneygrep::config::{MoneyGrepPaths, Settings};
use moneygrep::storage::Database;

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "MONEYGREP_LOG";

#[derive(Parser)]
#[command(
    name = "moneygrep",
    author = "Philipp Heller",
    version,
    about = "Personal expense tracking from bank statements",
    long_about = "MoneyGrep imports bank and card statements into a local database. \
                  Every account has a folder of importers: YAML files naming a shell \
                  command per transaction field, run over each line of a statement. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, importers folder and database
    Init,

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Import a statement file into an account
    Import(ImportArgs),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show current configuration and paths
    Config,

    /// Show license and warranty information
    License,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, "warn"))
        .init();

    let paths = MoneyGrepPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing MoneyGrep at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            Database::open(paths.database_file())?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Database:  {}", paths.database_file().display());
            println!("Importers: {}", paths.importers_dir().display());
            println!();
            println!("Run 'moneygrep account create <name> --currency <code>' to add an account.");
        }
        Some(Commands::Config) => {
            println!("MoneyGrep Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Database:        {}", paths.database_file().display());
            println!("Importers:       {}", paths.importers_dir().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default currency:  {}", settings.default_currency);
            println!("  Shell:             {}", settings.shell);
            println!("  Skip duplicates:   {}", settings.skip_duplicates);
            println!("  Description width: {}", settings.description_width);
        }
        Some(Commands::License) => {
            println!("{}", LICENSE_NOTICE);
        }
        command => {
            paths.ensure_directories()?;
            let mut db = Database::open(paths.database_file())?;

            match command {
                Some(Commands::Account(cmd)) => {
                    db.with_session(|s| handle_account_command(s, &paths, &settings, cmd))?;
                }
                Some(Commands::Import(args)) => {
                    let mut prompter = Prompter::stdio();
                    db.with_session(|s| {
                        handle_import_command(&mut prompter, s, &paths, &settings, args)
                    })?;
                }
                Some(Commands::Transaction(cmd)) => {
                    db.with_session(|s| handle_transaction_command(s, &paths, cmd))?;
                }
                _ => {
                    let mut prompter = Prompter::stdio();
                    run_menu(&mut prompter, &mut db, &paths, &settings)?;
                }
            }
        }
    }

    Ok(())
}
