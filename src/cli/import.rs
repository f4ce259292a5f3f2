//! Import CLI flows
//!
//! The interactive wizard used by the menu, the `import` subcommand, and the
//! review step both share.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use super::prompt::Prompter;
use crate::config::{MoneyGrepPaths, Settings};
use crate::display::{format_review_table, format_row_issues};
use crate::error::{MoneyGrepError, MoneyGrepResult};
use crate::import::{ImporterConfig, ShellTransform};
use crate::models::Account;
use crate::services::{AccountService, ImportPreview, ImportResult, ImportService};
use crate::storage::Session;

/// Arguments of the `import` subcommand
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the statement file
    pub file: PathBuf,
    /// Target account name or ID
    #[arg(short, long)]
    pub account: String,
    /// Importer file name in the account's folder, or a path to one
    #[arg(short, long)]
    pub importer: Option<String>,
    /// Import without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Handle the `import` subcommand
pub fn handle_import_command<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &Session<'_>,
    paths: &MoneyGrepPaths,
    settings: &Settings,
    args: ImportArgs,
) -> MoneyGrepResult<()> {
    let account = AccountService::new(session, paths).require(&args.account)?;
    let importer = resolve_importer(paths, &account, args.importer.as_deref())?;
    let config = ImporterConfig::load(&importer)?;
    log::info!("Using importer {}", importer.display());

    let transform = ShellTransform::new(settings.shell.clone());
    let service = ImportService::new(session, &transform);
    let preview = service.preview_file(&account, &config, &args.file)?;

    if let Some(result) = review_and_commit(prompter, &service, &preview, settings, args.yes)? {
        prompter.line(&format!(
            "Imported {} transaction(s) into {}.",
            result.imported, account.name
        ))?;
    }
    Ok(())
}

/// Pick the importer file for a non-interactive import
///
/// An explicit choice is looked up in the account's folder first and then
/// taken as a path. Without one, the account's only importer is used.
pub fn resolve_importer(
    paths: &MoneyGrepPaths,
    account: &Account,
    choice: Option<&str>,
) -> MoneyGrepResult<PathBuf> {
    if let Some(choice) = choice {
        let in_folder = paths.account_importers_dir(&account.name).join(choice);
        if in_folder.is_file() {
            return Ok(in_folder);
        }
        let as_path = PathBuf::from(choice);
        if as_path.is_file() {
            return Ok(as_path);
        }
        return Err(MoneyGrepError::importer_not_found(choice));
    }

    let mut importers = ImportService::list_importers(paths, account)?;
    match importers.len() {
        0 => Err(MoneyGrepError::importer_not_found(format!(
            "no importer configured for account '{}'",
            account.name
        ))),
        1 => Ok(importers.remove(0)),
        _ => {
            let names: Vec<_> = importers.iter().map(|p| file_label(p)).collect();
            Err(MoneyGrepError::Validation(format!(
                "Account '{}' has several importers ({}); choose one with --importer",
                account.name,
                names.join(", ")
            )))
        }
    }
}

/// Interactive import for one account: choose an importer and a statement,
/// then review and confirm
pub fn run_import_wizard<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &Session<'_>,
    paths: &MoneyGrepPaths,
    settings: &Settings,
    account: &Account,
) -> MoneyGrepResult<()> {
    let importers = match ImportService::list_importers(paths, account) {
        Ok(importers) => importers,
        Err(MoneyGrepError::Import(message)) => return prompter.line(&message),
        Err(e) => return Err(e),
    };

    if importers.is_empty() {
        return prompter.line("No .yaml configuration files found for this account.");
    }

    prompter.line(&format!("\nAvailable Importers for {}:", account.name))?;
    for (idx, path) in importers.iter().enumerate() {
        prompter.line(&format!("{}. {}", idx + 1, file_label(path)))?;
    }

    let config_path = match prompter.ask("Select importer")? {
        Some(choice) => match pick(&importers, &choice) {
            Some(path) => path,
            None => return prompter.line("Invalid selection."),
        },
        None => return Ok(()),
    };

    let csv_path = match prompter.ask("Enter full path to CSV file")? {
        Some(input) => PathBuf::from(input),
        None => return Ok(()),
    };
    if !csv_path.is_file() {
        return prompter.line("File not found.");
    }

    let config = ImporterConfig::load(config_path)?;

    prompter.line("\nProcessing file...")?;
    let transform = ShellTransform::new(settings.shell.clone());
    let service = ImportService::new(session, &transform);
    let preview = service.preview_file(account, &config, &csv_path)?;

    review_and_commit(prompter, &service, &preview, settings, false)?;
    Ok(())
}

/// Show the preview and insert its candidates once confirmed
///
/// Only `y` or `Y` confirms. Returns `None` when nothing was imported.
pub fn review_and_commit<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    service: &ImportService<'_>,
    preview: &ImportPreview,
    settings: &Settings,
    assume_yes: bool,
) -> MoneyGrepResult<Option<ImportResult>> {
    prompter.say(&format_row_issues(&preview.issues))?;
    prompter.line("\n--- Review Transactions ---")?;
    prompter.say(&format_review_table(
        preview,
        settings.description_width,
        settings.skip_duplicates,
    ))?;

    if settings.skip_duplicates && preview.duplicate_count() > 0 {
        prompter.line(&format!(
            "{} transaction(s) already stored will be skipped.",
            preview.duplicate_count()
        ))?;
    }

    let count = preview.importable(settings.skip_duplicates).count();
    if count == 0 {
        prompter.line("No new transactions to import.")?;
        return Ok(None);
    }

    let confirmed = assume_yes || {
        let answer = prompter.ask(&format!("\nImport {} transactions? (y/n)", count))?;
        matches!(answer.as_deref(), Some("y") | Some("Y"))
    };

    if !confirmed {
        prompter.line("Import cancelled.")?;
        return Ok(None);
    }

    let result = service.commit(preview, settings.skip_duplicates)?;
    prompter.line("Import successful!")?;
    Ok(Some(result))
}

/// Item for a 1-based menu choice
pub(crate) fn pick<'t, T>(items: &'t [T], choice: &str) -> Option<&'t T> {
    let index = choice.trim().parse::<usize>().ok()?.checked_sub(1)?;
    items.get(index)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money};
    use crate::storage::Database;
    use tempfile::TempDir;

    const IMPORTER: &str = r#"
header_lines: 1
transformations:
  description: "cut -d, -f2"
  original_value: "cut -d, -f3"
  original_currency: "cut -d, -f4"
  value_in_account_currency: "cut -d, -f5"
  date: "cut -d, -f1"
"#;

    struct Fixture {
        temp_dir: TempDir,
        paths: MoneyGrepPaths,
        db: Database,
        account: Account,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyGrepPaths::with_base_dir(temp_dir.path().join("home"));
        paths.ensure_directories().unwrap();
        let mut db = Database::open_in_memory().unwrap();
        let account = db
            .with_session(|s| AccountService::new(s, &paths).create("Checking", Currency::Usd))
            .unwrap();
        Fixture {
            temp_dir,
            paths,
            db,
            account,
        }
    }

    fn write_statement(dir: &Path) -> PathBuf {
        let path = dir.join("statement.csv");
        std::fs::write(
            &path,
            "date,text,amount,currency,booked\n\
             2026-03-01,Bakery,-3.20,USD,-3.20\n\
             2026-03-02,Museum,-15,EUR,-16.35\n",
        )
        .unwrap();
        path
    }

    fn run_wizard(fx: &mut Fixture, input: &str) -> String {
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
        let settings = Settings::default();
        let (paths, account) = (&fx.paths, &fx.account);
        fx.db
            .with_session(|s| run_import_wizard(&mut prompter, s, paths, &settings, account))
            .unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    fn stored(fx: &mut Fixture) -> usize {
        let id = fx.account.id;
        fx.db
            .with_session(|s| s.transactions().count_by_account(id))
            .unwrap()
    }

    #[test]
    fn test_pick() {
        let items = ["a", "b"];
        assert_eq!(pick(&items, "2"), Some(&"b"));
        assert_eq!(pick(&items, "0"), None);
        assert_eq!(pick(&items, "3"), None);
        assert_eq!(pick(&items, "x"), None);
    }

    #[test]
    fn test_wizard_without_importers() {
        let mut fx = fixture();
        let output = run_wizard(&mut fx, "");
        assert!(output.contains("No .yaml configuration files found for this account."));
    }

    #[test]
    fn test_wizard_missing_folder() {
        let mut fx = fixture();
        std::fs::remove_dir_all(fx.paths.account_importers_dir("Checking")).unwrap();
        let output = run_wizard(&mut fx, "");
        assert!(output.contains("does not exist."));
    }

    #[test]
    fn test_wizard_missing_statement() {
        let mut fx = fixture();
        let dir = fx.paths.account_importers_dir("Checking");
        std::fs::write(dir.join("bank.yaml"), IMPORTER).unwrap();

        let output = run_wizard(&mut fx, "1\n/nonexistent/statement.csv\n");
        assert!(output.contains("1. bank.yaml"));
        assert!(output.contains("File not found."));
    }

    #[cfg(unix)]
    #[test]
    fn test_wizard_imports_after_confirmation() {
        let mut fx = fixture();
        let dir = fx.paths.account_importers_dir("Checking");
        std::fs::write(dir.join("bank.yaml"), IMPORTER).unwrap();
        let statement = write_statement(fx.temp_dir.path());

        let input = format!("1\n{}\ny\n", statement.display());
        let output = run_wizard(&mut fx, &input);

        assert!(output.contains("Processing file..."));
        assert!(output.contains("Bakery"));
        assert!(output.contains("Import 2 transactions? (y/n)"));
        assert!(output.contains("Import successful!"));
        assert_eq!(stored(&mut fx), 2);

        let id = fx.account.id;
        let balance = fx
            .db
            .with_session(|s| s.transactions().balance_by_account(id))
            .unwrap();
        assert_eq!(balance, Money::from_cents(-1955));
    }

    #[cfg(unix)]
    #[test]
    fn test_wizard_cancel_keeps_store_empty() {
        let mut fx = fixture();
        let dir = fx.paths.account_importers_dir("Checking");
        std::fs::write(dir.join("bank.yaml"), IMPORTER).unwrap();
        let statement = write_statement(fx.temp_dir.path());

        let input = format!("1\n{}\nno\n", statement.display());
        let output = run_wizard(&mut fx, &input);

        assert!(output.contains("Import cancelled."));
        assert_eq!(stored(&mut fx), 0);
    }

    #[test]
    fn test_resolve_importer() {
        let fx = fixture();
        let dir = fx.paths.account_importers_dir("Checking");

        let err = resolve_importer(&fx.paths, &fx.account, None).unwrap_err();
        assert!(err.is_not_found());

        std::fs::write(dir.join("bank.yaml"), IMPORTER).unwrap();
        assert_eq!(
            resolve_importer(&fx.paths, &fx.account, None).unwrap(),
            dir.join("bank.yaml")
        );

        std::fs::write(dir.join("card.yml"), IMPORTER).unwrap();
        let err = resolve_importer(&fx.paths, &fx.account, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            resolve_importer(&fx.paths, &fx.account, Some("card.yml")).unwrap(),
            dir.join("card.yml")
        );
        assert!(resolve_importer(&fx.paths, &fx.account, Some("other.yaml"))
            .unwrap_err()
            .is_not_found());
    }
}
