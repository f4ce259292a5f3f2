use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moneygrep(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moneygrep").unwrap();
    cmd.env("MONEYGREP_HOME", home).env_remove("MONEYGREP_LOG");
    cmd
}

fn home_with_account(currency: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    moneygrep(home.path()).arg("init").assert().success();
    moneygrep(home.path())
        .args(["account", "create", "Checking", "--currency", currency])
        .assert()
        .success();
    home
}

#[cfg(unix)]
fn write_importer_and_statement(home: &Path) -> PathBuf {
    std::fs::write(
        home.join("importers").join("Checking").join("bank.yaml"),
        r#"header_lines: 1
transformations:
  description: "cut -d';' -f2"
  original_value: "cut -d';' -f3"
  original_currency: "cut -d';' -f4"
  value_in_account_currency: "cut -d';' -f5"
  date: "cut -d';' -f1"
"#,
    )
    .unwrap();

    let statement = home.join("statement.csv");
    std::fs::write(
        &statement,
        "Date;Text;Amount;Currency;Booked\n\
         02.03.2026;Coop Pronto;-12.35;CHF;-12.35\n\
         \n\
         03.03.2026;Hotel Lyon;-80.00;EUR;-77.60\n\
         04.03.2026;;-1.00;CHF;-1.00\n",
    )
    .unwrap();
    statement
}

#[test]
fn init_creates_layout() {
    let home = TempDir::new().unwrap();

    moneygrep(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(home.path().join("expense.db").is_file());
    assert!(home.path().join("config.json").is_file());
    assert!(home.path().join("importers").is_dir());
}

#[test]
fn account_create_and_list() {
    let home = home_with_account("chf");

    assert!(home.path().join("importers").join("Checking").is_dir());

    moneygrep(home.path())
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking").and(predicate::str::contains("CHF")));
}

#[test]
fn account_create_rejects_unknown_currency() {
    let home = TempDir::new().unwrap();

    moneygrep(home.path())
        .args(["account", "create", "Travel", "--currency", "JPY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid currency code"));
}

#[test]
fn account_create_rejects_duplicate_name() {
    let home = home_with_account("USD");

    moneygrep(home.path())
        .args(["account", "create", "checking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn unknown_account_is_an_error() {
    let home = TempDir::new().unwrap();

    moneygrep(home.path())
        .args(["transaction", "list", "--account", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: Nope"));
}

#[cfg(unix)]
#[test]
fn import_then_list_and_export() {
    let home = home_with_account("CHF");
    let statement = write_importer_and_statement(home.path());

    moneygrep(home.path())
        .arg("import")
        .arg(&statement)
        .args(["--account", "Checking", "--yes"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Skipping line 5: Transformation returned empty values.")
                .and(predicate::str::contains("Coop Pronto"))
                .and(predicate::str::contains("Import successful!"))
                .and(predicate::str::contains("Imported 2 transaction(s) into Checking.")),
        );

    moneygrep(home.path())
        .args(["transaction", "list", "--account", "Checking"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hotel Lyon")
                .and(predicate::str::contains("-77.60"))
                .and(predicate::str::contains("(-80.00 EUR)")),
        );

    moneygrep(home.path())
        .args(["transaction", "export", "--account", "Checking"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("ID,Date,Account,Description")
                .and(predicate::str::contains("02.03.2026,Checking,Coop Pronto,-12.35,CHF")),
        );

    moneygrep(home.path())
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-89.95"));
}

#[cfg(unix)]
#[test]
fn reimport_skips_stored_transactions() {
    let home = home_with_account("CHF");
    let statement = write_importer_and_statement(home.path());

    for _ in 0..2 {
        moneygrep(home.path())
            .arg("import")
            .arg(&statement)
            .args(["--account", "Checking", "--yes"])
            .assert()
            .success();
    }

    moneygrep(home.path())
        .arg("import")
        .arg(&statement)
        .args(["--account", "Checking", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No new transactions to import."));
}

#[cfg(unix)]
#[test]
fn import_declined_on_stdin() {
    let home = home_with_account("CHF");
    let statement = write_importer_and_statement(home.path());

    moneygrep(home.path())
        .arg("import")
        .arg(&statement)
        .args(["--account", "Checking"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import cancelled."));

    moneygrep(home.path())
        .args(["transaction", "list", "--account", "Checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn license_notice() {
    let home = TempDir::new().unwrap();

    moneygrep(home.path())
        .arg("license")
        .assert()
        .success()
        .stdout(predicate::str::contains("GNU GPL v3"));
}

#[test]
fn menu_exits_on_zero() {
    let home = TempDir::new().unwrap();

    moneygrep(home.path())
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. Select Account / Import")
                .and(predicate::str::contains("0. Exit")),
        );
}

#[test]
fn menu_creates_account() {
    let home = TempDir::new().unwrap();

    moneygrep(home.path())
        .write_stdin("2\nSavings\ngbp\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Account 'Savings' created and importer folder initialized.",
        ));

    moneygrep(home.path())
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings").and(predicate::str::contains("GBP")));
}
