//! End-to-end tests for the `expense` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.arg("--data-dir").arg(dir).env_remove("EXPENSE_CLI_DATA_DIR");
    cmd
}

fn add(dir: &Path, name: &str, amount: &str, category: &str) {
    expense(dir)
        .args(["add", name, amount, "-c", category])
        .assert()
        .success();
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Groceries", "45.20", "food");
    add(dir.path(), "Bus pass", "30", "2");

    expense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Transportation"))
        .stdout(predicate::str::contains("Total: $75.20 (2 expenses)"));

    assert!(dir.path().join("expenses.json").exists());
}

#[test]
fn empty_list() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .args(["add", "Coffee", "lots"])
        .assert()
        .failure();

    expense(dir.path())
        .args(["add", "Coffee", "0"])
        .assert()
        .failure();

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .args(["add", "Coffee", "3", "-c", "Snacks"])
        .assert()
        .failure();
}

#[test]
fn delete_requires_force() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Movie", "12", "entertainment");

    expense(dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm"));

    expense(dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Movie"));

    expense(dir.path())
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Movie ($12.00)"));

    expense(dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn delete_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Movie", "12", "entertainment");

    expense(dir.path())
        .args(["delete", "5", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expense at position 5"));

    expense(dir.path())
        .args(["delete", "-1", "--force"])
        .assert()
        .failure();
}

#[test]
fn budget_set_and_status() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set"));

    expense(dir.path())
        .args(["budget", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set to $100.00"));

    add(dir.path(), "Dinner", "120", "food");

    expense(dir.path())
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Over by:   $20.00"))
        .stdout(predicate::str::contains("exceeded your budget"));

    expense(dir.path())
        .args(["budget", "set", "-5"])
        .assert()
        .failure();
}

#[test]
fn search_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee beans", "14", "food");
    add(dir.path(), "Taxi", "22", "transportation");

    expense(dir.path())
        .args(["search", "COFFEE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee beans"))
        .stdout(predicate::str::contains("Taxi").not());

    expense(dir.path())
        .args(["search", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found matching 'rent'."));
}

#[test]
fn category_and_monthly_reports() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Lunch", "10", "food");
    add(dir.path(), "Doctor", "30", "healthcare");

    expense(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Healthcare"))
        .stdout(predicate::str::contains("$40.00"));

    expense(dir.path())
        .arg("monthly")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 expenses"));
}

#[test]
fn clear_requires_force() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Lunch", "10", "food");

    expense(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm"));

    expense(dir.path())
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 removed"));

    let stored = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert_eq!(stored.trim(), "[]");
}

#[test]
fn malformed_store_fails_and_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    fs::write(&path, "{ not json").unwrap();

    expense(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed store"));

    expense(dir.path())
        .args(["add", "Lunch", "10"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn export_csv() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Dinner, with friends", "42.1", "food");
    let out = dir.path().join("out.csv");

    expense(dir.path())
        .arg("export")
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,amount,category,date"));
    assert!(lines
        .next()
        .unwrap()
        .starts_with("\"Dinner, with friends\",42.10,Food,"));
}

#[test]
fn history_records_changes() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Lunch", "10", "food");
    expense(dir.path())
        .args(["budget", "set", "50"])
        .assert()
        .success();

    expense(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"));

    let written = fs::read_to_string(dir.path().join("settings.json")).unwrap();
    assert!(written.contains("\"date_format\": \"%Y-%m-%d %H:%M:%S\""));
}

#[test]
fn invalid_date_format_is_reported_not_a_crash() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{"date_format": "%Q"}"#).unwrap();

    expense(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn amount_above_maximum_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["add", "Yacht", "90000000000000000"])
        .assert()
        .failure();

    expense(dir.path())
        .args(["add", "Yacht", "10000000000000"])
        .assert()
        .success();
}

#[test]
fn menu_runs_from_stdin() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .write_stdin("1\nTea\n2.5\n1\n2\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense 'Tea' added successfully!"))
        .stdout(predicate::str::contains("Goodbye!"));

    expense(dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Tea"));
}
