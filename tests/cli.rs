//! End-to-end tests for the `expense` binary

use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd.env_remove("EXPENSE_TRACKER_DATA_DIR");
    cmd
}

fn current_month() -> u32 {
    Local::now().date_naive().month()
}

fn read_json(dir: &TempDir, name: &str) -> serde_json::Value {
    let contents = fs::read_to_string(dir.path().join(name)).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn add_then_list_shows_expense() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-d", "Lunch", "-a", "12.50", "-c", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully (ID: 1)"));

    expense(&dir)
        .args(["add", "--description", "Bus", "--amount", "2.75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("12.50"))
        .stdout(predicate::str::contains("Uncategorized"));

    let stored = read_json(&dir, "expenses.json");
    assert_eq!(stored.as_array().unwrap().len(), 2);
    assert_eq!(stored[0]["amount"], serde_json::json!(12.5));
    assert_eq!(stored[0]["category"], "Food");
}

#[test]
fn add_rejects_invalid_amount() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-d", "Lunch", "-a", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number."));

    expense(&dir)
        .args(["add", "-d", "Lunch", "-a", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number."));

    expense(&dir)
        .args(["add", "-d", "Lottery", "-a", "1e17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number."));

    let stored = read_json(&dir, "expenses.json");
    assert!(stored.as_array().unwrap().is_empty());
}

#[test]
fn add_rejects_blank_description() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-d", "   ", "-a", "5"])
        .assert()
        .failure();
}

#[test]
fn missing_command_or_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();

    expense(&dir).assert().failure().code(2);

    expense(&dir)
        .args(["add", "-d", "Lunch"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--amount"));
}

#[test]
fn update_and_delete_unknown_id_fail() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["update", "-i", "9", "-d", "x", "-a", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense with ID 9 not found."));

    expense(&dir)
        .args(["delete", "--id", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense with ID 9 not found."));
}

#[test]
fn update_changes_description_amount_and_category() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-d", "Coffee", "-a", "3"])
        .assert()
        .success();

    expense(&dir)
        .args(["update", "-i", "1", "-d", "Espresso", "-a", "4.25", "-c", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated successfully (ID: 1)"));

    let stored = read_json(&dir, "expenses.json");
    assert_eq!(stored[0]["description"], "Espresso");
    assert_eq!(stored[0]["amount"], serde_json::json!(4.25));
    assert_eq!(stored[0]["category"], "Drinks");
}

#[test]
fn update_amount_alone_is_ignored_with_note() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-d", "Coffee", "-a", "3"])
        .assert()
        .success();

    expense(&dir)
        .args(["update", "-i", "1", "-a", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--amount is only applied"));

    let stored = read_json(&dir, "expenses.json");
    assert_eq!(stored[0]["amount"], serde_json::json!(3));
}

#[test]
fn delete_removes_expense_and_ids_continue() {
    let dir = TempDir::new().unwrap();

    for description in ["One", "Two"] {
        expense(&dir)
            .args(["add", "-d", description, "-a", "1"])
            .assert()
            .success();
    }

    expense(&dir)
        .args(["delete", "-i", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully (ID: 2)"));

    expense(&dir)
        .args(["add", "-d", "Three", "-a", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));

    let stored = read_json(&dir, "expenses.json");
    assert_eq!(stored.as_array().unwrap().len(), 2);
}

#[test]
fn list_filters_by_category_and_month() {
    let dir = TempDir::new().unwrap();
    let month = current_month();
    let other = month % 12 + 1;

    expense(&dir)
        .args(["add", "-d", "Groceries", "-a", "40", "-c", "Food"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "-d", "Cinema", "-a", "12", "-c", "Fun"])
        .assert()
        .success();

    expense(&dir)
        .args(["list", "-c", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Cinema").not());

    expense(&dir)
        .args(["list", "-m", &month.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinema"));

    expense(&dir)
        .args(["list", "-m", &other.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    expense(&dir)
        .args(["list", "-m", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Month must be between 1 and 12."));
}

#[test]
fn summary_totals_by_category() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-d", "Lunch", "-a", "10.25", "-c", "Food"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "-d", "Dinner", "-a", "20", "-c", "Food"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "-d", "Taxi", "-a", "5", "-c", "Travel"])
        .assert()
        .success();

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $35.25"))
        .stdout(predicate::str::contains("- Food: $30.25"))
        .stdout(predicate::str::contains("- Travel: $5.00"));
}

#[test]
fn set_budget_validates_month_and_amount() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["set-budget", "-m", "3", "-a", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Budget set successfully for month 3: $500.00",
        ));

    expense(&dir)
        .args(["set-budget", "-m", "13", "-a", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Month must be between 1 and 12."));

    expense(&dir)
        .args(["set-budget", "-m", "4", "-a", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number."));

    let stored = read_json(&dir, "budget.json");
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["month"], 3);
    assert_eq!(stored[0]["amount"], serde_json::json!(500));
}

#[test]
fn adding_over_budget_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let month = current_month().to_string();

    expense(&dir)
        .args(["set-budget", "-m", &month, "-a", "100"])
        .assert()
        .success();

    expense(&dir)
        .args(["add", "-d", "Groceries", "-a", "95"])
        .assert()
        .success()
        .stderr(predicate::str::contains("close to exceeding your budget"));

    expense(&dir)
        .args(["add", "-d", "Snacks", "-a", "6"])
        .assert()
        .success()
        .stderr(predicate::str::contains("exceeded your budget"))
        .stderr(predicate::str::contains("Over budget by: $1.00"));
}

#[test]
fn check_budget_reports_status() {
    let dir = TempDir::new().unwrap();
    let month = current_month();

    expense(&dir)
        .arg("check-budget")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "No budget set for month {}.",
            month
        )));

    expense(&dir)
        .args(["set-budget", "-m", &month.to_string(), "-a", "200"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "-d", "Rent share", "-a", "50"])
        .assert()
        .success();

    expense(&dir)
        .arg("check-budget")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Budget for month {}: $200.00",
            month
        )))
        .stdout(predicate::str::contains("Spent this month: $50.00"))
        .stdout(predicate::str::contains("Remaining budget: $150.00"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");

    expense(&dir)
        .args(["export", "-f"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expenses to export."));
    assert!(!out.exists());

    expense(&dir)
        .args(["add", "-d", "Lunch, with \"friends\"", "-a", "12.5", "-c", "Food"])
        .assert()
        .success();

    expense(&dir)
        .args(["export", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses exported to"));

    let csv = fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("ID,Date,Description,Amount,Category"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("1,"));
    assert!(row.ends_with(",\"Lunch, with \"\"friends\"\"\",12.50,Food"));
}

#[test]
fn malformed_data_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("expenses.json"), "{ not json").unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    expense(&dir)
        .args(["add", "-d", "Fresh start", "-a", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 1)"));
}

#[test]
fn history_shows_recent_changes() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded yet."));

    expense(&dir)
        .args(["add", "-d", "Coffee", "-a", "3"])
        .assert()
        .success();
    expense(&dir)
        .args(["delete", "-i", "1"])
        .assert()
        .success();

    expense(&dir)
        .args(["history", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));
}

#[test]
fn config_lists_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("Near-budget threshold: 90%"));
}

#[test]
fn data_dir_can_come_from_environment() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("expense")
        .unwrap()
        .env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .args(["add", "-d", "Snack", "-a", "2"])
        .assert()
        .success();

    assert!(dir.path().join("expenses.json").exists());
}
