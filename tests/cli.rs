//! End-to-end tests for the `expenses` binary.
//!
//! Each test points the binary at its own temporary data directory through
//! `EXPENSE_TRACKER_DATA_DIR`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn init_sample(dir: &TempDir) {
    expenses(dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample user 'demo' created"));
}

#[test]
fn init_without_sample_creates_no_users() {
    let dir = TempDir::new().unwrap();

    expenses(&dir).arg("init").assert().success();
    expenses(&dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));
}

#[test]
fn sample_is_not_added_twice() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    expenses(&dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample data was not added"));

    expenses(&dir)
        .args(["expense", "list", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 expense(s)"));
}

#[test]
fn sample_terminal_report() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    expenses(&dir)
        .args(["analytics", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent:     $286.24"))
        .stdout(predicate::str::contains("68.56%"))
        .stdout(predicate::str::contains("31.44%"))
        .stdout(predicate::str::contains("Your Food spending is 68.56% of total"))
        .stdout(predicate::str::contains("Meal planning could help"))
        .stdout(predicate::str::contains("Great job!"))
        .stdout(predicate::str::contains("exceeded").not());
}

#[test]
fn sample_json_report() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    let output = expenses(&dir)
        .args(["analytics", "demo", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let analytics = &value["analytics"];
    assert_eq!(value["username"], "demo");
    assert_eq!(analytics["category_spending"]["Food"], 196.25);
    assert_eq!(analytics["category_spending"]["Utilities"], 89.99);
    assert_eq!(analytics["category_percentages"]["Food"], 68.56);
    assert_eq!(analytics["progress"]["percentage_of_limit"], 57.25);
    assert_eq!(analytics["summary"]["count"], 3);
}

#[test]
fn sample_yaml_report() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    expenses(&dir)
        .args(["analytics", "demo", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Spending analytics for demo"))
        .stdout(predicate::str::contains("username: demo"))
        .stdout(predicate::str::contains("Food: 196.25"));
}

#[test]
fn csv_report_to_file() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);
    let out = dir.path().join("report.csv");

    expenses(&dir)
        .args(["analytics", "demo", "--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("written to"));

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("section,key,value,percentage"));
    assert!(contents.contains("category,Food,196.25,68.56"));
    assert!(contents.contains("category,Utilities,89.99,31.44"));
}

#[test]
fn user_lifecycle_with_overspending() {
    let dir = TempDir::new().unwrap();
    expenses(&dir).arg("init").assert().success();

    expenses(&dir)
        .args(["user", "add", "Alice", "--first-name", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user: Alice"));

    expenses(&dir)
        .args(["analytics", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget not configured."))
        .stdout(predicate::str::contains("Set up your monthly income"));

    expenses(&dir)
        .args(["user", "budget", "alice", "--income", "1000", "--limit", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit $500.00"));

    expenses(&dir)
        .args(["expense", "add", "alice", "Rent share", "900", "Housing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense exp-"));

    expenses(&dir)
        .args(["analytics", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("over 80% of your income"))
        .stdout(predicate::str::contains("exceeded your monthly expense limit"))
        .stdout(predicate::str::contains("(over budget)"));
}

#[test]
fn delete_expense_by_short_id() {
    let dir = TempDir::new().unwrap();
    expenses(&dir).args(["user", "add", "bob"]).assert().success();

    let output = expenses(&dir)
        .args(["expense", "add", "bob", "Cinema", "12.50", "Entertainment"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .split_whitespace()
        .find(|w| w.starts_with("exp-"))
        .unwrap()
        .trim_end_matches(':')
        .to_string();

    expenses(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    expenses(&dir)
        .args(["expense", "list", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    expenses(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    expenses(&dir).args(["user", "add", "carol"]).assert().success();

    expenses(&dir)
        .args(["user", "add", "CAROL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    expenses(&dir)
        .args(["expense", "add", "carol", "Nothing", "0", "Misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    expenses(&dir)
        .args(["expense", "add", "carol", "Lunch", "10", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn unknown_user_fails() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["analytics", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found: ghost"));
}
