// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn spendlog(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.current_dir(dir).env_remove("SPENDLOG_FILE");
    cmd
}

#[test]
fn default_ledger_lives_in_working_directory() {
    let dir = tempdir().unwrap();
    spendlog(dir.path())
        .args(["add", "--description", "Coffee", "--amount", "3.20"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");
    assert!(dir.path().join("expense.json").exists());

    spendlog(dir.path())
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee").and(predicate::str::ends_with("Total: 3.20\n")));
}

#[test]
fn env_var_selects_ledger_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("books.json");
    spendlog(dir.path())
        .env("SPENDLOG_FILE", &file)
        .args(["add", "--description", "Rent", "--amount", "900"])
        .assert()
        .success();
    assert!(file.exists());
    assert!(!dir.path().join("expense.json").exists());
}

#[test]
fn missing_expense_fails_with_message() {
    let dir = tempdir().unwrap();
    spendlog(dir.path())
        .args(["delete", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense with ID 4 not found"));
}

#[test]
fn corrupt_ledger_fails_every_command() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("expense.json"), "[{\"id\": ").unwrap();
    spendlog(dir.path())
        .args(["summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid expense list"));
}

#[test]
fn bad_arguments_fail() {
    let dir = tempdir().unwrap();
    spendlog(dir.path())
        .args(["summary", "--month", "0"])
        .assert()
        .failure();
    spendlog(dir.path())
        .args(["update", "x", "--description", "a", "--amount", "1"])
        .assert()
        .failure();
    spendlog(dir.path()).assert().failure();
}

#[test]
fn about_lists_commands() {
    let dir = tempdir().unwrap();
    spendlog(dir.path())
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:").and(predicate::str::contains("summary --month")));
}
