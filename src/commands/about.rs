// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;

const COMMANDS: &[(&str, &str)] = &[
    ("add", "Add an expense: add --description <text> --amount <number>"),
    ("update", "Update an expense: update <id> --description <text> --amount <number>"),
    ("delete", "Delete an expense: delete <id>"),
    ("summary", "View all expenses and their total"),
    ("summary --month", "View expenses for one month (1-12) of the current year"),
    ("export", "Write the ledger to a file: export --format csv|json --out <path>"),
];

pub fn handle() -> Result<()> {
    write_about(std::io::stdout().lock())
}

pub fn write_about<W: Write>(mut out: W) -> Result<()> {
    writeln!(out, "\nAvailable commands:")?;
    for (name, help) in COMMANDS {
        writeln!(out, "{:<20}{}", name, help)?;
    }
    writeln!(out, "\nUse --file <path> or SPENDLOG_FILE to pick the ledger file.")?;
    Ok(())
}
