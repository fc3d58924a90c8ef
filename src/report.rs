// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::LedgerError;
use crate::models::Expense;
use crate::utils::fmt_amount;

const RULE_WIDTH: usize = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    /// Month number 1-12, within the reporting year.
    Month(u32),
}

impl Filter {
    /// Parses the record date even when no month is selected, so a bad date
    /// always fails the report.
    pub fn admits(&self, expense: &Expense, year: i32) -> Result<bool, LedgerError> {
        let date = expense.parsed_date()?;
        Ok(match self {
            Filter::All => true,
            Filter::Month(m) => date.month() == *m && date.year() == year,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub rows: Vec<Expense>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
}

/// Writes the fixed-width report row by row and returns the total. Rows
/// already written stay written if a later record has a bad date.
pub fn summarize<W: Write>(
    records: &[Expense],
    filter: Filter,
    year: i32,
    mut out: W,
) -> Result<Decimal> {
    writeln!(
        out,
        "{:<5} {:<10} {:<30} {:<20}",
        "ID", "Date", "Description", "Amount"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let mut total = Decimal::ZERO;
    for e in records {
        if !filter.admits(e, year)? {
            continue;
        }
        total = add_amount(total, e)?;
        writeln!(
            out,
            "{:<5} {:<10} {:<30} {:<20}",
            e.id,
            e.date,
            e.description,
            fmt_amount(&e.amount)
        )?;
    }

    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Total: {}", fmt_amount(&total))?;
    Ok(total)
}

fn add_amount(total: Decimal, e: &Expense) -> Result<Decimal, LedgerError> {
    total
        .checked_add(e.amount)
        .ok_or(LedgerError::TotalOverflow { id: e.id })
}

pub fn collect(records: &[Expense], filter: Filter, year: i32) -> Result<Summary, LedgerError> {
    let mut rows = Vec::new();
    let mut total = Decimal::ZERO;
    for e in records {
        if filter.admits(e, year)? {
            total = add_amount(total, e)?;
            rows.push(e.clone());
        }
    }
    Ok(Summary { rows, total })
}
