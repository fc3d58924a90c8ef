// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use super::required;
use crate::ledger;
use crate::store::Store;
use crate::utils::parse_amount;

pub fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = required::<String>(sub, "description")?;
    let amount = parse_amount(required::<String>(sub, "amount")?)?;

    let mut records = store.load()?;
    let today = Local::now().date_naive();
    let expense = ledger::insert(&mut records, description, amount, today)?;
    store.save(&records)?;
    println!("Expense added successfully (ID: {})", expense.id);
    Ok(())
}

pub fn update(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *required::<i64>(sub, "id")?;
    let description = required::<String>(sub, "description")?;
    let amount = parse_amount(required::<String>(sub, "amount")?)?;

    let mut records = store.load()?;
    ledger::apply_update(&mut records, id, description, amount)?;
    store.save(&records)?;
    println!("Expense {} updated successfully", id);
    Ok(())
}

pub fn delete(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *required::<i64>(sub, "id")?;

    let mut records = store.load()?;
    ledger::apply_delete(&mut records, id)?;
    store.save(&records)?;
    println!("Expense {} deleted successfully", id);
    Ok(())
}
