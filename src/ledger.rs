// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory mutations applied between `Store::load` and `Store::save`.
//!
//! Records keep insertion order. Nothing here touches the disk, so a failed
//! mutation leaves both the vector and the file untouched.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::errors::LedgerError;
use crate::models::{DATE_FORMAT, Expense};

/// 1 for an empty ledger, otherwise the id of the last record in insertion
/// order plus one. This is not `max(id) + 1`: after the tail record is
/// deleted the value can repeat an id still held further up the list.
pub fn next_id(records: &[Expense]) -> Result<i64, LedgerError> {
    match records.last() {
        None => Ok(1),
        Some(last) => last.id.checked_add(1).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Cannot assign an ID after expense {}: ID range exhausted",
                last.id
            ))
        }),
    }
}

/// Appends a new record dated `today` and returns it.
pub fn insert(
    records: &mut Vec<Expense>,
    description: &str,
    amount: Decimal,
    today: NaiveDate,
) -> Result<Expense, LedgerError> {
    let id = next_id(records)?;
    if records.iter().any(|e| e.id == id) {
        warn!(id, "new expense reuses an id already present in the ledger");
    }
    if description.trim().is_empty() {
        warn!(id, "expense added with an empty description");
    }
    let expense = Expense {
        id,
        date: today.format(DATE_FORMAT).to_string(),
        description: description.to_string(),
        amount,
    };
    records.push(expense.clone());
    info!(id, %amount, "expense inserted");
    Ok(expense)
}

/// Overwrites description and amount of the first record with `id`.
/// Id and date are never touched.
pub fn apply_update<'a>(
    records: &'a mut [Expense],
    id: i64,
    description: &str,
    amount: Decimal,
) -> Result<&'a Expense, LedgerError> {
    let expense = records
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(LedgerError::NotFound(id))?;
    expense.description = description.to_string();
    expense.amount = amount;
    info!(id, %amount, "expense updated");
    Ok(expense)
}

/// Removes the first record with `id`, keeping the others in order.
pub fn apply_delete(records: &mut Vec<Expense>, id: i64) -> Result<Expense, LedgerError> {
    let pos = records
        .iter()
        .position(|e| e.id == id)
        .ok_or(LedgerError::NotFound(id))?;
    let removed = records.remove(pos);
    info!(id, "expense deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64) -> Expense {
        Expense {
            id,
            date: "2025-01-01".into(),
            description: format!("e{}", id),
            amount: Decimal::ONE,
        }
    }

    #[test]
    fn next_id_follows_the_last_record_not_the_max() {
        assert_eq!(next_id(&[]).unwrap(), 1);
        assert_eq!(next_id(&[rec(1), rec(2)]).unwrap(), 3);
        assert_eq!(next_id(&[rec(5), rec(2)]).unwrap(), 3);
    }

    #[test]
    fn exhausted_id_range_is_rejected() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let mut records = vec![rec(1), rec(i64::MAX)];
        let err = insert(&mut records, "one too many", Decimal::ONE, day).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn tail_delete_lets_the_id_be_handed_out_again() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let mut records = vec![rec(1), rec(2), rec(3)];
        apply_delete(&mut records, 3).unwrap();
        assert_eq!(insert(&mut records, "again", Decimal::TEN, day).unwrap().id, 3);
    }

    #[test]
    fn out_of_order_ledger_can_produce_a_duplicate_id() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let mut records = vec![rec(2), rec(1)];
        let added = insert(&mut records, "dup", Decimal::TEN, day).unwrap();
        assert_eq!(added.id, 2);
        assert_eq!(records.iter().filter(|e| e.id == 2).count(), 2);
    }
}
