// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: String, // YYYY-MM-DD, checked only when reporting
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl Expense {
    pub fn parsed_date(&self) -> Result<NaiveDate, LedgerError> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| LedgerError::InvalidDate {
            id: self.id,
            value: self.date.clone(),
        })
    }
}
