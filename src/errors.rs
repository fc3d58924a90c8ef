// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the ledger store, mutations and report.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Cannot access ledger file {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Ledger file {} is not a valid expense list", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid date '{value}' on expense {id}, expected YYYY-MM-DD")]
    InvalidDate { id: i64, value: String },
    #[error("Total overflows after adding expense {id}")]
    TotalOverflow { id: i64 },
    #[error("Expense with ID {0} not found")]
    NotFound(i64),
    #[error("{0}")]
    Validation(String),
}

impl LedgerError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LedgerError::Storage {
            path: path.into(),
            source,
        }
    }
}
