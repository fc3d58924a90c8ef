// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::LedgerError;
use crate::models::Expense;

const TMP_SUFFIX: &str = "tmp";

/// The JSON file holding the whole ledger. Every command reads it in full
/// and mutating commands rewrite it in full.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing file is created empty; empty content
    /// is an empty ledger.
    pub fn load(&self) -> Result<Vec<Expense>, LedgerError> {
        ensure_parent(&self.path)?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| LedgerError::storage(&self.path, e))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| LedgerError::storage(&self.path, e))?;

        if content.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %self.path.display(), "ledger is empty");
            return Ok(Vec::new());
        }
        let records: Vec<Expense> =
            serde_json::from_slice(&content).map_err(|source| LedgerError::Format {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "ledger loaded");
        Ok(records)
    }

    /// Overwrites the ledger with `records`. The content goes to a sibling
    /// temp file first and is renamed into place.
    pub fn save(&self, records: &[Expense]) -> Result<(), LedgerError> {
        ensure_parent(&self.path)?;
        let mut json = serde_json::to_string_pretty(records).map_err(|source| {
            LedgerError::Format {
                path: self.path.clone(),
                source,
            }
        })?;
        json.push('\n');

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json).map_err(|e| LedgerError::storage(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            LedgerError::storage(&self.path, e)
        })?;
        debug!(path = %self.path.display(), count = records.len(), "ledger saved");
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<(), LedgerError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| LedgerError::storage(dir, e))
        }
        _ => Ok(()),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}
