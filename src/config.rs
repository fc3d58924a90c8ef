// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use once_cell::sync::OnceCell;

use crate::store::Store;

pub const DEFAULT_LEDGER_FILE: &str = "expense.json";
pub const LEDGER_FILE_ENV: &str = "SPENDLOG_FILE";

static SETTINGS: OnceCell<Settings> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct Settings {
    pub ledger_path: PathBuf,
}

impl Settings {
    /// `--file` wins, clap folds in `SPENDLOG_FILE`, then the default name
    /// in the working directory.
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        let ledger_path = matches
            .get_one::<String>("file")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE));
        Self { ledger_path }
    }

    pub fn store(&self) -> Store {
        Store::new(&self.ledger_path)
    }
}

/// Resolves settings once per process; later calls return the first value.
pub fn init(matches: &clap::ArgMatches) -> &'static Settings {
    SETTINGS.get_or_init(|| Settings::from_matches(matches))
}
