// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Local};

use crate::report::{self, Filter};
use crate::store::Store;

pub fn filter_from(sub: &clap::ArgMatches) -> Filter {
    match sub.get_one::<u32>("month") {
        Some(m) => Filter::Month(*m),
        None => Filter::All,
    }
}

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let filter = filter_from(sub);
    let year = Local::now().year();
    let records = store.load()?;

    if sub.get_flag("json") {
        let summary = report::collect(&records, filter, year)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    report::summarize(&records, filter, year, std::io::stdout().lock())?;
    Ok(())
}
