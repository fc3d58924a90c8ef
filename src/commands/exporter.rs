// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use tracing::info;

use super::required;
use crate::store::Store;
use crate::utils::fmt_amount;

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required::<String>(sub, "format")?.to_lowercase();
    let out = required::<String>(sub, "out")?.trim().to_string();

    let records = store.load()?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)
                .with_context(|| format!("Cannot create export file {}", out))?;
            wtr.write_record(["id", "date", "description", "amount"])?;
            for e in &records {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.clone(),
                    e.description.clone(),
                    fmt_amount(&e.amount),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(&out, serde_json::to_string_pretty(&records)?)
                .with_context(|| format!("Cannot write export file {}", out))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    info!(count = records.len(), format = %fmt, out = %out, "ledger exported");
    println!("Exported {} expenses to {}", records.len(), out);
    Ok(())
}
