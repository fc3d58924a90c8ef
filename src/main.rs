// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendlog::{cli, commands, config, utils};

fn main() {
    utils::init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let settings = config::init(&matches);
    let store = settings.store();
    tracing::debug!(path = %store.path().display(), "using ledger file");

    match matches.subcommand() {
        Some(("about", _)) => commands::about::handle()?,
        Some(("add", sub)) => commands::expenses::add(&store, sub)?,
        Some(("update", sub)) => commands::expenses::update(&store, sub)?,
        Some(("delete", sub)) => commands::expenses::delete(&store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
