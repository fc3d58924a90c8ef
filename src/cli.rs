// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, builder::PossibleValuesParser, crate_version, value_parser};

use crate::config::LEDGER_FILE_ENV;

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_name("ID")
        .value_parser(value_parser!(i64))
        .help("Expense ID")
}

fn description_arg() -> Arg {
    Arg::new("description")
        .long("description")
        .required(true)
        .value_name("TEXT")
        .help("What the money was spent on")
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .required(true)
        .value_name("NUMBER")
        .allow_negative_numbers(true)
        .help("Amount, e.g. 12.50 (negative values are allowed)")
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(crate_version!())
        .about("Spendlog: track personal expenses in a local JSON ledger")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .env(LEDGER_FILE_ENV)
                .value_name("PATH")
                .help("Ledger file (default: ./expense.json)"),
        )
        .subcommand(Command::new("about").about("List the available commands"))
        .subcommand(
            Command::new("add")
                .about("Add an expense dated today")
                .arg(description_arg())
                .arg(amount_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Replace the description and amount of an expense")
                .arg(id_arg())
                .arg(description_arg())
                .arg(amount_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an expense")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("summary")
                .about("Show expenses and their total")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("1-12")
                        .value_parser(value_parser!(u32).range(1..=12))
                        .help("Only expenses from this month of the current year"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print rows and total as JSON"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write the whole ledger to a CSV or JSON file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .value_parser(PossibleValuesParser::new(["csv", "json"])),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .required(true)
                        .value_name("PATH"),
                ),
        )
}
