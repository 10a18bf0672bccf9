// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("cashbook")
        .about("Track small-business income and expenses from the terminal")
        .version(clap::crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("init").about("Initialise the local document store"))
        .subcommand(tx_command())
        .subcommand(category_command())
        .subcommand(dashboard_command())
        .subcommand(export_command())
        .subcommand(import_command())
        .subcommand(Command::new("status").about("Show where data lives and what is recorded"))
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn tx_command() -> Command {
    Command::new("tx")
        .about("Record and manage transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("income|expense"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .help("Amount in the given currency"),
                )
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .default_value("PKR")
                        .help("PKR|USD"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .required(true)
                        .help("Category name"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .default_value("")
                        .help("Free-text note"),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Calendar day YYYY-MM-DD, defaults to today"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Update an existing transaction")
                .arg(Arg::new("id").required(true).help("Transaction id"))
                .arg(Arg::new("type").long("type").help("income|expense"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("currency").long("currency").help("PKR|USD"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("description").long("description"))
                .arg(Arg::new("date").long("date").help("Calendar day YYYY-MM-DD")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction")
                .arg(Arg::new("id").required(true).help("Transaction id")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, newest first")
                .arg(Arg::new("type").long("type").help("Only income or expense"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Only this category"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Show at most N rows"),
                ),
        ))
}

fn category_command() -> Command {
    Command::new("category")
        .about("Manage categories")
        .subcommand(
            Command::new("add")
                .about("Add a category")
                .arg(Arg::new("name").required(true).help("Display name"))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("income|expense"),
                ),
        )
        .subcommand(Command::new("list").about("List categories"))
}

fn dashboard_command() -> Command {
    json_flags(
        Command::new("dashboard")
            .about("Summarise income and expenses for a date range")
            .arg(
                Arg::new("range")
                    .long("range")
                    .default_value("monthly")
                    .help("daily|weekly|monthly|custom"),
            )
            .arg(Arg::new("from").long("from").help("Custom range start, YYYY-MM-DD"))
            .arg(Arg::new("to").long("to").help("Custom range end, YYYY-MM-DD")),
    )
}

fn export_command() -> Command {
    Command::new("export")
        .about("Export data to a file")
        .subcommand(
            Command::new("json")
                .about("Full backup: transactions and categories, pretty-printed")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path, defaults to cashbook-<date>.json"),
                ),
        )
        .subcommand(
            Command::new("csv")
                .about("Transactions only, for spreadsheets")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path, defaults to cashbook-transactions-<date>.csv"),
                ),
        )
}

fn import_command() -> Command {
    Command::new("import")
        .about("Replace all data from a JSON backup")
        .arg(
            Arg::new("path")
                .required(true)
                .help("Backup file produced by `export json`"),
        )
}
