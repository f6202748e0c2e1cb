// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .help("Month as YYYY-MM (default: current month)")
}

fn transaction_commands(name: &'static str, label_arg: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Record a new entry")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new(label_arg).long(label_arg).required(true))
                .arg(Arg::new("description").long("description").default_value(""))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD (default: today)"),
                ),
        )
        .subcommand(json_args(
            Command::new("list")
                .about("List entries, newest first")
                .arg(month_arg())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
}

pub fn build_cli() -> Command {
    Command::new("nivesh")
        .version(clap::crate_version!())
        .about("Track expenses, income and savings goals, and get investment suggestions")
        .arg(
            Arg::new("ledger")
                .long("ledger")
                .global(true)
                .env("NIVESH_LEDGER")
                .help("Path to the ledger JSON file"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .global(true)
                .env("NIVESH_LANG")
                .value_parser(["en", "hi"])
                .help("Display language"),
        )
        .arg(
            Arg::new("owner")
                .long("owner")
                .global(true)
                .help("Owner whose records are shown"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"]),
        )
        .subcommand(Command::new("init").about("Create an empty ledger"))
        .subcommand(transaction_commands(
            "expense",
            "category",
            "Record and list expenses",
        ))
        .subcommand(transaction_commands(
            "income",
            "source",
            "Record and list income",
        ))
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Create a goal")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current").default_value("0"))
                        .arg(Arg::new("target-date").long("target-date")),
                )
                .subcommand(json_args(Command::new("list").about("Goals with progress")))
                .subcommand(
                    Command::new("contribute")
                        .about("Add money to a goal")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(json_args(
            Command::new("summary")
                .about("Monthly overview: income, expenses, savings, spend by category")
                .arg(month_arg()),
        ))
        .subcommand(json_args(
            Command::new("recommend")
                .about("Investment suggestions from the month's surplus")
                .arg(month_arg())
                .arg(
                    Arg::new("income")
                        .long("income")
                        .help("Use this monthly income instead of recorded income"),
                ),
        ))
        .subcommand(json_args(
            Command::new("platforms").about("Investment platforms and what they offer"),
        ))
        .subcommand(
            Command::new("import")
                .about("Import records from CSV")
                .subcommand_required(true)
                .subcommand(
                    Command::new("expenses")
                        .arg(Arg::new("path").long("path").required(true)),
                )
                .subcommand(
                    Command::new("income").arg(Arg::new("path").long("path").required(true)),
                ),
        )
}
