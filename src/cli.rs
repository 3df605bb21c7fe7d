// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(crate_version!())
        .about("Single-user income and expense ledger with totals, category and monthly reports")
        .subcommand(Command::new("init").about("Create the ledger file if it does not exist"))
        .subcommand(add_cmd())
        .subcommand(list_cmd())
        .subcommand(categories_cmd())
        .subcommand(overview_cmd())
        .subcommand(report_cmd())
        .subcommand(export_cmd())
        .subcommand(
            Command::new("check").about("Load the ledger and report whether it is readable"),
        )
}

fn add_cmd() -> Command {
    Command::new("add")
        .about("Record a new transaction")
        .subcommand_required(true)
        .subcommand(
            Command::new("expense")
                .about("Record money spent")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .required(true)
                        .help("Spending category, e.g. Food"),
                )
                .arg(amount_arg())
                .arg(account_arg())
                .arg(date_arg())
                .arg(description_arg()),
        )
        .subcommand(
            Command::new("income")
                .about("Record money received")
                .arg(
                    Arg::new("source")
                        .long("source")
                        .required(true)
                        .help("Income source, e.g. Salary"),
                )
                .arg(amount_arg())
                .arg(account_arg())
                .arg(date_arg())
                .arg(description_arg()),
        )
}

fn list_cmd() -> Command {
    json_args(
        Command::new("list")
            .about("Show transactions, newest first")
            .arg(kind_arg())
            .arg(category_arg())
            .arg(month_arg())
            .arg(
                Arg::new("limit")
                    .long("limit")
                    .value_parser(clap::value_parser!(usize))
                    .help("Show at most N transactions"),
            ),
    )
}

fn categories_cmd() -> Command {
    Command::new("categories")
        .about("Show the allowed categories, sources and accounts")
        .arg(kind_arg())
        .arg(
            Arg::new("recorded")
                .long("recorded")
                .action(ArgAction::SetTrue)
                .help("Show only categories present in the ledger"),
        )
}

fn overview_cmd() -> Command {
    json_args(Command::new("overview").about("Totals and the most recent transactions"))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Aggregated views of the ledger")
        .subcommand_required(true)
        .subcommand(json_args(
            Command::new("by-category")
                .about("Sum per category for one kind")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_parser(["expense", "income"])
                        .ignore_case(true)
                        .default_value("expense")
                        .help("Which kind to break down"),
                )
                .arg(month_arg()),
        ))
        .subcommand(json_args(
            Command::new("monthly")
                .about("Income and expense per month")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("12")
                        .help("How many most recent months to show"),
                ),
        ))
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Write ledger data to a file")
        .subcommand_required(true)
        .subcommand(
            Command::new("transactions")
                .about("Export transactions to CSV or JSON")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .required(true)
                        .help("Output file path"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("Output format: csv or json"),
                )
                .arg(kind_arg())
                .arg(category_arg())
                .arg(month_arg()),
        )
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .action(ArgAction::Append)
        .value_parser(["expense", "income"])
        .ignore_case(true)
        .help("Limit to one transaction kind (repeatable)")
}

fn category_arg() -> Arg {
    Arg::new("category")
        .long("category")
        .action(ArgAction::Append)
        .help("Limit to a category or source (repeatable)")
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .help("Limit to one month (YYYY-MM)")
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .required(true)
        .help("Amount, e.g. 12.50")
}

fn account_arg() -> Arg {
    Arg::new("account")
        .long("account")
        .required(true)
        .help("Account the money moves through")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Date (YYYY-MM-DD); today when omitted")
}

fn description_arg() -> Arg {
    Arg::new("description")
        .long("description")
        .default_value("")
        .help("Free-form note")
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}
