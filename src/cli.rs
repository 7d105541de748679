// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
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
            .help("Print JSON lines instead of a table"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("from").long("from").help("Filter start date (YYYY-MM-DD)"))
        .arg(Arg::new("to").long("to").help("Filter end date (YYYY-MM-DD)"))
        .arg(Arg::new("period").long("period").help(
            "Named period preset (current-month|last-month|current-quarter|last-quarter|current-year|last-year|last-6-months|last-12-months)",
        ))
}

pub fn build_cli() -> Command {
    Command::new("plata")
        .about("Personal income, expense, debt, and savings tracker")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the data store"))
        .subcommand(
            Command::new("income")
                .about("Manage income records")
                .subcommand(
                    Command::new("add")
                        .about("Record an income")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .default_value("monthly")
                                .help("weekly|biweekly|monthly|irregular"),
                        )
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today")),
                )
                .subcommand(json_flags(Command::new("list").about("List incomes")))
                .subcommand(
                    Command::new("delete").about("Delete an income").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Manage single and recurring expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a single expense or generate a recurring series")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                        .arg(
                            Arg::new("recurring")
                                .long("recurring")
                                .action(ArgAction::SetTrue)
                                .help("Generate a recurring series starting at --date"),
                        )
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .default_value("monthly")
                                .help("monthly|quarterly|yearly (recurring only)"),
                        )
                        .arg(
                            Arg::new("end-date")
                                .long("end-date")
                                .help("Last occurrence date; defaults to 3 years ahead"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List expenses")))
                .subcommand(
                    Command::new("delete").about("Delete a single expense").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("delete-group")
                        .about("Delete every occurrence of a recurring expense")
                        .arg(Arg::new("description").long("description").required(true)),
                )
                .subcommand(
                    Command::new("mark-paid")
                        .about("Mark one recurring occurrence as paid")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("date").long("date").required(true)),
                ),
        )
        .subcommand(
            Command::new("debt")
                .about("Manage debts")
                .subcommand(
                    Command::new("add")
                        .about("Record a debt")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("payment").long("payment").required(true).help("Monthly payment"))
                        .arg(Arg::new("total").long("total").required(true).help("Total outstanding debt"))
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .default_value("0")
                                .help("Annual interest rate in percent"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List debts")))
                .subcommand(
                    Command::new("delete").about("Delete a debt").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("saving")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a savings goal")
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("monthly").long("monthly").required(true).help("Monthly contribution"))
                        .arg(Arg::new("date").long("date").required(true).help("Target date (YYYY-MM-DD)")),
                )
                .subcommand(json_flags(Command::new("list").about("List savings goals")))
                .subcommand(
                    Command::new("delete").about("Delete a savings goal").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                )
                .subcommand(
                    Command::new("deposit")
                        .about("Add money toward a goal")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(Command::new("advice").about("Suggest monthly savings amounts")),
        )
        .subcommand(filter_args(
            Command::new("dashboard").about("Show current totals and breakdowns"),
        ))
        .subcommand(
            Command::new("report")
                .about("Generate reports")
                .subcommand(
                    Command::new("monthly")
                        .about("One month's expenses against the monthly baselines")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
                )
                .subcommand(
                    Command::new("annual").about("One year's totals").arg(
                        Arg::new("year")
                            .long("year")
                            .required(true)
                            .value_parser(value_parser!(i32)),
                    ),
                )
                .subcommand(Command::new("category").about("All-time totals per category"))
                .subcommand(filter_args(
                    Command::new("complete").about("Every collection itemized"),
                )),
        )
        .subcommand(filter_args(
            Command::new("export")
                .about("Write a report as CSV")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("monthly|annual|category|complete"),
                )
                .arg(Arg::new("out").long("out").required(true).help("Output file path"))
                .arg(Arg::new("month").long("month").help("YYYY-MM (monthly export)"))
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .help("YYYY (annual export)"),
                ),
        ))
        .subcommand(
            Command::new("project")
                .about("Simulate multi-month cash flow")
                .arg(
                    Arg::new("income-growth")
                        .long("income-growth")
                        .default_value("0")
                        .help("Income growth percent applied to the baseline"),
                )
                .arg(
                    Arg::new("expense-growth")
                        .long("expense-growth")
                        .default_value("0")
                        .help("Expense growth percent applied to the baseline"),
                )
                .arg(
                    Arg::new("months")
                        .long("months")
                        .default_value("12")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("additional-expense")
                        .long("additional-expense")
                        .default_value("0")
                        .help("Extra fixed monthly expense to simulate"),
                )
                .arg(
                    Arg::new("scenarios")
                        .long("scenarios")
                        .action(ArgAction::SetTrue)
                        .help("Run conservative/realistic/optimistic variants"),
                ),
        )
        .subcommand(
            Command::new("goals")
                .about("Savings goal settings and general stats")
                .subcommand(
                    Command::new("set")
                        .about("Set the savings-rate goal and emergency-fund size")
                        .arg(
                            Arg::new("monthly-goal")
                                .long("monthly-goal")
                                .help("Target savings rate as percent of income"),
                        )
                        .arg(
                            Arg::new("emergency-fund")
                                .long("emergency-fund")
                                .help("Emergency fund size in months of expenses"),
                        ),
                )
                .subcommand(Command::new("show").about("Show stats against the configured goals")),
        )
        .subcommand(
            Command::new("data")
                .about("Backup and restore")
                .subcommand(Command::new("backup").about("Snapshot all records"))
                .subcommand(
                    Command::new("restore")
                        .about("Overwrite records from the snapshot")
                        .arg(Arg::new("force").long("force").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("clear")
                        .about("Delete every record")
                        .arg(Arg::new("force").long("force").action(ArgAction::SetTrue)),
                ),
        )
}
