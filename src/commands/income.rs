// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::models::{IncomeFrequency, IncomeRecord};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use crate::validate::validate_income;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let frequency = IncomeFrequency::parse(sub.get_one::<String>("frequency").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today,
    };

    validate_income(&description, amount, date, today)?;

    let record = IncomeRecord::new(store.next_id(), description, amount, frequency, date);
    println!(
        "Recorded income '{}': {} ({}) = {} per month",
        record.description,
        fmt_money(record.amount),
        record.frequency.as_str(),
        fmt_money(record.monthly_amount)
    );
    store.add_income(record)?;
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &store.incomes)? {
        let rows = store
            .incomes
            .iter()
            .map(|i| {
                vec![
                    i.id.to_string(),
                    i.description.clone(),
                    fmt_money(i.amount),
                    i.frequency.as_str().to_string(),
                    fmt_money(i.monthly_amount),
                    i.date.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Description", "Amount", "Frequency", "Monthly", "Date"], rows)
        );
    }
    Ok(())
}

fn delete(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete_income(id)? {
        println!("Income {} deleted", id);
    } else {
        eprintln!("No income with id {}", id);
    }
    Ok(())
}
