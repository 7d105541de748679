// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::DebtRecord;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};
use crate::validate::validate_debt;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn remaining_text(months: Option<u32>) -> String {
    match months {
        Some(m) => format!("{} months", m),
        None => "payment never covers interest".to_string(),
    }
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    let payment = parse_amount(sub.get_one::<String>("payment").unwrap())?;
    let total = parse_amount(sub.get_one::<String>("total").unwrap())?;
    let rate = parse_amount(sub.get_one::<String>("rate").unwrap())?;

    validate_debt(&description, payment, total, rate)?;

    let record = DebtRecord::new(store.next_id(), description, payment, total, rate);
    println!(
        "Recorded debt '{}': {} per month on {} at {}% ({})",
        record.description,
        fmt_money(record.monthly_payment),
        fmt_money(record.total_debt),
        record.interest_rate,
        remaining_text(record.remaining_months)
    );
    store.add_debt(record)?;
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &store.debts)? {
        let rows = store
            .debts
            .iter()
            .map(|d| {
                vec![
                    d.id.to_string(),
                    d.description.clone(),
                    fmt_money(d.monthly_payment),
                    fmt_money(d.total_debt),
                    format!("{}%", d.interest_rate),
                    remaining_text(d.remaining_months),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Description", "Payment", "Total", "Rate", "Remaining"],
                rows,
            )
        );
    }
    Ok(())
}

fn delete(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete_debt(id)? {
        println!("Debt {} deleted", id);
    } else {
        eprintln!("No debt with id {}", id);
    }
    Ok(())
}
