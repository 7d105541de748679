// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::Local;

use crate::models::SavingsGoal;
use crate::store::Store;
use crate::summary::savings_advice;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use crate::validate::validate_savings_goal;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        Some(("deposit", sub)) => deposit(store, sub)?,
        Some(("advice", _)) => advice(store)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    let target = parse_amount(sub.get_one::<String>("target").unwrap())?;
    let monthly = parse_amount(sub.get_one::<String>("monthly").unwrap())?;
    let target_date = parse_date(sub.get_one::<String>("date").unwrap())?;

    validate_savings_goal(&description, target, monthly, target_date, today)?;

    let record = SavingsGoal::new(store.next_id(), description, target, monthly, target_date);
    println!(
        "Created goal '{}': {} at {} per month ({} months to target)",
        record.description,
        fmt_money(record.target),
        fmt_money(record.monthly_amount),
        record.months_to_target
    );
    store.add_saving(record)?;
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &store.savings)? {
        let rows = store
            .savings
            .iter()
            .map(|s| {
                vec![
                    s.id.to_string(),
                    s.description.clone(),
                    fmt_money(s.target),
                    fmt_money(s.monthly_amount),
                    s.target_date.to_string(),
                    fmt_money(s.current_amount),
                    format!("{:.1}%", s.progress_pct()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Description", "Target", "Monthly", "Target date", "Saved", "Progress"],
                rows,
            )
        );
    }
    Ok(())
}

fn delete(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete_saving(id)? {
        println!("Savings goal {} deleted", id);
    } else {
        eprintln!("No savings goal with id {}", id);
    }
    Ok(())
}

fn deposit(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    if amount <= 0.0 {
        bail!("Deposit must be greater than 0");
    }
    if store.deposit_to_saving(id, amount)? {
        println!("Added {} to savings goal {}", fmt_money(amount), id);
    } else {
        eprintln!("No savings goal with id {}", id);
    }
    Ok(())
}

fn advice(store: &Store) -> Result<()> {
    let today = Local::now().date_naive();
    let advice = savings_advice(&store.incomes, &store.expenses, &store.debts, today);

    if advice.available > 0.0 {
        println!(
            "You have {} available monthly after expenses and debts.",
            fmt_money(advice.available)
        );
        let rows = vec![
            vec!["50/30/20 rule (20% of income)".to_string(), fmt_money(advice.rule_20_pct)],
            vec!["Emergency fund (6 months of outgoings)".to_string(), fmt_money(advice.emergency_fund)],
            vec!["Conservative (50% of available)".to_string(), fmt_money(advice.conservative)],
            vec!["Aggressive (80% of available)".to_string(), fmt_money(advice.aggressive)],
        ];
        println!("{}", pretty_table(&["Suggestion", "Amount"], rows));
    } else if advice.available < 0.0 {
        println!(
            "You spend {} more than you earn. Cover basic expenses and debt payments before setting savings goals.",
            fmt_money(advice.available.abs())
        );
    } else {
        println!("Income exactly matches expenses and debts; no room for savings yet.");
    }
    Ok(())
}
