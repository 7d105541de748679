// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::models::{ExpenseKind, ExpenseRecord, RecurringFrequency};
use crate::recurring::{generate, RecurringTemplate};
use crate::store::Store;
use crate::summary::recurring_groups;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use crate::validate::{validate_recurring_expense, validate_single_expense};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        Some(("delete-group", sub)) => delete_group(store, sub)?,
        Some(("mark-paid", sub)) => mark_paid(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today,
    };

    if sub.get_flag("recurring") {
        validate_recurring_expense(&description, amount, date, today)?;
        let frequency = RecurringFrequency::parse(sub.get_one::<String>("frequency").unwrap())?;
        let end_date = sub
            .get_one::<String>("end-date")
            .map(|s| parse_date(s))
            .transpose()?;
        let template = RecurringTemplate {
            description,
            amount,
            category,
            start_date: date,
            frequency,
            end_date,
        };
        let batch = generate(&template, today, store.next_id());
        println!("{} recurring expenses generated", batch.len());
        store.add_expenses(batch)?;
    } else {
        validate_single_expense(&description, amount, date, today)?;
        let record = ExpenseRecord::single(store.next_id(), description, amount, category, date);
        println!(
            "Recorded expense '{}': {} ({}) on {}",
            record.description,
            fmt_money(record.amount),
            record.category,
            record.date
        );
        store.add_expense(record)?;
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &store.expenses)? {
        return Ok(());
    }

    let today = Local::now().date_naive();
    let singles: Vec<&ExpenseRecord> = store
        .expenses
        .iter()
        .filter(|e| e.kind == ExpenseKind::Single)
        .collect();
    if !singles.is_empty() {
        let rows = singles
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.description.clone(),
                    fmt_money(e.amount),
                    e.category.clone(),
                    e.date.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Description", "Amount", "Category", "Date"], rows)
        );
    }

    let groups = recurring_groups(&store.expenses, today);
    if !groups.is_empty() {
        let rows = groups
            .iter()
            .map(|g| {
                vec![
                    g.description.clone(),
                    fmt_money(g.amount),
                    g.category.clone(),
                    g.frequency.map(|f| f.as_str()).unwrap_or("-").to_string(),
                    g.occurrences.to_string(),
                    g.next_occurrence
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "completed".to_string()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Recurring", "Amount", "Category", "Frequency", "Occurrences", "Next"],
                rows,
            )
        );
    }

    if store.expenses.is_empty() {
        println!("No expenses recorded");
    }
    Ok(())
}

fn delete(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete_expense(id)? {
        println!("Expense {} deleted", id);
    } else {
        eprintln!("No expense with id {}", id);
    }
    Ok(())
}

fn delete_group(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let removed = store.delete_recurring_group(description)?;
    if removed > 0 {
        println!("Deleted {} occurrences of '{}'", removed, description);
    } else {
        eprintln!("No recurring expenses under '{}'", description);
    }
    Ok(())
}

fn mark_paid(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let today = Local::now().date_naive();
    if store.mark_paid(description, date, today)? {
        println!("Marked '{}' on {} as paid", description, date);
    } else {
        eprintln!("No occurrence of '{}' dated {}", description, date);
    }
    Ok(())
}
