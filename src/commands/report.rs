// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::commands::parse_filter;
use crate::store::Store;
use crate::summary::{
    annual_report, category_report, expenses_by_category, monthly_report, total_monthly_debts,
    total_monthly_expenses, total_monthly_income, total_monthly_savings,
};
use crate::utils::{fmt_money, parse_month, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("annual", sub)) => annual(store, sub)?,
        Some(("category", _)) => category(store)?,
        Some(("complete", sub)) => complete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn monthly(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;
    let report = monthly_report(&store.incomes, &store.expenses, &store.debts, year, month);

    println!("Monthly report - {}-{:02}", report.year, report.month);
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Debts", "Balance"],
            vec![vec![
                fmt_money(report.income),
                fmt_money(report.expenses),
                fmt_money(report.debts),
                fmt_money(report.balance),
            ]],
        )
    );
    let rows = report
        .by_category
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(c.amount), format!("{:.1}%", c.pct)])
        .collect();
    println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    Ok(())
}

fn annual(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let year = *sub.get_one::<i32>("year").unwrap();
    let report = annual_report(&store.incomes, &store.expenses, &store.debts, year);

    println!("Annual report - {}", report.year);
    println!(
        "{}",
        pretty_table(
            &["Annual income", "Annual expenses", "Annual debts", "Avg monthly expenses"],
            vec![vec![
                fmt_money(report.annual_income),
                fmt_money(report.total_expenses),
                fmt_money(report.annual_debts),
                fmt_money(report.avg_monthly_expenses),
            ]],
        )
    );
    let rows = report
        .by_category
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(c.amount), format!("{:.1}%", c.pct)])
        .collect();
    println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    Ok(())
}

fn category(store: &Store) -> Result<()> {
    let shares = category_report(&store.expenses);
    let rows = shares
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(c.amount), format!("{:.1}%", c.pct)])
        .collect();
    println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    Ok(())
}

fn complete(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let filter = parse_filter(sub, today)?;

    println!(
        "{}",
        pretty_table(
            &["Monthly income", "Monthly expenses", "Monthly debts", "Savings target"],
            vec![vec![
                fmt_money(total_monthly_income(&store.incomes)),
                fmt_money(total_monthly_expenses(&store.expenses, today)),
                fmt_money(total_monthly_debts(&store.debts)),
                fmt_money(total_monthly_savings(&store.savings)),
            ]],
        )
    );

    let rows = store
        .incomes
        .iter()
        .map(|i| {
            vec![
                i.description.clone(),
                format!("{}/month", fmt_money(i.monthly_amount)),
                i.frequency.as_str().to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Income", "Monthly", "Frequency"], rows));

    let rows = expenses_by_category(&store.expenses, &filter)
        .into_iter()
        .map(|(category, amount)| vec![category, fmt_money(amount)])
        .collect();
    println!("{}", pretty_table(&["Category", "Amount"], rows));

    let rows = store
        .debts
        .iter()
        .map(|d| {
            vec![
                d.description.clone(),
                format!("{}/month", fmt_money(d.monthly_payment)),
                fmt_money(d.total_debt),
                format!("{}%", d.interest_rate),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Debt", "Payment", "Total", "Rate"], rows));

    let rows = store
        .savings
        .iter()
        .map(|s| {
            vec![
                s.description.clone(),
                format!("{}/month", fmt_money(s.monthly_amount)),
                fmt_money(s.target),
                format!("{:.1}%", s.progress_pct()),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Goal", "Monthly", "Target", "Progress"], rows));
    Ok(())
}
