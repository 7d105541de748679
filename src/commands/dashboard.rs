// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::commands::parse_filter;
use crate::store::Store;
use crate::summary::{category_chart, dashboard, period_summary, recurring_groups};
use crate::utils::{fmt_money, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let filter = parse_filter(m, today)?;

    let d = dashboard(
        &store.incomes,
        &store.expenses,
        &store.debts,
        &store.savings,
        &filter,
        today,
    );

    let income_label = if filter.active { "Period income" } else { "Monthly income" };
    let expense_label = if filter.active { "Period expenses" } else { "Total expenses" };
    println!(
        "{}",
        pretty_table(
            &[income_label, expense_label, "Savings", "Balance"],
            vec![vec![
                fmt_money(d.income),
                fmt_money(d.expenses_and_debts),
                fmt_money(d.savings),
                fmt_money(d.remaining_balance),
            ]],
        )
    );

    println!(
        "{}",
        pretty_table(
            &["Variable expenses", "Debt payments", "Savings", "Committed", "Spending capacity"],
            vec![vec![
                fmt_money(d.expenses),
                fmt_money(d.debts),
                fmt_money(d.savings),
                fmt_money(d.expenses_and_debts + d.savings),
                fmt_money(d.spending_capacity),
            ]],
        )
    );

    if d.remaining_balance < 0.0 {
        println!(
            "Deficit: you spend {} more than you earn monthly.",
            fmt_money(d.remaining_balance.abs())
        );
    } else if d.remaining_balance > 0.0 {
        println!("Surplus: {} left over monthly.", fmt_money(d.remaining_balance));
    } else {
        println!("Income exactly matches expenses and savings.");
    }

    let chart = category_chart(&store.expenses, &store.debts, &filter);
    if chart.is_empty() {
        println!("No expenses recorded to break down");
    } else {
        let rows = chart
            .iter()
            .map(|c| {
                vec![
                    c.category.clone(),
                    fmt_money(c.amount),
                    format!("{:.1}%", c.pct),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Amount", "Share"], rows));
    }

    // Upcoming recurring obligations, the "fixed expenses" card.
    let upcoming: Vec<_> = recurring_groups(&store.expenses, today)
        .into_iter()
        .filter(|g| g.next_occurrence.is_some())
        .collect();
    if !upcoming.is_empty() {
        let rows = upcoming
            .iter()
            .map(|g| {
                let next = g.next_occurrence.unwrap_or(today);
                vec![
                    g.description.clone(),
                    fmt_money(g.amount),
                    g.category.clone(),
                    next.to_string(),
                    format!("{} days", (next - today).num_days()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Upcoming", "Amount", "Category", "Next", "Due in"], rows)
        );
    }

    if let Some(p) = period_summary(
        &store.incomes,
        &store.expenses,
        &store.debts,
        &store.savings,
        &filter,
    ) {
        println!(
            "{}",
            pretty_table(
                &["Period income", "Period expenses", "Avg daily expense", "Period balance"],
                vec![vec![
                    fmt_money(p.income),
                    fmt_money(p.expenses),
                    fmt_money(p.avg_daily_expense),
                    fmt_money(p.balance),
                ]],
            )
        );
    }
    Ok(())
}
