// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::store::Store;
use crate::summary::{general_stats, trend_analysis};
use crate::utils::{fmt_money, parse_amount, pretty_table};

/// Fallbacks when no goal has been configured yet.
const DEFAULT_MONTHLY_GOAL_PCT: f64 = 20.0;
const DEFAULT_EMERGENCY_MONTHS: f64 = 6.0;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", _)) => show(store)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(pct) = sub.get_one::<String>("monthly-goal") {
        store.set_monthly_goal_pct(parse_amount(pct)?)?;
    }
    if let Some(months) = sub.get_one::<String>("emergency-fund") {
        store.set_emergency_fund_months(parse_amount(months)?)?;
    }
    println!("Goals updated");
    Ok(())
}

fn show(store: &Store) -> Result<()> {
    let today = Local::now().date_naive();
    let monthly_goal = store.monthly_goal_pct()?.unwrap_or(DEFAULT_MONTHLY_GOAL_PCT);
    let emergency_months = store
        .emergency_fund_months()?
        .unwrap_or(DEFAULT_EMERGENCY_MONTHS);

    let stats = general_stats(
        &store.incomes,
        &store.expenses,
        &store.debts,
        &store.savings,
        monthly_goal,
        emergency_months,
        today,
    );
    println!(
        "{}",
        pretty_table(
            &["Records", "Savings goal", "Emergency fund", "Savings efficiency"],
            vec![vec![
                stats.record_count.to_string(),
                format!("{} ({}% of income)", fmt_money(stats.target_savings), stats.monthly_goal_pct),
                format!(
                    "{} ({} months of expenses)",
                    fmt_money(stats.emergency_target),
                    stats.emergency_fund_months
                ),
                format!("{:.1}%", stats.savings_efficiency_pct),
            ]],
        )
    );

    let trend = trend_analysis(
        &store.incomes,
        &store.expenses,
        &store.debts,
        &store.savings,
        today,
    );
    if trend.expense_change_pct > 10.0 {
        println!("Expenses rose significantly this month ({:+.1}%)", trend.expense_change_pct);
    } else if trend.expense_change_pct < -10.0 {
        println!("Expenses dropped considerably this month ({:+.1}%)", trend.expense_change_pct);
    } else {
        println!("Expenses are stable ({:+.1}%)", trend.expense_change_pct);
    }
    if trend.remaining_balance > 0.0 {
        println!("Monthly surplus: {}", fmt_money(trend.remaining_balance));
    } else if trend.remaining_balance < 0.0 {
        println!("Monthly deficit: {}", fmt_money(trend.remaining_balance.abs()));
    } else {
        println!("Balanced budget");
    }
    if trend.savings_rate_pct >= 20.0 {
        println!("Excellent savings rate ({:.1}%)", trend.savings_rate_pct);
    } else if trend.savings_rate_pct >= 10.0 {
        println!("Good savings rate ({:.1}%)", trend.savings_rate_pct);
    } else {
        println!("Consider raising your savings rate ({:.1}%)", trend.savings_rate_pct);
    }
    Ok(())
}
