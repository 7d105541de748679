// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::projection::{project, project_scenarios, summarize, Baseline, GrowthParams, MonthlyProjection};
use crate::store::Store;
use crate::utils::{fmt_money, parse_amount, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let params = GrowthParams {
        income_growth_pct: parse_amount(m.get_one::<String>("income-growth").unwrap())?,
        expense_growth_pct: parse_amount(m.get_one::<String>("expense-growth").unwrap())?,
        additional_monthly_expense: parse_amount(m.get_one::<String>("additional-expense").unwrap())?,
    };
    let months = *m.get_one::<u32>("months").unwrap();

    let baseline = Baseline::from_records(
        &store.incomes,
        &store.expenses,
        &store.debts,
        &store.savings,
        today,
    );

    let series = if m.get_flag("scenarios") {
        let (outcomes, realistic) = project_scenarios(&baseline, &params, months);
        let rows = outcomes
            .iter()
            .map(|o| vec![o.name.to_string(), fmt_money(o.final_balance)])
            .collect();
        println!(
            "{}",
            pretty_table(&["Scenario", &format!("Balance after {} months", months)], rows)
        );
        realistic
    } else {
        project(&baseline, &params, months)
    };

    print_series(&series);
    Ok(())
}

fn print_series(series: &[MonthlyProjection]) {
    if series.is_empty() {
        println!("Nothing to project");
        return;
    }

    let rows = series
        .iter()
        .map(|p| {
            vec![
                p.month.to_string(),
                fmt_money(p.income),
                fmt_money(p.expenses),
                fmt_money(p.monthly_balance),
                fmt_money(p.cumulative_balance),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Outgoings", "Balance", "Cumulative"], rows)
    );

    let s = summarize(series);
    println!(
        "{}",
        pretty_table(
            &["Final balance", "Avg monthly", "Worst month", "Best month", "Trend/month"],
            vec![vec![
                fmt_money(s.final_balance),
                fmt_money(s.avg_monthly_balance),
                fmt_money(s.worst_month),
                fmt_money(s.best_month),
                fmt_money(s.trend_per_month),
            ]],
        )
    );

    if s.final_balance < 0.0 {
        println!("Warning: the projection accumulates a deficit over the horizon.");
    } else {
        println!("The projected balance stays favorable over the horizon.");
    }
}
