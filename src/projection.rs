// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::models::{DebtRecord, ExpenseRecord, IncomeRecord, SavingsGoal};
use crate::summary::{
    total_monthly_debts, total_monthly_expenses, total_monthly_income, total_monthly_savings,
};

/// Current monthly totals a projection starts from.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub income: f64,
    pub expenses: f64,
    pub debts: f64,
    pub savings: f64,
}

impl Baseline {
    pub fn from_records(
        incomes: &[IncomeRecord],
        expenses: &[ExpenseRecord],
        debts: &[DebtRecord],
        savings: &[SavingsGoal],
        today: NaiveDate,
    ) -> Self {
        Self {
            income: total_monthly_income(incomes),
            expenses: total_monthly_expenses(expenses, today),
            debts: total_monthly_debts(debts),
            savings: total_monthly_savings(savings),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthParams {
    pub income_growth_pct: f64,
    pub expense_growth_pct: f64,
    pub additional_monthly_expense: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct MonthlyProjection {
    /// 1-indexed month within the horizon.
    pub month: u32,
    pub monthly_balance: f64,
    pub cumulative_balance: f64,
    pub income: f64,
    /// Projected expenses plus the debt and savings commitments.
    pub expenses: f64,
}

/// Simulate `months` months forward. Growth is applied to the original
/// baseline every month, never compounded onto the prior month's figure;
/// only the cumulative balance carries across months.
pub fn project(baseline: &Baseline, params: &GrowthParams, months: u32) -> Vec<MonthlyProjection> {
    let mut series = Vec::with_capacity(months as usize);
    let mut cumulative = 0.0;
    for month in 1..=months {
        let income = baseline.income * (1.0 + params.income_growth_pct / 100.0);
        let expenses = (baseline.expenses + params.additional_monthly_expense)
            * (1.0 + params.expense_growth_pct / 100.0);
        let monthly_balance = income - expenses - baseline.debts - baseline.savings;
        cumulative += monthly_balance;
        series.push(MonthlyProjection {
            month,
            monthly_balance,
            cumulative_balance: cumulative,
            income,
            expenses: expenses + baseline.debts + baseline.savings,
        });
    }
    series
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionSummary {
    pub final_balance: f64,
    pub avg_monthly_balance: f64,
    /// Worst and best single-month balances, not cumulative.
    pub worst_month: f64,
    pub best_month: f64,
    /// Average cumulative-balance slope over the horizon.
    pub trend_per_month: f64,
}

pub fn summarize(series: &[MonthlyProjection]) -> ProjectionSummary {
    let Some(last) = series.last() else {
        return ProjectionSummary::default();
    };
    let first = series[0];
    let n = series.len() as f64;
    ProjectionSummary {
        final_balance: last.cumulative_balance,
        avg_monthly_balance: series.iter().map(|p| p.monthly_balance).sum::<f64>() / n,
        worst_month: series
            .iter()
            .map(|p| p.monthly_balance)
            .fold(f64::INFINITY, f64::min),
        best_month: series
            .iter()
            .map(|p| p.monthly_balance)
            .fold(f64::NEG_INFINITY, f64::max),
        trend_per_month: (last.cumulative_balance - first.cumulative_balance) / n,
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub final_balance: f64,
}

/// The three standard parameterizations derived from user-entered growth
/// rates: conservative halves income growth and inflates expense growth,
/// optimistic does the reverse.
pub fn scenario_params(params: &GrowthParams) -> [(&'static str, GrowthParams); 3] {
    let scale = |inc: f64, exp: f64| GrowthParams {
        income_growth_pct: params.income_growth_pct * inc,
        expense_growth_pct: params.expense_growth_pct * exp,
        additional_monthly_expense: params.additional_monthly_expense,
    };
    [
        ("Conservador", scale(0.5, 1.2)),
        ("Realista", scale(1.0, 1.0)),
        ("Optimista", scale(1.5, 0.8)),
    ]
}

/// Run all three scenarios, reporting each final cumulative balance plus
/// the realistic scenario's full series for detailed rendering.
pub fn project_scenarios(
    baseline: &Baseline,
    params: &GrowthParams,
    months: u32,
) -> (Vec<ScenarioOutcome>, Vec<MonthlyProjection>) {
    let mut outcomes = Vec::new();
    let mut realistic = Vec::new();
    for (name, scenario) in scenario_params(params) {
        let series = project(baseline, &scenario, months);
        outcomes.push(ScenarioOutcome {
            name,
            final_balance: series.last().map(|p| p.cumulative_balance).unwrap_or(0.0),
        });
        if name == "Realista" {
            realistic = series;
        }
    }
    (outcomes, realistic)
}
