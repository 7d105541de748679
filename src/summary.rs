// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};

use crate::models::{
    DateFilter, DebtRecord, ExpenseKind, ExpenseRecord, IncomeRecord, RecurringFrequency,
    SavingsGoal,
};
use crate::utils::{month_first, month_last, percentage, rollover_date};

/// Sum of every income's precomputed monthly equivalent. Deliberately not
/// date-scoped: incomes are a recurring monthly baseline whatever their
/// recorded date.
pub fn total_monthly_income(incomes: &[IncomeRecord]) -> f64 {
    incomes.iter().map(|i| i.monthly_amount).sum()
}

/// Sum of expense amounts dated in `today`'s calendar month.
pub fn total_monthly_expenses(expenses: &[ExpenseRecord], today: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        .map(|e| e.amount)
        .sum()
}

/// Committed monthly debt payments; never date-filtered.
pub fn total_monthly_debts(debts: &[DebtRecord]) -> f64 {
    debts.iter().map(|d| d.monthly_payment).sum()
}

/// Committed monthly savings contributions; never date-filtered.
pub fn total_monthly_savings(savings: &[SavingsGoal]) -> f64 {
    savings.iter().map(|s| s.monthly_amount).sum()
}

/// Income total under an optional filter. Active filters sum raw amounts of
/// in-range records; inactive falls back to the monthly baseline.
pub fn income_total(incomes: &[IncomeRecord], filter: &DateFilter) -> f64 {
    if !filter.active {
        return total_monthly_income(incomes);
    }
    incomes
        .iter()
        .filter(|i| filter.contains(i.date))
        .map(|i| i.amount)
        .sum()
}

/// Expense total under an optional filter. Inactive falls back to the
/// current calendar month.
pub fn expense_total(expenses: &[ExpenseRecord], filter: &DateFilter, today: NaiveDate) -> f64 {
    if !filter.active {
        return total_monthly_expenses(expenses, today);
    }
    expenses
        .iter()
        .filter(|e| filter.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Per-category expense totals. Inactive filters cover every expense on
/// record, not just the current month.
pub fn expenses_by_category(expenses: &[ExpenseRecord], filter: &DateFilter) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for e in expenses {
        if filter.active && !filter.contains(e.date) {
            continue;
        }
        *totals.entry(e.category.clone()).or_insert(0.0) += e.amount;
    }
    totals
}

#[derive(Debug, Clone)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub pct: f64,
}

/// Category breakdown with debts folded in as a synthetic category, as the
/// dashboard chart shows it. Percentages are of the combined total.
pub fn category_chart(
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    filter: &DateFilter,
) -> Vec<CategoryShare> {
    let mut totals = expenses_by_category(expenses, filter);
    let debt_total = total_monthly_debts(debts);
    if debt_total > 0.0 {
        *totals.entry("Pagos de Deudas".to_string()).or_insert(0.0) += debt_total;
    }
    let total: f64 = totals.values().sum();
    totals
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category,
            pct: percentage(amount, total),
            amount,
        })
        .collect()
}

/// One recurring template reconstructed from its generated occurrences.
#[derive(Debug, Clone)]
pub struct RecurringGroup {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub frequency: Option<RecurringFrequency>,
    pub occurrences: usize,
    /// Earliest occurrence strictly after `today`; `None` once the series
    /// has fully elapsed ("completed").
    pub next_occurrence: Option<NaiveDate>,
}

/// Group recurring instances by their template key, in first-seen order.
pub fn recurring_groups(expenses: &[ExpenseRecord], today: NaiveDate) -> Vec<RecurringGroup> {
    let mut order: Vec<&str> = Vec::new();
    let mut grouped: BTreeMap<&str, Vec<&ExpenseRecord>> = BTreeMap::new();
    for e in expenses.iter().filter(|e| e.kind == ExpenseKind::Recurring) {
        let key = e.group_key();
        if !grouped.contains_key(key) {
            order.push(key);
        }
        grouped.entry(key).or_default().push(e);
    }

    order
        .into_iter()
        .map(|key| {
            let group = &grouped[key];
            let first = group[0];
            let mut dates: Vec<NaiveDate> = group.iter().map(|e| e.date).collect();
            dates.sort();
            RecurringGroup {
                description: key.to_string(),
                amount: first.amount,
                category: first.category.clone(),
                frequency: first.frequency,
                occurrences: group.len(),
                next_occurrence: dates.into_iter().find(|d| *d > today),
            }
        })
        .collect()
}

/// Dashboard totals. Debts and savings are always the committed monthly
/// sums, filter or not.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub income: f64,
    pub expenses: f64,
    pub debts: f64,
    pub savings: f64,
    pub expenses_and_debts: f64,
    pub remaining_balance: f64,
    pub spending_capacity: f64,
}

pub fn dashboard(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    savings: &[SavingsGoal],
    filter: &DateFilter,
    today: NaiveDate,
) -> Dashboard {
    let income = income_total(incomes, filter);
    let expense = expense_total(expenses, filter, today);
    let debt = total_monthly_debts(debts);
    let saving = total_monthly_savings(savings);
    Dashboard {
        income,
        expenses: expense,
        debts: debt,
        savings: saving,
        expenses_and_debts: expense + debt,
        remaining_balance: income - (expense + debt) - saving,
        spending_capacity: income - debt - saving,
    }
}

#[derive(Debug, Clone)]
pub struct PeriodSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub days: i64,
    pub avg_daily_expense: f64,
}

/// Period figures for an active filter; `None` when no filter is set.
pub fn period_summary(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    savings: &[SavingsGoal],
    filter: &DateFilter,
) -> Option<PeriodSummary> {
    if !filter.active {
        return None;
    }
    let (from, to) = (filter.from?, filter.to?);
    let income = income_total(incomes, filter);
    // Today is irrelevant here: the filter is active.
    let expense = expense_total(expenses, filter, from);
    let balance = income - (expense + total_monthly_debts(debts)) - total_monthly_savings(savings);
    let days = (to - from).num_days() + 1;
    Some(PeriodSummary {
        income,
        expenses: expense,
        balance,
        days,
        avg_daily_expense: expense / days as f64,
    })
}

#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub debts: f64,
    pub balance: f64,
    pub by_category: Vec<CategoryShare>,
}

/// Expense breakdown for one calendar month against the monthly income and
/// debt baselines.
pub fn monthly_report(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    year: i32,
    month: u32,
) -> MonthlyReport {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for e in expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
    {
        *totals.entry(e.category.clone()).or_insert(0.0) += e.amount;
    }
    let total: f64 = totals.values().sum();
    let income = total_monthly_income(incomes);
    let debt = total_monthly_debts(debts);
    MonthlyReport {
        year,
        month,
        income,
        expenses: total,
        debts: debt,
        balance: income - total - debt,
        by_category: totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                pct: percentage(amount, total),
                amount,
            })
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct AnnualReport {
    pub year: i32,
    pub annual_income: f64,
    pub annual_debts: f64,
    pub total_expenses: f64,
    pub avg_monthly_expenses: f64,
    pub by_category: Vec<CategoryShare>,
}

pub fn annual_report(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    year: i32,
) -> AnnualReport {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for e in expenses.iter().filter(|e| e.date.year() == year) {
        *totals.entry(e.category.clone()).or_insert(0.0) += e.amount;
    }
    let total: f64 = totals.values().sum();
    AnnualReport {
        year,
        annual_income: total_monthly_income(incomes) * 12.0,
        annual_debts: total_monthly_debts(debts) * 12.0,
        total_expenses: total,
        avg_monthly_expenses: total / 12.0,
        by_category: totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                pct: percentage(amount, total),
                amount,
            })
            .collect(),
    }
}

/// All-time per-category totals, largest first.
pub fn category_report(expenses: &[ExpenseRecord]) -> Vec<CategoryShare> {
    let mut shares = category_chart(expenses, &[], &DateFilter::inactive());
    shares.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    shares
}

#[derive(Debug, Clone)]
pub struct TrendAnalysis {
    pub this_month_expenses: f64,
    pub last_month_expenses: f64,
    /// Percent change vs last month; 0 when there is no last-month data.
    pub expense_change_pct: f64,
    pub remaining_balance: f64,
    pub savings_rate_pct: f64,
}

pub fn trend_analysis(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    savings: &[SavingsGoal],
    today: NaiveDate,
) -> TrendAnalysis {
    let this_month = total_monthly_expenses(expenses, today);
    let last_month_ref = month_first(today, -1);
    let last_month = total_monthly_expenses(expenses, last_month_ref);
    let change = if last_month > 0.0 {
        (this_month - last_month) / last_month * 100.0
    } else {
        0.0
    };

    let income = total_monthly_income(incomes);
    let debt = total_monthly_debts(debts);
    let saving = total_monthly_savings(savings);
    TrendAnalysis {
        this_month_expenses: this_month,
        last_month_expenses: last_month,
        expense_change_pct: change,
        remaining_balance: income - (this_month + debt) - saving,
        savings_rate_pct: percentage(saving, income),
    }
}

#[derive(Debug, Clone)]
pub struct GeneralStats {
    pub record_count: usize,
    pub monthly_goal_pct: f64,
    pub emergency_fund_months: f64,
    pub target_savings: f64,
    pub emergency_target: f64,
    pub savings_efficiency_pct: f64,
}

pub fn general_stats(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    savings: &[SavingsGoal],
    monthly_goal_pct: f64,
    emergency_fund_months: f64,
    today: NaiveDate,
) -> GeneralStats {
    let income = total_monthly_income(incomes);
    let expense = total_monthly_expenses(expenses, today);
    let saving = total_monthly_savings(savings);
    GeneralStats {
        record_count: incomes.len() + expenses.len() + debts.len() + savings.len(),
        monthly_goal_pct,
        emergency_fund_months,
        target_savings: income * (monthly_goal_pct / 100.0),
        emergency_target: expense * emergency_fund_months,
        savings_efficiency_pct: percentage(saving, income),
    }
}

/// Guidance figures for setting savings goals out of the monthly surplus.
#[derive(Debug, Clone)]
pub struct SavingsAdvice {
    pub available: f64,
    pub rule_20_pct: f64,
    pub emergency_fund: f64,
    pub conservative: f64,
    pub aggressive: f64,
}

pub fn savings_advice(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    today: NaiveDate,
) -> SavingsAdvice {
    let income = total_monthly_income(incomes);
    let committed = total_monthly_expenses(expenses, today) + total_monthly_debts(debts);
    let available = income - committed;
    SavingsAdvice {
        available,
        rule_20_pct: income * 0.2,
        emergency_fund: committed * 6.0,
        conservative: available * 0.5,
        aggressive: available * 0.8,
    }
}

/// Named shortcut ranges for the date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPreset {
    CurrentMonth,
    LastMonth,
    CurrentQuarter,
    LastQuarter,
    CurrentYear,
    LastYear,
    Last6Months,
    Last12Months,
}

impl PeriodPreset {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(match s {
            "current-month" => Self::CurrentMonth,
            "last-month" => Self::LastMonth,
            "current-quarter" => Self::CurrentQuarter,
            "last-quarter" => Self::LastQuarter,
            "current-year" => Self::CurrentYear,
            "last-year" => Self::LastYear,
            "last-6-months" => Self::Last6Months,
            "last-12-months" => Self::Last12Months,
            _ => bail!(
                "Unknown period '{}' (use current-month|last-month|current-quarter|last-quarter|current-year|last-year|last-6-months|last-12-months)",
                s
            ),
        })
    }

    /// Closed [from, to] interval for the preset relative to `today`.
    pub fn range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let year = today.year();
        match self {
            Self::CurrentMonth => (month_first(today, 0), month_last(today, 0)),
            Self::LastMonth => (month_first(today, -1), month_last(today, -1)),
            Self::CurrentQuarter => {
                let q = today.month0() as i32 / 3;
                (
                    rollover_date(year, q * 3, 1),
                    rollover_date(year, (q + 1) * 3, 1) - chrono::Duration::days(1),
                )
            }
            Self::LastQuarter => {
                let q = today.month0() as i32 / 3 - 1;
                let (year, q) = if q < 0 { (year - 1, 3) } else { (year, q) };
                (
                    rollover_date(year, q * 3, 1),
                    rollover_date(year, (q + 1) * 3, 1) - chrono::Duration::days(1),
                )
            }
            Self::CurrentYear => (rollover_date(year, 0, 1), rollover_date(year, 11, 31)),
            Self::LastYear => (rollover_date(year - 1, 0, 1), rollover_date(year - 1, 11, 31)),
            Self::Last6Months => (month_first(today, -6), month_last(today, -1)),
            Self::Last12Months => (month_first(today, -12), month_last(today, -1)),
        }
    }
}
