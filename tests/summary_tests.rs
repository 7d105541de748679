// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use plata::models::{DateFilter, DebtRecord, ExpenseRecord, IncomeFrequency, IncomeRecord, SavingsGoal};
use plata::recurring::{generate, RecurringTemplate};
use plata::summary::{
    category_chart, dashboard, expense_total, expenses_by_category, general_stats, income_total,
    monthly_report, period_summary, recurring_groups, savings_advice, total_monthly_expenses,
    total_monthly_income, trend_analysis, PeriodPreset,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn income(id: i64, amount: f64, frequency: IncomeFrequency, date: NaiveDate) -> IncomeRecord {
    IncomeRecord::new(id, format!("income-{}", id), amount, frequency, date)
}

fn expense(id: i64, amount: f64, category: &str, date: NaiveDate) -> ExpenseRecord {
    ExpenseRecord::single(id, format!("expense-{}", id), amount, category.to_string(), date)
}

#[test]
fn monthly_amount_uses_frequency_factors() {
    let today = d(2025, 6, 15);
    assert!((income(1, 100.0, IncomeFrequency::Weekly, today).monthly_amount - 433.0).abs() < 1e-9);
    assert!((income(2, 100.0, IncomeFrequency::Biweekly, today).monthly_amount - 200.0).abs() < 1e-9);
    assert!((income(3, 100.0, IncomeFrequency::Monthly, today).monthly_amount - 100.0).abs() < 1e-9);
    assert!((income(4, 1200.0, IncomeFrequency::Irregular, today).monthly_amount - 100.0).abs() < 1e-9);
}

#[test]
fn unfiltered_totals_are_asymmetric_between_incomes_and_expenses() {
    let today = d(2025, 6, 15);
    // A years-old irregular income still contributes its monthly equivalent.
    let incomes = vec![income(1, 1200.0, IncomeFrequency::Irregular, d(2022, 3, 1))];
    // Historical expenses outside the current month contribute nothing.
    let expenses = vec![
        expense(10, 80.0, "Comida", d(2025, 5, 20)),
        expense(11, 50.0, "Comida", d(2024, 6, 15)),
    ];

    let filter = DateFilter::inactive();
    assert!((income_total(&incomes, &filter) - 100.0).abs() < 1e-9);
    assert_eq!(expense_total(&expenses, &filter, today), 0.0);
}

#[test]
fn current_month_expenses_are_scoped_by_month_and_year() {
    let today = d(2025, 6, 15);
    let expenses = vec![
        expense(1, 30.0, "Comida", d(2025, 6, 1)),
        expense(2, 20.0, "Comida", d(2025, 6, 30)),
        expense(3, 99.0, "Comida", d(2024, 6, 10)), // same month, other year
    ];
    assert!((total_monthly_expenses(&expenses, today) - 50.0).abs() < 1e-9);
}

#[test]
fn active_filter_sums_raw_amounts_on_both_sides() {
    let today = d(2025, 6, 15);
    let incomes = vec![
        income(1, 100.0, IncomeFrequency::Weekly, d(2025, 5, 10)),
        income(2, 500.0, IncomeFrequency::Monthly, d(2025, 1, 10)),
    ];
    let expenses = vec![
        expense(10, 80.0, "Comida", d(2025, 5, 20)),
        expense(11, 40.0, "Comida", d(2025, 2, 20)),
    ];

    let filter = DateFilter::between(d(2025, 5, 1), d(2025, 5, 31));
    // Raw amount (100), not the weekly monthly equivalent (433).
    assert!((income_total(&incomes, &filter) - 100.0).abs() < 1e-9);
    assert!((expense_total(&expenses, &filter, today) - 80.0).abs() < 1e-9);
}

#[test]
fn filter_bounds_are_inclusive() {
    let filter = DateFilter::between(d(2025, 5, 1), d(2025, 5, 31));
    assert!(filter.contains(d(2025, 5, 1)));
    assert!(filter.contains(d(2025, 5, 31)));
    assert!(!filter.contains(d(2025, 4, 30)));
    assert!(!filter.contains(d(2025, 6, 1)));
}

#[test]
fn category_totals_cover_all_records_when_unfiltered() {
    let expenses = vec![
        expense(1, 30.0, "Comida", d(2023, 1, 1)),
        expense(2, 20.0, "Comida", d(2025, 6, 1)),
        expense(3, 10.0, "Transporte", d(2024, 2, 2)),
    ];
    let totals = expenses_by_category(&expenses, &DateFilter::inactive());
    assert!((totals["Comida"] - 50.0).abs() < 1e-9);
    assert!((totals["Transporte"] - 10.0).abs() < 1e-9);
}

#[test]
fn category_chart_folds_debts_in_as_synthetic_category() {
    let expenses = vec![expense(1, 300.0, "Comida", d(2025, 6, 1))];
    let debts = vec![DebtRecord::new(1, "Card".to_string(), 100.0, 1000.0, 0.0)];
    let chart = category_chart(&expenses, &debts, &DateFilter::inactive());

    let debt_share = chart.iter().find(|c| c.category == "Pagos de Deudas").unwrap();
    assert!((debt_share.amount - 100.0).abs() < 1e-9);
    assert!((debt_share.pct - 25.0).abs() < 1e-9);
}

#[test]
fn recurring_groups_find_the_earliest_future_occurrence() {
    let today = d(2025, 6, 15);
    let rent = RecurringTemplate {
        description: "Arriendo".to_string(),
        amount: 800.0,
        category: "Vivienda".to_string(),
        start_date: d(2025, 4, 1),
        frequency: plata::models::RecurringFrequency::Monthly,
        end_date: Some(d(2025, 9, 30)),
    };
    let gym = RecurringTemplate {
        description: "Gym".to_string(),
        amount: 40.0,
        category: "Vivienda".to_string(), // shares the category on purpose
        start_date: d(2025, 1, 1),
        frequency: plata::models::RecurringFrequency::Monthly,
        end_date: Some(d(2025, 3, 31)),
    };

    let mut expenses = generate(&rent, today, 1_000);
    expenses.extend(generate(&gym, today, 2_000));

    let groups = recurring_groups(&expenses, today);
    assert_eq!(groups.len(), 2);

    let rent_group = groups.iter().find(|g| g.description == "Arriendo").unwrap();
    assert_eq!(rent_group.occurrences, 6);
    assert_eq!(rent_group.next_occurrence, Some(d(2025, 7, 1)));

    // Every gym occurrence has elapsed: the group is completed.
    let gym_group = groups.iter().find(|g| g.description == "Gym").unwrap();
    assert_eq!(gym_group.occurrences, 3);
    assert_eq!(gym_group.next_occurrence, None);
}

#[test]
fn monthly_report_guards_zero_expense_percentages() {
    let incomes = vec![income(1, 2000.0, IncomeFrequency::Monthly, d(2025, 1, 1))];
    let debts = vec![DebtRecord::new(1, "Card".to_string(), 100.0, 1000.0, 0.0)];
    let report = monthly_report(&incomes, &[], &debts, 2025, 6);

    assert_eq!(report.expenses, 0.0);
    assert!((report.balance - 1900.0).abs() < 1e-9);
    assert!(report.by_category.is_empty());

    // With expenses, shares are percentages of the month's total.
    let expenses = vec![
        expense(1, 75.0, "Comida", d(2025, 6, 2)),
        expense(2, 25.0, "Transporte", d(2025, 6, 3)),
    ];
    let report = monthly_report(&incomes, &expenses, &debts, 2025, 6);
    let food = report.by_category.iter().find(|c| c.category == "Comida").unwrap();
    assert!((food.pct - 75.0).abs() < 1e-9);
}

#[test]
fn dashboard_combines_totals_and_capacity() {
    let today = d(2025, 6, 15);
    let incomes = vec![income(1, 3000.0, IncomeFrequency::Monthly, d(2025, 1, 1))];
    let expenses = vec![expense(1, 1200.0, "Comida", d(2025, 6, 1))];
    let debts = vec![DebtRecord::new(1, "Card".to_string(), 300.0, 3000.0, 0.0)];
    let savings = vec![SavingsGoal::new(1, "Viaje".to_string(), 2400.0, 200.0, d(2026, 6, 1))];

    let d = dashboard(&incomes, &expenses, &debts, &savings, &DateFilter::inactive(), today);
    assert!((d.expenses_and_debts - 1500.0).abs() < 1e-9);
    assert!((d.remaining_balance - 1300.0).abs() < 1e-9);
    assert!((d.spending_capacity - 2500.0).abs() < 1e-9);
}

#[test]
fn period_summary_reports_daily_average_over_inclusive_days() {
    let incomes = vec![income(1, 100.0, IncomeFrequency::Monthly, d(2025, 5, 10))];
    let expenses = vec![expense(1, 310.0, "Comida", d(2025, 5, 20))];
    let filter = DateFilter::between(d(2025, 5, 1), d(2025, 5, 31));

    let p = period_summary(&incomes, &expenses, &[], &[], &filter).unwrap();
    assert_eq!(p.days, 31);
    assert!((p.avg_daily_expense - 10.0).abs() < 1e-9);
    assert!((p.balance - (100.0 - 310.0)).abs() < 1e-9);

    assert!(period_summary(&incomes, &expenses, &[], &[], &DateFilter::inactive()).is_none());
}

#[test]
fn period_presets_compute_calendar_ranges() {
    let today = d(2025, 6, 15);
    assert_eq!(
        PeriodPreset::CurrentMonth.range(today),
        (d(2025, 6, 1), d(2025, 6, 30))
    );
    assert_eq!(
        PeriodPreset::LastMonth.range(today),
        (d(2025, 5, 1), d(2025, 5, 31))
    );
    assert_eq!(
        PeriodPreset::CurrentQuarter.range(today),
        (d(2025, 4, 1), d(2025, 6, 30))
    );
    assert_eq!(
        PeriodPreset::LastQuarter.range(today),
        (d(2025, 1, 1), d(2025, 3, 31))
    );
    assert_eq!(
        PeriodPreset::Last6Months.range(today),
        (d(2024, 12, 1), d(2025, 5, 31))
    );
    assert_eq!(
        PeriodPreset::LastYear.range(today),
        (d(2024, 1, 1), d(2024, 12, 31))
    );
}

#[test]
fn last_quarter_wraps_into_the_previous_year() {
    let today = d(2025, 2, 10);
    assert_eq!(
        PeriodPreset::LastQuarter.range(today),
        (d(2024, 10, 1), d(2024, 12, 31))
    );
}

#[test]
fn trend_analysis_compares_against_the_previous_month() {
    let today = d(2025, 6, 15);
    let incomes = vec![income(1, 2000.0, IncomeFrequency::Monthly, d(2025, 1, 1))];
    let expenses = vec![
        expense(1, 600.0, "Comida", d(2025, 6, 5)),
        expense(2, 500.0, "Comida", d(2025, 5, 5)),
    ];
    let savings = vec![SavingsGoal::new(1, "Viaje".to_string(), 2400.0, 200.0, d(2026, 6, 1))];

    let t = trend_analysis(&incomes, &expenses, &[], &savings, today);
    assert!((t.this_month_expenses - 600.0).abs() < 1e-9);
    assert!((t.last_month_expenses - 500.0).abs() < 1e-9);
    assert!((t.expense_change_pct - 20.0).abs() < 1e-9);
    assert!((t.remaining_balance - 1200.0).abs() < 1e-9);
    assert!((t.savings_rate_pct - 10.0).abs() < 1e-9);
}

#[test]
fn trend_analysis_without_history_or_income_reports_zero_percent() {
    let today = d(2025, 6, 15);
    // No expenses last month: the change percent is 0, not a division blowup.
    let expenses = vec![expense(1, 600.0, "Comida", d(2025, 6, 5))];
    let savings = vec![SavingsGoal::new(1, "Viaje".to_string(), 2400.0, 200.0, d(2026, 6, 1))];

    let t = trend_analysis(&[], &expenses, &[], &savings, today);
    assert_eq!(t.expense_change_pct, 0.0);
    // No income: the savings rate is 0% rather than NaN or infinity.
    assert_eq!(t.savings_rate_pct, 0.0);
    assert!(t.savings_rate_pct.is_finite());
}

#[test]
fn general_stats_derive_targets_from_the_configured_goals() {
    let today = d(2025, 6, 15);
    let incomes = vec![income(1, 2000.0, IncomeFrequency::Monthly, d(2025, 1, 1))];
    let expenses = vec![expense(1, 800.0, "Comida", d(2025, 6, 5))];
    let savings = vec![SavingsGoal::new(1, "Viaje".to_string(), 2400.0, 200.0, d(2026, 6, 1))];

    let stats = general_stats(&incomes, &expenses, &[], &savings, 25.0, 9.0, today);
    assert_eq!(stats.record_count, 3);
    assert!((stats.target_savings - 500.0).abs() < 1e-9);
    assert!((stats.emergency_target - 7200.0).abs() < 1e-9);
    assert!((stats.savings_efficiency_pct - 10.0).abs() < 1e-9);
}

#[test]
fn general_stats_without_income_report_zero_efficiency() {
    let today = d(2025, 6, 15);
    let savings = vec![SavingsGoal::new(1, "Viaje".to_string(), 2400.0, 200.0, d(2026, 6, 1))];

    let stats = general_stats(&[], &[], &[], &savings, 20.0, 6.0, today);
    assert_eq!(stats.savings_efficiency_pct, 0.0);
    assert!(stats.savings_efficiency_pct.is_finite());
    assert_eq!(stats.target_savings, 0.0);
}

#[test]
fn savings_advice_splits_the_monthly_surplus() {
    let today = d(2025, 6, 15);
    let incomes = vec![income(1, 3000.0, IncomeFrequency::Monthly, d(2025, 1, 1))];
    let expenses = vec![expense(1, 1400.0, "Comida", d(2025, 6, 5))];
    let debts = vec![DebtRecord::new(1, "Card".to_string(), 600.0, 6000.0, 0.0)];

    let advice = savings_advice(&incomes, &expenses, &debts, today);
    assert!((advice.available - 1000.0).abs() < 1e-9);
    assert!((advice.rule_20_pct - 600.0).abs() < 1e-9);
    // Six months of expenses plus debt payments.
    assert!((advice.emergency_fund - 12_000.0).abs() < 1e-9);
    assert!((advice.conservative - 500.0).abs() < 1e-9);
    assert!((advice.aggressive - 800.0).abs() < 1e-9);
}

#[test]
fn savings_advice_reports_a_deficit_as_negative_availability() {
    let today = d(2025, 6, 15);
    let incomes = vec![income(1, 1000.0, IncomeFrequency::Monthly, d(2025, 1, 1))];
    let expenses = vec![expense(1, 1300.0, "Comida", d(2025, 6, 5))];

    let advice = savings_advice(&incomes, &expenses, &[], today);
    assert!((advice.available - (-300.0)).abs() < 1e-9);
    assert!((advice.conservative - (-150.0)).abs() < 1e-9);
}

#[test]
fn total_monthly_income_ignores_record_dates() {
    let incomes = vec![
        income(1, 1000.0, IncomeFrequency::Monthly, d(2020, 1, 1)),
        income(2, 100.0, IncomeFrequency::Biweekly, d(2025, 6, 1)),
    ];
    assert!((total_monthly_income(&incomes) - 1200.0).abs() < 1e-9);
}
