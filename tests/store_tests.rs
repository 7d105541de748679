// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use plata::models::{
    DebtRecord, ExpenseRecord, IncomeFrequency, IncomeRecord, RecurringFrequency, SavingsGoal,
};
use plata::recurring::{generate, RecurringTemplate};
use plata::store::Store;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_income(id: i64) -> IncomeRecord {
    IncomeRecord::new(
        id,
        "Salary".to_string(),
        2500.0,
        IncomeFrequency::Monthly,
        d(2025, 6, 1),
    )
}

#[test]
fn records_survive_reopening_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plata.sqlite");

    {
        let mut store = Store::open(&path).unwrap();
        store.add_income(sample_income(1)).unwrap();
        store
            .add_expense(ExpenseRecord::single(
                2,
                "Groceries".to_string(),
                120.5,
                "Comida".to_string(),
                d(2025, 6, 3),
            ))
            .unwrap();
        store
            .add_debt(DebtRecord::new(3, "Card".to_string(), 100.0, 1000.0, 0.0))
            .unwrap();
        store
            .add_saving(SavingsGoal::new(
                4,
                "Viaje".to_string(),
                2400.0,
                200.0,
                d(2026, 6, 1),
            ))
            .unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert_eq!(store.incomes.len(), 1);
    assert_eq!(store.expenses.len(), 1);
    assert_eq!(store.debts.len(), 1);
    assert_eq!(store.savings.len(), 1);

    assert_eq!(store.incomes[0].description, "Salary");
    assert!((store.incomes[0].monthly_amount - 2500.0).abs() < 1e-9);
    assert_eq!(store.debts[0].remaining_months, Some(10));
    assert_eq!(store.savings[0].months_to_target, 12);
}

#[test]
fn fresh_store_loads_empty_collections() {
    let store = Store::open_in_memory().unwrap();
    assert!(store.incomes.is_empty());
    assert!(store.expenses.is_empty());
    assert!(store.debts.is_empty());
    assert!(store.savings.is_empty());
}

#[test]
fn garbage_persisted_value_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plata.sqlite");

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE kv(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .unwrap();
        conn.execute(
            "INSERT INTO kv(key, value) VALUES('incomes', 'not json at all')",
            [],
        )
        .unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert!(store.incomes.is_empty());
}

#[test]
fn delete_reports_whether_anything_was_removed() {
    let mut store = Store::open_in_memory().unwrap();
    store.add_income(sample_income(1)).unwrap();

    assert!(!store.delete_income(999).unwrap());
    assert_eq!(store.incomes.len(), 1);
    assert!(store.delete_income(1).unwrap());
    assert!(store.incomes.is_empty());
}

#[test]
fn deleting_a_recurring_group_spares_single_expenses() {
    let mut store = Store::open_in_memory().unwrap();
    let template = RecurringTemplate {
        description: "Gym".to_string(),
        amount: 40.0,
        category: "Salud".to_string(),
        start_date: d(2025, 1, 1),
        frequency: RecurringFrequency::Monthly,
        end_date: Some(d(2025, 4, 30)),
    };
    store
        .add_expenses(generate(&template, d(2025, 6, 1), 100))
        .unwrap();
    // A single expense whose description happens to mention the group.
    store
        .add_expense(ExpenseRecord::single(
            999,
            "Gym shoes".to_string(),
            80.0,
            "Salud".to_string(),
            d(2025, 2, 10),
        ))
        .unwrap();
    assert_eq!(store.expenses.len(), 5);

    let removed = store.delete_recurring_group("Gym").unwrap();
    assert_eq!(removed, 4);
    assert_eq!(store.expenses.len(), 1);
    assert_eq!(store.expenses[0].description, "Gym shoes");

    assert_eq!(store.delete_recurring_group("Gym").unwrap(), 0);
}

#[test]
fn mark_paid_targets_one_occurrence_by_date() {
    let mut store = Store::open_in_memory().unwrap();
    let template = RecurringTemplate {
        description: "Arriendo".to_string(),
        amount: 800.0,
        category: "Vivienda".to_string(),
        start_date: d(2025, 1, 1),
        frequency: RecurringFrequency::Monthly,
        end_date: Some(d(2025, 3, 31)),
    };
    store
        .add_expenses(generate(&template, d(2025, 6, 1), 100))
        .unwrap();

    let today = d(2025, 2, 3);
    assert!(store.mark_paid("Arriendo", d(2025, 2, 1), today).unwrap());
    assert!(!store.mark_paid("Arriendo", d(2025, 7, 1), today).unwrap());

    let paid: Vec<_> = store
        .expenses
        .iter()
        .filter(|e| e.paid == Some(true))
        .collect();
    assert_eq!(paid.len(), 1);
    assert_eq!(paid[0].date, d(2025, 2, 1));
    assert_eq!(paid[0].paid_date, Some(today));
}

#[test]
fn deposits_grow_the_goal_but_not_its_horizon() {
    let mut store = Store::open_in_memory().unwrap();
    store
        .add_saving(SavingsGoal::new(
            1,
            "Viaje".to_string(),
            2400.0,
            200.0,
            d(2026, 6, 1),
        ))
        .unwrap();

    assert!(store.deposit_to_saving(1, 500.0).unwrap());
    assert!(store.deposit_to_saving(1, 100.0).unwrap());
    assert!(!store.deposit_to_saving(999, 50.0).unwrap());

    let goal = &store.savings[0];
    assert!((goal.current_amount - 600.0).abs() < 1e-9);
    assert_eq!(goal.months_to_target, 12);
    assert!((goal.progress_pct() - 25.0).abs() < 1e-9);
}

#[test]
fn backup_and_restore_round_trip() {
    let mut store = Store::open_in_memory().unwrap();
    store.add_income(sample_income(1)).unwrap();
    store
        .add_debt(DebtRecord::new(2, "Card".to_string(), 100.0, 1000.0, 0.0))
        .unwrap();

    store.backup().unwrap();
    store.clear_all().unwrap();
    assert!(store.incomes.is_empty());
    assert!(store.debts.is_empty());

    let timestamp = store.restore().unwrap();
    assert!(timestamp.is_some());
    assert_eq!(store.incomes.len(), 1);
    assert_eq!(store.debts.len(), 1);
    assert_eq!(store.incomes[0].id, 1);
}

#[test]
fn restore_without_backup_returns_none() {
    let mut store = Store::open_in_memory().unwrap();
    assert!(store.restore().unwrap().is_none());
}

#[test]
fn goal_settings_round_trip_through_the_kv_table() {
    let store = Store::open_in_memory().unwrap();
    assert!(store.monthly_goal_pct().unwrap().is_none());
    assert!(store.emergency_fund_months().unwrap().is_none());

    store.set_monthly_goal_pct(25.0).unwrap();
    store.set_emergency_fund_months(9.0).unwrap();
    assert_eq!(store.monthly_goal_pct().unwrap(), Some(25.0));
    assert_eq!(store.emergency_fund_months().unwrap(), Some(9.0));
}

#[test]
fn clear_all_persists_the_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plata.sqlite");

    {
        let mut store = Store::open(&path).unwrap();
        store.add_income(sample_income(1)).unwrap();
        store.clear_all().unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert!(store.incomes.is_empty());
}
