// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use plata::validate::{
    validate_debt, validate_income, validate_recurring_expense, validate_savings_goal,
    validate_single_expense, ValidationError,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn today() -> NaiveDate {
    d(2025, 6, 15)
}

#[test]
fn income_rules_short_circuit_in_order() {
    let today = today();
    // Blank description wins even when the amount is also bad.
    assert_eq!(
        validate_income("  ", -5.0, today, today),
        Err(ValidationError::DescriptionRequired)
    );
    assert_eq!(
        validate_income("Salary", 0.0, today, today),
        Err(ValidationError::NonPositiveAmount)
    );
    assert_eq!(
        validate_income("Salary", 100.0, d(2025, 6, 16), today),
        Err(ValidationError::FutureIncomeDate)
    );
    assert_eq!(validate_income("Salary", 100.0, today, today), Ok(()));
}

#[test]
fn single_expenses_reject_future_dates() {
    let today = today();
    assert_eq!(
        validate_single_expense("Groceries", 50.0, d(2025, 7, 1), today),
        Err(ValidationError::FutureSingleExpense)
    );
    assert_eq!(
        validate_single_expense("Groceries", 50.0, today, today),
        Ok(())
    );
}

#[test]
fn recurring_expenses_may_start_up_to_two_years_ahead() {
    let today = today();
    assert_eq!(
        validate_recurring_expense("Gym", 40.0, d(2027, 6, 15), today),
        Ok(())
    );
    assert_eq!(
        validate_recurring_expense("Gym", 40.0, d(2027, 6, 16), today),
        Err(ValidationError::RecurringTooFarAhead)
    );
}

#[test]
fn debt_rules_cover_payment_total_and_rate() {
    assert_eq!(
        validate_debt("Card", 0.0, 1000.0, 5.0),
        Err(ValidationError::NonPositivePayment)
    );
    assert_eq!(
        validate_debt("Card", 100.0, 0.0, 5.0),
        Err(ValidationError::NonPositiveTotalDebt)
    );
    assert_eq!(
        validate_debt("Card", 100.0, 1000.0, -1.0),
        Err(ValidationError::NegativeInterestRate)
    );
    assert_eq!(
        validate_debt("Card", 2000.0, 1000.0, 5.0),
        Err(ValidationError::PaymentExceedsTotal)
    );
    // Zero interest and payment equal to the total are both fine.
    assert_eq!(validate_debt("Card", 1000.0, 1000.0, 0.0), Ok(()));
}

#[test]
fn savings_goal_target_date_must_be_strictly_future() {
    let today = today();
    assert_eq!(
        validate_savings_goal("Viaje", 2400.0, 200.0, today, today),
        Err(ValidationError::TargetDateNotFuture)
    );
    assert_eq!(
        validate_savings_goal("Viaje", 2400.0, 200.0, d(2025, 6, 16), today),
        Ok(())
    );
    assert_eq!(
        validate_savings_goal("Viaje", 0.0, 200.0, d(2026, 1, 1), today),
        Err(ValidationError::NonPositiveTarget)
    );
    assert_eq!(
        validate_savings_goal("Viaje", 2400.0, 0.0, d(2026, 1, 1), today),
        Err(ValidationError::NonPositiveMonthlySaving)
    );
}
