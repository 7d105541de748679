// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use thiserror::Error;

use crate::utils::years_ahead;

/// How far ahead a recurring expense may be scheduled to start.
const RECURRING_MAX_YEARS_AHEAD: i32 = 2;

/// Named precondition failures, checked before any record reaches the
/// store. Checks short-circuit on the first violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    #[error("Income dates cannot be in the future")]
    FutureIncomeDate,
    #[error("Single expenses cannot be dated in the future")]
    FutureSingleExpense,
    #[error("Recurring expenses cannot be scheduled more than 2 years ahead")]
    RecurringTooFarAhead,
    #[error("Monthly payment must be greater than 0")]
    NonPositivePayment,
    #[error("Total debt must be greater than 0")]
    NonPositiveTotalDebt,
    #[error("Interest rate cannot be negative")]
    NegativeInterestRate,
    #[error("Monthly payment cannot exceed the total debt")]
    PaymentExceedsTotal,
    #[error("Target amount must be greater than 0")]
    NonPositiveTarget,
    #[error("Monthly saving must be greater than 0")]
    NonPositiveMonthlySaving,
    #[error("Target date must be in the future")]
    TargetDateNotFuture,
}

pub fn validate_income(
    description: &str,
    amount: f64,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    if date > today {
        return Err(ValidationError::FutureIncomeDate);
    }
    Ok(())
}

pub fn validate_single_expense(
    description: &str,
    amount: f64,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    if date > today {
        return Err(ValidationError::FutureSingleExpense);
    }
    Ok(())
}

pub fn validate_recurring_expense(
    description: &str,
    amount: f64,
    start_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    if start_date > years_ahead(today, RECURRING_MAX_YEARS_AHEAD) {
        return Err(ValidationError::RecurringTooFarAhead);
    }
    Ok(())
}

pub fn validate_debt(
    description: &str,
    monthly_payment: f64,
    total_debt: f64,
    interest_rate: f64,
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if monthly_payment <= 0.0 {
        return Err(ValidationError::NonPositivePayment);
    }
    if total_debt <= 0.0 {
        return Err(ValidationError::NonPositiveTotalDebt);
    }
    if interest_rate < 0.0 {
        return Err(ValidationError::NegativeInterestRate);
    }
    if monthly_payment > total_debt {
        return Err(ValidationError::PaymentExceedsTotal);
    }
    Ok(())
}

pub fn validate_savings_goal(
    description: &str,
    target: f64,
    monthly_amount: f64,
    target_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if target <= 0.0 {
        return Err(ValidationError::NonPositiveTarget);
    }
    if monthly_amount <= 0.0 {
        return Err(ValidationError::NonPositiveMonthlySaving);
    }
    if target_date <= today {
        return Err(ValidationError::TargetDateNotFuture);
    }
    Ok(())
}
