// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use plata::models::{remaining_months, DebtRecord};

#[test]
fn zero_rate_divides_evenly() {
    assert_eq!(remaining_months(1000.0, 300.0, 0.0), Some(4));
    assert_eq!(remaining_months(900.0, 300.0, 0.0), Some(3));
}

#[test]
fn payment_below_monthly_interest_never_pays_off() {
    // 12% annual = 1% monthly; interest alone is 100 per month.
    assert_eq!(remaining_months(10_000.0, 50.0, 12.0), None);
    assert_eq!(remaining_months(10_000.0, 100.0, 12.0), None);
}

#[test]
fn amortization_formula_matches_month_by_month_simulation() {
    let (total, payment, rate) = (10_000.0, 966.64, 12.0);
    let formula = remaining_months(total, payment, rate).unwrap();

    let monthly_rate = rate / 100.0 / 12.0;
    let mut balance = total;
    let mut simulated = 0u32;
    while balance > 0.0 {
        balance = balance * (1.0 + monthly_rate) - payment;
        simulated += 1;
        assert!(simulated < 1000, "simulation diverged");
    }

    assert!(formula >= 1);
    assert!(
        (i64::from(formula) - i64::from(simulated)).abs() <= 1,
        "formula {} vs simulated {}",
        formula,
        simulated
    );
}

#[test]
fn debt_record_snapshots_horizon_at_creation() {
    let debt = DebtRecord::new(1, "Car loan".to_string(), 966.64, 10_000.0, 12.0);
    assert_eq!(debt.remaining_months, Some(11));

    let underwater = DebtRecord::new(2, "Card".to_string(), 50.0, 10_000.0, 12.0);
    assert_eq!(underwater.remaining_months, None);
}
