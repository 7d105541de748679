// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};

use crate::models::{ExpenseKind, ExpenseRecord, RecurringFrequency};
use crate::utils::{month_label, rollover_date, years_ahead};

/// Hard cap on occurrences generated from one template, whatever the date
/// bound allows.
pub const MAX_OCCURRENCES: usize = 36;

/// Default planning horizon in years when a template has no end date.
pub const DEFAULT_HORIZON_YEARS: i32 = 3;

#[derive(Debug, Clone)]
pub struct RecurringTemplate {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub start_date: NaiveDate,
    pub frequency: RecurringFrequency,
    pub end_date: Option<NaiveDate>,
}

/// Next date in a recurrence sequence. Day-of-month is preserved where it
/// exists in the target month; otherwise the date rolls over into the
/// following month (Jan 31 -> Mar 3 for monthly).
pub fn next_occurrence(date: NaiveDate, frequency: RecurringFrequency) -> NaiveDate {
    match frequency {
        RecurringFrequency::Monthly => rollover_date(date.year(), date.month0() as i32 + 1, date.day()),
        RecurringFrequency::Quarterly => rollover_date(date.year(), date.month0() as i32 + 3, date.day()),
        RecurringFrequency::Yearly => years_ahead(date, 1),
    }
}

/// Expand a template into its dated occurrences, stepping from the start
/// date until either the effective end bound (explicit end date, or
/// `today` + 3 years) or the occurrence cap cuts the sequence off. A start
/// past the bound yields an empty batch.
///
/// Ids are `id_base + offset` so a batch never collides with itself even
/// when generated in the same instant as other records.
pub fn generate(template: &RecurringTemplate, today: NaiveDate, id_base: i64) -> Vec<ExpenseRecord> {
    let max_date = template
        .end_date
        .unwrap_or_else(|| years_ahead(today, DEFAULT_HORIZON_YEARS));

    let mut out = Vec::new();
    let mut current = template.start_date;
    while current <= max_date && out.len() < MAX_OCCURRENCES {
        out.push(ExpenseRecord {
            id: id_base + out.len() as i64,
            description: format!("{} ({})", template.description, month_label(current)),
            amount: template.amount,
            category: template.category.clone(),
            date: current,
            kind: ExpenseKind::Recurring,
            original_description: Some(template.description.clone()),
            frequency: Some(template.frequency),
            paid: None,
            paid_date: None,
        });
        current = next_occurrence(current, template.frequency);
    }
    out
}
