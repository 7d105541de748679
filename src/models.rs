// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Irregular,
}

impl IncomeFrequency {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(match s {
            "weekly" => Self::Weekly,
            "biweekly" => Self::Biweekly,
            "monthly" => Self::Monthly,
            "irregular" => Self::Irregular,
            _ => bail!("Unknown income frequency '{}' (use weekly|biweekly|monthly|irregular)", s),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Irregular => "irregular",
        }
    }

    /// Multiplier converting a raw amount at this frequency to its monthly
    /// equivalent. Irregular incomes count as a yearly amount spread evenly.
    pub fn monthly_factor(self) -> f64 {
        match self {
            Self::Weekly => 4.33,
            Self::Biweekly => 2.0,
            Self::Monthly => 1.0,
            Self::Irregular => 1.0 / 12.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub frequency: IncomeFrequency,
    pub date: NaiveDate,
    /// Monthly equivalent, snapshotted at creation. Not recomputed on read.
    pub monthly_amount: f64,
}

impl IncomeRecord {
    pub fn new(
        id: i64,
        description: String,
        amount: f64,
        frequency: IncomeFrequency,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            frequency,
            date,
            monthly_amount: amount * frequency.monthly_factor(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Monthly,
    Quarterly,
    Yearly,
}

impl RecurringFrequency {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(match s {
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            "yearly" => Self::Yearly,
            _ => bail!("Unknown recurring frequency '{}' (use monthly|quarterly|yearly)", s),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    #[default]
    Single,
    Recurring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub kind: ExpenseKind,
    /// Template description shared by every occurrence of a recurring
    /// expense; the authoritative grouping key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<RecurringFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

impl ExpenseRecord {
    pub fn single(id: i64, description: String, amount: f64, category: String, date: NaiveDate) -> Self {
        Self {
            id,
            description,
            amount,
            category,
            date,
            kind: ExpenseKind::Single,
            original_description: None,
            frequency: None,
            paid: None,
            paid_date: None,
        }
    }

    /// Grouping key for recurring occurrences. Prefers the explicit
    /// `originalDescription`; falls back to stripping the generated
    /// " (month year)" suffix for legacy records that predate the field.
    pub fn group_key(&self) -> &str {
        match &self.original_description {
            Some(d) => d,
            None => self.description.split(" (").next().unwrap_or(&self.description),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRecord {
    pub id: i64,
    pub description: String,
    pub monthly_payment: f64,
    pub total_debt: f64,
    /// Annual interest rate in percent.
    pub interest_rate: f64,
    /// Payoff horizon snapshotted at creation; `None` means the payment
    /// never covers the monthly interest.
    pub remaining_months: Option<u32>,
}

impl DebtRecord {
    pub fn new(id: i64, description: String, monthly_payment: f64, total_debt: f64, interest_rate: f64) -> Self {
        Self {
            id,
            description,
            monthly_payment,
            total_debt,
            interest_rate,
            remaining_months: remaining_months(total_debt, monthly_payment, interest_rate),
        }
    }
}

/// Closed-form amortization horizon: months needed to pay `total` at
/// `payment` per month under an annual `rate` percent. `None` when the
/// payment does not cover the monthly interest.
pub fn remaining_months(total: f64, payment: f64, rate: f64) -> Option<u32> {
    if rate == 0.0 {
        return Some((total / payment).ceil() as u32);
    }
    let monthly_rate = rate / 100.0 / 12.0;
    if payment <= total * monthly_rate {
        return None;
    }
    let months = -(1.0 - total * monthly_rate / payment).ln() / (1.0 + monthly_rate).ln();
    Some(months.ceil() as u32)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: i64,
    pub description: String,
    pub target: f64,
    pub monthly_amount: f64,
    pub target_date: NaiveDate,
    /// Grows with deposits; starts at zero.
    pub current_amount: f64,
    /// Snapshotted at creation from target / monthly; deposits do not
    /// shrink it.
    pub months_to_target: u32,
}

impl SavingsGoal {
    pub fn new(id: i64, description: String, target: f64, monthly_amount: f64, target_date: NaiveDate) -> Self {
        Self {
            id,
            description,
            target,
            monthly_amount,
            target_date,
            current_amount: 0.0,
            months_to_target: (target / monthly_amount).ceil() as u32,
        }
    }

    /// Progress toward the target, capped at 100%.
    pub fn progress_pct(&self) -> f64 {
        (self.current_amount / self.target * 100.0).min(100.0)
    }
}

/// Optional closed [from, to] interval restricting dated aggregates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub active: bool,
}

impl DateFilter {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            active: true,
        }
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => date >= from && date <= to,
            _ => false,
        }
    }
}
