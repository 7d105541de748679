// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

/// Short month names as rendered by `toLocaleDateString('es-ES', ...)`,
/// used in generated recurring-expense descriptions.
const SHORT_MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parse a `YYYY-MM` report month into (year, month).
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok((d.year(), d.month()))
}

pub fn parse_amount(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

pub fn fmt_money(v: f64) -> String {
    format!("${:.2}", v)
}

/// Localized "ene 2024" style label for a recurring occurrence.
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", SHORT_MONTHS_ES[date.month0() as usize], date.year())
}

/// Build a date from a year, a zero-based month that may fall outside 0..12,
/// and a day-of-month that may exceed the target month's length. Out-of-range
/// components roll over into adjacent months/years, matching native
/// date-object arithmetic (Jan 31 + 1 month = Mar 3, not Feb 28).
pub fn rollover_date(year: i32, month0: i32, day: u32) -> NaiveDate {
    let year = year + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;
    // The first of a normalized month always exists.
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
    first + Duration::days(i64::from(day) - 1)
}

/// First day of the month `offset` months away from `today`'s month.
pub fn month_first(today: NaiveDate, offset: i32) -> NaiveDate {
    rollover_date(today.year(), today.month0() as i32 + offset, 1)
}

/// Last day of the month `offset` months away from `today`'s month.
pub fn month_last(today: NaiveDate, offset: i32) -> NaiveDate {
    month_first(today, offset + 1) - Duration::days(1)
}

/// Same calendar day `years` ahead, rolling Feb 29 over into Mar 1 when the
/// target year is not a leap year.
pub fn years_ahead(date: NaiveDate, years: i32) -> NaiveDate {
    rollover_date(date.year() + years, date.month0() as i32, date.day())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Share of `part` in `total` as a percent; zero totals yield 0 rather
/// than NaN.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}
