// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, Local, NaiveDate};

use crate::commands::parse_filter;
use crate::models::{DateFilter, DebtRecord, ExpenseRecord, IncomeRecord, SavingsGoal};
use crate::store::Store;
use crate::summary::expenses_by_category;
use crate::utils::{parse_month, percentage};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let kind = m.get_one::<String>("type").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();
    let today = Local::now().date_naive();

    let csv = match kind.as_str() {
        "monthly" => {
            let (year, month) = parse_month(
                m.get_one::<String>("month")
                    .ok_or_else(|| anyhow!("--month is required for monthly exports"))?,
            )?;
            monthly_csv(&store.incomes, &store.expenses, &store.debts, year, month, today)?
        }
        "annual" => {
            let year = *m
                .get_one::<i32>("year")
                .ok_or_else(|| anyhow!("--year is required for annual exports"))?;
            annual_csv(&store.incomes, &store.expenses, &store.debts, year)?
        }
        "category" => category_csv(&store.expenses)?,
        "complete" => {
            let filter = parse_filter(m, today)?;
            complete_csv(
                &store.incomes,
                &store.expenses,
                &store.debts,
                &store.savings,
                &filter,
                today,
            )?
        }
        _ => bail!("Unknown report type '{}' (use monthly|annual|category|complete)", kind),
    };

    std::fs::write(out, csv)?;
    println!("Exported {} report to {}", kind, out);
    Ok(())
}

/// Writer that never quotes on its own; the fixed export format wraps only
/// description-like fields in double quotes.
fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(vec![])
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr.into_inner().map_err(|e| anyhow!("Flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Plain decimal rendering, no currency symbol and no fixed precision.
fn plain(v: f64) -> String {
    format!("{}", v)
}

pub fn monthly_csv(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<String> {
    let mut wtr = csv_writer();
    wtr.write_record(["Tipo", "Descripcion", "Monto", "Categoria", "Fecha"])?;
    for i in incomes {
        wtr.write_record([
            "Ingreso".to_string(),
            quoted(&i.description),
            plain(i.monthly_amount),
            i.frequency.as_str().to_string(),
            i.date.to_string(),
        ])?;
    }
    for e in expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
    {
        wtr.write_record([
            "Gasto".to_string(),
            quoted(&e.description),
            plain(e.amount),
            e.category.clone(),
            e.date.to_string(),
        ])?;
    }
    for d in debts {
        wtr.write_record([
            "Deuda".to_string(),
            quoted(&d.description),
            plain(d.monthly_payment),
            "Pago Mensual".to_string(),
            today.to_string(),
        ])?;
    }
    finish(wtr)
}

pub fn annual_csv(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    year: i32,
) -> Result<String> {
    let mut wtr = csv_writer();
    wtr.write_record(["Tipo", "Descripcion", "Monto", "Categoria", "Fecha"])?;
    for i in incomes {
        wtr.write_record([
            "Ingreso".to_string(),
            quoted(&i.description),
            plain(i.monthly_amount * 12.0),
            i.frequency.as_str().to_string(),
            year.to_string(),
        ])?;
    }
    for e in expenses.iter().filter(|e| e.date.year() == year) {
        wtr.write_record([
            "Gasto".to_string(),
            quoted(&e.description),
            plain(e.amount),
            e.category.clone(),
            e.date.to_string(),
        ])?;
    }
    for d in debts {
        wtr.write_record([
            "Deuda".to_string(),
            quoted(&d.description),
            plain(d.monthly_payment * 12.0),
            "Pago Anual".to_string(),
            year.to_string(),
        ])?;
    }
    finish(wtr)
}

pub fn category_csv(expenses: &[ExpenseRecord]) -> Result<String> {
    let totals = expenses_by_category(expenses, &DateFilter::inactive());
    let total: f64 = totals.values().sum();

    let mut wtr = csv_writer();
    wtr.write_record(["Categoria", "Monto Total", "Porcentaje"])?;
    for (category, amount) in totals {
        wtr.write_record([
            quoted(&category),
            format!("{:.2}", amount),
            format!("{:.2}%", percentage(amount, total)),
        ])?;
    }
    finish(wtr)
}

pub fn complete_csv(
    incomes: &[IncomeRecord],
    expenses: &[ExpenseRecord],
    debts: &[DebtRecord],
    savings: &[SavingsGoal],
    filter: &DateFilter,
    today: NaiveDate,
) -> Result<String> {
    let mut wtr = csv_writer();
    wtr.write_record(["Tipo", "Descripcion", "Monto", "Categoria", "Fecha", "Detalles"])?;
    for i in incomes.iter().filter(|i| !filter.active || filter.contains(i.date)) {
        wtr.write_record([
            "Ingreso".to_string(),
            quoted(&i.description),
            plain(i.monthly_amount),
            i.frequency.as_str().to_string(),
            i.date.to_string(),
            quoted(&format!("Mensual: {}", plain(i.monthly_amount))),
        ])?;
    }
    for e in expenses.iter().filter(|e| !filter.active || filter.contains(e.date)) {
        wtr.write_record([
            "Gasto".to_string(),
            quoted(&e.description),
            plain(e.amount),
            e.category.clone(),
            e.date.to_string(),
            quoted(""),
        ])?;
    }
    // Debts and savings are committed monthly obligations; the filter never
    // narrows them.
    for d in debts {
        wtr.write_record([
            "Deuda".to_string(),
            quoted(&d.description),
            plain(d.monthly_payment),
            "Pago Mensual".to_string(),
            today.to_string(),
            quoted(&format!("Total: {}, Tasa: {}%", plain(d.total_debt), d.interest_rate)),
        ])?;
    }
    for s in savings {
        wtr.write_record([
            "Ahorro".to_string(),
            quoted(&s.description),
            plain(s.monthly_amount),
            "Meta Mensual".to_string(),
            s.target_date.to_string(),
            quoted(&format!(
                "Meta: {}, Progreso: {:.1}%",
                plain(s.target),
                s.progress_pct()
            )),
        ])?;
    }
    finish(wtr)
}
