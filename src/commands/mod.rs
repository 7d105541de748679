// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dashboard;
pub mod data;
pub mod debt;
pub mod expense;
pub mod exporter;
pub mod goals;
pub mod income;
pub mod projection;
pub mod report;
pub mod saving;

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::models::DateFilter;
use crate::summary::PeriodPreset;
use crate::utils::parse_date;

/// Build the optional date filter shared by dashboard, report, and export
/// from `--period` or an explicit `--from`/`--to` pair.
pub fn parse_filter(sub: &clap::ArgMatches, today: NaiveDate) -> Result<DateFilter> {
    if let Some(period) = sub.get_one::<String>("period") {
        let (from, to) = PeriodPreset::parse(period)?.range(today);
        return Ok(DateFilter::between(from, to));
    }
    match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        (Some(from), Some(to)) => {
            let (from, to) = (parse_date(from)?, parse_date(to)?);
            if from > to {
                bail!("'--from' cannot be later than '--to'");
            }
            Ok(DateFilter::between(from, to))
        }
        (None, None) => Ok(DateFilter::inactive()),
        _ => bail!("Both --from and --to are required to filter by date"),
    }
}
