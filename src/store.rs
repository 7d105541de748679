// Copyright (c) 2025 Plata Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{DebtRecord, ExpenseRecord, IncomeRecord, SavingsGoal};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.plata", "Plata", "plata"));

const KEY_INCOMES: &str = "incomes";
const KEY_EXPENSES: &str = "expenses";
const KEY_DEBTS: &str = "debts";
const KEY_SAVINGS: &str = "savings";
const KEY_MONTHLY_GOAL: &str = "monthlyGoal";
const KEY_EMERGENCY_FUND: &str = "emergencyFund";
const KEY_BACKUP: &str = "finance_backup";

pub fn data_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("plata.sqlite"))
}

/// Snapshot written under the backup key.
#[derive(Debug, Serialize, Deserialize)]
struct BackupSnapshot {
    #[serde(default)]
    incomes: Vec<IncomeRecord>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    debts: Vec<DebtRecord>,
    #[serde(default)]
    savings: Vec<SavingsGoal>,
    timestamp: String,
}

/// Exclusive owner of the four record collections, backed by a single
/// key-value table of serialized arrays. Every mutation re-persists all
/// four collections; there is no dirty tracking.
pub struct Store {
    conn: Connection,
    pub incomes: Vec<IncomeRecord>,
    pub expenses: Vec<ExpenseRecord>,
    pub debts: Vec<DebtRecord>,
    pub savings: Vec<SavingsGoal>,
}

impl Store {
    pub fn open_default() -> Result<Self> {
        Self::open(&data_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv(
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        let mut store = Self {
            conn,
            incomes: Vec::new(),
            expenses: Vec::new(),
            debts: Vec::new(),
            savings: Vec::new(),
        };
        store.incomes = store.load_collection(KEY_INCOMES)?;
        store.expenses = store.load_collection(KEY_EXPENSES)?;
        store.debts = store.load_collection(KEY_DEBTS)?;
        store.savings = store.load_collection(KEY_SAVINGS)?;
        Ok(store)
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Missing or unparseable keys load as empty collections.
    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        Ok(match self.kv_get(key)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        })
    }

    /// Write all four collections back in one pass.
    pub fn persist(&self) -> Result<()> {
        self.kv_set(KEY_INCOMES, &serde_json::to_string(&self.incomes)?)?;
        self.kv_set(KEY_EXPENSES, &serde_json::to_string(&self.expenses)?)?;
        self.kv_set(KEY_DEBTS, &serde_json::to_string(&self.debts)?)?;
        self.kv_set(KEY_SAVINGS, &serde_json::to_string(&self.savings)?)?;
        Ok(())
    }

    /// Millisecond timestamp, the id scheme every record kind shares.
    pub fn next_id(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn add_income(&mut self, record: IncomeRecord) -> Result<()> {
        self.incomes.push(record);
        self.persist()
    }

    pub fn delete_income(&mut self, id: i64) -> Result<bool> {
        let before = self.incomes.len();
        self.incomes.retain(|i| i.id != id);
        let removed = self.incomes.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn add_expense(&mut self, record: ExpenseRecord) -> Result<()> {
        self.expenses.push(record);
        self.persist()
    }

    /// Append a generated batch of recurring occurrences.
    pub fn add_expenses(&mut self, records: Vec<ExpenseRecord>) -> Result<()> {
        self.expenses.extend(records);
        self.persist()
    }

    pub fn delete_expense(&mut self, id: i64) -> Result<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        let removed = self.expenses.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Remove every occurrence of one recurring group. Records without an
    /// explicit template key are never touched.
    pub fn delete_recurring_group(&mut self, description: &str) -> Result<usize> {
        let before = self.expenses.len();
        self.expenses.retain(|e| {
            e.original_description.is_none()
                || e.original_description.as_deref() != Some(description)
        });
        let removed = before - self.expenses.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Flag the occurrence of `description` dated `date` as paid today.
    pub fn mark_paid(&mut self, description: &str, date: NaiveDate, today: NaiveDate) -> Result<bool> {
        let found = self.expenses.iter_mut().find(|e| {
            (e.original_description.as_deref() == Some(description)
                || e.description.contains(description))
                && e.date == date
        });
        match found {
            Some(expense) => {
                expense.paid = Some(true);
                expense.paid_date = Some(today);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn add_debt(&mut self, record: DebtRecord) -> Result<()> {
        self.debts.push(record);
        self.persist()
    }

    pub fn delete_debt(&mut self, id: i64) -> Result<bool> {
        let before = self.debts.len();
        self.debts.retain(|d| d.id != id);
        let removed = self.debts.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn add_saving(&mut self, record: SavingsGoal) -> Result<()> {
        self.savings.push(record);
        self.persist()
    }

    pub fn delete_saving(&mut self, id: i64) -> Result<bool> {
        let before = self.savings.len();
        self.savings.retain(|s| s.id != id);
        let removed = self.savings.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Grow a goal's current amount. `monthsToTarget` stays as snapshotted
    /// at creation.
    pub fn deposit_to_saving(&mut self, id: i64, amount: f64) -> Result<bool> {
        match self.savings.iter_mut().find(|s| s.id == id) {
            Some(goal) => {
                goal.current_amount += amount;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn monthly_goal_pct(&self) -> Result<Option<f64>> {
        Ok(self.kv_get(KEY_MONTHLY_GOAL)?.and_then(|v| v.parse().ok()))
    }

    pub fn set_monthly_goal_pct(&self, pct: f64) -> Result<()> {
        self.kv_set(KEY_MONTHLY_GOAL, &pct.to_string())
    }

    pub fn emergency_fund_months(&self) -> Result<Option<f64>> {
        Ok(self.kv_get(KEY_EMERGENCY_FUND)?.and_then(|v| v.parse().ok()))
    }

    pub fn set_emergency_fund_months(&self, months: f64) -> Result<()> {
        self.kv_set(KEY_EMERGENCY_FUND, &months.to_string())
    }

    /// Snapshot all collections under the backup key.
    pub fn backup(&self) -> Result<()> {
        let snapshot = BackupSnapshot {
            incomes: self.incomes.clone(),
            expenses: self.expenses.clone(),
            debts: self.debts.clone(),
            savings: self.savings.clone(),
            timestamp: Utc::now().to_rfc3339(),
        };
        self.kv_set(KEY_BACKUP, &serde_json::to_string(&snapshot)?)
    }

    /// Overwrite the live collections from the snapshot, if one exists.
    pub fn restore(&mut self) -> Result<Option<String>> {
        let Some(raw) = self.kv_get(KEY_BACKUP)? else {
            return Ok(None);
        };
        let snapshot: BackupSnapshot =
            serde_json::from_str(&raw).context("Malformed backup snapshot")?;
        self.incomes = snapshot.incomes;
        self.expenses = snapshot.expenses;
        self.debts = snapshot.debts;
        self.savings = snapshot.savings;
        self.persist()?;
        Ok(Some(snapshot.timestamp))
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.incomes.clear();
        self.expenses.clear();
        self.debts.clear();
        self.savings.clear();
        self.persist()
    }
}
