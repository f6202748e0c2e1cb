// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! A JSON snapshot of the backend's records, used by the command-line host.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::FinanceError;
use crate::models::{Expense, Goal, Income, Label, Transaction};
use crate::store::RecordStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub income: Vec<Income>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Ledger {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Open ledger at {}", path.display()))?;
        let ledger: Ledger = serde_json::from_str(&text)
            .with_context(|| format!("Parse ledger at {}", path.display()))?;
        ledger
            .validate()
            .with_context(|| format!("Validate ledger at {}", path.display()))?;
        debug!(
            expenses = ledger.expenses.len(),
            income = ledger.income.len(),
            goals = ledger.goals.len(),
            "loaded ledger from {}",
            path.display()
        );
        Ok(ledger)
    }

    /// Loads the ledger at `path`, or starts an empty one if the file does not
    /// exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!("no ledger at {}, starting empty", path.display());
            Ok(Ledger::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create ledger dir {}", dir.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("Write ledger to {}", path.display()))?;
        debug!("saved ledger to {}", path.display());
        Ok(())
    }

    /// Checks every record's amounts and that ids are unique per kind; the
    /// first bad record is reported.
    pub fn validate(&self) -> std::result::Result<(), FinanceError> {
        self.expenses.iter().try_for_each(|e| e.validate())?;
        self.income.iter().try_for_each(|i| i.validate())?;
        self.goals.iter().try_for_each(|g| g.validate())?;
        first_duplicate(self.expenses.iter().map(|e| e.id.as_str()))?;
        first_duplicate(self.income.iter().map(|i| i.id.as_str()))?;
        first_duplicate(self.goals.iter().map(|g| g.id.as_str()))?;
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        self.expenses.len() + self.income.len() + self.goals.len()
    }
}

fn duplicate_id(id: &str) -> FinanceError {
    FinanceError::InvalidRecord {
        id: id.to_string(),
        reason: "duplicate id".to_string(),
    }
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> std::result::Result<(), FinanceError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(duplicate_id(id));
        }
    }
    Ok(())
}

fn ensure_new_id<'a>(
    mut existing: impl Iterator<Item = &'a str>,
    id: &str,
) -> std::result::Result<(), FinanceError> {
    if existing.any(|e| e == id) {
        return Err(duplicate_id(id));
    }
    Ok(())
}

fn owned_newest_first<C: Label>(records: &[Transaction<C>], owner_id: &str) -> Vec<Transaction<C>> {
    let mut out: Vec<Transaction<C>> = records
        .iter()
        .filter(|r| r.owner_id == owner_id)
        .cloned()
        .collect();
    // Undated records sort last
    out.sort_by_key(|r| Reverse(r.parsed_date().ok()));
    out
}

impl RecordStore for Ledger {
    fn list_expenses(&self, owner_id: &str) -> Result<Vec<Expense>> {
        Ok(owned_newest_first(&self.expenses, owner_id))
    }

    fn list_income(&self, owner_id: &str) -> Result<Vec<Income>> {
        Ok(owned_newest_first(&self.income, owner_id))
    }

    fn list_goals(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut out: Vec<Goal> = self
            .goals
            .iter()
            .filter(|g| g.owner_id == owner_id)
            .cloned()
            .collect();
        out.sort_by_key(|g| Reverse(g.created_at));
        Ok(out)
    }

    fn create_expense(&mut self, expense: Expense) -> Result<()> {
        expense.validate()?;
        ensure_new_id(self.expenses.iter().map(|e| e.id.as_str()), &expense.id)?;
        self.expenses.push(expense);
        Ok(())
    }

    fn create_income(&mut self, income: Income) -> Result<()> {
        income.validate()?;
        ensure_new_id(self.income.iter().map(|i| i.id.as_str()), &income.id)?;
        self.income.push(income);
        Ok(())
    }

    fn create_goal(&mut self, goal: Goal) -> Result<()> {
        goal.validate()?;
        ensure_new_id(self.goals.iter().map(|g| g.id.as_str()), &goal.id)?;
        self.goals.push(goal);
        Ok(())
    }

    fn update_goal_amount(
        &mut self,
        owner_id: &str,
        goal_id: &str,
        current_amount: Decimal,
    ) -> Result<Goal> {
        if current_amount < Decimal::ZERO {
            return Err(FinanceError::NegativeAmount(current_amount).into());
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id && g.owner_id == owner_id)
            .ok_or_else(|| FinanceError::GoalNotFound(goal_id.to_string()))?;
        goal.current_amount = current_amount;
        Ok(goal.clone())
    }
}
