// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{Expense, Goal, Income};

/// Where records live. The finance core only ever sees what these calls
/// return; implementations decide how records are kept.
///
/// List calls return one owner's records, newest first. Record ids are unique
/// within each kind of record.
pub trait RecordStore {
    fn list_expenses(&self, owner_id: &str) -> Result<Vec<Expense>>;
    fn list_income(&self, owner_id: &str) -> Result<Vec<Income>>;
    fn list_goals(&self, owner_id: &str) -> Result<Vec<Goal>>;

    fn create_expense(&mut self, expense: Expense) -> Result<()>;
    fn create_income(&mut self, income: Income) -> Result<()>;
    fn create_goal(&mut self, goal: Goal) -> Result<()>;

    /// Sets the saved balance of `owner_id`'s goal and returns the updated goal.
    /// Goals of other owners are never touched.
    fn update_goal_amount(
        &mut self,
        owner_id: &str,
        goal_id: &str,
        current_amount: Decimal,
    ) -> Result<Goal>;
}
