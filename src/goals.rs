// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Savings goal progress.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{FinanceError, Result};
use crate::i18n::Message;
use crate::models::Goal;

/// Qualitative band for a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ProgressTier {
    Critical,
    Low,
    Fair,
    Good,
    Excellent,
}

impl ProgressTier {
    pub fn message(self) -> Message {
        match self {
            ProgressTier::Excellent => Message::TierExcellent,
            ProgressTier::Good => Message::TierGood,
            ProgressTier::Fair => Message::TierFair,
            ProgressTier::Low => Message::TierLow,
            ProgressTier::Critical => Message::TierCritical,
        }
    }
}

/// Percentage of `target` reached by `current`, capped at 100.
///
/// A zero or negative target has no meaningful progress and yields 0.
pub fn progress_percent(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (current / target * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
}

pub fn progress_tier(percent: Decimal) -> ProgressTier {
    if percent >= Decimal::ONE_HUNDRED {
        ProgressTier::Excellent
    } else if percent >= Decimal::from(75) {
        ProgressTier::Good
    } else if percent >= Decimal::from(50) {
        ProgressTier::Fair
    } else if percent >= Decimal::from(25) {
        ProgressTier::Low
    } else {
        ProgressTier::Critical
    }
}

pub fn remaining(goal: &Goal) -> Decimal {
    (goal.target_amount - goal.current_amount).max(Decimal::ZERO)
}

pub fn is_completed(goal: &Goal) -> bool {
    goal.current_amount >= goal.target_amount
}

/// Whole days from `today` until the goal's target date, `None` when the goal
/// has no target date. Zero or negative means the date has passed.
pub fn days_left(goal: &Goal, today: NaiveDate) -> Option<i64> {
    goal.target_date.map(|d| (d - today).num_days())
}

/// Returns `goal` with `amount` added to its saved balance.
pub fn add_contribution(goal: &Goal, amount: Decimal) -> Result<Goal> {
    if amount <= Decimal::ZERO {
        return Err(FinanceError::NonPositiveAmount(amount));
    }
    let mut updated = goal.clone();
    updated.current_amount += amount;
    Ok(updated)
}

/// Everything a goal row needs to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub current_amount: Decimal,
    pub target_amount: Decimal,
    pub remaining: Decimal,
    pub percent: Decimal,
    pub tier: ProgressTier,
    pub completed: bool,
    pub days_left: Option<i64>,
}

impl GoalProgress {
    pub fn of(goal: &Goal, today: NaiveDate) -> Self {
        let percent = progress_percent(goal.current_amount, goal.target_amount);
        GoalProgress {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            current_amount: goal.current_amount,
            target_amount: goal.target_amount,
            remaining: remaining(goal),
            percent,
            tier: progress_tier(percent),
            completed: is_completed(goal),
            days_left: days_left(goal, today),
        }
    }
}
