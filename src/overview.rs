// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{MonthlyAggregate, spend_by_category, sum, total_savings};
use crate::goals::GoalProgress;
use crate::models::ExpenseCategory;
use crate::period::{Period, select_in_period};
use crate::recommend::{Recommendation, recommend};
use crate::store::RecordStore;

/// One owner's month: totals, goals and what to do with the surplus.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub aggregate: MonthlyAggregate,
    /// Income fed to the recommendation engine. Differs from
    /// `aggregate.total_income` only when an assumed income was used.
    pub recommendation_income: Decimal,
    pub total_savings: Decimal,
    pub spend_by_category: Vec<(ExpenseCategory, Decimal)>,
    pub goals: Vec<GoalProgress>,
    pub recommendations: Vec<Recommendation>,
}

impl Overview {
    /// Builds the overview for `owner_id` in `period`.
    ///
    /// `assumed_income` stands in for recorded income when the month has none.
    pub fn build(
        store: &impl RecordStore,
        owner_id: &str,
        period: Period,
        assumed_income: Option<Decimal>,
        today: NaiveDate,
    ) -> Result<Self> {
        let expenses = store.list_expenses(owner_id)?;
        let income = store.list_income(owner_id)?;
        let goals = store.list_goals(owner_id)?;

        let month_expenses = select_in_period(&expenses, period);
        let aggregate = MonthlyAggregate::from_totals(
            period,
            sum(select_in_period(&income, period)),
            sum(month_expenses.iter().copied()),
        );

        let recommendation_income = match assumed_income {
            Some(assumed) if aggregate.total_income.is_zero() => {
                debug!(%period, %assumed, "no recorded income, using assumed income");
                assumed
            }
            _ => aggregate.total_income,
        };

        Ok(Overview {
            aggregate,
            recommendation_income,
            total_savings: total_savings(&goals),
            spend_by_category: spend_by_category(month_expenses.iter().copied()),
            goals: goals.iter().map(|g| GoalProgress::of(g, today)).collect(),
            recommendations: recommend(recommendation_income, aggregate.total_expenses),
        })
    }
}
