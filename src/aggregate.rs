// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Expense, ExpenseCategory, Goal, Income, Transaction};
use crate::period::{Period, select_in_period};

/// Totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    pub period: Period,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// Income minus expenses. Negative when the month was overspent.
    pub net_income: Decimal,
    /// Same value as `net_income`; the recommendation engine's input.
    pub surplus: Decimal,
}

impl MonthlyAggregate {
    pub fn compute(expenses: &[Expense], income: &[Income], period: Period) -> Self {
        let total_expenses = sum(select_in_period(expenses, period));
        let total_income = sum(select_in_period(income, period));
        Self::from_totals(period, total_income, total_expenses)
    }

    pub fn from_totals(period: Period, total_income: Decimal, total_expenses: Decimal) -> Self {
        let net = net_income(total_income, total_expenses);
        MonthlyAggregate {
            period,
            total_income,
            total_expenses,
            net_income: net,
            surplus: net,
        }
    }
}

/// Sum of the `amount` fields; zero for an empty sequence.
pub fn sum<'a, C: 'a>(records: impl IntoIterator<Item = &'a Transaction<C>>) -> Decimal {
    records.into_iter().map(|r| r.amount).sum()
}

pub fn net_income(income_total: Decimal, expense_total: Decimal) -> Decimal {
    income_total - expense_total
}

/// Money already put aside across all goals.
pub fn total_savings(goals: &[Goal]) -> Decimal {
    goals.iter().map(|g| g.current_amount).sum()
}

/// Spend per category, largest first. Equal totals keep category order.
pub fn spend_by_category<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Vec<(ExpenseCategory, Decimal)> {
    let mut agg: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();
    for e in expenses {
        *agg.entry(e.category).or_insert(Decimal::ZERO) += e.amount;
    }
    let mut items: Vec<_> = agg.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

/// Category shares of total spend as percentages, in [`spend_by_category`] order.
pub fn category_shares(items: &[(ExpenseCategory, Decimal)]) -> Vec<(ExpenseCategory, Decimal)> {
    let total: Decimal = items.iter().map(|(_, amt)| *amt).sum();
    if total.is_zero() {
        return items.iter().map(|(c, _)| (*c, Decimal::ZERO)).collect();
    }
    items
        .iter()
        .map(|(c, amt)| (*c, *amt / total * Decimal::ONE_HUNDRED))
        .collect()
}
