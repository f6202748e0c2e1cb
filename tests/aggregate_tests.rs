// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use nivesh::aggregate::{
    MonthlyAggregate, category_shares, net_income, spend_by_category, sum, total_savings,
};
use nivesh::models::{Expense, ExpenseCategory, Goal, Income, IncomeSource};
use nivesh::period::Period;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(amount: &str, category: ExpenseCategory, date: &str) -> Expense {
    Expense {
        id: format!("e-{amount}-{date}"),
        amount: d(amount),
        category,
        description: String::new(),
        date: date.into(),
        owner_id: "u1".into(),
    }
}

fn income(amount: &str, date: &str) -> Income {
    Income {
        id: format!("i-{amount}-{date}"),
        amount: d(amount),
        category: IncomeSource::Salary,
        description: String::new(),
        date: date.into(),
        owner_id: "u1".into(),
    }
}

#[test]
fn sum_of_nothing_is_zero() {
    let empty: Vec<Expense> = Vec::new();
    assert_eq!(sum(&empty), Decimal::ZERO);
}

#[test]
fn sum_is_additive() {
    let a = vec![
        expense("120.50", ExpenseCategory::Food, "2025-03-01"),
        expense("80", ExpenseCategory::Transport, "2025-03-02"),
    ];
    let b = vec![expense("1000.25", ExpenseCategory::Utilities, "2025-03-03")];
    let joined: Vec<Expense> = a.iter().chain(b.iter()).cloned().collect();
    assert_eq!(sum(&joined), sum(&a) + sum(&b));
    assert_eq!(sum(&joined), d("1200.75"));
}

#[test]
fn net_income_can_go_negative() {
    assert_eq!(net_income(d("30000"), d("42000")), d("-12000"));
    assert_eq!(net_income(d("50000"), d("20000")), d("30000"));
}

#[test]
fn monthly_aggregate_uses_only_the_period() {
    let expenses = vec![
        expense("2000", ExpenseCategory::Food, "2025-03-05"),
        expense("500", ExpenseCategory::Transport, "2025-03-18"),
        expense("9999", ExpenseCategory::Other, "2025-02-27"),
        expense("7777", ExpenseCategory::Other, "not a date"),
    ];
    let incomes = vec![income("45000", "2025-03-01"), income("45000", "2025-02-01")];
    let march = Period::new(2025, 3).unwrap();

    let agg = MonthlyAggregate::compute(&expenses, &incomes, march);
    assert_eq!(agg.period, march);
    assert_eq!(agg.total_income, d("45000"));
    assert_eq!(agg.total_expenses, d("2500"));
    assert_eq!(agg.net_income, d("42500"));
    assert_eq!(agg.surplus, agg.net_income);
}

#[test]
fn overspent_month_has_negative_surplus() {
    let march = Period::new(2025, 3).unwrap();
    let agg = MonthlyAggregate::from_totals(march, d("10000"), d("12500"));
    assert_eq!(agg.surplus, d("-2500"));
    assert!(agg.recommendations().is_empty());
}

#[test]
fn savings_add_up_across_goals() {
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let goals = vec![
        Goal::new("g1", "Bike", d("80000"), d("12000"), "u1", created).unwrap(),
        Goal::new("g2", "Trip", d("30000"), d("31000"), "u1", created).unwrap(),
    ];
    assert_eq!(total_savings(&goals), d("43000"));
    assert_eq!(total_savings(&[]), Decimal::ZERO);
}

#[test]
fn spend_by_category_largest_first() {
    let expenses = vec![
        expense("300", ExpenseCategory::Transport, "2025-03-01"),
        expense("1200", ExpenseCategory::Food, "2025-03-02"),
        expense("300", ExpenseCategory::Utilities, "2025-03-03"),
        expense("400", ExpenseCategory::Food, "2025-03-04"),
    ];
    let items = spend_by_category(&expenses);
    assert_eq!(
        items,
        vec![
            (ExpenseCategory::Food, d("1600")),
            (ExpenseCategory::Transport, d("300")),
            (ExpenseCategory::Utilities, d("300")),
        ]
    );

    let shares = category_shares(&items);
    assert_eq!(shares[0].0, ExpenseCategory::Food);
    assert!((shares[0].1 - d("72.7272")).abs() < d("0.001"));
    let total_share: Decimal = shares.iter().map(|(_, s)| *s).sum();
    assert!((total_share - d("100")).abs() < d("0.0001"));
}

#[test]
fn shares_of_nothing_are_zero() {
    let items = vec![(ExpenseCategory::Food, Decimal::ZERO)];
    assert_eq!(category_shares(&items), vec![(ExpenseCategory::Food, Decimal::ZERO)]);
}
