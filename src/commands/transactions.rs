// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::str::FromStr;

use super::{Session, required};
use crate::aggregate::sum;
use crate::error::FinanceError;
use crate::format::format_amount;
use crate::i18n::Message;
use crate::models::{ExpenseCategory, IncomeSource, Label, Transaction};
use crate::period::{Period, select_in_period};
use crate::store::RecordStore;
use crate::utils::{maybe_print_json, next_id, parse_amount, parse_date, parse_month, pretty_table};

pub fn handle_expenses(
    store: &mut impl RecordStore,
    session: &Session,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let existing = store.list_expenses(&session.owner_id)?.len();
            let expense = build::<ExpenseCategory>(session, sub, "category", "expense", existing)?;
            let summary = describe(session, &expense);
            store.create_expense(expense)?;
            println!("{}: {}", session.t(Message::ExpenseAdded), summary);
        }
        Some(("list", sub)) => {
            let records = store.list_expenses(&session.owner_id)?;
            list(session, sub, &records, Message::Category)?;
        }
        _ => {}
    }
    Ok(())
}

pub fn handle_income(
    store: &mut impl RecordStore,
    session: &Session,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let existing = store.list_income(&session.owner_id)?.len();
            let income = build::<IncomeSource>(session, sub, "source", "income", existing)?;
            let summary = describe(session, &income);
            store.create_income(income)?;
            println!("{}: {}", session.t(Message::IncomeAdded), summary);
        }
        Some(("list", sub)) => {
            let records = store.list_income(&session.owner_id)?;
            list(session, sub, &records, Message::Source)?;
        }
        _ => {}
    }
    Ok(())
}

fn build<C>(
    session: &Session,
    sub: &clap::ArgMatches,
    label_arg: &str,
    id_prefix: &str,
    existing: usize,
) -> Result<Transaction<C>>
where
    C: Label + FromStr<Err = FinanceError>,
{
    let amount = parse_amount(required(sub, "amount")?)?;
    let label: C = required(sub, label_arg)?.parse()?;
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => session.today,
    };
    Ok(Transaction::new(
        next_id(id_prefix, existing),
        amount,
        label,
        description,
        date,
        session.owner_id.clone(),
    )?)
}

fn describe<C: Label>(session: &Session, tx: &Transaction<C>) -> String {
    format!(
        "{} · {} · {}",
        format_amount(tx.amount, session.language),
        session.t(tx.category.message()),
        tx.date
    )
}

/// Records in `month` (all records when `None`), capped at `limit`, in store order.
pub fn query_rows<C>(
    records: &[Transaction<C>],
    month: Option<Period>,
    limit: Option<usize>,
) -> Vec<&Transaction<C>> {
    let selected = match month {
        Some(p) => select_in_period(records, p),
        None => records.iter().collect(),
    };
    match limit {
        Some(n) => selected.into_iter().take(n).collect(),
        None => selected,
    }
}

fn list<C: Label + serde::Serialize>(
    session: &Session,
    sub: &clap::ArgMatches,
    records: &[Transaction<C>],
    label_header: Message,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let limit = sub.get_one::<usize>("limit").copied();
    let data = query_rows(records, month, limit);
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("{}", session.t(Message::NoRecords));
        return Ok(());
    }
    let total = sum(data.iter().copied());
    let mut rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                session.t(r.category.message()).to_string(),
                r.description.clone(),
                format_amount(r.amount, session.language),
                r.id.clone(),
            ]
        })
        .collect();
    rows.push(vec![
        String::new(),
        String::new(),
        String::new(),
        format_amount(total, session.language),
        String::new(),
    ]);
    println!(
        "{}",
        pretty_table(
            &[
                session.t(Message::Date),
                session.t(label_header),
                session.t(Message::Description),
                session.t(Message::Amount),
                session.t(Message::Id),
            ],
            rows,
        )
    );
    Ok(())
}
