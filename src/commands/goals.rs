// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;

use super::{Session, required};
use crate::error::FinanceError;
use crate::format::{format_amount, format_percent};
use crate::goals::{GoalProgress, add_contribution};
use crate::i18n::Message;
use crate::models::Goal;
use crate::store::RecordStore;
use crate::utils::{maybe_print_json, next_id, parse_amount, parse_balance, parse_date, pretty_table};

pub fn handle(store: &mut impl RecordStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, session, sub)?,
        Some(("list", sub)) => list(store, session, sub)?,
        Some(("contribute", sub)) => contribute(store, session, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut impl RecordStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let name = required(sub, "name")?;
    if name.is_empty() {
        anyhow::bail!("Goal name cannot be empty");
    }
    let target = parse_amount(required(sub, "target")?)?;
    let current = match sub.get_one::<String>("current") {
        Some(c) => parse_balance(c)?,
        None => rust_decimal::Decimal::ZERO,
    };
    let existing = store.list_goals(&session.owner_id)?.len();
    let mut goal = Goal::new(
        next_id("goal", existing),
        name,
        target,
        current,
        session.owner_id.clone(),
        Utc::now(),
    )?;
    if let Some(d) = sub.get_one::<String>("target-date") {
        goal = goal.with_target_date(parse_date(d)?);
    }
    let id = goal.id.clone();
    store.create_goal(goal)?;
    println!(
        "{}: {} ({}, {})",
        session.t(Message::GoalCreated),
        name,
        format_amount(target, session.language),
        id
    );
    Ok(())
}

pub fn progress_rows(store: &impl RecordStore, session: &Session) -> Result<Vec<GoalProgress>> {
    Ok(store
        .list_goals(&session.owner_id)?
        .iter()
        .map(|g| GoalProgress::of(g, session.today))
        .collect())
}

fn list(store: &impl RecordStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = progress_rows(store, session)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("{}", session.t(Message::NoRecords));
        return Ok(());
    }
    let lang = session.language;
    let rows = data
        .iter()
        .map(|p| {
            let status = if p.completed {
                session.t(Message::Completed).to_string()
            } else {
                session.t(p.tier.message()).to_string()
            };
            let days = match p.days_left {
                Some(d) if d > 0 => d.to_string(),
                Some(_) => session.t(Message::TargetReached).to_string(),
                None => "-".to_string(),
            };
            vec![
                p.name.clone(),
                format_amount(p.current_amount, lang),
                format_amount(p.target_amount, lang),
                format_amount(p.remaining, lang),
                format_percent(p.percent),
                status,
                days,
                p.goal_id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                session.t(Message::GoalName),
                session.t(Message::CurrentAmount),
                session.t(Message::TargetAmount),
                session.t(Message::Remaining),
                session.t(Message::Progress),
                session.t(Message::Status),
                session.t(Message::DaysLeft),
                session.t(Message::Id),
            ],
            rows,
        )
    );
    Ok(())
}

fn contribute(store: &mut impl RecordStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let amount = parse_amount(required(sub, "amount")?)?;
    let goal = store
        .list_goals(&session.owner_id)?
        .into_iter()
        .find(|g| g.id == id)
        .ok_or_else(|| FinanceError::GoalNotFound(id.to_string()))?;
    let updated = add_contribution(&goal, amount)?;
    let saved = store
        .update_goal_amount(&session.owner_id, &goal.id, updated.current_amount)
        .with_context(|| format!("Update goal '{}'", goal.id))?;
    let progress = GoalProgress::of(&saved, session.today);
    println!(
        "{}: {} {} / {} ({})",
        session.t(Message::GoalUpdated),
        saved.name,
        format_amount(saved.current_amount, session.language),
        format_amount(saved.target_amount, session.language),
        format_percent(progress.percent)
    );
    Ok(())
}
