// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use super::Session;
use crate::format::format_amount;
use crate::i18n::Message;
use crate::overview::Overview;
use crate::store::RecordStore;
use crate::utils::{maybe_print_json, parse_balance, pretty_table};

pub fn handle(
    store: &impl RecordStore,
    session: &Session,
    assumed_income: Option<Decimal>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let period = session.period(sub)?;
    let overview = match sub.get_one::<String>("income") {
        Some(raw) => {
            let income = parse_balance(raw)?;
            let mut o = Overview::build(store, &session.owner_id, period, None, session.today)?;
            o.recommendation_income = income;
            o.recommendations = crate::recommend::recommend(income, o.aggregate.total_expenses);
            o
        }
        None => Overview::build(store, &session.owner_id, period, assumed_income, session.today)?,
    };

    if maybe_print_json(
        sub.get_flag("json"),
        sub.get_flag("jsonl"),
        &overview.recommendations,
    )? {
        return Ok(());
    }

    let lang = session.language;
    let surplus = overview.recommendation_income - overview.aggregate.total_expenses;
    println!(
        "{} · {}",
        session.t(Message::InvestmentRecommendations),
        period
    );
    println!(
        "{}",
        pretty_table(
            &[
                session.t(Message::Income),
                session.t(Message::Expenses),
                session.t(Message::AvailableForInvestment),
            ],
            vec![vec![
                format_amount(overview.recommendation_income, lang),
                format_amount(overview.aggregate.total_expenses, lang),
                format_amount(surplus, lang),
            ]],
        )
    );

    if overview.recommendations.is_empty() {
        println!("{}", session.t(Message::NoRecommendations));
    } else {
        let rows = overview
            .recommendations
            .iter()
            .map(|r| {
                vec![
                    r.title.clone(),
                    format_amount(r.suggested_amount, lang),
                    r.risk.to_string(),
                    r.timeframe.clone(),
                    r.platform.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    session.t(Message::Invest),
                    session.t(Message::SuggestedAmount),
                    session.t(Message::Risk),
                    session.t(Message::Timeframe),
                    session.t(Message::Platform),
                ],
                rows,
            )
        );
    }
    println!(
        "{}: {}",
        session.t(Message::Disclaimer),
        session.t(Message::DisclaimerText)
    );
    Ok(())
}
