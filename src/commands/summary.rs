// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::Session;
use crate::aggregate::category_shares;
use crate::format::{format_amount, format_percent};
use crate::i18n::Message;
use crate::models::Label;
use crate::overview::Overview;
use crate::store::RecordStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &impl RecordStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let period = session.period(sub)?;
    let overview = Overview::build(store, &session.owner_id, period, None, session.today)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &overview)? {
        return Ok(());
    }

    let lang = session.language;
    let agg = &overview.aggregate;
    println!("{} · {}", session.t(Message::MonthlyOverview), period);
    let totals = vec![
        vec![
            session.t(Message::TotalIncome).to_string(),
            format_amount(agg.total_income, lang),
        ],
        vec![
            session.t(Message::TotalExpenses).to_string(),
            format_amount(agg.total_expenses, lang),
        ],
        vec![
            session.t(Message::NetIncome).to_string(),
            format_amount(agg.net_income, lang),
        ],
        vec![
            session.t(Message::Savings).to_string(),
            format_amount(overview.total_savings, lang),
        ],
    ];
    println!("{}", pretty_table(&[session.t(Message::Month), ""], totals));

    if !overview.spend_by_category.is_empty() {
        let shares = category_shares(&overview.spend_by_category);
        let rows = overview
            .spend_by_category
            .iter()
            .zip(shares)
            .map(|((cat, amt), (_, share))| {
                vec![
                    session.t(cat.message()).to_string(),
                    format_amount(*amt, lang),
                    format_percent(share),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    session.t(Message::Category),
                    session.t(Message::Amount),
                    session.t(Message::Share),
                ],
                rows,
            )
        );
    }
    Ok(())
}
