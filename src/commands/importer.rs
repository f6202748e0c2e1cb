// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use tracing::info;

use super::{Session, required};
use crate::error::FinanceError;
use crate::models::{ExpenseCategory, IncomeSource, Label, Transaction};
use crate::store::RecordStore;
use crate::utils::{next_id, parse_amount, parse_date};

pub fn handle(store: &mut impl RecordStore, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => {
            let path = required(sub, "path")?;
            let existing = store.list_expenses(&session.owner_id)?.len();
            let records = read_csv::<ExpenseCategory>(path, session, "expense", existing)?;
            let n = records.len();
            for r in records {
                store.create_expense(r)?;
            }
            info!(count = n, "imported expenses from {}", path);
            println!("Imported {} expenses from {}", n, path);
        }
        Some(("income", sub)) => {
            let path = required(sub, "path")?;
            let existing = store.list_income(&session.owner_id)?.len();
            let records = read_csv::<IncomeSource>(path, session, "income", existing)?;
            let n = records.len();
            for r in records {
                store.create_income(r)?;
            }
            info!(count = n, "imported income from {}", path);
            println!("Imported {} income entries from {}", n, path);
        }
        _ => {}
    }
    Ok(())
}

/// Reads `date,amount,category,description` rows (income files may call the
/// third column `source`). Any bad row fails the whole file.
pub fn read_csv<C>(
    path: &str,
    session: &Session,
    id_prefix: &str,
    existing: usize,
) -> Result<Vec<Transaction<C>>>
where
    C: Label + FromStr<Err = FinanceError>,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let headers = rdr.headers()?.clone();
    let column = |names: &[&str]| {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
    };
    let date_col = column(&["date"]).ok_or_else(|| anyhow!("CSV {} has no 'date' column", path))?;
    let amount_col =
        column(&["amount"]).ok_or_else(|| anyhow!("CSV {} has no 'amount' column", path))?;
    let label_col = column(&["category", "source"])
        .ok_or_else(|| anyhow!("CSV {} has no 'category' or 'source' column", path))?;
    let desc_col = column(&["description", "note"]);

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Header is line 1
        let line = i + 2;
        let rec = result.with_context(|| format!("Read line {} of {}", line, path))?;
        let date_raw = rec.get(date_col).unwrap_or("");
        let amount_raw = rec.get(amount_col).unwrap_or("");
        let label_raw = rec.get(label_col).unwrap_or("");
        let description = desc_col.and_then(|c| rec.get(c)).unwrap_or("");

        let date = parse_date(date_raw).with_context(|| format!("Line {}", line))?;
        let amount = parse_amount(amount_raw).with_context(|| format!("Line {}", line))?;
        let label: C = label_raw
            .parse()
            .with_context(|| format!("Line {}", line))?;
        out.push(Transaction::new(
            next_id(id_prefix, existing + out.len()),
            amount,
            label,
            description,
            date,
            session.owner_id.clone(),
        )?);
    }
    Ok(out)
}
