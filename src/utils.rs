// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::error::FinanceError;
use crate::period::Period;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s.trim()))
}

pub fn parse_month(s: &str) -> Result<Period> {
    Ok(s.parse::<Period>()?)
}

/// Parses user-typed money such as `1250`, `1,250.50` or `₹ 1,250`.
///
/// Anything that is not a number is an error, and so is zero or a negative
/// value. Nothing is coerced.
pub fn parse_amount(s: &str) -> std::result::Result<Decimal, FinanceError> {
    let value = parse_money(s)?;
    if value <= Decimal::ZERO {
        return Err(FinanceError::NonPositiveAmount(value));
    }
    Ok(value)
}

/// Like [`parse_amount`] but allows zero, for opening balances.
pub fn parse_balance(s: &str) -> std::result::Result<Decimal, FinanceError> {
    let value = parse_money(s)?;
    if value < Decimal::ZERO {
        return Err(FinanceError::NegativeAmount(value));
    }
    Ok(value)
}

fn parse_money(s: &str) -> std::result::Result<Decimal, FinanceError> {
    let trimmed = s.trim();
    let without_symbol = trimmed.strip_prefix('₹').unwrap_or(trimmed).trim_start();
    let cleaned = without_symbol.replace(',', "");
    if cleaned.is_empty() {
        return Err(FinanceError::InvalidAmount(trimmed.to_string()));
    }
    cleaned
        .parse::<Decimal>()
        .map_err(|_| FinanceError::InvalidAmount(trimmed.to_string()))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Record id in the style the backend hands out: `<prefix>_<millis>_<n>`.
pub fn next_id(prefix: &str, existing: usize) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        chrono::Utc::now().timestamp_millis(),
        existing + 1
    )
}
