// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar-month scoping for transaction lists.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FinanceError, Result};
use crate::models::Transaction;

/// A calendar month of a calendar year. `month` is 1-based (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(FinanceError::InvalidMonth(format!("{year}-{month:02}")));
        }
        Ok(Period { year, month })
    }

    /// Builds a period from a zero-based month index (January = 0).
    pub fn from_zero_based(month: u32, year: i32) -> Result<Self> {
        let month = month
            .checked_add(1)
            .ok_or_else(|| FinanceError::InvalidMonth(format!("{year}-{month}")))?;
        Self::new(year, month)
    }

    pub fn of(date: NaiveDate) -> Self {
        Period {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's date on the local clock.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Period {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Period {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for Period {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map_err(|_| FinanceError::InvalidMonth(trimmed.to_string()))?;
        Ok(Self::of(date))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Interprets a stored record date as a local calendar date.
///
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamp, or an
/// RFC 3339 timestamp with an offset. Offset timestamps are moved into the
/// local timezone first, so `2025-03-31T22:00:00Z` may land on April 1st.
pub fn parse_record_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    Err(FinanceError::MalformedDate(raw.to_string()))
}

/// Returns the records dated inside `period`, in their original order.
///
/// Records whose date cannot be parsed are left out rather than failing the
/// whole selection.
pub fn select_in_period<C>(records: &[Transaction<C>], period: Period) -> Vec<&Transaction<C>> {
    records
        .iter()
        .filter(|r| match parse_record_date(&r.date) {
            Ok(d) => period.contains(d),
            Err(e) => {
                debug!(id = %r.id, "skipping record: {e}");
                false
            }
        })
        .collect()
}
