// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod goals;
pub mod importer;
pub mod platforms;
pub mod recommend;
pub mod summary;
pub mod transactions;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::i18n::{Language, Message, t};
use crate::period::Period;

/// Who is looking and in which language. Passed to every handler.
#[derive(Debug, Clone)]
pub struct Session {
    pub owner_id: String,
    pub language: Language,
    pub today: NaiveDate,
}

impl Session {
    pub fn new(owner_id: impl Into<String>, language: Language, today: NaiveDate) -> Self {
        Session {
            owner_id: owner_id.into(),
            language,
            today,
        }
    }

    pub fn t(&self, message: Message) -> &'static str {
        t(self.language, message)
    }

    /// The `--month` argument, or the month containing `today`.
    pub fn period(&self, sub: &clap::ArgMatches) -> Result<Period> {
        match sub.get_one::<String>("month") {
            Some(m) => crate::utils::parse_month(m),
            None => Ok(Period::of(self.today)),
        }
    }
}

pub(crate) fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a str> {
    sub.get_one::<String>(name)
        .map(|s| s.trim())
        .with_context(|| format!("--{} is required", name))
}
