// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, Result};
use crate::i18n::Message;

/// A closed set of labels a transaction can carry (expense categories or
/// income sources).
pub trait Label: Copy + Eq + Ord + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Stable key used in stored records and on the command line.
    fn key(self) -> &'static str;

    /// Display name in the message catalogue.
    fn message(self) -> Message;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Education,
    Other,
}

impl Label for ExpenseCategory {
    const ALL: &'static [Self] = &[
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Healthcare,
        Self::Entertainment,
        Self::Shopping,
        Self::Education,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Healthcare => "healthcare",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    fn message(self) -> Message {
        match self {
            Self::Food => Message::Food,
            Self::Transport => Message::Transport,
            Self::Utilities => Message::Utilities,
            Self::Healthcare => Message::Healthcare,
            Self::Entertainment => Message::Entertainment,
            Self::Shopping => Message::Shopping,
            Self::Education => Message::Education,
            Self::Other => Message::Other,
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| FinanceError::UnknownCategory(s.trim().to_string()))
    }
}

// Stored records with a category we do not know are shown as "other".
impl From<String> for ExpenseCategory {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Other)
    }
}

impl From<ExpenseCategory> for String {
    fn from(c: ExpenseCategory) -> Self {
        c.key().to_string()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncomeSource {
    Salary,
    Overtime,
    Bonus,
    Freelance,
    Rental,
    Other,
}

impl Label for IncomeSource {
    const ALL: &'static [Self] = &[
        Self::Salary,
        Self::Overtime,
        Self::Bonus,
        Self::Freelance,
        Self::Rental,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Overtime => "overtime",
            Self::Bonus => "bonus",
            Self::Freelance => "freelance",
            Self::Rental => "rental",
            Self::Other => "other",
        }
    }

    fn message(self) -> Message {
        match self {
            Self::Salary => Message::Salary,
            Self::Overtime => Message::Overtime,
            Self::Bonus => Message::Bonus,
            Self::Freelance => Message::Freelance,
            Self::Rental => Message::Rental,
            Self::Other => Message::Other,
        }
    }
}

impl FromStr for IncomeSource {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| FinanceError::UnknownSource(s.trim().to_string()))
    }
}

impl From<String> for IncomeSource {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Other)
    }
}

impl From<IncomeSource> for String {
    fn from(c: IncomeSource) -> Self {
        c.key().to_string()
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An expense or income record as the record store returns it.
///
/// `date` stays the raw string from the store; use [`Transaction::parsed_date`]
/// to interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction<C> {
    pub id: String,
    pub amount: Decimal,
    #[serde(alias = "source")]
    pub category: C,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(alias = "user_id")]
    pub owner_id: String,
}

pub type Expense = Transaction<ExpenseCategory>;
pub type Income = Transaction<IncomeSource>;

impl<C: Label> Transaction<C> {
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        category: C,
        description: impl Into<String>,
        date: NaiveDate,
        owner_id: impl Into<String>,
    ) -> Result<Self> {
        let tx = Transaction {
            id: id.into(),
            amount,
            category,
            description: description.into(),
            date: date.format("%Y-%m-%d").to_string(),
            owner_id: owner_id.into(),
        };
        tx.validate()?;
        Ok(tx)
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(FinanceError::InvalidRecord {
                id: self.id.clone(),
                reason: FinanceError::NonPositiveAmount(self.amount).to_string(),
            });
        }
        Ok(())
    }

    pub fn parsed_date(&self) -> Result<NaiveDate> {
        crate::period::parse_record_date(&self.date)
    }
}

/// A savings goal. Completion is derived from the amounts, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(alias = "user_id")]
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_amount: Decimal,
        current_amount: Decimal,
        owner_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let goal = Goal {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount,
            owner_id: owner_id.into(),
            created_at,
            target_date: None,
        };
        goal.validate()?;
        Ok(goal)
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if self.target_amount <= Decimal::ZERO {
            FinanceError::NonPositiveAmount(self.target_amount)
        } else if self.current_amount < Decimal::ZERO {
            FinanceError::NegativeAmount(self.current_amount)
        } else {
            return Ok(());
        };
        Err(FinanceError::InvalidRecord {
            id: self.id.clone(),
            reason: reason.to_string(),
        })
    }
}
