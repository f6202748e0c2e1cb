// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

/// Errors raised by the finance core. Everything here is local to one call;
/// callers decide whether to skip a record, show zero, or re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinanceError {
    #[error("Invalid amount '{0}', expected a number such as 1250 or 1,250.50")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("Amount cannot be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("Invalid date '{0}', expected YYYY-MM-DD or an ISO-8601 timestamp")]
    MalformedDate(String),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
    #[error("Unknown expense category '{0}'")]
    UnknownCategory(String),
    #[error("Unknown income source '{0}'")]
    UnknownSource(String),
    #[error("Unknown language '{0}', expected 'en' or 'hi'")]
    UnknownLanguage(String),
    #[error("Goal '{0}' not found")]
    GoalNotFound(String),
    #[error("Record '{id}' is invalid: {reason}")]
    InvalidRecord { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FinanceError>;
