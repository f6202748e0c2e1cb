// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rupee amounts for display. Formatting never rounds the value it is given.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::i18n::{Language, Message, t};

/// Renders `value` as a rupee amount with Indian digit grouping, for example
/// `₹1,23,456` or `-₹5,000.50`.
///
/// Whole amounts print without a fraction. Fractional amounts print at least
/// two decimals and keep every significant digit.
pub fn format_amount(value: Decimal, language: Language) -> String {
    let symbol = t(language, Message::Rupees);
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = value.abs().normalize();
    let text = abs.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };
    let grouped = group_indian(int_part);
    if frac_part.is_empty() {
        format!("{sign}{symbol}{grouped}")
    } else {
        format!("{sign}{symbol}{grouped}.{frac_part:0<2}")
    }
}

/// Inserts separators the Indian way: the last three digits, then pairs.
///
/// Works on characters, so any input is safe; it is meant for ASCII digits.
pub fn group_indian(digits: &str) -> String {
    let n = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + n / 2);
    for (i, ch) in digits.chars().enumerate() {
        let rest = n - i;
        if i > 0 && rest >= 3 && (rest - 3) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Progress percentage with one decimal, as shown next to progress bars.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}
