// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nivesh::format::{format_amount, format_percent, group_indian};
use nivesh::i18n::{Language, Message, t};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn indian_grouping() {
    assert_eq!(group_indian("7"), "7");
    assert_eq!(group_indian("999"), "999");
    assert_eq!(group_indian("1000"), "1,000");
    assert_eq!(group_indian("12345"), "12,345");
    assert_eq!(group_indian("123456"), "1,23,456");
    assert_eq!(group_indian("1234567"), "12,34,567");
    assert_eq!(group_indian("12345678"), "1,23,45,678");
    assert_eq!(group_indian(""), "");
}

#[test]
fn grouping_non_ascii_input_does_not_panic() {
    assert_eq!(group_indian("१२३४"), "१,२३४");
    assert_eq!(group_indian("₹1000"), "₹1,000");
}

#[test]
fn whole_rupees() {
    assert_eq!(format_amount(d("123456"), Language::En), "₹1,23,456");
    assert_eq!(format_amount(d("100000"), Language::En), "₹1,00,000");
    assert_eq!(format_amount(d("75000"), Language::En), "₹75,000");
    assert_eq!(format_amount(d("500"), Language::En), "₹500");
    assert_eq!(format_amount(Decimal::ZERO, Language::En), "₹0");
    assert_eq!(format_amount(d("1500.00"), Language::En), "₹1,500");
}

#[test]
fn negative_amounts_lead_with_sign() {
    assert_eq!(format_amount(d("-5000"), Language::En), "-₹5,000");
    assert_eq!(format_amount(d("-12500.5"), Language::En), "-₹12,500.50");
}

#[test]
fn fractions_are_kept_not_rounded() {
    assert_eq!(format_amount(d("1234.5"), Language::En), "₹1,234.50");
    assert_eq!(format_amount(d("2000.4"), Language::En), "₹2,000.40");
    assert_eq!(format_amount(d("99.999"), Language::En), "₹99.999");
    assert_eq!(format_amount(d("0.05"), Language::En), "₹0.05");
}

#[test]
fn hindi_uses_the_same_rupee_prefix() {
    assert_eq!(format_amount(d("123456"), Language::Hi), "₹1,23,456");
}

#[test]
fn percent_one_decimal() {
    assert_eq!(format_percent(d("42.46")), "42.5%");
    assert_eq!(format_percent(d("100")), "100.0%");
    assert_eq!(format_percent(Decimal::ZERO), "0.0%");
}

#[test]
fn every_message_has_text_in_both_languages() {
    for m in Message::ALL {
        assert!(!t(Language::En, *m).is_empty(), "{:?} missing in English", m);
        assert!(!t(Language::Hi, *m).is_empty(), "{:?} missing in Hindi", m);
    }
}

#[test]
fn known_translations() {
    assert_eq!(t(Language::En, Message::Goals), "Goals");
    assert_eq!(t(Language::Hi, Message::Goals), "लक्ष्य");
    assert_eq!(t(Language::Hi, Message::TotalExpenses), "कुल खर्च");
    assert_eq!(t(Language::Hi, Message::Rupees), "₹");
    assert_ne!(
        t(Language::En, Message::DisclaimerText),
        t(Language::Hi, Message::DisclaimerText)
    );
}

#[test]
fn language_codes() {
    assert_eq!("hi".parse::<Language>().unwrap(), Language::Hi);
    assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
    assert_eq!("hindi".parse::<Language>().unwrap(), Language::Hi);
    assert!("fr".parse::<Language>().is_err());
    assert_eq!(Language::En.toggled(), Language::Hi);
    assert_eq!(Language::Hi.to_string(), "hi");
    assert_eq!(Language::default(), Language::En);
}
