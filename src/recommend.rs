// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule-based investment suggestions driven by the monthly surplus.
//!
//! A surplus above 5000 always starts with an emergency fund; larger
//! surpluses add a SIP (above 10000) and digital gold (above 15000) on top,
//! each tested on its own. Between 1000 and 5000 the only suggestion is a
//! micro SIP. Every suggested amount is a share of the surplus with a cap.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::MonthlyAggregate;

const EMERGENCY_FUND_THRESHOLD: i64 = 5_000;
const SIP_THRESHOLD: i64 = 10_000;
const DIGITAL_GOLD_THRESHOLD: i64 = 15_000;
const MICRO_SIP_THRESHOLD: i64 = 1_000;

const EMERGENCY_FUND_CAP: i64 = 10_000;
const SIP_CAP: i64 = 5_000;
const DIGITAL_GOLD_CAP: i64 = 2_000;
const MICRO_SIP_CAP: i64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationKind {
    EmergencyFund,
    #[serde(rename = "SIP")]
    Sip,
    #[serde(rename = "MicroSIP")]
    MicroSip,
    DigitalGold,
}

impl RecommendationKind {
    pub fn label(self) -> &'static str {
        match self {
            RecommendationKind::EmergencyFund => "Emergency Fund",
            RecommendationKind::Sip => "SIP",
            RecommendationKind::MicroSip => "Micro SIP",
            RecommendationKind::DigitalGold => "Digital Gold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Risk::Low => "Low",
            Risk::Medium => "Medium",
            Risk::High => "High",
        };
        f.write_str(s)
    }
}

/// Investment platforms the app points users to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    Groww,
    Zerodha,
    #[serde(rename = "Paytm Money")]
    PaytmMoney,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Groww, Platform::Zerodha, Platform::PaytmMoney];

    pub fn name(self) -> &'static str {
        match self {
            Platform::Groww => "Groww",
            Platform::Zerodha => "Zerodha",
            Platform::PaytmMoney => "Paytm Money",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Platform::Groww => {
                "Simple investing for everyone. Start with mutual funds, stocks, and more."
            }
            Platform::Zerodha => {
                "India's largest stock broker offering trading and investment services."
            }
            Platform::PaytmMoney => {
                "Invest in mutual funds, stocks, and digital gold with zero commission."
            }
        }
    }

    pub fn features(self) -> &'static [&'static str] {
        match self {
            Platform::Groww => &[
                "Zero commission on equity delivery",
                "Mutual funds starting ₹500",
                "Easy KYC process",
            ],
            Platform::Zerodha => &[
                "₹20 per trade",
                "Advanced trading tools",
                "Educational resources",
            ],
            Platform::PaytmMoney => &[
                "Zero commission mutual funds",
                "Digital gold investment",
                "SIP starting ₹100",
            ],
        }
    }

    pub fn website(self) -> &'static str {
        match self {
            Platform::Groww => "https://groww.in",
            Platform::Zerodha => "https://zerodha.com",
            Platform::PaytmMoney => "https://www.paytmmoney.com",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub suggested_amount: Decimal,
    pub risk: Risk,
    pub timeframe: String,
    pub platform: Platform,
}

impl Recommendation {
    fn emergency_fund(surplus: Decimal) -> Self {
        Recommendation {
            kind: RecommendationKind::EmergencyFund,
            title: "Build Emergency Fund".into(),
            description: "Start with a liquid fund to cover 3-6 months of expenses. \
                          This is your financial safety net."
                .into(),
            suggested_amount: capped_share(surplus, Decimal::new(4, 1), EMERGENCY_FUND_CAP),
            risk: Risk::Low,
            timeframe: "6-12 months".into(),
            platform: Platform::Groww,
        }
    }

    fn sip(surplus: Decimal) -> Self {
        Recommendation {
            kind: RecommendationKind::Sip,
            title: "Systematic Investment Plan".into(),
            description: "Start a monthly SIP in diversified equity mutual funds \
                          for long-term wealth creation."
                .into(),
            suggested_amount: capped_share(surplus, Decimal::new(3, 1), SIP_CAP),
            risk: Risk::Medium,
            timeframe: "5+ years".into(),
            platform: Platform::PaytmMoney,
        }
    }

    fn digital_gold(surplus: Decimal) -> Self {
        Recommendation {
            kind: RecommendationKind::DigitalGold,
            title: "Digital Gold Investment".into(),
            description: "Invest small amounts in digital gold as a hedge against inflation."
                .into(),
            suggested_amount: capped_share(surplus, Decimal::new(1, 1), DIGITAL_GOLD_CAP),
            risk: Risk::Low,
            timeframe: "1-3 years".into(),
            platform: Platform::PaytmMoney,
        }
    }

    fn micro_sip(surplus: Decimal) -> Self {
        Recommendation {
            kind: RecommendationKind::MicroSip,
            title: "Start Small with Micro SIP".into(),
            description: "Begin your investment journey with a small monthly SIP of ₹500-1000."
                .into(),
            suggested_amount: capped_share(surplus, Decimal::new(5, 1), MICRO_SIP_CAP),
            risk: Risk::Low,
            timeframe: "3+ years".into(),
            platform: Platform::Groww,
        }
    }
}

fn capped_share(surplus: Decimal, share: Decimal, cap: i64) -> Decimal {
    (surplus * share).min(Decimal::from(cap)).normalize()
}

/// Suggestions for a month with the given income and expenses, in the order
/// they should be shown.
pub fn recommend(monthly_income: Decimal, monthly_expenses: Decimal) -> Vec<Recommendation> {
    recommend_for_surplus(monthly_income - monthly_expenses)
}

pub fn recommend_for_surplus(surplus: Decimal) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if surplus > Decimal::from(EMERGENCY_FUND_THRESHOLD) {
        out.push(Recommendation::emergency_fund(surplus));
        if surplus > Decimal::from(SIP_THRESHOLD) {
            out.push(Recommendation::sip(surplus));
        }
        if surplus > Decimal::from(DIGITAL_GOLD_THRESHOLD) {
            out.push(Recommendation::digital_gold(surplus));
        }
    } else if surplus > Decimal::from(MICRO_SIP_THRESHOLD) {
        out.push(Recommendation::micro_sip(surplus));
    }
    out
}

impl MonthlyAggregate {
    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend_for_surplus(self.surplus)
    }
}
