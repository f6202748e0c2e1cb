// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nivesh::recommend::{
    Platform, Recommendation, RecommendationKind, Risk, recommend, recommend_for_surplus,
};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn kinds(recs: &[Recommendation]) -> Vec<RecommendationKind> {
    recs.iter().map(|r| r.kind).collect()
}

fn for_surplus(s: &str) -> Vec<Recommendation> {
    recommend(d(s) + d("20000"), d("20000"))
}

use RecommendationKind::*;

#[test]
fn surplus_at_five_thousand_is_micro_sip() {
    let recs = for_surplus("5000");
    assert_eq!(kinds(&recs), vec![MicroSip]);
    assert_eq!(recs[0].suggested_amount, d("1000"));
}

#[test]
fn surplus_just_above_five_thousand_is_emergency_fund_only() {
    let recs = for_surplus("5001");
    assert_eq!(kinds(&recs), vec![EmergencyFund]);
    assert_eq!(recs[0].suggested_amount, d("2000.4"));
}

#[test]
fn surplus_at_ten_thousand_has_no_sip() {
    let recs = for_surplus("10000");
    assert_eq!(kinds(&recs), vec![EmergencyFund]);
    assert_eq!(recs[0].suggested_amount, d("4000"));
}

#[test]
fn surplus_just_above_ten_thousand_adds_sip() {
    let recs = for_surplus("10001");
    assert_eq!(kinds(&recs), vec![EmergencyFund, Sip]);
    assert_eq!(recs[0].suggested_amount, d("4000.4"));
    assert_eq!(recs[1].suggested_amount, d("3000.3"));
}

#[test]
fn surplus_at_fifteen_thousand_has_no_gold() {
    assert_eq!(kinds(&for_surplus("15000")), vec![EmergencyFund, Sip]);
}

#[test]
fn surplus_just_above_fifteen_thousand_adds_gold() {
    let recs = for_surplus("15001");
    assert_eq!(kinds(&recs), vec![EmergencyFund, Sip, DigitalGold]);
    assert_eq!(recs[2].suggested_amount, d("1500.1"));
}

#[test]
fn micro_sip_boundaries() {
    assert!(for_surplus("1000").is_empty());
    let recs = for_surplus("1001");
    assert_eq!(kinds(&recs), vec![MicroSip]);
    assert_eq!(recs[0].suggested_amount, d("500.5"));
}

#[test]
fn no_surplus_means_no_recommendations() {
    assert!(recommend(d("40000"), d("40000")).is_empty());
    assert!(recommend(d("30000"), d("40000")).is_empty());
    assert!(recommend(Decimal::ZERO, Decimal::ZERO).is_empty());
    assert!(recommend_for_surplus(d("-25000")).is_empty());
}

#[test]
fn amounts_never_exceed_caps() {
    for s in ["20000", "100000", "10000000"] {
        for r in recommend_for_surplus(d(s)) {
            let cap = match r.kind {
                EmergencyFund => d("10000"),
                Sip => d("5000"),
                DigitalGold => d("2000"),
                MicroSip => d("1000"),
            };
            assert!(r.suggested_amount <= cap, "{:?} over cap for {}", r.kind, s);
        }
    }
    let huge = recommend_for_surplus(d("10000000"));
    assert_eq!(huge[0].suggested_amount, d("10000"));
    assert_eq!(huge[1].suggested_amount, d("5000"));
    assert_eq!(huge[2].suggested_amount, d("2000"));
}

#[test]
fn typical_salary_month() {
    let recs = recommend(d("75000"), d("40000"));
    assert_eq!(kinds(&recs), vec![EmergencyFund, Sip, DigitalGold]);

    let ef = &recs[0];
    assert_eq!(ef.suggested_amount, d("10000"));
    assert_eq!(ef.risk, Risk::Low);
    assert_eq!(ef.timeframe, "6-12 months");
    assert_eq!(ef.platform, Platform::Groww);

    let sip = &recs[1];
    assert_eq!(sip.suggested_amount, d("5000"));
    assert_eq!(sip.risk, Risk::Medium);
    assert_eq!(sip.timeframe, "5+ years");
    assert_eq!(sip.platform, Platform::PaytmMoney);

    let gold = &recs[2];
    assert_eq!(gold.suggested_amount, d("2000"));
    assert_eq!(gold.risk, Risk::Low);
    assert_eq!(gold.timeframe, "1-3 years");
    assert_eq!(gold.platform, Platform::PaytmMoney);
}

#[test]
fn micro_sip_details() {
    let recs = for_surplus("3000");
    let r = &recs[0];
    assert_eq!(r.title, "Start Small with Micro SIP");
    assert_eq!(r.suggested_amount, d("1000"));
    assert_eq!(r.risk, Risk::Low);
    assert_eq!(r.timeframe, "3+ years");
    assert_eq!(r.platform, Platform::Groww);
}

#[test]
fn recommendation_json_uses_type_field() {
    let recs = recommend(d("75000"), d("40000"));
    let v = serde_json::to_value(&recs).unwrap();
    assert_eq!(v[0]["type"], "EmergencyFund");
    assert_eq!(v[1]["type"], "SIP");
    assert_eq!(v[1]["platform"], "Paytm Money");
    assert_eq!(v[2]["type"], "DigitalGold");
}

#[test]
fn platform_catalogue() {
    assert_eq!(Platform::ALL.len(), 3);
    assert_eq!(Platform::Zerodha.website(), "https://zerodha.com");
    assert_eq!(Platform::PaytmMoney.to_string(), "Paytm Money");
    for p in Platform::ALL {
        assert_eq!(p.features().len(), 3);
        assert!(!p.description().is_empty());
    }
}
