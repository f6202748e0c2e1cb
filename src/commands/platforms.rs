// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::Session;
use crate::i18n::Message;
use crate::recommend::Platform;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Serialize)]
pub struct PlatformRow {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub website: &'static str,
}

pub fn rows() -> Vec<PlatformRow> {
    Platform::ALL
        .iter()
        .map(|p| PlatformRow {
            name: p.name(),
            description: p.description(),
            features: p.features(),
            website: p.website(),
        })
        .collect()
}

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = rows();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let table_rows = data
        .iter()
        .map(|p| {
            vec![
                p.name.to_string(),
                p.description.to_string(),
                p.features.join("\n"),
                p.website.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                session.t(Message::Platform),
                session.t(Message::Description),
                session.t(Message::Features),
                session.t(Message::Website),
            ],
            table_rows,
        )
    );
    Ok(())
}
