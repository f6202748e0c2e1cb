// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use tracing::debug;

use nivesh::commands::{self, Session};
use nivesh::config::Config;
use nivesh::{Ledger, cli, logging};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .and_then(|s| logging::parse_level(s))
        .unwrap_or(tracing_subscriber::filter::LevelFilter::WARN);
    logging::init_logger(level);

    let config = Config::load()?;
    let ledger_path = match matches.get_one::<String>("ledger") {
        Some(p) => PathBuf::from(p.trim()),
        None => config.ledger_path()?,
    };
    let language = match matches.get_one::<String>("lang") {
        Some(l) => l.parse()?,
        None => config.language,
    };
    let owner_id = matches
        .get_one::<String>("owner")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| config.owner_id.clone());
    let session = Session::new(owner_id, language, Local::now().date_naive());
    debug!(?session, ledger = %ledger_path.display(), "starting");

    let mut ledger = Ledger::load_or_default(&ledger_path)?;
    let before = ledger.clone();

    match matches.subcommand() {
        Some(("init", _)) => {
            if !ledger_path.exists() {
                ledger.save(&ledger_path)?;
            }
            println!("Ledger ready at {}", ledger_path.display());
        }
        Some(("expense", sub)) => commands::transactions::handle_expenses(&mut ledger, &session, sub)?,
        Some(("income", sub)) => commands::transactions::handle_income(&mut ledger, &session, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut ledger, &session, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&ledger, &session, sub)?,
        Some(("recommend", sub)) => {
            commands::recommend::handle(&ledger, &session, config.assumed_monthly_income, sub)?
        }
        Some(("platforms", sub)) => commands::platforms::handle(&session, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut ledger, &session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    if ledger != before {
        ledger.save(&ledger_path)?;
    }
    Ok(())
}
