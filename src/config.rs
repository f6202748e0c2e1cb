// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::i18n::Language;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Nivesh", "nivesh"));

const CONFIG_FILE: &str = "config.json";
const LEDGER_FILE: &str = "ledger.json";

/// User settings from `config.json`. Command-line flags win over these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub owner_id: String,
    pub ledger_path: Option<PathBuf>,
    /// Income used for suggestions in months with no recorded income.
    pub assumed_monthly_income: Option<Decimal>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: Language::En,
            owner_id: "local".to_string(),
            ledger_path: None,
            assumed_monthly_income: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")
}

pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

pub fn default_ledger_path() -> Result<PathBuf> {
    let proj = project_dirs()?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(LEDGER_FILE))
}

impl Config {
    /// Reads the config at `path`; a missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Open config at {}", path.display()))?;
        let cfg = serde_json::from_str(&text)
            .with_context(|| format!("Parse config at {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn ledger_path(&self) -> Result<PathBuf> {
        match &self.ledger_path {
            Some(p) => Ok(p.clone()),
            None => default_ledger_path(),
        }
    }
}
