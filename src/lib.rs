// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod goals;
pub mod i18n;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod overview;
pub mod period;
pub mod recommend;
pub mod store;
pub mod utils;

pub use error::FinanceError;
pub use ledger::Ledger;
pub use store::RecordStore;
