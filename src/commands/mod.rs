// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod categories;
pub mod dashboard;
pub mod exporter;
pub mod query;
pub mod shell;
pub mod subscriptions;

use anyhow::Result;

use crate::config::Settings;
use crate::store::Store;

/// Routes one parsed command line to its handler. The same store is passed
/// to every handler so a shell session keeps its mutations.
pub fn dispatch(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dashboard", sub)) => dashboard::handle(store, settings, sub)?,
        Some(("list", sub)) => subscriptions::list(store, settings, sub)?,
        Some(("add", sub)) => subscriptions::add(store, settings, sub)?,
        Some(("rm", sub)) => subscriptions::rm(store, sub)?,
        Some(("search", sub)) => query::search(store, settings, sub)?,
        Some(("filter", sub)) => query::filter(store, settings, sub)?,
        Some(("categories", sub)) => categories::handle(store, settings, sub)?,
        Some(("analytics", sub)) => analytics::handle(store, settings, sub)?,
        Some(("export", sub)) => exporter::handle(store, sub)?,
        Some(("shell", _)) => shell::handle(store, settings)?,
        _ => dashboard::render(store, settings, false, false)?,
    }
    Ok(())
}
