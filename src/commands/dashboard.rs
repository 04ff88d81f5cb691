// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::categories;
use crate::commands::subscriptions::{SubscriptionView, print_table, views};
use crate::config::Settings;
use crate::filter::Query;
use crate::stats::{RenewalSummary, Stats, renewal_summary};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub stats: &'a Stats,
    pub renewals: RenewalSummary,
    pub query: &'a Query,
    pub subscriptions: Vec<SubscriptionView>,
}

pub fn snapshot<'a>(store: &'a Store, settings: &Settings) -> DashboardSnapshot<'a> {
    DashboardSnapshot {
        stats: store.stats(),
        renewals: renewal_summary(store.records(), settings.renewal_window_days),
        query: store.query(),
        subscriptions: views(&store.visible()),
    }
}

pub fn handle(store: &Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    render(store, settings, sub.get_flag("json"), sub.get_flag("jsonl"))
}

pub fn render(store: &Store, settings: &Settings, json_flag: bool, jsonl_flag: bool) -> Result<()> {
    let snap = snapshot(store, settings);
    if maybe_print_json(json_flag, jsonl_flag, &snap)? {
        return Ok(());
    }

    let stats = snap.stats;
    println!(
        "{}",
        pretty_table(
            &["Monthly Recurring", "Active Subscriptions", "Yearly Forecast"],
            vec![vec![
                fmt_money(&stats.monthly_recurring, settings),
                format!(
                    "{} ({} renewing soon)",
                    stats.active_count, snap.renewals.expiring_soon
                ),
                fmt_money(&stats.yearly_forecast, settings),
            ]],
        )
    );

    println!("Category Breakdown");
    let cats = categories::rows(stats, store.query().category);
    categories::print_breakdown(&cats, &stats.total_spent, settings);

    let query = store.query();
    let mut active = Vec::new();
    if !query.search_term.is_empty() {
        active.push(format!("search '{}'", query.search_term));
    }
    if let Some(c) = query.category {
        active.push(format!("category {}", c));
    }
    if active.is_empty() {
        println!("Active Subscriptions");
    } else {
        println!("Active Subscriptions ({})", active.join(", "));
    }
    print_table(&store.visible(), settings);
    Ok(())
}
