// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::Settings;
use crate::models::Category;
use crate::stats::Stats;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: Category,
    pub spent: Decimal,
    pub count: usize,
    pub selected: bool,
}

pub fn rows(stats: &Stats, selected: Option<Category>) -> Vec<CategoryRow> {
    stats
        .category_breakdown
        .iter()
        .map(|(c, spent)| CategoryRow {
            category: *c,
            spent: *spent,
            count: stats.category_counts.get(c).copied().unwrap_or(0),
            selected: selected == Some(*c),
        })
        .collect()
}

pub fn print_breakdown(data: &[CategoryRow], total: &Decimal, settings: &Settings) {
    let rows = data
        .iter()
        .map(|r| {
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                (r.spent / *total * Decimal::from(100)).round_dp(1)
            };
            let name = if r.selected {
                format!("{} *", r.category)
            } else {
                r.category.to_string()
            };
            vec![
                name,
                fmt_money(&r.spent, settings),
                r.count.to_string(),
                format!("{}%", share),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Subscriptions", "Share"], rows)
    );
}

pub fn handle(store: &Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = rows(store.stats(), store.query().category);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        print_breakdown(&data, &store.stats().total_spent, settings);
    }
    Ok(())
}
