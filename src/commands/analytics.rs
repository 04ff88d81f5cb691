// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::Category;
use crate::stats::{CycleCounts, RenewalSummary, renewal_summary};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub status: RenewalSummary,
    pub category_counts: BTreeMap<Category, usize>,
    pub billing_cycles: CycleCounts,
    pub monthly_expenditure: Decimal,
    pub yearly_expenditure: Decimal,
}

pub fn compute(store: &Store, settings: &Settings) -> Analytics {
    let stats = store.stats();
    Analytics {
        status: renewal_summary(store.records(), settings.renewal_window_days),
        category_counts: stats.category_counts.clone(),
        billing_cycles: stats.cycle_counts.clone(),
        monthly_expenditure: stats.monthly_recurring,
        yearly_expenditure: stats.yearly_forecast,
    }
}

pub fn handle(store: &Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let a = compute(store, settings);
    if maybe_print_json(json_flag, jsonl_flag, &a)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Status", "Subscriptions"],
            vec![
                vec!["Active".into(), a.status.active.to_string()],
                vec![
                    format!("Expiring soon (<= {} days)", settings.renewal_window_days),
                    a.status.expiring_soon.to_string(),
                ],
                vec!["Expired".into(), a.status.expired.to_string()],
            ],
        )
    );

    let cat_rows = a
        .category_counts
        .iter()
        .map(|(c, n)| vec![c.to_string(), n.to_string()])
        .collect();
    println!("{}", pretty_table(&["Category", "Subscriptions"], cat_rows));

    println!(
        "{}",
        pretty_table(
            &["Billing cycle", "Subscriptions"],
            vec![
                vec!["Monthly".into(), a.billing_cycles.monthly.to_string()],
                vec!["Yearly".into(), a.billing_cycles.yearly.to_string()],
            ],
        )
    );

    println!(
        "{}",
        pretty_table(
            &["Monthly Expenditure", "Yearly Expenditure"],
            vec![vec![
                fmt_money(&a.monthly_expenditure, settings),
                fmt_money(&a.yearly_expenditure, settings),
            ]],
        )
    );
    Ok(())
}
