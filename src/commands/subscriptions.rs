// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::Settings;
use crate::filter::{self, Query};
use crate::models::{
    BillingCycle, Category, CategoryTag, NewSubscription, Subscription, SubscriptionId,
};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

/// Days until renewal assumed when neither days-left nor a date is given.
pub const DEFAULT_DAYS_LEFT: u32 = 30;

/// A record as shown to the user, with its category resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionView {
    pub id: SubscriptionId,
    pub name: String,
    pub plan: String,
    pub category: Category,
    pub category_inferred: bool,
    pub billing_cycle: BillingCycle,
    pub amount: Decimal,
    pub days_left: u32,
    pub next_billing_date: NaiveDate,
    pub icon: String,
}

impl From<&Subscription> for SubscriptionView {
    fn from(s: &Subscription) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            plan: s.plan.clone(),
            category: s.effective_category(),
            category_inferred: s.category == CategoryTag::Inferred,
            billing_cycle: s.billing_cycle,
            amount: s.amount,
            days_left: s.days_left,
            next_billing_date: s.next_billing_date,
            icon: s.icon.clone(),
        }
    }
}

pub fn views(subs: &[&Subscription]) -> Vec<SubscriptionView> {
    subs.iter().map(|s| SubscriptionView::from(*s)).collect()
}

pub fn print_table(subs: &[&Subscription], settings: &Settings) {
    let rows = subs
        .iter()
        .map(|s| {
            let category = s.effective_category();
            let category = if s.category == CategoryTag::Inferred {
                format!("{} (auto)", category)
            } else {
                category.to_string()
            };
            vec![
                s.id.to_string(),
                format!("{} {}", s.icon, s.name),
                s.plan.clone(),
                category,
                fmt_money(&s.amount, settings),
                s.billing_cycle.to_string(),
                format!("{} days", s.days_left),
                s.next_billing_date.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "ID", "Name", "Plan", "Category", "Amount", "Cycle", "Renews in", "Next billing"
            ],
            rows
        )
    );
}

pub fn list(store: &Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let search = sub.get_one::<String>("search");
    let category = sub
        .get_one::<String>("category")
        .map(|c| c.parse::<Category>())
        .transpose()?;

    // Explicit flags run a one-off query; otherwise show the session view.
    let subs = if search.is_some() || category.is_some() {
        let q = Query::new(search.cloned().unwrap_or_default(), category);
        filter::filter(store.records(), &q)
    } else {
        store.visible()
    };

    if !maybe_print_json(json_flag, jsonl_flag, &views(&subs))? {
        print_table(&subs, settings);
    }
    Ok(())
}

/// Fills in whichever of days-left / next billing date is missing.
pub fn resolve_schedule(
    today: NaiveDate,
    days_left: Option<u32>,
    next_billing: Option<NaiveDate>,
) -> (u32, NaiveDate) {
    let after = |d: u32| today.checked_add_days(Days::new(d as u64)).unwrap_or(today);
    match (days_left, next_billing) {
        (Some(d), Some(date)) => (d, date),
        (Some(d), None) => (d, after(d)),
        (None, Some(date)) => {
            let d = (date - today).num_days().clamp(0, u32::MAX as i64) as u32;
            (d, date)
        }
        (None, None) => (DEFAULT_DAYS_LEFT, after(DEFAULT_DAYS_LEFT)),
    }
}

pub fn add(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let plan = sub.get_one::<String>("plan").unwrap().to_string();
    let amount_raw = sub.get_one::<String>("amount").unwrap();
    let amount = parse_amount(amount_raw)?;
    let billing_cycle = sub.get_one::<String>("cycle").unwrap().parse::<BillingCycle>()?;
    let category = sub
        .get_one::<String>("category")
        .map(|c| c.parse::<Category>())
        .transpose()?;
    let next_billing = sub
        .get_one::<String>("next_billing")
        .map(|d| parse_date(d))
        .transpose()?;
    let days_left = sub.get_one::<u32>("days_left").copied();
    let icon = sub.get_one::<String>("icon").cloned();

    let today = chrono::Local::now().date_naive();
    let (days_left, next_billing_date) = resolve_schedule(today, days_left, next_billing);

    let id = store
        .add(NewSubscription {
            name,
            plan,
            days_left,
            amount,
            icon,
            category: CategoryTag::from(category),
            billing_cycle,
            next_billing_date,
        })
        .with_context(|| format!("Could not add subscription with amount '{}'", amount_raw))?;

    if let Some(s) = store.get(id) {
        println!(
            "Added #{} {} ({}) {} {}, renews in {} days",
            id,
            s.name,
            s.effective_category(),
            fmt_money(&s.amount, settings),
            s.billing_cycle,
            s.days_left
        );
    }
    Ok(())
}

pub fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("id").unwrap();
    let id = raw
        .parse::<SubscriptionId>()
        .with_context(|| format!("Invalid subscription id '{}'", raw.trim()))?;
    if store.delete(id)? {
        println!("Removed subscription {}", id);
    } else {
        println!("No subscription {}; nothing removed", id);
    }
    Ok(())
}
