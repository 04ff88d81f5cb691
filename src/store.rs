// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory state container for a dashboard session.
//!
//! Records, the cached [`Stats`] and the active [`Query`] live together.
//! Every mutation of the record list recomputes the stats before returning,
//! so a reader borrowing the store never sees stats for a different list.
//! A mutation whose stats cannot be computed is rolled back.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::filter::{self, Query};
use crate::models::{Category, NewSubscription, Subscription, SubscriptionId};
use crate::seed::seed_subscriptions;
use crate::stats::{self, Stats};

#[derive(Debug, Clone)]
pub struct Store {
    records: Vec<Subscription>,
    stats: Stats,
    query: Query,
    next_id: u64,
    revision: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            stats: Stats::default(),
            query: Query::default(),
            next_id: 1,
            revision: 0,
        }
    }
}

impl Store {
    pub fn seeded() -> Result<Self> {
        Self::from_records(seed_subscriptions())
    }

    pub fn from_records(records: Vec<Subscription>) -> Result<Self> {
        if let Some(bad) = records.iter().find(|s| s.amount < Decimal::ZERO) {
            return Err(Error::NegativeAmount(bad.amount.to_string()));
        }
        let next_id = records.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        let stats = stats::aggregate(&records)?;
        Ok(Self {
            records,
            stats,
            query: Query::default(),
            next_id,
            revision: 0,
        })
    }

    pub fn records(&self) -> &[Subscription] {
        &self.records
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Number of record-list mutations since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: SubscriptionId) -> Option<&Subscription> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Categories that currently hold at least one record.
    pub fn active_categories(&self) -> Vec<Category> {
        self.stats.category_breakdown.keys().copied().collect()
    }

    /// Records matching the session query, soonest renewal first.
    pub fn visible(&self) -> Vec<&Subscription> {
        filter::filter(&self.records, &self.query)
    }

    pub fn add(&mut self, new: NewSubscription) -> Result<SubscriptionId> {
        validate(&new)?;
        let id = SubscriptionId(self.next_id);
        let sub = new.into_subscription(id);
        debug!(%id, name = %sub.name, amount = %sub.amount, "adding subscription");
        self.records.push(sub);
        match stats::aggregate(&self.records) {
            Ok(stats) => {
                self.next_id += 1;
                self.commit(stats);
                Ok(id)
            }
            Err(err) => {
                self.records.pop();
                warn!(%id, error = %err, "add rolled back");
                Err(err)
            }
        }
    }

    /// Removes the record with `id`. Returns whether anything was removed;
    /// unknown ids are a no-op.
    pub fn delete(&mut self, id: SubscriptionId) -> Result<bool> {
        let Some(pos) = self.records.iter().position(|s| s.id == id) else {
            debug!(%id, "delete ignored, no such subscription");
            return Ok(false);
        };
        let removed = self.records.remove(pos);
        match stats::aggregate(&self.records) {
            Ok(stats) => {
                debug!(%id, "deleted subscription");
                self.commit(stats);
                Ok(true)
            }
            Err(err) => {
                self.records.insert(pos, removed);
                warn!(%id, error = %err, "delete rolled back");
                Err(err)
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    /// Toggles the category selector.
    pub fn set_category_filter(&mut self, category: Category) {
        self.query.toggle_category(category);
    }

    pub fn clear_category_filter(&mut self) {
        self.query.category = None;
    }

    fn commit(&mut self, stats: Stats) {
        self.stats = stats;
        self.revision += 1;
        debug!(
            revision = self.revision,
            count = self.stats.active_count,
            "stats recomputed"
        );
    }
}

fn validate(new: &NewSubscription) -> Result<()> {
    if new.name.trim().is_empty() {
        return Err(Error::InvalidSubscription("name must not be empty".into()));
    }
    if new.plan.trim().is_empty() {
        return Err(Error::InvalidSubscription("plan must not be empty".into()));
    }
    if new.amount < Decimal::ZERO {
        return Err(Error::NegativeAmount(new.amount.to_string()));
    }
    Ok(())
}
