// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{BillingCycle, Category, Subscription};

const MONTHS_PER_YEAR: i64 = 12;
const MONEY_DP: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CycleCounts {
    pub monthly: usize,
    pub yearly: usize,
}

/// Summary of a record collection. All money is in the single display currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    /// One billed charge per record, regardless of cycle.
    pub total_spent: Decimal,
    pub active_count: usize,
    pub yearly_forecast: Decimal,
    pub monthly_recurring: Decimal,
    /// Only categories with at least one record are present.
    pub category_breakdown: BTreeMap<Category, Decimal>,
    pub category_counts: BTreeMap<Category, usize>,
    pub cycle_counts: CycleCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenewalSummary {
    pub active: usize,
    /// Renewing within the window, not yet due.
    pub expiring_soon: usize,
    /// Billing date reached (`days_left == 0`).
    pub expired: usize,
}

/// Monthly share of a charge. Yearly amounts are split over 12 months and
/// rounded to 2dp with banker's rounding.
pub fn monthly_equivalent(sub: &Subscription) -> Decimal {
    match sub.billing_cycle {
        BillingCycle::Monthly => sub.amount,
        BillingCycle::Yearly => (sub.amount / Decimal::from(MONTHS_PER_YEAR))
            .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointNearestEven),
    }
}

pub fn yearly_equivalent(sub: &Subscription) -> Result<Decimal> {
    match sub.billing_cycle {
        BillingCycle::Monthly => sub
            .amount
            .checked_mul(Decimal::from(MONTHS_PER_YEAR))
            .ok_or_else(|| Error::AmountOverflow(sub.name.clone())),
        BillingCycle::Yearly => Ok(sub.amount),
    }
}

fn add_to(acc: &mut Decimal, v: Decimal, sub: &Subscription) -> Result<()> {
    *acc = acc
        .checked_add(v)
        .ok_or_else(|| Error::AmountOverflow(sub.name.clone()))?;
    Ok(())
}

/// Fails with [`Error::AmountOverflow`] when a running total no longer fits
/// in a `Decimal`.
pub fn aggregate<'a, I>(records: I) -> Result<Stats>
where
    I: IntoIterator<Item = &'a Subscription>,
{
    let mut stats = Stats::default();
    for sub in records {
        add_to(&mut stats.total_spent, sub.amount, sub)?;
        add_to(&mut stats.yearly_forecast, yearly_equivalent(sub)?, sub)?;
        add_to(&mut stats.monthly_recurring, monthly_equivalent(sub), sub)?;
        stats.active_count += 1;

        let category = sub.effective_category();
        add_to(
            stats
                .category_breakdown
                .entry(category)
                .or_insert(Decimal::ZERO),
            sub.amount,
            sub,
        )?;
        *stats.category_counts.entry(category).or_insert(0) += 1;

        match sub.billing_cycle {
            BillingCycle::Monthly => stats.cycle_counts.monthly += 1,
            BillingCycle::Yearly => stats.cycle_counts.yearly += 1,
        }
    }
    Ok(stats)
}

pub fn renewal_summary<'a, I>(records: I, window_days: u32) -> RenewalSummary
where
    I: IntoIterator<Item = &'a Subscription>,
{
    records
        .into_iter()
        .fold(RenewalSummary::default(), |mut acc, sub| {
            acc.active += 1;
            if sub.days_left == 0 {
                acc.expired += 1;
            } else if sub.days_left <= window_days {
                acc.expiring_soon += 1;
            }
            acc
        })
}
