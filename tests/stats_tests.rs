// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use subscribe::error::Error;
use subscribe::models::{BillingCycle, Category, CategoryTag, Subscription, SubscriptionId};
use subscribe::seed::seed_subscriptions;
use subscribe::stats::{aggregate, monthly_equivalent, renewal_summary};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn sub(id: u64, name: &str, amount: &str, cycle: BillingCycle, days_left: u32) -> Subscription {
    Subscription {
        id: SubscriptionId(id),
        name: name.to_string(),
        plan: "Standard".to_string(),
        days_left,
        amount: dec(amount),
        icon: "📦".to_string(),
        category: CategoryTag::Inferred,
        billing_cycle: cycle,
        next_billing_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    }
}

#[test]
fn monthly_and_yearly_projection_scenario() {
    let records = vec![
        sub(1, "Tool A", "100", BillingCycle::Monthly, 3),
        sub(2, "Tool B", "1200", BillingCycle::Yearly, 9),
    ];
    let stats = aggregate(&records).unwrap();
    assert_eq!(stats.monthly_recurring, dec("200"));
    assert_eq!(stats.yearly_forecast, dec("2400"));
    assert_eq!(stats.total_spent, dec("1300"));
    assert_eq!(stats.active_count, 2);
}

#[test]
fn seed_data_totals() {
    let stats = aggregate(&seed_subscriptions()).unwrap();
    assert_eq!(stats.total_spent, dec("1600000"));
    assert_eq!(stats.monthly_recurring, dec("545833.34"));
    assert_eq!(stats.yearly_forecast, dec("6550000"));
    assert_eq!(stats.active_count, 7);
    assert_eq!(stats.cycle_counts.monthly, 2);
    assert_eq!(stats.cycle_counts.yearly, 5);
    assert_eq!(stats.category_breakdown[&Category::Hr], dec("200000"));
    assert_eq!(stats.category_breakdown[&Category::Software], dec("400000"));
    assert_eq!(stats.category_breakdown[&Category::Hardware], dec("500000"));
    assert_eq!(stats.category_breakdown[&Category::Healthcare], dec("300000"));
    assert_eq!(stats.category_breakdown[&Category::Financial], dec("200000"));
    assert_eq!(stats.category_counts[&Category::Hr], 2);
}

#[test]
fn empty_categories_are_absent() {
    let stats = aggregate(&seed_subscriptions()).unwrap();
    assert!(!stats.category_breakdown.contains_key(&Category::Other));
    assert!(!stats.category_counts.contains_key(&Category::Other));

    let empty: Vec<Subscription> = Vec::new();
    let stats = aggregate(&empty).unwrap();
    assert!(stats.category_breakdown.is_empty());
    assert_eq!(stats.total_spent, Decimal::ZERO);
}

#[test]
fn breakdown_partitions_total() {
    let mut records = seed_subscriptions();
    records.push(sub(8, "QuickBooks Online", "1999.99", BillingCycle::Monthly, 4));
    records.push(sub(9, "Unknown Tool", "0.01", BillingCycle::Yearly, 40));
    let stats = aggregate(&records).unwrap();
    let sum: Decimal = stats.category_breakdown.values().copied().sum();
    assert_eq!(sum, stats.total_spent);
    assert_eq!(stats.category_breakdown[&Category::Financial], dec("201999.99"));
    assert_eq!(stats.category_breakdown[&Category::Other], dec("0.01"));
}

#[test]
fn aggregate_ignores_record_order() {
    let mut records = seed_subscriptions();
    records.push(sub(8, "Oracle Cloud", "333.33", BillingCycle::Yearly, 1));
    records.push(sub(9, "Cerner", "12.5", BillingCycle::Monthly, 2));
    let expected = aggregate(&records).unwrap();

    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(aggregate(&reversed).unwrap(), expected);

    let mut rotated = records.clone();
    rotated.rotate_left(4);
    assert_eq!(aggregate(&rotated).unwrap(), expected);
}

#[test]
fn yearly_split_uses_bankers_rounding() {
    // 0.30 / 12 = 0.025 -> 0.02, 0.54 / 12 = 0.045 -> 0.04
    assert_eq!(
        monthly_equivalent(&sub(1, "a", "0.30", BillingCycle::Yearly, 1)),
        dec("0.02")
    );
    assert_eq!(
        monthly_equivalent(&sub(2, "b", "0.54", BillingCycle::Yearly, 1)),
        dec("0.04")
    );
    assert_eq!(
        monthly_equivalent(&sub(3, "c", "0.30", BillingCycle::Monthly, 1)),
        dec("0.30")
    );
}

#[test]
fn renewal_window_counts_expiring_soon() {
    let seed = seed_subscriptions();
    let summary = renewal_summary(&seed, 7);
    assert_eq!(summary.active, 7);
    assert_eq!(summary.expiring_soon, 2);

    assert_eq!(renewal_summary(&seed, 14).expiring_soon, 4);
    assert_eq!(renewal_summary(&seed, 0).expiring_soon, 0);
}

#[test]
fn overflowing_totals_return_an_error() {
    let mut monthly = sub(1, "Huge Monthly", "0", BillingCycle::Monthly, 3);
    monthly.amount = Decimal::MAX;
    assert!(matches!(
        aggregate(&[monthly]),
        Err(Error::AmountOverflow(name)) if name == "Huge Monthly"
    ));

    let mut yearly = sub(2, "Huge Yearly", "0", BillingCycle::Yearly, 3);
    yearly.amount = Decimal::MAX;
    let records = vec![sub(3, "Small", "1", BillingCycle::Yearly, 3), yearly];
    assert!(matches!(aggregate(&records), Err(Error::AmountOverflow(_))));
}

#[test]
fn renewal_summary_separates_expired_from_expiring() {
    let records = vec![
        sub(1, "Due today", "10", BillingCycle::Monthly, 0),
        sub(2, "Soon", "10", BillingCycle::Monthly, 4),
        sub(3, "Later", "10", BillingCycle::Monthly, 20),
    ];
    let summary = renewal_summary(&records, 7);
    assert_eq!(summary.active, 3);
    assert_eq!(summary.expired, 1);
    assert_eq!(summary.expiring_soon, 1);

    assert_eq!(renewal_summary(&seed_subscriptions(), 7).expired, 0);
}
