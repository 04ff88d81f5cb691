// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{BillingCycle, Category, CategoryTag, Subscription, SubscriptionId};

// (id, name, plan, days_left, amount, icon, category, cycle, (y, m, d))
type Row = (
    u64,
    &'static str,
    &'static str,
    u32,
    i64,
    &'static str,
    Category,
    BillingCycle,
    (i32, u32, u32),
);

const ROWS: [Row; 7] = [
    (1, "Workday", "Enterprise", 7, 120_000, "👥", Category::Hr, BillingCycle::Yearly, (2025, 3, 25)),
    (2, "SAP SuccessFactors", "Professional", 15, 80_000, "💼", Category::Hr, BillingCycle::Yearly, (2025, 4, 2)),
    (3, "Microsoft Azure", "Enterprise", 12, 250_000, "☁️", Category::Software, BillingCycle::Monthly, (2025, 3, 30)),
    (4, "Salesforce", "Enterprise", 14, 150_000, "💫", Category::Software, BillingCycle::Yearly, (2025, 4, 1)),
    (5, "Dell EMC", "Server Package", 30, 500_000, "🖥️", Category::Hardware, BillingCycle::Yearly, (2025, 4, 15)),
    (6, "Epic Systems", "Healthcare Suite", 5, 300_000, "🏥", Category::Healthcare, BillingCycle::Yearly, (2025, 3, 23)),
    (7, "Bloomberg Terminal", "Professional", 20, 200_000, "📊", Category::Financial, BillingCycle::Monthly, (2025, 4, 8)),
];

/// Built-in records every session starts from.
pub fn seed_subscriptions() -> Vec<Subscription> {
    ROWS.iter()
        .filter_map(|&(id, name, plan, days_left, amount, icon, category, cycle, (y, m, d))| {
            let next_billing_date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Subscription {
                id: SubscriptionId(id),
                name: name.to_string(),
                plan: plan.to_string(),
                days_left,
                amount: Decimal::from(amount),
                icon: icon.to_string(),
                category: CategoryTag::Explicit(category),
                billing_cycle: cycle,
                next_billing_date,
            })
        })
        .collect()
}
