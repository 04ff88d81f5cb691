// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classifier;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubscriptionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(SubscriptionId)
    }
}

/// Fixed set of spend categories. Declaration order is the classifier's
/// priority order and the ordering used for breakdown maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "software")]
    Software,
    #[serde(rename = "hardware")]
    Hardware,
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "financial")]
    Financial,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Hr,
        Category::Software,
        Category::Hardware,
        Category::Healthcare,
        Category::Financial,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Hr => "HR",
            Category::Software => "software",
            Category::Hardware => "hardware",
            Category::Healthcare => "healthcare",
            Category::Financial => "financial",
            Category::Other => "other",
        }
    }

    /// Glyph used when a new record is added without an icon.
    pub fn default_icon(&self) -> &'static str {
        match self {
            Category::Hr => "👥",
            Category::Software => "☁️",
            Category::Hardware => "🖥️",
            Category::Healthcare => "🏥",
            Category::Financial => "📊",
            Category::Other => "📦",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(wanted.to_string()))
    }
}

/// Where a record's category comes from. An explicit tag always wins;
/// an inferred one is recomputed from the name on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "category", rename_all = "lowercase")]
pub enum CategoryTag {
    Explicit(Category),
    Inferred,
}

impl From<Option<Category>> for CategoryTag {
    fn from(c: Option<Category>) -> Self {
        match c {
            Some(c) => CategoryTag::Explicit(c),
            None => CategoryTag::Inferred,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillingCycle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(BillingCycle::Monthly),
            "yearly" | "annual" | "annually" | "year" | "y" => Ok(BillingCycle::Yearly),
            _ => Err(Error::UnknownBillingCycle(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub plan: String,
    pub days_left: u32,
    pub amount: Decimal,
    pub icon: String,
    pub category: CategoryTag,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
}

impl Subscription {
    pub fn effective_category(&self) -> Category {
        match self.category {
            CategoryTag::Explicit(c) => c,
            CategoryTag::Inferred => classifier::classify(&self.name),
        }
    }
}

/// A record as submitted by the caller, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub name: String,
    pub plan: String,
    pub days_left: u32,
    pub amount: Decimal,
    pub icon: Option<String>,
    pub category: CategoryTag,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
}

impl NewSubscription {
    pub(crate) fn into_subscription(self, id: SubscriptionId) -> Subscription {
        let icon = match self.icon {
            Some(icon) if !icon.trim().is_empty() => icon,
            _ => {
                let category = match self.category {
                    CategoryTag::Explicit(c) => c,
                    CategoryTag::Inferred => classifier::classify(&self.name),
                };
                category.default_icon().to_string()
            }
        };
        Subscription {
            id,
            name: self.name.trim().to_string(),
            plan: self.plan.trim().to_string(),
            days_left: self.days_left,
            amount: self.amount,
            icon,
            category: self.category,
            billing_cycle: self.billing_cycle,
            next_billing_date: self.next_billing_date,
        }
    }
}
