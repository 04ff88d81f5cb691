// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::models::{Category, Subscription};

/// Search term plus optional category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    pub search_term: String,
    pub category: Option<Category>,
}

impl Query {
    pub fn new(search_term: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Selecting the active category clears it.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn matches(&self, sub: &Subscription) -> bool {
        let effective = sub.effective_category();
        let needle = self.search_term.to_lowercase();
        let search_ok = needle.is_empty()
            || sub.name.to_lowercase().contains(&needle)
            || effective.label().to_lowercase().contains(&needle);
        let category_ok = self.category.is_none_or(|c| c == effective);
        search_ok && category_ok
    }
}

/// Matching records ordered by days left, soonest first. Ties keep
/// collection order.
pub fn filter<'a>(records: &'a [Subscription], query: &Query) -> Vec<&'a Subscription> {
    let mut out: Vec<&Subscription> = records.iter().filter(|s| query.matches(s)).collect();
    out.sort_by_key(|s| s.days_left);
    out
}
