// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use serde::Serialize;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_RENEWAL_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,567
    Indian,
    /// 1,234,567
    Western,
}

impl Grouping {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indian" | "en-in" => Ok(Grouping::Indian),
            "western" | "en-us" => Ok(Grouping::Western),
            other => Err(anyhow!("Unknown grouping '{}' (use indian|western)", other)),
        }
    }
}

/// Display and session settings, taken from global CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub currency_symbol: String,
    pub grouping: Grouping,
    pub renewal_window_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            grouping: Grouping::Indian,
            renewal_window_days: DEFAULT_RENEWAL_WINDOW_DAYS,
        }
    }
}

impl Settings {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let mut s = Settings::default();
        if let Some(sym) = m.get_one::<String>("currency_symbol") {
            s.currency_symbol = sym.trim().to_string();
        }
        if let Some(g) = m.get_one::<String>("grouping") {
            s.grouping = Grouping::parse(g)?;
        }
        if let Some(w) = m.get_one::<u32>("renewal_window") {
            s.renewal_window_days = *w;
        }
        Ok(s)
    }
}
