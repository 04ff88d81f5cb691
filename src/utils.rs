// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::config::{Grouping, Settings};
use crate::error::Error;

// Optional sign, optional currency marker (a currency symbol, Rs. or INR),
// then digits with optional thousands separators and fraction.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?\s*(?:\p{Sc}|(?i:rs\.?|inr))?\s*(-)?\s*(\d[\d,]*(?:\.\d+)?|\.\d+)$")
        .expect("amount pattern compiles")
});

pub fn parse_date(s: &str) -> crate::error::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Parses user-facing amount text such as `₹1,20,000`, `Rs. 99.50` or `1200`.
/// Negative amounts are rejected.
pub fn parse_amount(s: &str) -> crate::error::Result<Decimal> {
    let raw = s.trim();
    let caps = AMOUNT_RE
        .captures(raw)
        .ok_or_else(|| Error::InvalidAmount(s.to_string()))?;
    let negative = caps.get(1).is_some() || caps.get(2).is_some();
    let mut digits = caps[3].replace(',', "");
    if digits.starts_with('.') {
        digits.insert(0, '0');
    }
    let value = digits
        .parse::<Decimal>()
        .map_err(|_| Error::InvalidAmount(s.to_string()))?;
    if negative && !value.is_zero() {
        return Err(Error::NegativeAmount(s.to_string()));
    }
    Ok(value)
}

/// Formats money with the configured symbol and digit grouping. Whole
/// amounts drop the `.00`.
pub fn fmt_money(d: &Decimal, settings: &Settings) -> String {
    let s = format!("{:.2}", d.abs());
    let (int_part, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let grouped = group_digits(int_part, settings.grouping);
    let sign = if d.is_sign_negative() && !d.is_zero() {
        "-"
    } else {
        ""
    };
    if frac == "00" {
        format!("{}{}{}", sign, settings.currency_symbol, grouped)
    } else {
        format!("{}{}{}.{}", sign, settings.currency_symbol, grouped, frac)
    }
}

fn group_digits(int_part: &str, grouping: Grouping) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    if digits.len() <= 3 {
        return int_part.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };
    let mut groups: Vec<String> = head.rchunks(step).map(|c| c.iter().collect()).collect();
    groups.reverse();
    groups.push(tail.iter().collect());
    groups.join(",")
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
