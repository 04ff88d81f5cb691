// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the subscription core.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid amount '{0}', expected a currency amount like ₹1200 or 99.50")]
    InvalidAmount(String),

    #[error("Negative amount '{0}' is not allowed")]
    NegativeAmount(String),

    #[error("Unknown category '{0}' (use HR|software|hardware|healthcare|financial|other)")]
    UnknownCategory(String),

    #[error("Unknown billing cycle '{0}' (use monthly|yearly)")]
    UnknownBillingCycle(String),

    #[error("Invalid subscription: {0}")]
    InvalidSubscription(String),

    #[error("Amounts overflow while totalling '{0}'")]
    AmountOverflow(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
