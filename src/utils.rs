// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineError;

pub fn parse_date(s: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Parse a decimal that must be a valid non-negative monetary amount.
/// Anything unparsable or below zero is rejected before it can reach a fold.
pub fn parse_amount(s: &str) -> Result<Decimal, EngineError> {
    let d = s
        .parse::<Decimal>()
        .map_err(|_| EngineError::InvalidAmount(s.to_string()))?;
    non_negative(d)
}

pub fn non_negative(amount: Decimal) -> Result<Decimal, EngineError> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidAmount(amount.to_string()));
    }
    Ok(amount)
}

#[allow(dead_code)]
pub fn fmt_money(d: &Decimal) -> String {
    format!("{}", d.round_dp(2))
}
