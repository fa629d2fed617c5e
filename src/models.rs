// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Expense categories seeded for a fresh owner. Expenses may also carry any
/// free-text category; the recorded label is frozen and never re-resolved.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Health",
    "Entertainment",
    "Other",
];

/// Recurrence classification of an income record. A `Yearly` record is an
/// annual sum prorated within its own calendar year, not a recurring schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            other => Err(EngineError::InvalidPeriod(other.to_string())),
        }
    }
}

/// Recurrence classification of a budget ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            other => Err(EngineError::InvalidPeriod(other.to_string())),
        }
    }
}

/// A `(year, month)` bucket key, the finest granularity the engine works at.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidDate(format!("{}-{:02}", year, month)));
        }
        Ok(MonthKey { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Account selector for a balance or breakdown query. Matching is exact
/// reference equality; events with no account reference form their own
/// bucket and are only visible through `Unassigned` or `Any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFilter {
    Any,
    Account(i64),
    Unassigned,
}

impl AccountFilter {
    pub fn matches(&self, account_id: Option<i64>) -> bool {
        match self {
            AccountFilter::Any => true,
            AccountFilter::Account(id) => account_id == Some(*id),
            AccountFilter::Unassigned => account_id.is_none(),
        }
    }
}

/// A named partition of financial events (wallet card). Display metadata is
/// irrelevant to calculation; the one-default-per-owner rule is enforced by
/// the persistence collaborator, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEvent {
    pub id: i64,
    pub owner_id: i64,
    pub account_id: Option<i64>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub period: Period,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEvent {
    pub id: i64,
    pub owner_id: i64,
    pub account_id: Option<i64>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub payment_note: Option<String>,
}

/// A spending ceiling for one category. "Spent" against it is always a
/// computed quantity, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub owner_id: i64,
    pub category: String,
    pub limit: Decimal,
    pub period: BudgetPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
}

/// A per-owner category name. Deleting one never rewrites the label frozen
/// on existing expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
}
