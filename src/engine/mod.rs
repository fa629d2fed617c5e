// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::models::{Account, AccountFilter, Budget, ExpenseEvent, IncomeEvent, MonthKey};
use crate::store;

pub mod balance;
pub mod buckets;
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod period;

pub use self::categories::CategoryShare;
pub use self::goals::adjust as adjust_savings_goal;

/// An immutable, fully-materialized event set for one owner. Every
/// calculation is a pure function of one snapshot; after any mutation on the
/// store side a previously computed figure is stale and the caller fetches a
/// fresh snapshot instead of patching a running total.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub owner_id: i64,
    pub incomes: Vec<IncomeEvent>,
    pub expenses: Vec<ExpenseEvent>,
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    /// Validate event ownership and account references before any fold can
    /// see the data. An event citing another owner, or an account outside
    /// the owner's set, is rejected as a whole-snapshot failure.
    pub fn assemble(
        owner_id: i64,
        accounts: &[Account],
        incomes: Vec<IncomeEvent>,
        expenses: Vec<ExpenseEvent>,
        budgets: Vec<Budget>,
    ) -> Result<Self, EngineError> {
        let known: HashSet<i64> = accounts.iter().map(|a| a.id).collect();
        let check = |event_owner: i64, account_id: Option<i64>| -> Result<(), EngineError> {
            let foreign_ref = account_id.is_some_and(|id| !known.contains(&id));
            if event_owner != owner_id || foreign_ref {
                return Err(EngineError::AccountMismatch {
                    event_owner,
                    query_owner: owner_id,
                });
            }
            Ok(())
        };
        for inc in &incomes {
            check(inc.owner_id, inc.account_id)?;
        }
        for exp in &expenses {
            check(exp.owner_id, exp.account_id)?;
        }
        Ok(Snapshot {
            owner_id,
            incomes,
            expenses,
            budgets,
        })
    }

    pub fn remaining_balance(
        &self,
        filter: AccountFilter,
        key: MonthKey,
    ) -> Result<Decimal, EngineError> {
        balance::remaining_balance(&self.incomes, &self.expenses, filter, key)
    }

    pub fn remaining_budget(&self, key: MonthKey) -> Decimal {
        budgets::remaining_budget(&self.budgets, &self.expenses, key)
    }

    pub fn category_breakdown(&self, filter: AccountFilter, key: MonthKey) -> Vec<CategoryShare> {
        categories::category_breakdown(&self.expenses, filter, key)
    }
}

/// Available balance for one owner and account selector at `(year, month)`,
/// derived on demand from a fresh store snapshot.
pub fn remaining_balance(
    conn: &Connection,
    owner_id: i64,
    filter: AccountFilter,
    year: i32,
    month: u32,
) -> Result<Decimal> {
    let key = MonthKey::new(year, month)?;
    let snap = store::load_snapshot(conn, owner_id, filter)?;
    Ok(snap.remaining_balance(filter, key)?)
}

/// Monthly budget headroom for one owner at `(year, month)`. Spend across
/// all accounts counts against the monthly ceiling, so no account filter.
pub fn remaining_budget(conn: &Connection, owner_id: i64, year: i32, month: u32) -> Result<Decimal> {
    let key = MonthKey::new(year, month)?;
    let snap = store::load_snapshot(conn, owner_id, AccountFilter::Any)?;
    Ok(snap.remaining_budget(key))
}

/// Per-category spend shares for one owner at `(year, month)`.
pub fn category_breakdown(
    conn: &Connection,
    owner_id: i64,
    filter: AccountFilter,
    year: i32,
    month: u32,
) -> Result<Vec<CategoryShare>> {
    let key = MonthKey::new(year, month)?;
    let snap = store::load_snapshot(conn, owner_id, filter)?;
    Ok(snap.category_breakdown(filter, key))
}
