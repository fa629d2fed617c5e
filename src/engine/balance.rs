// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use crate::engine::buckets::active_months_before;
use crate::engine::period::monthly_equivalent;
use crate::error::EngineError;
use crate::models::{AccountFilter, ExpenseEvent, IncomeEvent, MonthKey, Period};

/// Income attributed to one month: every monthly-period income dated in the
/// month, plus one twelfth of every yearly-period income whose calendar year
/// matches.
///
/// Proration policy is full-calendar-year: a yearly income contributes to
/// all twelve months of its own year, including months after its occurrence
/// date and months before the owning account existed. The spread never
/// crosses a year boundary.
pub fn income_for_month(
    incomes: &[IncomeEvent],
    filter: AccountFilter,
    key: MonthKey,
) -> Result<Decimal, EngineError> {
    let mut total = Decimal::ZERO;
    for inc in incomes {
        if !filter.matches(inc.account_id) {
            continue;
        }
        match inc.period {
            Period::Monthly => {
                if MonthKey::from_date(inc.date) == key {
                    total += monthly_equivalent(inc.amount, Period::Monthly)?;
                }
            }
            Period::Yearly => {
                if inc.date.year() == key.year {
                    total += monthly_equivalent(inc.amount, Period::Yearly)?;
                }
            }
        }
    }
    Ok(total)
}

/// Sum of expense amounts dated in the month, under the account filter.
pub fn expense_for_month(
    expenses: &[ExpenseEvent],
    filter: AccountFilter,
    key: MonthKey,
) -> Decimal {
    expenses
        .iter()
        .filter(|e| filter.matches(e.account_id) && MonthKey::from_date(e.date) == key)
        .map(|e| e.amount)
        .sum()
}

/// Net surplus or deficit of one month: normalized income minus expenses.
pub fn net_of_month(
    incomes: &[IncomeEvent],
    expenses: &[ExpenseEvent],
    filter: AccountFilter,
    key: MonthKey,
) -> Result<Decimal, EngineError> {
    Ok(income_for_month(incomes, filter, key)? - expense_for_month(expenses, filter, key))
}

/// Cumulative net over every active month strictly before the cutoff.
/// A left-fold over the sorted bucket set, accumulator starting at zero;
/// cost is proportional to the number of active months, not the calendar
/// span of the history.
pub fn carry_forward_before(
    incomes: &[IncomeEvent],
    expenses: &[ExpenseEvent],
    filter: AccountFilter,
    cutoff: MonthKey,
) -> Result<Decimal, EngineError> {
    let mut acc = Decimal::ZERO;
    for key in active_months_before(incomes, expenses, filter, cutoff) {
        acc += net_of_month(incomes, expenses, filter, key)?;
    }
    Ok(acc)
}

/// Available balance at a month: carry-forward from all prior active months
/// plus the target month's own net.
pub fn remaining_balance(
    incomes: &[IncomeEvent],
    expenses: &[ExpenseEvent],
    filter: AccountFilter,
    key: MonthKey,
) -> Result<Decimal, EngineError> {
    let carried = carry_forward_before(incomes, expenses, filter, key)?;
    let net = net_of_month(incomes, expenses, filter, key)?;
    debug!(%key, %carried, %net, "computed remaining balance");
    Ok(carried + net)
}
