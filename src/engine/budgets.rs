// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::engine::balance::expense_for_month;
use crate::models::{AccountFilter, Budget, BudgetPeriod, ExpenseEvent, MonthKey};

/// Total monthly budget ceiling. Only budgets with a monthly period count
/// toward this figure; weekly and yearly budgets are excluded from the
/// monthly total on purpose.
pub fn monthly_budget_total(budgets: &[Budget]) -> Decimal {
    budgets
        .iter()
        .filter(|b| b.period == BudgetPeriod::Monthly)
        .map(|b| b.limit)
        .sum()
}

/// Remaining headroom for the month: the monthly ceiling minus total spend
/// across all categories and accounts. Spend is not filtered to budgeted
/// categories; total spend is compared against total monthly limits.
pub fn remaining_budget(budgets: &[Budget], expenses: &[ExpenseEvent], key: MonthKey) -> Decimal {
    monthly_budget_total(budgets) - expense_for_month(expenses, AccountFilter::Any, key)
}
