// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AccountFilter, ExpenseEvent, MonthKey};

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// One category's slice of a month's spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// Group one month's expenses by their frozen category label, with each
/// group's share of the month's total. Shares are clamped to [0, 100]; a
/// zero-spend month yields 0 for every share instead of dividing by zero.
/// Output is sorted by amount descending, then category name. Suppressing
/// zero-amount categories is the caller's choice.
pub fn category_breakdown(
    expenses: &[ExpenseEvent],
    filter: AccountFilter,
    key: MonthKey,
) -> Vec<CategoryShare> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    let mut month_total = Decimal::ZERO;
    for exp in expenses {
        if !filter.matches(exp.account_id) || MonthKey::from_date(exp.date) != key {
            continue;
        }
        *totals.entry(exp.category.as_str()).or_insert(Decimal::ZERO) += exp.amount;
        month_total += exp.amount;
    }

    let mut shares: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, amount)| {
            let percentage = if month_total.is_zero() {
                Decimal::ZERO
            } else {
                (amount / month_total * HUNDRED)
                    .clamp(Decimal::ZERO, HUNDRED)
            };
            CategoryShare {
                category: category.to_string(),
                amount,
                percentage,
            }
        })
        .collect();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    shares
}
