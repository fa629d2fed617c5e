// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use crate::models::{AccountFilter, ExpenseEvent, IncomeEvent, MonthKey};

/// Distinct `(year, month)` keys strictly before the cutoff over which at
/// least one income or expense event (passing the account filter) falls,
/// chronologically ascending. Months with no activity are simply absent;
/// the carry-forward fold treats them as zero by skipping them.
pub fn active_months_before(
    incomes: &[IncomeEvent],
    expenses: &[ExpenseEvent],
    filter: AccountFilter,
    cutoff: MonthKey,
) -> Vec<MonthKey> {
    let mut keys = BTreeSet::new();
    for inc in incomes {
        if filter.matches(inc.account_id) {
            keys.insert(MonthKey::from_date(inc.date));
        }
    }
    for exp in expenses {
        if filter.matches(exp.account_id) {
            keys.insert(MonthKey::from_date(exp.date));
        }
    }
    keys.into_iter().filter(|k| *k < cutoff).collect()
}
