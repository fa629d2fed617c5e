// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::SavingsGoal;

/// Apply a bounded delta to a goal's current amount. Decreases clamp at
/// zero; exceeding the target is a valid state (the goal was surpassed).
/// Pure transform; persisting the result is the caller's responsibility.
pub fn adjust(goal: &SavingsGoal, delta: Decimal) -> SavingsGoal {
    let mut adjusted = goal.clone();
    adjusted.current_amount = (goal.current_amount + delta).max(Decimal::ZERO);
    adjusted
}
