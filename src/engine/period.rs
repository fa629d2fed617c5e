// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::models::Period;
use crate::utils::non_negative;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Per-calendar-month equivalent of a dated, periodic income amount.
/// A monthly amount passes through unchanged; a yearly amount is spread as
/// one twelfth. No rounding here; rounding is a display-time concern.
pub fn monthly_equivalent(amount: Decimal, period: Period) -> Result<Decimal, EngineError> {
    let amount = non_negative(amount)?;
    Ok(match period {
        Period::Monthly => amount,
        Period::Yearly => amount / MONTHS_PER_YEAR,
    })
}
