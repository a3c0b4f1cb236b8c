use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

use crate::PERCENTAGE_FACTOR;

/// Calculates `x * y / denominator` rounding down.
/// Falls back to 256-bit host arithmetic when the `i128` product overflows.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }

    x.fixed_mul_floor(y, denominator).or_else(|| {
        I256::from_i128(env, x)
            .mul(&I256::from_i128(env, y))
            .div(&I256::from_i128(env, denominator))
            .to_i128()
    })
}

/// Applies a basis point ratio to `value`, rounding half up.
/// `bps_mul(10_000, 7_500) == 7_500`
pub fn bps_mul(value: i128, bps: u32) -> Option<i128> {
    let factor = i128::from(PERCENTAGE_FACTOR);

    value
        .checked_mul(i128::from(bps))?
        .checked_add(factor / 2)
        .map(|scaled| scaled / factor)
}

/// Inverse of `bps_mul`: the amount whose `bps` share is `value`, rounding half up.
/// `None` for a zero ratio.
pub fn bps_div(value: i128, bps: u32) -> Option<i128> {
    if bps == 0 {
        return None;
    }

    let bps = i128::from(bps);

    value
        .checked_mul(i128::from(PERCENTAGE_FACTOR))?
        .checked_add(bps / 2)
        .map(|scaled| scaled / bps)
}
