use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, I256};

use crate::ray::{narrow, RayMath};
use crate::{Error, RAY, SECONDS_PER_YEAR};

/// Longest period compounded in one step, 1000 years
pub const MAX_COMPOUNDING_PERIOD: u64 = 1_000 * SECONDS_PER_YEAR;

/// Interest multiplier of `rate` compounded per second over `elapsed` seconds.
///
/// Approximates `(1 + rate / SECONDS_PER_YEAR) ^ elapsed` with the binomial
/// expansion truncated after the third term:
///
/// `RAY + r*n + r^2*n*(n-1)/2 + r^3*n*(n-1)*(n-2)/6` with `r = rate / SECONDS_PER_YEAR`.
///
/// The truncation undershoots true compounding for high rates and long
/// periods. Periods longer than [`MAX_COMPOUNDING_PERIOD`] are rejected with
/// `ArithmeticOverflow` so the cubic term stays within 256 bits.
pub fn compounded_interest(env: &Env, rate: i128, elapsed: u64) -> Result<i128, Error> {
    if rate.is_negative() {
        return Err(Error::InvalidRate);
    }

    if elapsed == 0 || rate == 0 {
        return Ok(RAY);
    }

    if elapsed > MAX_COMPOUNDING_PERIOD {
        return Err(Error::ArithmeticOverflow);
    }

    let exp = I256::from_i128(env, elapsed.into());
    let exp_minus_one = I256::from_i128(env, (elapsed - 1).into());
    let exp_minus_two = I256::from_i128(env, elapsed.saturating_sub(2).into());

    let year = i128::from(SECONDS_PER_YEAR);
    let year_squared = year.checked_mul(year).ok_or(Error::ArithmeticOverflow)?;

    let base_power_two = rate.ray_mul(env, rate)? / year_squared;
    let base_power_three = base_power_two.ray_mul(env, rate)? / year;

    let second_term = exp
        .mul(&exp_minus_one)
        .mul(&I256::from_i128(env, base_power_two))
        .div(&I256::from_i32(env, 2));

    let third_term = exp
        .mul(&exp_minus_one)
        .mul(&exp_minus_two)
        .mul(&I256::from_i128(env, base_power_three))
        .div(&I256::from_i32(env, 6));

    let first_term = rate
        .fixed_mul_floor(i128::from(elapsed), year)
        .ok_or(Error::ArithmeticOverflow)?;

    let sum = I256::from_i128(env, RAY)
        .add(&I256::from_i128(env, first_term))
        .add(&second_term)
        .add(&third_term);

    narrow(&sum)
}

/// Same as [`compounded_interest`] over the period `[last_update, now]`.
/// A period that ends before it starts accrues nothing.
pub fn compounded_interest_between(
    env: &Env,
    rate: i128,
    last_update: u64,
    now: u64,
) -> Result<i128, Error> {
    compounded_interest(env, rate, now.saturating_sub(last_update))
}

/// Simple interest multiplier: `RAY + rate * elapsed / SECONDS_PER_YEAR`
pub fn linear_interest(rate: i128, elapsed: u64) -> Result<i128, Error> {
    if rate.is_negative() {
        return Err(Error::InvalidRate);
    }

    rate.fixed_mul_floor(i128::from(elapsed), i128::from(SECONDS_PER_YEAR))
        .and_then(|accrued| RAY.checked_add(accrued))
        .ok_or(Error::ArithmeticOverflow)
}
