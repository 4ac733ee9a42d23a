use soroban_sdk::{Env, I256};

use crate::{Error, HALF_RAY, HALF_WAD, RAY, WAD};

/// Ray arithmetic over `i128` operands.
///
/// Products are formed in 256 bits, so two `i128` operands never overflow
/// before the division; a quotient that does not fit back into `i128`
/// is reported as `ArithmeticOverflow`. Operands must be non-negative.
pub trait RayMath {
    /// result = round_half_up(self * other / RAY)
    fn ray_mul(self, env: &Env, other: i128) -> Result<i128, Error>;

    /// result = floor(self * other / RAY)
    fn ray_mul_floor(self, env: &Env, other: i128) -> Result<i128, Error>;

    /// result = round_half_up(self * RAY / other)
    fn ray_div(self, env: &Env, other: i128) -> Result<i128, Error>;
}

impl RayMath for i128 {
    fn ray_mul(self, env: &Env, other: i128) -> Result<i128, Error> {
        require_non_negative(self)?;
        require_non_negative(other)?;

        if self == 0 || other == 0 {
            return Ok(0);
        }

        let half_up = wide_mul(env, self, other).add(&I256::from_i128(env, HALF_RAY));
        narrow(&half_up.div(&I256::from_i128(env, RAY)))
    }

    fn ray_mul_floor(self, env: &Env, other: i128) -> Result<i128, Error> {
        require_non_negative(self)?;
        require_non_negative(other)?;

        if self == 0 || other == 0 {
            return Ok(0);
        }

        narrow(&wide_mul(env, self, other).div(&I256::from_i128(env, RAY)))
    }

    fn ray_div(self, env: &Env, other: i128) -> Result<i128, Error> {
        require_non_negative(self)?;
        require_non_negative(other)?;

        if other == 0 {
            return Err(Error::DivisionByZero);
        }

        wide_div_half_up(env, &wide_mul(env, self, RAY), &I256::from_i128(env, other))
    }
}

/// Full width product of two `i128` values
pub fn wide_mul(env: &Env, a: i128, b: i128) -> I256 {
    I256::from_i128(env, a).mul(&I256::from_i128(env, b))
}

/// Narrows a 256 bit value back into `i128`
pub fn narrow(value: &I256) -> Result<i128, Error> {
    value.to_i128().ok_or(Error::ArithmeticOverflow)
}

/// result = round_half_up(numerator / denominator) for non-negative values
pub fn wide_div_half_up(env: &Env, numerator: &I256, denominator: &I256) -> Result<i128, Error> {
    let zero = I256::from_i32(env, 0);
    if *denominator == zero {
        return Err(Error::DivisionByZero);
    }

    let half = denominator.div(&I256::from_i32(env, 2));
    narrow(&numerator.add(&half).div(denominator))
}

/// Weighted mean of `(rate, weight)` pairs.
///
/// Weights are amounts lifted to ray precision, so each `rate * weight`
/// term is rounded half up to `WAD` units before the sum is divided by the
/// total weight, again rounded half up.
pub fn weighted_average(env: &Env, terms: &[(i128, i128)]) -> Result<i128, Error> {
    let mut numerator = I256::from_i32(env, 0);
    let mut total_weight: i128 = 0;

    for (rate, weight) in terms.iter() {
        numerator = numerator.add(&rate_weight(env, *rate, *weight)?);
        total_weight = total_weight
            .checked_add(*weight)
            .ok_or(Error::ArithmeticOverflow)?;
    }

    rate_from_weight(env, &numerator, total_weight)
}

/// result = round_half_up(rate * weight / WAD), the rate applied to a weight
/// lifted to ray precision
pub fn rate_weight(env: &Env, rate: i128, weight: i128) -> Result<I256, Error> {
    require_non_negative(rate)?;
    require_non_negative(weight)?;

    Ok(wide_mul(env, rate, weight)
        .add(&I256::from_i128(env, HALF_WAD))
        .div(&I256::from_i128(env, WAD)))
}

/// result = round_half_up(weighted * WAD / total_weight), the inverse of
/// [`rate_weight`] over a summed weight
pub fn rate_from_weight(env: &Env, weighted: &I256, total_weight: i128) -> Result<i128, Error> {
    require_non_negative(total_weight)?;

    wide_div_half_up(
        env,
        &weighted.mul(&I256::from_i128(env, WAD)),
        &I256::from_i128(env, total_weight),
    )
}

fn require_non_negative(value: i128) -> Result<(), Error> {
    if value.is_negative() {
        return Err(Error::NegativeAmount);
    }

    Ok(())
}
