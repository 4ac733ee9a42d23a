use crate::{Error, PERCENTAGE_FACTOR};

const HALF_PERCENT: i128 = PERCENTAGE_FACTOR as i128 / 2;

pub trait PercentageMath {
    /// result = round_half_up(self * percentage / PERCENTAGE_FACTOR)
    fn percent_mul(self, percentage: u32) -> Result<i128, Error>;
}

impl PercentageMath for i128 {
    fn percent_mul(self, percentage: u32) -> Result<i128, Error> {
        if self == 0 || percentage == 0 {
            return Ok(0);
        }

        self.checked_mul(percentage.into())
            .and_then(|product| product.checked_add(HALF_PERCENT))
            .map(|product| product / i128::from(PERCENTAGE_FACTOR))
            .ok_or(Error::ArithmeticOverflow)
    }
}

/// Reserve factor is a share of interest and can't exceed 100%
pub fn require_valid_percentage(percentage: u32) -> Result<(), Error> {
    if percentage > PERCENTAGE_FACTOR {
        return Err(Error::InvalidReserveFactor);
    }

    Ok(())
}
