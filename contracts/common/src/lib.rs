#![deny(warnings)]
#![no_std]

mod error;
mod interest;
mod percentage_math;
mod ray;
#[cfg(test)]
mod test;

pub use error::*;
pub use interest::*;
pub use percentage_math::*;
pub use ray::*;

/// Ray precision, 27 decimals
pub const RAY: i128 = 1_000_000_000_000_000_000_000_000_000;

pub const HALF_RAY: i128 = RAY / 2;

/// Wad precision, 18 decimals
pub const WAD: i128 = 1_000_000_000_000_000_000;

pub const HALF_WAD: i128 = WAD / 2;

/// Percent representation, 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Seconds in a 365 days year
pub const SECONDS_PER_YEAR: u64 = 31_536_000;
