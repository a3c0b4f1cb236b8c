#![deny(warnings)]
#![no_std]

mod fixedi128;
mod math;
#[cfg(test)]
mod test;

pub use fixedi128::*;
pub use math::*;

/// Percent representation, 1% - 100, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Decimals of every USD value, price and health factor
pub const PRECISION_DECIMALS: u32 = 18;

pub const ONE_HOUR: u64 = 60 * 60;

pub const ONE_DAY: u64 = 24 * ONE_HOUR;
