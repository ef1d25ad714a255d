//! Amount value object - money in whole currency units
//!
//! The marketplace quotes prices in whole rupees, so amounts carry no minor
//! unit. Arithmetic is checked; callers decide what an overflow means.

use serde::{Deserialize, Serialize};

/// Non-negative money amount in whole currency units
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Raw number of currency units
    pub const fn units(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    pub fn checked_mul(self, factor: u32) -> Option<Amount> {
        self.0.checked_mul(u64::from(factor)).map(Amount)
    }

    /// `self - rhs` as a signed value, `None` if it does not fit an `i64`
    pub fn signed_sub(self, rhs: Amount) -> Option<i64> {
        i64::try_from(i128::from(self.0) - i128::from(rhs.0)).ok()
    }

    /// `percent`% of this amount, truncated to whole units
    pub fn percent_of(self, percent: u8) -> Amount {
        let scaled = u128::from(self.0) * u128::from(percent) / 100;
        // only reachable above 100%
        Amount(u64::try_from(scaled).unwrap_or(u64::MAX))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
