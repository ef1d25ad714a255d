//! Tenure value object - repayment duration in whole years

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};

/// Repayment duration, at least one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tenure(u32);

impl Tenure {
    pub const MONTHS_PER_YEAR: u32 = 12;

    pub fn from_years(years: u32) -> QuoteResult<Self> {
        if years == 0 || years.checked_mul(Self::MONTHS_PER_YEAR).is_none() {
            return Err(QuoteError::InvalidTenure { years });
        }
        Ok(Self(years))
    }

    pub fn years(self) -> u32 {
        self.0
    }

    /// Number of monthly installments
    pub fn payments(self) -> u32 {
        // bounded in from_years
        self.0 * Self::MONTHS_PER_YEAR
    }
}

impl TryFrom<u32> for Tenure {
    type Error = QuoteError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::from_years(years)
    }
}

impl From<Tenure> for u32 {
    fn from(tenure: Tenure) -> Self {
        tenure.0
    }
}

impl std::fmt::Display for Tenure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 1 {
            write!(f, "1 year")
        } else {
            write!(f, "{} years", self.0)
        }
    }
}
