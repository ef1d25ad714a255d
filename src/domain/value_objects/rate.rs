//! Annual interest rate value object
//!
//! Nominal annual rate expressed in percent (`8.5` means 8.5% p.a.),
//! compounded monthly by the EMI engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};

/// Nominal annual interest rate in percent
///
/// Always finite and non-negative. Zero is allowed and selects the
/// interest-free branch of the engine.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AnnualRate(f64);

impl AnnualRate {
    /// Rate the marketplace advertises ("starting from 8.5% p.a.")
    pub const DEFAULT_PERCENT: f64 = 8.5;

    pub fn from_percent(percent: f64) -> QuoteResult<Self> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(QuoteError::InvalidRate { percent });
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Periodic rate applied per monthly installment
    pub fn monthly(self) -> f64 {
        self.0 / (12.0 * 100.0)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for AnnualRate {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

impl TryFrom<f64> for AnnualRate {
    type Error = QuoteError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::from_percent(percent)
    }
}

impl From<AnnualRate> for f64 {
    fn from(rate: AnnualRate) -> Self {
        rate.0
    }
}

impl FromStr for AnnualRate {
    type Err = QuoteError;

    /// Accepts `8.5` and `8.5%`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let percent: f64 = number.parse().map_err(|_| QuoteError::InvalidField {
            field: "annual rate",
            value: s.to_string(),
            reason: "expected a percentage such as 8.5".to_string(),
        })?;
        Self::from_percent(percent)
    }
}

impl std::fmt::Display for AnnualRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
