//! Rounding Mode Value Object
//!
//! Decides how the raw amortization installment becomes a whole-unit EMI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Rounding rule for the monthly installment
///
/// - `HalfUp`: nearest unit, ties away from zero (default, matches the
///   marketplace calculator)
/// - `HalfEven`: nearest unit, ties to the even unit (banker's rounding)
/// - `Down`: truncate toward zero
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    #[default]
    HalfUp,
    HalfEven,
    Down,
}

impl RoundingMode {
    pub const NAMES: &'static [&'static str] = &["half-up", "half-even", "down"];

    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfUp => value.round(),
            RoundingMode::HalfEven => value.round_ties_even(),
            RoundingMode::Down => value.trunc(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::Down => "down",
        }
    }
}

impl FromStr for RoundingMode {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "half-up" => Ok(RoundingMode::HalfUp),
            "half-even" | "bankers" => Ok(RoundingMode::HalfEven),
            "down" | "truncate" => Ok(RoundingMode::Down),
            _ => Err(QuoteError::InvalidField {
                field: "rounding mode",
                value: s.to_string(),
                reason: format!("expected one of {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
