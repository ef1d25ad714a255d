//! Loan Limits Policy
//!
//! The marketplace form bounds its inputs with range sliders:
//!
//! | Input        | Range                        | Step   |
//! |--------------|------------------------------|--------|
//! | Car price    | 1,00,000 - 20,00,000         | 50,000 |
//! | Down payment | 10% - 50% of the car price   | 10,000 |
//! | Tenure       | 1 - 7 years                  | 1      |
//!
//! The EMI engine never consults these limits. `check` reports where an input
//! falls outside them and `clamp` moves it inside, the way the sliders would.

use serde::{Deserialize, Serialize};

use crate::domain::entities::LoanQuoteInput;
use crate::domain::value_objects::Amount;
use crate::error::{QuoteError, QuoteResult};

/// Slider bounds for the calculator inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanLimits {
    pub price_min: Amount,
    pub price_max: Amount,
    pub price_step: u64,
    pub down_payment_min_percent: u8,
    pub down_payment_max_percent: u8,
    pub down_payment_step: u64,
    pub tenure_min_years: u32,
    pub tenure_max_years: u32,
}

impl Default for LoanLimits {
    fn default() -> Self {
        Self {
            price_min: Amount::new(100_000),
            price_max: Amount::new(2_000_000),
            price_step: 50_000,
            down_payment_min_percent: 10,
            down_payment_max_percent: 50,
            down_payment_step: 10_000,
            tenure_min_years: 1,
            tenure_max_years: 7,
        }
    }
}

/// One input outside the configured limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LimitViolation {
    PriceBelowMinimum { price: Amount, min: Amount },
    PriceAboveMaximum { price: Amount, max: Amount },
    DownPaymentBelowMinimum { down_payment: Amount, min: Amount },
    DownPaymentAboveMaximum { down_payment: Amount, max: Amount },
    TenureBelowMinimum { years: u32, min: u32 },
    TenureAboveMaximum { years: u32, max: u32 },
}

impl std::fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimitViolation::PriceBelowMinimum { price, min } => {
                write!(f, "car price {} is below the minimum of {}", price, min)
            }
            LimitViolation::PriceAboveMaximum { price, max } => {
                write!(f, "car price {} is above the maximum of {}", price, max)
            }
            LimitViolation::DownPaymentBelowMinimum { down_payment, min } => {
                write!(f, "down payment {} is below the minimum of {}", down_payment, min)
            }
            LimitViolation::DownPaymentAboveMaximum { down_payment, max } => {
                write!(f, "down payment {} is above the maximum of {}", down_payment, max)
            }
            LimitViolation::TenureBelowMinimum { years, min } => {
                write!(f, "tenure of {} years is below the minimum of {}", years, min)
            }
            LimitViolation::TenureAboveMaximum { years, max } => {
                write!(f, "tenure of {} years is above the maximum of {}", years, max)
            }
        }
    }
}

impl LoanLimits {
    /// Reject limit sets no slider could represent.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.price_min > self.price_max {
            return Err(QuoteError::InvalidLimits(format!(
                "price_min {} is greater than price_max {}",
                self.price_min, self.price_max
            )));
        }
        if self.price_step == 0 || self.down_payment_step == 0 {
            return Err(QuoteError::InvalidLimits(
                "price_step and down_payment_step must be greater than zero".to_string(),
            ));
        }
        if self.down_payment_max_percent > 100 {
            return Err(QuoteError::InvalidLimits(format!(
                "down_payment_max_percent {} is above 100",
                self.down_payment_max_percent
            )));
        }
        if self.down_payment_min_percent > self.down_payment_max_percent {
            return Err(QuoteError::InvalidLimits(format!(
                "down_payment_min_percent {} is greater than down_payment_max_percent {}",
                self.down_payment_min_percent, self.down_payment_max_percent
            )));
        }
        if self.tenure_min_years == 0 || self.tenure_min_years > self.tenure_max_years {
            return Err(QuoteError::InvalidLimits(format!(
                "tenure range {}..={} is empty or starts at zero",
                self.tenure_min_years, self.tenure_max_years
            )));
        }
        Ok(())
    }

    /// Down payment window for a given car price
    pub fn down_payment_range(&self, price: Amount) -> (Amount, Amount) {
        (
            price.percent_of(self.down_payment_min_percent),
            price.percent_of(self.down_payment_max_percent),
        )
    }

    pub fn tenure_range(&self) -> std::ops::RangeInclusive<u32> {
        self.tenure_min_years..=self.tenure_max_years
    }

    /// Every limit the input falls outside of, in input order.
    pub fn check(&self, input: &LoanQuoteInput) -> Vec<LimitViolation> {
        let mut violations = Vec::new();

        let price = input.principal_base;
        if price < self.price_min {
            violations.push(LimitViolation::PriceBelowMinimum {
                price,
                min: self.price_min,
            });
        } else if price > self.price_max {
            violations.push(LimitViolation::PriceAboveMaximum {
                price,
                max: self.price_max,
            });
        }

        let (down_min, down_max) = self.down_payment_range(price);
        let down_payment = input.down_payment;
        if down_payment < down_min {
            violations.push(LimitViolation::DownPaymentBelowMinimum {
                down_payment,
                min: down_min,
            });
        } else if down_payment > down_max {
            violations.push(LimitViolation::DownPaymentAboveMaximum {
                down_payment,
                max: down_max,
            });
        }

        let years = input.tenure_years;
        if years < self.tenure_min_years {
            violations.push(LimitViolation::TenureBelowMinimum {
                years,
                min: self.tenure_min_years,
            });
        } else if years > self.tenure_max_years {
            violations.push(LimitViolation::TenureAboveMaximum {
                years,
                max: self.tenure_max_years,
            });
        }

        violations
    }

    /// Move every input onto its slider.
    ///
    /// Price is clamped and snapped first because the down payment window
    /// depends on it. The rate is left untouched.
    pub fn clamp(&self, input: &LoanQuoteInput) -> LoanQuoteInput {
        let price = snap(
            input.principal_base.units(),
            self.price_min.units(),
            self.price_max.units(),
            self.price_step,
        );
        let (down_min, down_max) = self.down_payment_range(Amount::new(price));
        let down_payment = snap(
            input.down_payment.units(),
            down_min.units(),
            down_max.units(),
            self.down_payment_step,
        );
        let years = input
            .tenure_years
            .clamp(self.tenure_min_years, self.tenure_max_years.max(self.tenure_min_years));

        input
            .with_principal_base(Amount::new(price))
            .with_down_payment(Amount::new(down_payment))
            .with_tenure_years(years)
    }
}

/// Clamp `value` into `[min, max]` and round it to the nearest `min + k * step`
/// that is still `<= max`.
fn snap(value: u64, min: u64, max: u64, step: u64) -> u64 {
    let max = max.max(min);
    let clamped = value.clamp(min, max);
    if step == 0 {
        return clamped;
    }

    let offset = clamped - min;
    let k = offset / step + u64::from(offset % step >= step.div_ceil(2));
    let mut snapped = min.saturating_add(k.saturating_mul(step));
    while snapped > max {
        snapped -= step;
    }
    snapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_marketplace_sliders() {
        let limits = LoanLimits::default();
        assert!(limits.validate().is_ok());
        assert_eq!(limits.tenure_range(), 1..=7);
        assert_eq!(
            limits.down_payment_range(Amount::new(500_000)),
            (Amount::new(50_000), Amount::new(250_000))
        );
    }

    #[test]
    fn default_input_is_within_limits() {
        let limits = LoanLimits::default();
        assert!(limits.check(&LoanQuoteInput::default()).is_empty());
    }

    #[test]
    fn check_reports_each_input() {
        let limits = LoanLimits::default();
        let input = LoanQuoteInput::new(50_000, 40_000, 9, 8.5);
        let violations = limits.check(&input);
        assert_eq!(
            violations,
            vec![
                LimitViolation::PriceBelowMinimum {
                    price: Amount::new(50_000),
                    min: Amount::new(100_000),
                },
                LimitViolation::DownPaymentAboveMaximum {
                    down_payment: Amount::new(40_000),
                    max: Amount::new(25_000),
                },
                LimitViolation::TenureAboveMaximum { years: 9, max: 7 },
            ]
        );
    }

    #[test]
    fn clamp_snaps_like_the_sliders() {
        let limits = LoanLimits::default();
        let input = LoanQuoteInput::new(2_500_000, 10_000, 0, 8.5);
        let clamped = limits.clamp(&input);
        assert_eq!(clamped.principal_base, Amount::new(2_000_000));
        assert_eq!(clamped.down_payment, Amount::new(200_000));
        assert_eq!(clamped.tenure_years, 1);
        assert_eq!(clamped.annual_rate_percent, 8.5);
        assert!(limits.check(&clamped).is_empty());
    }

    #[test]
    fn clamp_rounds_to_nearest_step() {
        let limits = LoanLimits::default();
        let clamped = limits.clamp(&LoanQuoteInput::new(524_999, 104_999, 5, 8.5));
        assert_eq!(clamped.principal_base, Amount::new(500_000));
        assert_eq!(clamped.down_payment, Amount::new(100_000));

        let clamped = limits.clamp(&LoanQuoteInput::new(525_000, 105_000, 5, 8.5));
        assert_eq!(clamped.principal_base, Amount::new(550_000));
        assert_eq!(clamped.down_payment, Amount::new(105_000));
    }

    #[test]
    fn snap_never_exceeds_max() {
        // window 55,000..=250,000 with 10,000 steps: last reachable stop is 245,000
        assert_eq!(snap(250_000, 55_000, 250_000, 10_000), 245_000);
        assert_eq!(snap(1, 55_000, 275_000, 10_000), 55_000);
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let limits = LoanLimits {
            tenure_min_years: 8,
            ..LoanLimits::default()
        };
        assert!(limits.validate().is_err());

        let limits = LoanLimits {
            down_payment_max_percent: 120,
            ..LoanLimits::default()
        };
        assert!(limits.validate().is_err());
    }
}
