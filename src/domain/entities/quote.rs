//! Loan quote entities
//!
//! `LoanQuoteInput` carries raw caller parameters: the engine, not the type,
//! decides whether they are valid so that a zero tenure or a negative rate
//! surfaces as an explicit error instead of being unrepresentable.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Amount, AnnualRate};
use crate::error::{QuoteError, QuoteResult};

/// Parameters of one EMI computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteInput {
    /// Car price or loan base before the down payment
    pub principal_base: Amount,
    /// Paid upfront, reduces the financed principal
    pub down_payment: Amount,
    pub tenure_years: u32,
    /// Nominal annual rate in percent
    pub annual_rate_percent: f64,
}

impl LoanQuoteInput {
    pub fn new(
        principal_base: u64,
        down_payment: u64,
        tenure_years: u32,
        annual_rate_percent: f64,
    ) -> Self {
        Self {
            principal_base: Amount::new(principal_base),
            down_payment: Amount::new(down_payment),
            tenure_years,
            annual_rate_percent,
        }
    }

    /// Amount actually borrowed
    ///
    /// Fails when the down payment exceeds the base; a down payment equal to
    /// the base yields zero.
    pub fn financed_principal(&self) -> QuoteResult<Amount> {
        self.principal_base
            .checked_sub(self.down_payment)
            .ok_or(QuoteError::DownPaymentExceedsPrincipal {
                down_payment: self.down_payment.units(),
                principal: self.principal_base.units(),
            })
    }

    pub fn with_principal_base(mut self, principal_base: Amount) -> Self {
        self.principal_base = principal_base;
        self
    }

    pub fn with_down_payment(mut self, down_payment: Amount) -> Self {
        self.down_payment = down_payment;
        self
    }

    pub fn with_tenure_years(mut self, tenure_years: u32) -> Self {
        self.tenure_years = tenure_years;
        self
    }

    pub fn with_rate(mut self, annual_rate_percent: f64) -> Self {
        self.annual_rate_percent = annual_rate_percent;
        self
    }
}

impl Default for LoanQuoteInput {
    /// The calculator's opening state: 5,00,000 car, 1,00,000 down, 5 years
    fn default() -> Self {
        Self::new(500_000, 100_000, 5, AnnualRate::DEFAULT_PERCENT)
    }
}

/// Result of one EMI computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub financed_principal: Amount,
    /// Number of monthly installments
    pub payments: u32,
    pub monthly_emi: Amount,
    /// `monthly_emi * payments`
    pub total_payment: Amount,
    /// `total_payment - financed_principal`; slightly negative when rounding
    /// down an interest-free installment
    pub total_interest: i64,
}

impl LoanQuote {
    /// Quote for a fully paid-up car
    pub fn zero(payments: u32) -> Self {
        Self {
            financed_principal: Amount::ZERO,
            payments,
            monthly_emi: Amount::ZERO,
            total_payment: Amount::ZERO,
            total_interest: 0,
        }
    }
}
