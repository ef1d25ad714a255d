//! Quote Use Case
//!
//! Orchestrates a single loan quote.

use tracing::{debug, info};

use crate::domain::policies::LoanLimits;
use crate::domain::services::compute_loan_quote_with;
use crate::error::QuoteResult;

use super::options::QuoteOptions;
use super::result::QuoteOutcome;

/// Quote use case - prices a loan against the configured limits
#[derive(Debug, Clone, Default)]
pub struct QuoteUseCase {
    limits: LoanLimits,
}

impl QuoteUseCase {
    /// Create a new quote use case
    pub fn new(limits: LoanLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &LoanLimits {
        &self.limits
    }

    /// Execute the quote
    ///
    /// Limit violations never fail the quote; only engine errors do.
    pub fn execute(&self, options: &QuoteOptions) -> QuoteResult<QuoteOutcome> {
        let requested = options.input;
        let violations = self.limits.check(&requested);
        for violation in &violations {
            debug!(%violation, "input outside loan limits");
        }

        let input = if options.clamp {
            self.limits.validate()?;
            self.limits.clamp(&requested)
        } else {
            requested
        };

        let quote = compute_loan_quote_with(&input, options.rounding)?;
        info!(
            principal = input.principal_base.units(),
            down_payment = input.down_payment.units(),
            tenure_years = input.tenure_years,
            rate = input.annual_rate_percent,
            emi = quote.monthly_emi.units(),
            "computed loan quote"
        );

        Ok(QuoteOutcome {
            requested,
            input,
            rounding: options.rounding,
            quote,
            violations,
        })
    }
}
