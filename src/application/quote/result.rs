//! Quote outcome

use serde::Serialize;

use crate::domain::entities::{LoanQuote, LoanQuoteInput};
use crate::domain::policies::LimitViolation;
use crate::domain::value_objects::RoundingMode;

/// Result of the quote use case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteOutcome {
    /// Input as the caller supplied it
    pub requested: LoanQuoteInput,
    /// Input that was actually priced (differs from `requested` only when clamped)
    pub input: LoanQuoteInput,
    pub rounding: RoundingMode,
    pub quote: LoanQuote,
    /// Limits the requested input falls outside of
    pub violations: Vec<LimitViolation>,
}

impl QuoteOutcome {
    /// Whether clamping changed any input
    pub fn was_clamped(&self) -> bool {
        self.requested != self.input
    }

    /// Whether the requested input is within every limit
    pub fn within_limits(&self) -> bool {
        self.violations.is_empty()
    }
}
