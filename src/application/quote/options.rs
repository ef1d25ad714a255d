//! Quote options

use crate::domain::entities::LoanQuoteInput;
use crate::domain::value_objects::RoundingMode;

/// Options for the quote command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuoteOptions {
    /// Loan parameters as requested by the caller
    pub input: LoanQuoteInput,
    /// Rounding rule for the installment
    pub rounding: RoundingMode,
    /// Move out-of-range inputs onto the limits before pricing
    pub clamp: bool,
}

impl QuoteOptions {
    /// Create options for an input with default rounding and no clamping
    pub fn new(input: LoanQuoteInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    /// Set rounding
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set clamp
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }
}
