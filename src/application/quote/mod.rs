//! Quote Use Case
//!
//! Prices a loan and reports where its inputs sit relative to the
//! marketplace limits:
//! - Checking the requested input against `LoanLimits`
//! - Optionally clamping it onto the sliders before pricing
//! - Running the EMI engine with the requested rounding

mod options;
mod result;
mod use_case;

pub use options::QuoteOptions;
pub use result::QuoteOutcome;
pub use use_case::QuoteUseCase;
