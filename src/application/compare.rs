//! Tenure comparison
//!
//! Prices the same loan once per tenure year so the trade-off between a
//! lower installment and a higher total interest can be read off one table.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{LoanQuote, LoanQuoteInput};
use crate::domain::services::compute_loan_quote_with;
use crate::domain::value_objects::RoundingMode;
use crate::error::{QuoteError, QuoteResult};

/// Widest tenure range a single comparison will price
pub const MAX_COMPARED_TENURES: u32 = 50;

/// Quote for one tenure in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenureQuote {
    pub tenure_years: u32,
    pub quote: LoanQuote,
}

/// Price `input` for every tenure in `years`, ignoring `input.tenure_years`.
///
/// The first engine error aborts the comparison. Ranges wider than
/// [`MAX_COMPARED_TENURES`] are rejected before anything is priced.
pub fn compare_tenures(
    input: &LoanQuoteInput,
    years: RangeInclusive<u32>,
    rounding: RoundingMode,
) -> QuoteResult<Vec<TenureQuote>> {
    if years.is_empty() {
        return Err(QuoteError::InvalidField {
            field: "tenure range",
            value: format!("{}..={}", years.start(), years.end()),
            reason: "start must not be after end".to_string(),
        });
    }

    let rows = u64::from(*years.end()) - u64::from(*years.start()) + 1;
    if rows > u64::from(MAX_COMPARED_TENURES) {
        return Err(QuoteError::InvalidField {
            field: "tenure range",
            value: format!("{}..={}", years.start(), years.end()),
            reason: format!("at most {MAX_COMPARED_TENURES} tenures can be compared at once"),
        });
    }

    years
        .map(|tenure_years| {
            let quote = compute_loan_quote_with(&input.with_tenure_years(tenure_years), rounding)?;
            debug!(tenure_years, emi = quote.monthly_emi.units(), "priced tenure");
            Ok(TenureQuote {
                tenure_years,
                quote,
            })
        })
        .collect()
}
