//! EMI Domain Service
//!
//! Equated monthly installment for a fixed-rate amortizing loan:
//!
//! ```text
//! r   = annual_rate_percent / (12 * 100)
//! n   = tenure_years * 12
//! emi = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! The installment is rounded to whole currency units before the totals are
//! derived, so `total_payment == monthly_emi * n` holds exactly.

use crate::domain::entities::{LoanQuote, LoanQuoteInput};
use crate::domain::value_objects::{Amount, AnnualRate, RoundingMode, Tenure};
use crate::error::{QuoteError, QuoteResult};

/// Compute a quote with the default (half-up) rounding.
pub fn compute_loan_quote(input: &LoanQuoteInput) -> QuoteResult<LoanQuote> {
    compute_loan_quote_with(input, RoundingMode::default())
}

/// Compute a quote, rounding the installment with `rounding`.
///
/// # Errors
///
/// - `InvalidPrincipal` when the base is zero
/// - `InvalidTenure` when the tenure is zero years
/// - `InvalidRate` when the rate is negative or not finite
/// - `DownPaymentExceedsPrincipal` when the financed principal would be negative
/// - `NonFiniteInstallment` / `Overflow` when the inputs are too large to price
///
/// A down payment equal to the base is not an error: it prices as an
/// all-zero quote.
pub fn compute_loan_quote_with(
    input: &LoanQuoteInput,
    rounding: RoundingMode,
) -> QuoteResult<LoanQuote> {
    if input.principal_base.is_zero() {
        return Err(QuoteError::InvalidPrincipal {
            principal: input.principal_base.units(),
        });
    }
    let tenure = Tenure::from_years(input.tenure_years)?;
    let rate = AnnualRate::from_percent(input.annual_rate_percent)?;
    let financed = input.financed_principal()?;
    let payments = tenure.payments();

    if financed.is_zero() {
        return Ok(LoanQuote::zero(payments));
    }

    let raw = monthly_installment(financed, rate, payments);
    if !raw.is_finite() {
        return Err(QuoteError::NonFiniteInstallment {
            payments,
            percent: rate.percent(),
        });
    }

    let rounded = rounding.apply(raw);
    // 2^64 is exactly representable; anything at or above it does not fit
    if rounded >= 18_446_744_073_709_551_616.0 {
        return Err(QuoteError::Overflow {
            installment: u64::MAX,
            payments,
        });
    }
    let monthly_emi = Amount::new(rounded as u64);

    let total_payment = monthly_emi
        .checked_mul(payments)
        .ok_or(QuoteError::Overflow {
            installment: monthly_emi.units(),
            payments,
        })?;
    let total_interest = total_payment
        .signed_sub(financed)
        .ok_or(QuoteError::Overflow {
            installment: monthly_emi.units(),
            payments,
        })?;

    Ok(LoanQuote {
        financed_principal: financed,
        payments,
        monthly_emi,
        total_payment,
        total_interest,
    })
}

/// Unrounded installment for `payments` monthly payments.
///
/// `(1 + r)^n - 1` is evaluated as `expm1(n * ln1p(r))` so that tiny rates
/// keep their precision. The result never drops below straight-line
/// repayment, which is also the answer at a zero rate.
pub fn monthly_installment(financed: Amount, rate: AnnualRate, payments: u32) -> f64 {
    let principal = financed.as_f64();
    let n = f64::from(payments);
    let straight_line = principal / n;

    if rate.is_zero() {
        return straight_line;
    }

    let r = rate.monthly();
    let growth_m1 = (n * r.ln_1p()).exp_m1();
    if growth_m1 == 0.0 {
        return straight_line;
    }

    let emi = principal * r * (growth_m1 + 1.0) / growth_m1;
    if emi.is_nan() {
        return emi;
    }
    emi.max(straight_line)
}
