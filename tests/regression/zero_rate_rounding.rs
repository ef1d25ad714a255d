//! REGRESSION: interest-free loans must not divide by zero
//!
//! Bug: a 0% rate made the amortization denominator `(1 + r)^n - 1` zero and
//! the installment came out as NaN. Zero rate now repays in equal parts, and
//! the rounding mode decides the last unit.
//!
//! Bug: rates a hair above zero lost `(1 + r)^n - 1` to cancellation and
//! produced installments far below straight-line repayment.

use emicalc::{compute_loan_quote, compute_loan_quote_with, LoanQuoteInput, RoundingMode};

#[test]
fn regression_zero_rate_half_up() {
    let quote = compute_loan_quote(&LoanQuoteInput::new(500_000, 100_000, 5, 0.0)).unwrap();

    assert_eq!(quote.monthly_emi.units(), 6_667);
    assert_eq!(quote.total_payment.units(), 400_020);
    assert_eq!(quote.total_interest, 20);
}

#[test]
fn regression_zero_rate_rounding_down_goes_negative() {
    let quote = compute_loan_quote_with(
        &LoanQuoteInput::new(500_000, 100_000, 5, 0.0),
        RoundingMode::Down,
    )
    .unwrap();

    assert_eq!(quote.monthly_emi.units(), 6_666);
    assert_eq!(quote.total_payment.units(), 399_960);
    assert_eq!(quote.total_interest, -40);
}

#[test]
fn regression_vanishing_rate_falls_back_to_straight_line() {
    let quote = compute_loan_quote(&LoanQuoteInput::new(500_000, 100_000, 5, 1e-18)).unwrap();
    assert_eq!(quote.monthly_emi.units(), 6_667);
}

#[test]
fn regression_tiny_rate_keeps_straight_line_floor() {
    let quote = compute_loan_quote(&LoanQuoteInput::new(500_000, 100_000, 5, 1.3995e-13)).unwrap();
    assert_eq!(quote.monthly_emi.units(), 6_667);
    assert_eq!(quote.total_interest, 20);
}

#[test]
fn regression_tiny_rates_never_decrease_the_installment() {
    let rates = [0.0, 1e-15, 1e-13, 1.3995e-13, 1e-11, 1e-9, 1e-7, 1e-5, 1e-3, 0.1];
    let emis: Vec<u64> = rates
        .iter()
        .map(|&rate| {
            compute_loan_quote(&LoanQuoteInput::new(500_000, 100_000, 5, rate))
                .unwrap()
                .monthly_emi
                .units()
        })
        .collect();

    assert!(emis.windows(2).all(|pair| pair[0] <= pair[1]), "{emis:?}");
}
