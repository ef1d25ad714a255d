//! REGRESSION: down payment equal to the price must quote zero
//!
//! Bug: a fully paid car was reported as "down payment exceeds price".
//! Only a strictly larger down payment is an error.

use emicalc::{compute_loan_quote, LoanQuoteInput, QuoteError};

#[test]
fn regression_down_equal_to_price_is_a_zero_quote() {
    let quote = compute_loan_quote(&LoanQuoteInput::new(500_000, 500_000, 5, 8.5)).unwrap();

    assert_eq!(quote.financed_principal.units(), 0);
    assert_eq!(quote.payments, 60);
    assert_eq!(quote.monthly_emi.units(), 0);
    assert_eq!(quote.total_payment.units(), 0);
    assert_eq!(quote.total_interest, 0);
}

#[test]
fn regression_down_above_price_is_rejected() {
    let err = compute_loan_quote(&LoanQuoteInput::new(500_000, 500_001, 5, 8.5)).unwrap_err();
    assert!(matches!(
        err,
        QuoteError::DownPaymentExceedsPrincipal {
            down_payment: 500_001,
            principal: 500_000
        }
    ));
}

#[test]
fn regression_fully_paid_car_still_validates_tenure() {
    let err = compute_loan_quote(&LoanQuoteInput::new(500_000, 500_000, 0, 8.5)).unwrap_err();
    assert!(matches!(err, QuoteError::InvalidTenure { years: 0 }));
}
