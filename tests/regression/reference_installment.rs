//! REGRESSION: reference loan must price at 8,207 a month
//!
//! Bug: the published example for a 5,00,000 car with 1,00,000 down over
//! five years at 8.5% quoted 8,217. Exact amortization at 8.5% gives
//! 8,206.61, which rounds to 8,207.

use emicalc::{compute_loan_quote, monthly_installment, Amount, AnnualRate, LoanQuoteInput};

use crate::common::TestEnv;

#[test]
fn regression_reference_loan_is_8207() {
    let quote = compute_loan_quote(&LoanQuoteInput::new(500_000, 100_000, 5, 8.5)).unwrap();

    assert_eq!(quote.financed_principal, Amount::new(400_000));
    assert_eq!(quote.payments, 60);
    assert_eq!(quote.monthly_emi, Amount::new(8_207));
    assert_eq!(quote.total_payment, Amount::new(492_420));
    assert_eq!(quote.total_interest, 92_420);
}

#[test]
fn regression_reference_raw_installment() {
    let raw = monthly_installment(
        Amount::new(400_000),
        AnnualRate::from_percent(8.5).unwrap(),
        60,
    );
    assert!((raw - 8_206.61).abs() < 0.01, "raw installment {raw}");
}

#[test]
fn regression_every_tenure_on_the_slider() {
    let expected = [34_888, 18_182, 12_627, 9_859, 8_207, 7_111, 6_335];
    for (years, emi) in (1..=7).zip(expected) {
        let quote =
            compute_loan_quote(&LoanQuoteInput::new(500_000, 100_000, years, 8.5)).unwrap();
        assert_eq!(quote.monthly_emi, Amount::new(emi), "{years} years");
    }
}

#[test]
fn regression_cli_default_quote_is_8207() {
    let env = TestEnv::new();
    let result = env.run(&["--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.events_named("quote")[0]["quote"]["monthly_emi"], 8_207);
}
