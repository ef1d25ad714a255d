//! Property tests for the EMI engine.

use proptest::prelude::*;

use emicalc::{compute_loan_quote, compute_loan_quote_with, LoanQuoteInput, RoundingMode};

fn rounding() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfEven),
        Just(RoundingMode::Down),
    ]
}

/// Realistic marketplace loans: at least 50,000 financed, 1% to 30%, 1 to 7 years
fn realistic_input() -> impl Strategy<Value = LoanQuoteInput> {
    (50_000u64..=5_000_000, 0u64..=2_000_000, 1u32..=7, 1.0f64..30.0).prop_map(
        |(financed, down, years, rate)| LoanQuoteInput::new(financed + down, down, years, rate),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identical inputs give identical quotes.
    #[test]
    fn property_quote_is_deterministic(input in realistic_input(), mode in rounding()) {
        let first = compute_loan_quote_with(&input, mode).unwrap();
        let second = compute_loan_quote_with(&input, mode).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: totals are derived exactly from the rounded installment.
    #[test]
    fn property_totals_follow_the_installment(input in realistic_input(), mode in rounding()) {
        let quote = compute_loan_quote_with(&input, mode).unwrap();

        prop_assert_eq!(quote.payments, input.tenure_years * 12);
        prop_assert_eq!(
            quote.total_payment.units(),
            quote.monthly_emi.units() * u64::from(quote.payments)
        );
        prop_assert_eq!(
            quote.total_interest,
            quote.total_payment.units() as i64 - quote.financed_principal.units() as i64
        );
        prop_assert_eq!(
            quote.financed_principal.units(),
            input.principal_base.units() - input.down_payment.units()
        );
    }

    /// PROPERTY: a positive rate never yields negative interest.
    #[test]
    fn property_positive_rate_charges_interest(input in realistic_input()) {
        let quote = compute_loan_quote(&input).unwrap();
        prop_assert!(quote.total_interest > 0, "{:?}", quote);
    }

    /// PROPERTY: the installment never drops when more is financed.
    #[test]
    fn property_installment_grows_with_principal(
        input in realistic_input(),
        extra in 1u64..=1_000_000,
    ) {
        let base = compute_loan_quote(&input).unwrap();
        let bigger = input.with_principal_base(emicalc::Amount::new(input.principal_base.units() + extra));
        let bigger = compute_loan_quote(&bigger).unwrap();
        prop_assert!(bigger.monthly_emi >= base.monthly_emi);
    }

    /// PROPERTY: a larger down payment never raises the installment.
    #[test]
    fn property_installment_falls_with_down_payment(
        input in realistic_input(),
        extra in 0u64..=50_000,
    ) {
        let base = compute_loan_quote(&input).unwrap();
        let more_down = input.with_down_payment(emicalc::Amount::new(input.down_payment.units() + extra));
        let more_down = compute_loan_quote(&more_down).unwrap();
        prop_assert!(more_down.monthly_emi <= base.monthly_emi);
    }

    /// PROPERTY: the installment never drops when the rate rises.
    #[test]
    fn property_installment_grows_with_rate(input in realistic_input(), bump in 0.1f64..10.0) {
        let base = compute_loan_quote(&input).unwrap();
        let dearer = compute_loan_quote(&input.with_rate(input.annual_rate_percent + bump)).unwrap();
        prop_assert!(dearer.monthly_emi >= base.monthly_emi);
    }

    /// PROPERTY: a longer tenure lowers the installment and raises total interest.
    #[test]
    fn property_longer_tenure_trades_installment_for_interest(
        input in realistic_input().prop_filter("room for a longer tenure", |i| i.tenure_years < 7),
    ) {
        let shorter = compute_loan_quote(&input).unwrap();
        let longer = compute_loan_quote(&input.with_tenure_years(input.tenure_years + 1)).unwrap();
        prop_assert!(longer.monthly_emi <= shorter.monthly_emi);
        prop_assert!(longer.total_interest >= shorter.total_interest);
    }

    /// PROPERTY: near-zero rates rise monotonically from the interest-free installment.
    #[test]
    fn property_tiny_rates_never_undercut_straight_line(
        financed in 50_000u64..=5_000_000,
        years in 1u32..=7,
        a in 0.0f64..1e-6,
        b in 0.0f64..1e-6,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let input = LoanQuoteInput::new(financed, 0, years, 0.0);
        let free = compute_loan_quote(&input).unwrap().monthly_emi;
        let cheaper = compute_loan_quote(&input.with_rate(low)).unwrap().monthly_emi;
        let dearer = compute_loan_quote(&input.with_rate(high)).unwrap().monthly_emi;

        prop_assert!(cheaper >= free, "{}% gave {:?} below {:?}", low, cheaper, free);
        prop_assert!(dearer >= cheaper, "{}% gave {:?} below {}% at {:?}", high, dearer, low, cheaper);
    }

    /// PROPERTY: rounding modes never disagree by more than one unit.
    #[test]
    fn property_rounding_modes_stay_within_one_unit(input in realistic_input()) {
        let up = compute_loan_quote_with(&input, RoundingMode::HalfUp).unwrap().monthly_emi.units();
        let even = compute_loan_quote_with(&input, RoundingMode::HalfEven).unwrap().monthly_emi.units();
        let down = compute_loan_quote_with(&input, RoundingMode::Down).unwrap().monthly_emi.units();
        prop_assert!(down <= up && up - down <= 1);
        prop_assert!(down <= even && even - down <= 1);
    }

    /// PROPERTY: interest-free loans repay the principal within rounding.
    #[test]
    fn property_zero_rate_repays_principal(
        financed in 1u64..=10_000_000,
        years in 1u32..=30,
    ) {
        let input = LoanQuoteInput::new(financed, 0, years, 0.0);
        let quote = compute_loan_quote(&input).unwrap();
        let payments = i64::from(years * 12);
        prop_assert!(quote.total_interest.abs() <= payments / 2 + 1, "{:?}", quote);
    }

    /// PROPERTY: arbitrary inputs produce a quote or an error, never a panic.
    #[test]
    fn property_engine_never_panics(
        principal in any::<u64>(),
        down in any::<u64>(),
        years in any::<u32>(),
        rate in any::<f64>(),
        mode in rounding(),
    ) {
        let input = LoanQuoteInput::new(principal, down, years, rate);
        if let Ok(quote) = compute_loan_quote_with(&input, mode) {
            prop_assert_eq!(
                u128::from(quote.total_payment.units()),
                u128::from(quote.monthly_emi.units()) * u128::from(quote.payments)
            );
        }
    }
}
