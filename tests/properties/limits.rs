//! Property tests for marketplace limits.

use proptest::prelude::*;

use emicalc::{LoanLimits, LoanQuoteInput};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a clamped input satisfies every limit.
    #[test]
    fn property_clamped_input_is_within_limits(
        price in 0u64..=10_000_000,
        down in 0u64..=10_000_000,
        years in 0u32..=40,
        rate in 0.0f64..30.0,
    ) {
        let limits = LoanLimits::default();
        let input = LoanQuoteInput::new(price, down, years, rate);
        let clamped = limits.clamp(&input);

        prop_assert!(limits.check(&clamped).is_empty(), "{:?}", clamped);
        prop_assert_eq!(clamped.annual_rate_percent, input.annual_rate_percent);
    }

    /// PROPERTY: clamping is idempotent.
    #[test]
    fn property_clamp_is_idempotent(
        price in 0u64..=10_000_000,
        down in 0u64..=10_000_000,
        years in 0u32..=40,
    ) {
        let limits = LoanLimits::default();
        let once = limits.clamp(&LoanQuoteInput::new(price, down, years, 8.5));
        prop_assert_eq!(limits.clamp(&once), once);
    }

    /// PROPERTY: inputs already on the sliders are left alone.
    #[test]
    fn property_in_range_inputs_are_not_clamped(
        price_steps in 0u64..=38,
        down_steps in 0u64..=100,
        years in 1u32..=7,
    ) {
        let limits = LoanLimits::default();
        let price = 100_000 + price_steps * 50_000;
        let (min, max) = limits.down_payment_range(emicalc::Amount::new(price));
        let down = (min.units() + down_steps * 10_000).min(max.units());
        let input = LoanQuoteInput::new(price, down, years, 8.5);

        prop_assume!(limits.check(&input).is_empty());
        prop_assume!((down - min.units()) % 10_000 == 0);
        prop_assert_eq!(limits.clamp(&input), input);
    }
}
