#![no_main]

use libfuzzer_sys::fuzz_target;

use emicalc::{compute_loan_quote_with, LoanQuoteInput, RoundingMode};

fuzz_target!(|data: &[u8]| {
    if data.len() < 29 {
        return;
    }

    let u64_at = |i: usize| {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&data[i..i + 8]);
        u64::from_le_bytes(buf)
    };
    let mut years = [0u8; 4];
    years.copy_from_slice(&data[16..20]);

    let input = LoanQuoteInput::new(
        u64_at(0),
        u64_at(8),
        u32::from_le_bytes(years),
        f64::from_bits(u64_at(20)),
    );
    let rounding = match data[28] % 3 {
        0 => RoundingMode::HalfUp,
        1 => RoundingMode::HalfEven,
        _ => RoundingMode::Down,
    };

    if let Ok(quote) = compute_loan_quote_with(&input, rounding) {
        assert_eq!(
            u128::from(quote.total_payment.units()),
            u128::from(quote.monthly_emi.units()) * u128::from(quote.payments)
        );
    }
});
