use emicalc::{LimitViolation, LoanQuote, LoanQuoteInput, QuoteOutcome, RoundingMode};

use crate::ui::format::{self, Money};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

/// Label/value rows of the loan summary card
pub fn summary_rows(
    input: &LoanQuoteInput,
    quote: &LoanQuote,
    money: &Money,
) -> Vec<(&'static str, String)> {
    vec![
        ("Car Price", money.amount(input.principal_base)),
        ("Down Payment", money.amount(input.down_payment)),
        ("Loan Amount", money.amount(quote.financed_principal)),
        ("Interest Rate", format::percent(input.annual_rate_percent)),
        ("Tenure", format::years(input.tenure_years)),
        ("Monthly EMI", money.amount(quote.monthly_emi)),
        ("Total Interest", money.signed(quote.total_interest)),
        ("Total Payment", money.amount(quote.total_payment)),
    ]
}

/// Render rows as a two-column table, highlighting the installment
pub fn summary_lines(rows: &[(&'static str, String)], supports_color: bool) -> Vec<String> {
    let mut table = Table::new(vec![Align::Left, Align::Right]);
    for (label, value) in rows {
        table.add_row([label.to_string(), value.clone()]);
    }

    rows.iter()
        .zip(table.render_lines(true))
        .map(|((label, _), line)| {
            if *label == "Monthly EMI" {
                ColoredText::success(line).bold().render(supports_color)
            } else {
                line
            }
        })
        .collect()
}

pub fn render_quote(
    outcome: &QuoteOutcome,
    money: &Money,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut rows = summary_rows(&outcome.input, &outcome.quote, money);
    if outcome.rounding != RoundingMode::default() {
        rows.push(("Rounding", outcome.rounding.to_string()));
    }

    let style = if outcome.within_limits() {
        BoxStyle::Info
    } else {
        BoxStyle::Warning
    };
    let mut b = Box::with_title("Loan Summary").style(style);
    b.add_lines(summary_lines(&rows, supports_color));

    let mut out = b.render(supports_color, supports_unicode);
    out.push_str(&render_violations(
        &outcome.violations,
        outcome.was_clamped(),
        supports_color,
        supports_unicode,
    ));
    out
}

fn render_violations(
    violations: &[LimitViolation],
    clamped: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if violations.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for violation in violations {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(violation.to_string()).render(supports_color)
        ));
    }

    let hint = if clamped {
        "inputs were adjusted to the marketplace limits"
    } else {
        "outside the marketplace limits; use --clamp to adjust"
    };
    out.push_str(&format!(
        "{} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(hint).render(supports_color)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use emicalc::{QuoteOptions, QuoteUseCase};

    fn outcome(input: LoanQuoteInput, clamp: bool) -> QuoteOutcome {
        QuoteUseCase::default()
            .execute(&QuoteOptions::new(input).with_clamp(clamp))
            .unwrap()
    }

    #[test]
    fn ascii_loan_summary_snapshot() {
        let rendered = render_quote(
            &outcome(LoanQuoteInput::default(), false),
            &Money::new("₹", false),
            false,
            false,
        );

        insta::assert_snapshot!(rendered, @r"
        +------------------------------+
        | Loan Summary                 |
        | Car Price       Rs. 5,00,000 |
        | Down Payment    Rs. 1,00,000 |
        | Loan Amount     Rs. 4,00,000 |
        | Interest Rate           8.5% |
        | Tenure               5 years |
        | Monthly EMI        Rs. 8,207 |
        | Total Interest    Rs. 92,420 |
        | Total Payment   Rs. 4,92,420 |
        +------------------------------+
        ");
    }

    #[test]
    fn unicode_summary_uses_rupee_grouping() {
        let rendered = render_quote(
            &outcome(LoanQuoteInput::default(), false),
            &Money::default(),
            false,
            true,
        );
        assert!(rendered.contains("₹4,00,000"), "{rendered}");
        assert!(rendered.contains("₹8,207"), "{rendered}");
        assert!(rendered.starts_with('╭'));
    }

    #[test]
    fn out_of_range_inputs_are_flagged() {
        let input = LoanQuoteInput::new(50_000, 0, 9, 8.5);
        let rendered = render_quote(&outcome(input, false), &Money::default(), false, false);

        assert!(rendered.contains("[WARN] car price 50000 is below the minimum of 100000"), "{rendered}");
        assert!(rendered.contains("use --clamp"), "{rendered}");
    }

    #[test]
    fn clamped_quote_says_so() {
        let input = LoanQuoteInput::new(50_000, 0, 9, 8.5);
        let rendered = render_quote(&outcome(input, true), &Money::default(), false, false);

        assert!(rendered.contains("adjusted to the marketplace limits"), "{rendered}");
        assert!(rendered.contains("7 years"), "{rendered}");
    }

    #[test]
    fn non_default_rounding_is_shown() {
        let options = QuoteOptions::new(LoanQuoteInput::new(500_000, 100_000, 5, 0.0))
            .with_rounding(RoundingMode::Down);
        let outcome = QuoteUseCase::default().execute(&options).unwrap();
        let rendered = render_quote(&outcome, &Money::default(), false, true);

        assert!(rendered.contains("₹6,666"), "{rendered}");
        assert!(rendered.contains("-₹40"), "{rendered}");
        assert!(rendered.contains("down"), "{rendered}");
    }
}
