use emicalc::{Amount, TenureQuote};

use crate::ui::format::{self, Money};
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::{Align, Table};

pub fn render_comparison(
    financed: Amount,
    annual_rate_percent: f64,
    rows: &[TenureQuote],
    money: &Money,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = Table::new(vec![Align::Left, Align::Right, Align::Right, Align::Right])
        .header(["Tenure", "Monthly EMI", "Total Interest", "Total Payment"]);
    for row in rows {
        table.add_row([
            format::years(row.tenure_years),
            money.amount(row.quote.monthly_emi),
            money.signed(row.quote.total_interest),
            money.amount(row.quote.total_payment),
        ]);
    }

    let mut b = Box::with_title("Tenure Comparison");
    b.add_line(
        ColoredText::dim(format!(
            "{} at {}",
            money.amount(financed),
            format::percent(annual_rate_percent)
        ))
        .render(supports_color),
    );
    b.add_empty();
    b.add_lines(table.render_lines(supports_unicode));
    b.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emicalc::{compare_tenures, LoanQuoteInput, RoundingMode};

    #[test]
    fn comparison_lists_every_tenure() {
        let rows = compare_tenures(&LoanQuoteInput::default(), 1..=7, RoundingMode::HalfUp).unwrap();
        let rendered = render_comparison(
            Amount::new(400_000),
            8.5,
            &rows,
            &Money::default(),
            false,
            true,
        );

        assert!(rendered.contains("₹4,00,000 at 8.5%"), "{rendered}");
        assert!(rendered.contains("₹34,888"), "{rendered}");
        assert!(rendered.contains("₹6,335"), "{rendered}");
        let tenure_lines = rendered.lines().filter(|l| l.contains("year")).count();
        assert_eq!(tenure_lines, 7, "{rendered}");
    }

    #[test]
    fn ascii_comparison_has_dashed_rule() {
        let rows = compare_tenures(&LoanQuoteInput::default(), 2..=3, RoundingMode::HalfUp).unwrap();
        let rendered = render_comparison(
            Amount::new(400_000),
            8.5,
            &rows,
            &Money::new("₹", false),
            false,
            false,
        );

        assert!(rendered.is_ascii(), "{rendered}");
        assert!(rendered.contains("| ------"), "{rendered}");
        assert!(rendered.contains("Rs. 18,182"), "{rendered}");
    }
}
