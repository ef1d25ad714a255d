use emicalc::ApplicationDraft;

use crate::ui::format::{self, Money};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};
use crate::ui::widgets::table::{Align, Table};

pub fn render_application(
    draft: &ApplicationDraft,
    money: &Money,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let app = &draft.application;

    let mut table = Table::new(vec![Align::Left, Align::Left]);
    table.add_row(["Car".to_string(), app.car_id.clone()]);
    table.add_row(["Applicant".to_string(), app.user_id.clone()]);
    table.add_row(["Loan Amount".to_string(), money.amount(app.loan_amount)]);
    if let Some(down_payment) = app.down_payment {
        table.add_row(["Down Payment".to_string(), money.amount(down_payment)]);
    }
    table.add_row(["Tenure".to_string(), format::years(app.loan_tenure)]);
    table.add_row(["Monthly EMI".to_string(), money.amount(draft.quote.monthly_emi)]);
    table.add_row(["Monthly Income".to_string(), money.amount(app.monthly_income)]);
    table.add_row([
        "EMI / Income".to_string(),
        format!("{:.1}%", draft.installment_to_income_percent()),
    ]);
    table.add_row(["Employment".to_string(), app.employment_type.label().to_string()]);
    if let Some(score) = app.credit_score {
        table.add_row(["Credit Score".to_string(), score.to_string()]);
    }
    table.add_row(["Status".to_string(), app.status.to_string()]);

    let mut b = Box::with_title("Finance Application").style(BoxStyle::Success);
    b.add_lines(table.render_lines(supports_unicode));

    let mut out = b.render(supports_color, supports_unicode);
    out.push_str(&format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("application drafted; insert record follows").render(supports_color)
    ));
    out
}
