use anyhow::Result;
use emicalc::config::LoadedConfig;
use emicalc::presentation::LoanArgs;
use emicalc::{draft_application, Amount, ApplicationRequest, EmploymentType};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

/// Applicant fields collected next to the calculator
pub struct Applicant<'a> {
    pub car_id: &'a str,
    pub user_id: &'a str,
    pub income: u64,
    pub employment: EmploymentType,
    pub credit_score: Option<u16>,
}

pub fn cmd_apply(
    applicant: &Applicant<'_>,
    loan: &LoanArgs,
    loaded: &LoadedConfig,
    ui: &UiContext,
) -> Result<()> {
    super::begin("apply", loaded, ui)?;

    let (input, rounding) = loan.resolve(&loaded.config.loan);
    let request = ApplicationRequest {
        car_id: applicant.car_id.to_string(),
        user_id: applicant.user_id.to_string(),
        input,
        rounding,
        monthly_income: Amount::new(applicant.income),
        employment_type: applicant.employment,
        credit_score: applicant.credit_score,
    };
    let draft = draft_application(&request)?;

    if ui.json {
        emit_event(&DataEvent::new("application", "apply", &draft))?;
    } else {
        print!(
            "{}",
            crate::ui::views::apply::render_application(&draft, &ui.money, ui.color, ui.unicode)
        );
        println!("{}", serde_json::to_string_pretty(&draft.application)?);
    }

    super::finish("apply", ui)
}
