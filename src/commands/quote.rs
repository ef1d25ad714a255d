use anyhow::Result;
use emicalc::config::LoadedConfig;
use emicalc::presentation::LoanArgs;
use emicalc::{QuoteOptions, QuoteUseCase};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

pub fn cmd_quote(loan: &LoanArgs, clamp: bool, loaded: &LoadedConfig, ui: &UiContext) -> Result<()> {
    super::begin("quote", loaded, ui)?;

    let (input, rounding) = loan.resolve(&loaded.config.loan);
    let options = QuoteOptions::new(input)
        .with_rounding(rounding)
        .with_clamp(clamp);
    let outcome = QuoteUseCase::new(loaded.config.limits.clone()).execute(&options)?;

    if ui.json {
        emit_event(&DataEvent::new("quote", "quote", &outcome))?;
    } else {
        print!(
            "{}",
            crate::ui::views::quote::render_quote(&outcome, &ui.money, ui.color, ui.unicode)
        );
    }

    super::finish("quote", ui)
}
