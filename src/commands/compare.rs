use anyhow::Result;
use emicalc::compare_tenures;
use emicalc::config::LoadedConfig;
use emicalc::presentation::PricingArgs;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

pub fn cmd_compare(
    pricing: &PricingArgs,
    from: Option<u32>,
    to: Option<u32>,
    loaded: &LoadedConfig,
    ui: &UiContext,
) -> Result<()> {
    super::begin("compare", loaded, ui)?;

    let (input, rounding) = pricing.resolve(&loaded.config.loan);
    let window = loaded.config.limits.tenure_range();
    let years = from.unwrap_or(*window.start())..=to.unwrap_or(*window.end());
    let rows = compare_tenures(&input, years, rounding)?;

    if ui.json {
        for row in &rows {
            emit_event(&DataEvent::new("tenure", "compare", row))?;
        }
    } else {
        print!(
            "{}",
            crate::ui::views::compare::render_comparison(
                input.financed_principal()?,
                input.annual_rate_percent,
                &rows,
                &ui.money,
                ui.color,
                ui.unicode,
            )
        );
    }

    super::finish("compare", ui)
}
