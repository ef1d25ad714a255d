use anyhow::Result;
use emicalc::config::LoadedConfig;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

pub fn cmd_config(loaded: &LoadedConfig, ui: &UiContext) -> Result<()> {
    super::begin("config", loaded, ui)?;

    if ui.json {
        emit_event(&DataEvent::new(
            "config",
            "config",
            serde_json::json!({
                "source": loaded.source.as_ref().map(|p| p.display().to_string()),
                "config": &loaded.config,
            }),
        ))?;
    } else {
        print!(
            "{}",
            crate::ui::views::config::render_source(loaded.source.as_deref())
        );
        print!("{}", loaded.config.to_toml_string()?);
    }

    super::finish("config", ui)
}
