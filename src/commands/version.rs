use anyhow::Result;
use emicalc::config::LoadedConfig;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;

pub fn cmd_version(loaded: &LoadedConfig, ui: &UiContext) -> Result<()> {
    super::begin("version", loaded, ui)?;

    let version = env!("CARGO_PKG_VERSION");
    if ui.json {
        emit_event(&DataEvent::new(
            "version",
            "version",
            serde_json::json!({ "version": version }),
        ))?;
    } else {
        print!(
            "{}",
            crate::ui::views::version::render_version(version, ui.color, ui.unicode)
        );
    }

    super::finish("version", ui)
}
