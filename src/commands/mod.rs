//! Subcommand handlers
//!
//! `main` calls [`start`] before loading config, so the NDJSON stream opens
//! with `start` even when the config is unusable. Handlers open with
//! [`begin`] and close with [`finish`], which emits `complete`.

pub mod apply;
pub mod compare;
pub mod config;
pub mod quote;
pub mod version;

use anyhow::Result;
use emicalc::config::LoadedConfig;
use emicalc::QuoteError;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, ErrorEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Announce the command (JSON mode only)
pub fn start(command: &str, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new(command))?;
    }
    Ok(())
}

/// Surface config warnings
pub fn begin(command: &str, loaded: &LoadedConfig, ui: &UiContext) -> Result<()> {
    if ui.json {
        for warning in &loaded.warnings {
            emit_event(&DataEvent::new(
                "warning",
                command,
                serde_json::json!({
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                }),
            ))?;
        }
    } else if !loaded.warnings.is_empty() {
        eprint!(
            "{}",
            crate::ui::views::config::render_warnings(&loaded.warnings, ui.color, ui.unicode)
        );
    }
    Ok(())
}

pub fn finish(command: &str, ui: &UiContext) -> Result<()> {
    if ui.json {
        emit_event(&CompleteEvent::success(command))?;
    }
    Ok(())
}

/// Print a failed command's error (an `error` event in JSON mode)
pub fn report_error(command: &str, err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = emit_event(&ErrorEvent::new(command, error_code(err), format!("{err:#}")));
    } else {
        eprintln!(
            "{} {}",
            Icon::Error.colored(ui.color, ui.unicode),
            ColoredText::error(format!("Error: {err:#}")).render(ui.color)
        );
    }
}

/// Stable machine-readable code for an error
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<QuoteError>() {
        Some(e) if e.is_invalid_input() => "invalid_input",
        Some(QuoteError::InvalidField { .. }) => "invalid_field",
        Some(QuoteError::InvalidLimits(_)) => "invalid_limits",
        Some(QuoteError::InvalidConfig { .. }) => "invalid_config",
        Some(QuoteError::Io(_)) => "io",
        _ => "error",
    }
}
