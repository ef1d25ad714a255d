use std::path::Path;

use emicalc::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Comment line printed above the effective TOML
pub fn render_source(source: Option<&Path>) -> String {
    match source {
        Some(path) => format!("# loaded from {}\n", path.display()),
        None => "# built-in defaults (no config file found)\n".to_string(),
    }
}

pub fn render_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    warnings
        .iter()
        .map(|w| {
            format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(w.to_string()).render(supports_color)
            )
        })
        .collect()
}
