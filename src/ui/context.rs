use emicalc::config::{ColorMode, Config};
use emicalc::presentation::ColorWhen;

use crate::ui::format::Money;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
    pub money: Money,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            color: color && !json,
            unicode,
            money: Money::new(&config.output.currency_symbol, unicode),
        }
    }
}
