//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::LoanQuoteInput;
use crate::domain::policies::LoanLimits;
use crate::domain::value_objects::{Amount, AnnualRate, RoundingMode};
use crate::error::{QuoteError, QuoteResult};

use super::loader::{self, ConfigWarning};

/// Calculator defaults used when a flag is not given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDefaults {
    #[serde(default = "default_car_price")]
    pub car_price: Amount,

    #[serde(default = "default_down_payment")]
    pub down_payment: Amount,

    #[serde(default = "default_tenure_years")]
    pub tenure_years: u32,

    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for LoanDefaults {
    fn default() -> Self {
        Self {
            car_price: default_car_price(),
            down_payment: default_down_payment(),
            tenure_years: default_tenure_years(),
            annual_rate: default_annual_rate(),
            rounding: RoundingMode::default(),
        }
    }
}

impl LoanDefaults {
    pub fn to_input(&self) -> LoanQuoteInput {
        LoanQuoteInput {
            principal_base: self.car_price,
            down_payment: self.down_payment,
            tenure_years: self.tenure_years,
            annual_rate_percent: self.annual_rate,
        }
    }
}

fn default_car_price() -> Amount {
    LoanQuoteInput::default().principal_base
}

fn default_down_payment() -> Amount {
    LoanQuoteInput::default().down_payment
}

fn default_tenure_years() -> u32 {
    LoanQuoteInput::default().tenure_years
}

fn default_annual_rate() -> f64 {
    AnnualRate::DEFAULT_PERCENT
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub loan: LoanDefaults,

    #[serde(default)]
    pub limits: LoanLimits,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> QuoteResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> QuoteResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Reject configurations the commands cannot work with
    pub fn validate(&self) -> QuoteResult<()> {
        self.limits.validate()?;
        if self.output.currency_symbol.trim().is_empty() {
            return Err(QuoteError::InvalidField {
                field: "output.currency_symbol",
                value: self.output.currency_symbol.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> QuoteResult<String> {
        toml::to_string_pretty(self).map_err(|e| QuoteError::InvalidConfig {
            file: Path::new("<effective>").to_path_buf(),
            message: e.to_string(),
        })
    }
}
