//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Loan flags are optional; missing ones fall back to the effective config
//! - Running `emicalc` without a subcommand prints a quote for the configured defaults

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::LoanDefaults;
use crate::domain::entities::LoanQuoteInput;
use crate::domain::value_objects::{Amount, EmploymentType, RoundingMode};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// emicalc - car loan EMI calculator
#[derive(Parser, Debug)]
#[command(name = "emicalc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'emicalc' without arguments to quote the configured defaults.")]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of ./emicalc.toml and the user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Loan parameters shared by every pricing command
#[derive(Args, Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingArgs {
    /// Car price in whole currency units
    #[arg(long, value_name = "AMOUNT")]
    pub price: Option<u64>,

    /// Down payment in whole currency units
    #[arg(long, value_name = "AMOUNT")]
    pub down: Option<u64>,

    /// Annual interest rate in percent (e.g. 8.5 or 8.5%)
    #[arg(long, value_name = "PERCENT", value_parser = parse_percent, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// How the monthly installment is rounded
    #[arg(long, value_enum)]
    pub rounding: Option<RoundingMode>,
}

/// Pricing parameters plus a tenure
#[derive(Args, Debug, Clone, Copy, Default, PartialEq)]
pub struct LoanArgs {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Loan tenure in years
    #[arg(long, value_name = "YEARS")]
    pub tenure: Option<u32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the monthly installment and loan totals
    Quote {
        #[command(flatten)]
        loan: LoanArgs,

        /// Pull out-of-range inputs back inside the marketplace limits
        #[arg(long)]
        clamp: bool,
    },

    /// Compare installments across a range of tenures
    Compare {
        #[command(flatten)]
        pricing: PricingArgs,

        /// First tenure in years (defaults to the limits' minimum)
        #[arg(long, value_name = "YEARS")]
        from: Option<u32>,

        /// Last tenure in years (defaults to the limits' maximum)
        #[arg(long, value_name = "YEARS")]
        to: Option<u32>,
    },

    /// Draft a finance application record for a car
    Apply {
        /// Listing identifier of the car
        #[arg(long)]
        car_id: String,

        /// Identifier of the applying user
        #[arg(long)]
        user_id: String,

        /// Monthly income in whole currency units
        #[arg(long, value_name = "AMOUNT")]
        income: u64,

        /// Employment type of the applicant
        #[arg(long, value_enum)]
        employment: EmploymentType,

        /// Credit score (300-900)
        #[arg(long)]
        credit_score: Option<u16>,

        #[command(flatten)]
        loan: LoanArgs,
    },

    /// Show the effective configuration
    Config,

    /// Show version information
    Version,
}

impl PricingArgs {
    /// Fill missing flags from `defaults`
    pub fn resolve(&self, defaults: &LoanDefaults) -> (LoanQuoteInput, RoundingMode) {
        let mut input = defaults.to_input();
        if let Some(price) = self.price {
            input = input.with_principal_base(Amount::new(price));
        }
        if let Some(down) = self.down {
            input = input.with_down_payment(Amount::new(down));
        }
        if let Some(rate) = self.rate {
            input = input.with_rate(rate);
        }
        (input, self.rounding.unwrap_or(defaults.rounding))
    }
}

impl LoanArgs {
    /// Fill missing flags from `defaults`
    pub fn resolve(&self, defaults: &LoanDefaults) -> (LoanQuoteInput, RoundingMode) {
        let (input, rounding) = self.pricing.resolve(defaults);
        match self.tenure {
            Some(years) => (input.with_tenure_years(years), rounding),
            None => (input, rounding),
        }
    }
}

/// Parse a percentage, accepting a trailing `%`.
///
/// Range checks are left to the engine so that a negative rate is reported
/// like any other invalid loan input.
fn parse_percent(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a percentage", value))
}
