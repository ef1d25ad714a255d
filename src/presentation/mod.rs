//! Presentation Layer
//!
//! CLI argument parsing (via clap). Rendering and NDJSON output live in the
//! binary's `ui` module; the subcommand handlers live in `commands`.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands, LoanArgs, PricingArgs};
