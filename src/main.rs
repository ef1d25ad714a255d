//! emicalc CLI - car loan EMI calculator
//!
//! Usage: emicalc [COMMAND]
//!
//! Commands:
//!   quote    Compute the monthly installment and loan totals
//!   compare  Compare installments across a range of tenures
//!   apply    Draft a finance application record
//!   config   Show the effective configuration
//!   version  Show version information

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use emicalc::config::Config;
use emicalc::presentation::{Cli, Commands, LoanArgs};

use crate::commands::apply::Applicant;
use crate::ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.clone().unwrap_or(Commands::Quote {
        loan: LoanArgs::default(),
        clamp: false,
    });
    let name = command_name(&command);

    match run(&cli, &command, name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let ui = UiContext::new(cli.json, cli.color, &Config::default());
            commands::report_error(name, &err, &ui);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, command: &Commands, name: &str) -> Result<()> {
    commands::start(name, cli.json)?;

    let project_root = std::env::current_dir()?;
    let loaded = emicalc::config::resolve(cli.config.as_deref(), Some(&project_root))?;
    let ui = UiContext::new(cli.json, cli.color, &loaded.config);

    match command {
        Commands::Quote { loan, clamp } => commands::quote::cmd_quote(loan, *clamp, &loaded, &ui),
        Commands::Compare { pricing, from, to } => {
            commands::compare::cmd_compare(pricing, *from, *to, &loaded, &ui)
        }
        Commands::Apply {
            car_id,
            user_id,
            income,
            employment,
            credit_score,
            loan,
        } => {
            let applicant = Applicant {
                car_id,
                user_id,
                income: *income,
                employment: *employment,
                credit_score: *credit_score,
            };
            commands::apply::cmd_apply(&applicant, loan, &loaded, &ui)
        }
        Commands::Config => commands::config::cmd_config(&loaded, &ui),
        Commands::Version => commands::version::cmd_version(&loaded, &ui),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Quote { .. } => "quote",
        Commands::Compare { .. } => "compare",
        Commands::Apply { .. } => "apply",
        Commands::Config => "config",
        Commands::Version => "version",
    }
}
