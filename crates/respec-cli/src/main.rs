#![forbid(unsafe_code)]

//! respec CLI
//!
//! Validates and converts spec-generator configuration records.

use anyhow::Result;
use clap::Parser;
use respec_cli::{Cli, handlers};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    let passed = handlers::run(cli.command, cli.settings.as_deref(), &mut stdout)?;
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
