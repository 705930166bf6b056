// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Onboard - flow document maintenance from the command line
//!
//! Entry point for the Onboard CLI application.

use std::process::ExitCode;

use clap::Parser;

use onboard::cli::{Cli, Commands};
use onboard::commands::{self, CommandContext};
use onboard::config::Settings;
use onboard::error::{OnboardError, Result};

/// Exit code for rejected flow updates
const EXIT_REJECTED: u8 = 2;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(OnboardError::Flow(err)) => {
            eprintln!("error[{}]: {}", err.code(), err);
            ExitCode::from(EXIT_REJECTED)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on this crate's debug output; `RUST_LOG` still takes precedence.
    if verbose > 0 {
        if let Ok(parsed) = "onboard=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let ctx = CommandContext::new(settings, cli.document.clone());

    // Dispatch to appropriate command
    match &cli.command {
        Commands::Init(args) => commands::init::execute(args, &ctx, &cli.format),
        Commands::Show => commands::show::execute(&ctx, &cli.format),
        Commands::Update(args) => commands::update::execute(args, &ctx, &cli.format),
        Commands::Blueprint(args) => commands::blueprint::execute(args, &ctx, &cli.format),
    }
}
