//! Bakery admin - operator tooling for back-office user records.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use common::{init_tracing, AdminConfig, AppResult};

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AdminConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", e.code(), e.user_message());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level, cli.verbose);
    tracing::debug!(?config, "Configuration loaded");

    match run(cli.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Dispatch a command; `Ok(false)` means it ran but reported a negative outcome.
fn run(command: Commands, config: &AdminConfig) -> AppResult<bool> {
    match command {
        Commands::HashPassword { plain } => {
            commands::password::hash(&plain, config)?;
            Ok(true)
        }
        Commands::VerifyPassword { plain, hash } => Ok(commands::password::verify(&plain, &hash)),
        Commands::Validate { file } => commands::validate::execute(&file),
        Commands::Compare { left, right } => {
            commands::compare::execute(&left, &right)?;
            Ok(true)
        }
    }
}
