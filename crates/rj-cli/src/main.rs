//! router-jwks - JWKS setup wizard for a GraphQL router
//!
//! Asks a few questions about how tokens are signed and writes the router's
//! `authentication.experimental.jwt` settings, plus a local JWKS file when a
//! shared HMAC secret is used.
//!
//! # Examples
//!
//! ```bash
//! # Write router.yaml (and jwks.json for HMAC secrets) in the current directory
//! router-jwks create-config
//!
//! # Add a JWKS URL to an existing router config
//! router-jwks configure --config ./router.yaml
//! ```

use rj_cli::{Cli, TerminalPrompter, WizardError, WizardResult, logger, run};
use rj_config::{Config, LogLevel};

use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use error_location::ErrorLocation;
use log::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> WizardResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let level = if cli.verbose() {
        LogLevel(log::LevelFilter::Debug)
    } else {
        config.logging.level
    };
    logger::initialize(level, config.log_file_path()?, config.logging.colored)?;
    config.log_summary();

    let working_dir = std::env::current_dir().map_err(|e| WizardError::WorkingDir {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    let options = cli.wizard_options(working_dir, config.output.clone());
    info!("Writing router config to {}", options.router_config_path().display());

    let mut prompter = TerminalPrompter::new();
    run(&options, &mut prompter)?;

    Ok(())
}
