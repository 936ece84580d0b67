//! Datatype Check: validate values against datatype descriptors.
//!
//! Entry point for the datatype-check application.

use datatype_check::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::io;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Command::Init { output } => return handle_init(output),
        Command::Rules => return handle_rules(),
        Command::Check { .. } | Command::Explain { .. } => {}
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_application(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `rules` subcommand.
fn handle_rules() -> ExitCode {
    match run::list_rules(&mut io::stdout().lock()) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs `check` or `explain` with the given configuration.
fn run_application(config: &ValidatedConfig) -> ExitCode {
    match run::execute(config, &mut io::stdout().lock()) {
        Ok(summary) if summary.all_valid() => exit_code::SUCCESS,
        Ok(summary) => {
            tracing::debug!(invalid = summary.invalid, "Some values failed validation");
            exit_code::validation_failure()
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
