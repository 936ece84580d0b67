//! Process plumbing for the `datatype-check` binary.
//!
//! Maps check outcomes to exit statuses, installs the stderr log
//! subscriber, and suggests a next command after a configuration error.

use datatype_check::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit statuses, so scripts can tell a rejected value from a broken setup.
pub mod exit_code {
    use std::process::ExitCode;

    /// 0: every checked value was accepted.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// 1: the datatype, config file, arguments or output stream was unusable.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// 2: at least one value was rejected.
    pub fn validation_failure() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Follow-up advice for a configuration error, if any applies.
fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::DATATYPE => {
            Some("Pass a datatype with --type, or a field name with --field and --config.")
        }
        ConfigError::UnknownField { .. } | ConfigError::FileRead { .. } => {
            Some("Run 'datatype-check init' to generate a configuration template.")
        }
        ConfigError::InvalidDescriptor { .. } => {
            Some("Run 'datatype-check rules' to list the built-in rules.")
        }
        _ => None,
    }
}

/// Writes the follow-up advice for `error` to stderr.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Installs the log subscriber. `RUST_LOG` overrides the level chosen by
/// `--verbose`; output goes to stderr, leaving stdout to results.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_points_at_init() {
        let error = ConfigError::UnknownField {
            name: "dns".to_string(),
        };
        assert_eq!(
            config_hint(&error),
            Some("Run 'datatype-check init' to generate a configuration template.")
        );
    }

    #[test]
    fn missing_datatype_explains_both_flags() {
        let error = ConfigError::MissingRequired {
            field: field::DATATYPE,
            hint: "",
        };
        assert!(config_hint(&error).is_some_and(|hint| hint.contains("--type")));
    }
}
