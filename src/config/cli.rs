//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;

/// Datatype Check: validate values against LuCI-style datatype descriptors
///
/// Compiles descriptors such as `or(ip4addr,ip6addr)` or `list(macaddr)`
/// and reports, for each value, whether it is valid and what a valid
/// value looks like.
#[derive(Debug, Parser)]
#[command(name = "datatype-check")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (field definitions, message overrides)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for datatype-check
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate values against a datatype
    Check {
        #[command(flatten)]
        target: Target,

        /// Accept empty values
        #[arg(long)]
        optional: bool,

        /// Value of a sibling field, checked by `unique` (can be specified multiple times)
        #[arg(long = "sibling", value_name = "VALUE")]
        siblings: Vec<String>,

        /// Value of a list-typed sibling field, split on blanks (can be specified multiple times)
        #[arg(long = "list-sibling", value_name = "VALUE")]
        list_siblings: Vec<String>,

        /// Print one JSON verdict per value
        #[arg(long)]
        json: bool,

        /// Values to check
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Show how a datatype compiles
    Explain {
        #[command(flatten)]
        target: Target,
    },

    /// List the built-in rule names
    Rules,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// The datatype to apply: given inline, or by the name of a configured field.
#[derive(Debug, Clone, Default, Args)]
#[group(required = true, multiple = true)]
pub struct Target {
    /// Datatype descriptor, e.g. "range(1,65535)"
    #[arg(long = "type", short = 't', value_name = "DATATYPE")]
    pub datatype: Option<String>,

    /// Field defined under [fields] in the config file
    #[arg(long, short = 'f', value_name = "NAME")]
    pub field: Option<String>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Tries to parse CLI arguments from an iterator.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid or missing arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}

impl Command {
    /// Returns the datatype target of commands that compile one.
    #[must_use]
    pub const fn target(&self) -> Option<&Target> {
        match self {
            Self::Check { target, .. } | Self::Explain { target } => Some(target),
            Self::Rules | Self::Init { .. } => None,
        }
    }
}
