//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::grammar::CompileError;
use crate::message::CatalogError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// `--field` names a field the config file does not define.
    #[error("Unknown field '{name}': not defined under [fields] in the config file")]
    UnknownField {
        /// The requested field name
        name: String,
    },

    /// A datatype descriptor failed to compile.
    #[error("Invalid datatype '{descriptor}': {source}")]
    InvalidDescriptor {
        /// The descriptor as written
        descriptor: String,
        /// Underlying compile error
        #[source]
        source: CompileError,
    },

    /// The `[messages]` section contains an invalid override.
    #[error("Invalid message override: {0}")]
    InvalidMessages(#[from] CatalogError),
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The datatype descriptor.
    pub const DATATYPE: &str = "datatype";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
