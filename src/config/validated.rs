//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::eval::{SiblingTable, SiblingValue, Validator};
use crate::message::Catalog;
use crate::rules::Registry;

use super::cli::{Cli, Command, Target};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// What to do with the compiled datatype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Validate each value and report a verdict.
    Check {
        /// Values to validate, in order
        values: Vec<String>,
        /// Print verdicts as JSON lines
        json: bool,
    },
    /// Print the compiled program.
    Explain,
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The datatype is compiled and the message overrides are checked during
/// construction, so definition defects surface before any value is judged.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Compiled datatype bound to the configured message catalog
    pub validator: Validator,

    /// Field identity used for sibling lookups
    pub field: String,

    /// Whether empty values are accepted
    pub optional: bool,

    /// Sibling values consulted by `unique`
    pub siblings: SiblingTable,

    /// What to do with the datatype
    pub mode: Mode,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match &self.mode {
            Mode::Check { values, json } => format!("check({} values, json: {json})", values.len()),
            Mode::Explain => "explain".to_string(),
        };

        write!(
            f,
            "Config {{ datatype: {}, field: {}, optional: {}, message_overrides: {}, mode: {} }}",
            self.validator.program(),
            self.field,
            self.optional,
            self.validator.catalog().len(),
            mode,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// An explicit `--type` takes precedence over the datatype of a `--field`
    /// definition. `optional` is set if either the CLI flag or the field
    /// definition sets it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command takes no datatype, or none was given
    /// - `--field` names an undefined field and no `--type` is given
    /// - The datatype fails to compile
    /// - A message override is unknown or malformed
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let target = cli.command.target().ok_or_else(|| {
            ConfigError::missing(field::DATATYPE, "Only 'check' and 'explain' take a datatype")
        })?;

        let (datatype, field_optional) = Self::resolve_datatype(target, toml)?;

        let program = Registry::builtin()
            .compile(&datatype)
            .map_err(|source| ConfigError::InvalidDescriptor {
                descriptor: datatype.clone(),
                source,
            })?;

        let catalog = Self::resolve_catalog(toml)?;

        let field = target
            .field
            .clone()
            .unwrap_or_else(|| defaults::FIELD.to_string());

        let (mode, optional, siblings) = match &cli.command {
            Command::Check {
                optional,
                siblings,
                list_siblings,
                json,
                values,
                ..
            } => (
                Mode::Check {
                    values: values.clone(),
                    json: *json,
                },
                *optional || field_optional,
                Self::build_siblings(&field, siblings, list_siblings),
            ),
            _ => (Mode::Explain, field_optional, SiblingTable::new()),
        };

        Ok(Self {
            validator: Validator::new(program).with_catalog(Arc::new(catalog)),
            field,
            optional,
            siblings,
            mode,
            verbose: cli.verbose,
        })
    }

    /// Loads configuration from CLI arguments, reading the TOML config file if specified.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed,
    /// or if validation fails.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_datatype(
        target: &Target,
        toml: Option<&TomlConfig>,
    ) -> Result<(String, bool), ConfigError> {
        let defined = target
            .field
            .as_deref()
            .and_then(|name| toml?.field(name));
        let field_optional = defined.is_some_and(|f| f.optional);

        // CLI takes precedence
        if let Some(ref datatype) = target.datatype {
            return Ok((datatype.clone(), field_optional));
        }

        // Fall back to the field definition
        if let Some(definition) = defined {
            return Ok((definition.datatype.clone(), field_optional));
        }

        match target.field {
            Some(ref name) => Err(ConfigError::UnknownField { name: name.clone() }),
            None => Err(ConfigError::missing(
                field::DATATYPE,
                "Use --type or --field with a config file",
            )),
        }
    }

    fn resolve_catalog(toml: Option<&TomlConfig>) -> Result<Catalog, ConfigError> {
        let Some(toml) = toml else {
            return Ok(Catalog::new());
        };
        Catalog::with_overrides(&toml.messages).map_err(ConfigError::from)
    }

    fn build_siblings(field: &str, singles: &[String], lists: &[String]) -> SiblingTable {
        let singles = singles.iter().map(SiblingValue::single);
        let lists = lists.iter().map(SiblingValue::list);

        singles
            .chain(lists)
            .fold(SiblingTable::new(), |table, value| table.with(field, value))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
