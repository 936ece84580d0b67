//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// Both sections are optional; an empty file is a valid configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Message template overrides, keyed by message key name
    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    /// Named field definitions
    #[serde(default)]
    pub fields: BTreeMap<String, FieldSection>,
}

/// One named field definition.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSection {
    /// Datatype descriptor, e.g. `list(macaddr)`
    pub datatype: String,

    /// Accept empty values
    #[serde(default)]
    pub optional: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Looks up a field definition by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSection> {
        self.fields.get(name)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Datatype Check Configuration File

# Named fields, selected with `--field <name>`.
# `datatype` is a descriptor such as "or(ip4addr,ip6addr)" (required).
# `optional = true` accepts empty values (default: false).

[fields.lan_ipaddr]
datatype = "ip4addr(1)"

[fields.dns]
datatype = "list(ipaddr(1))"
optional = true

[fields.listen_port]
datatype = "port"

[fields.hostname]
datatype = "unique(hostname)"

# Message template overrides, keyed by message name.
# Each `{}` is a placeholder; an override must keep the same number of them.
[messages]
# expecting = "Expecting: {}"
# non_empty = "non-empty value"
# port = "valid port value"
# range = "value between {} and {}"
"#
    .to_string()
}
