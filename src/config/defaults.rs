//! Default values for configuration options.

/// Default output path for `init`.
pub const CONFIG_FILE: &str = "datatype-check.toml";

/// Field identity used for sibling lookups when no `--field` is given.
pub const FIELD: &str = "value";
