//! Configuration layer for the `datatype-check` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! 1. **Explicit CLI arguments**: `--type` always wins.
//! 2. **TOML config file**: the `[fields.<name>]` definition selected by `--field`.
//!
//! When both `--type` and `--field` are given, the inline datatype is used
//! and `--field` only names the field identity for sibling lookups.
//!
//! # Boolean Flag Semantics
//!
//! `optional` uses OR semantics: if either `--optional` or the field
//! definition sets it, empty values are accepted.
//!
//! # Messages
//!
//! The `[messages]` section overrides message templates by key name
//! (see [`crate::message::MessageKey`]). Overrides are validated when the
//! configuration is built: unknown keys and templates with a different
//! number of `{}` placeholders are rejected.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, Target};
pub use error::{ConfigError, field};
pub use toml::{FieldSection, TomlConfig, default_config_template};
pub use validated::{Mode, ValidatedConfig, write_default_config};
