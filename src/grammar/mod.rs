//! Descriptor grammar and compiler.
//!
//! A descriptor is a terse type expression such as `or(ip4addr,ip6addr)`
//! or `list(range(1,65535))`. This module turns it into a [`Program`].
//!
//! # Grammar
//!
//! ```text
//! expr    := name '(' arglist ')' | name
//! arglist := arg (',' arg)*
//! arg     := number | quoted-string | bare-token | expr
//! ```
//!
//! - Bare tokens are trimmed of blanks. A token parsing as a number becomes
//!   [`Arg::Number`]; a token wrapped in matching `'` or `"` becomes
//!   [`Arg::Text`]; a known rule name becomes a nested [`Arg::Call`].
//! - A backslash escapes exactly the next character, so `\,` and `\(` can
//!   appear inside tokens and quoted strings.
//! - `name` and `name()` are equivalent.
//! - Anything else is a [`CompileError`], never a failed validation.

mod error;
mod lexer;
mod parser;
mod program;

#[cfg(test)]
mod lexer_tests;

pub use error::CompileError;
pub use parser::Compiler;
pub use program::{Arg, Call, Program, format_number};

use crate::rules::Registry;

/// Compiles `descriptor` against the built-in rule registry.
///
/// # Errors
///
/// Returns a [`CompileError`] if the descriptor is malformed.
///
/// # Examples
///
/// ```
/// use datatype_check::grammar::compile;
///
/// let program = compile("or(ip4addr, 'auto')").unwrap();
/// assert_eq!(program.root().name(), "or");
/// assert!(compile("or(ip4addr").is_err());
/// ```
pub fn compile(descriptor: &str) -> Result<Program, CompileError> {
    Registry::builtin().compile(descriptor)
}
