//! Datatype Check: a compiled expression language for value validation.
//!
//! A terse textual datatype descriptor such as `or(ip4addr,ip6addr)`,
//! `range(1,65535)` or `list(macaddr)` is compiled once into a
//! [`grammar::Program`], then evaluated against any number of candidate
//! strings. Failures come with a natural-language description of what a
//! valid value looks like.
//!
//! # Example
//!
//! ```
//! use datatype_check::eval::{Context, Validator};
//!
//! let validator = Validator::compile("list(macaddr)").unwrap();
//!
//! let verdict = validator.check("AA:BB:CC:DD:EE:FF 11:22:33:44:55:66");
//! assert!(verdict.is_valid());
//! assert!(verdict.is_list());
//!
//! let verdict = validator.check("AA:BB:CC:DD:EE:FF not-a-mac");
//! assert_eq!(verdict.message(), Some("Expecting: valid MAC address"));
//!
//! // Empty values are only accepted for optional fields.
//! assert!(!validator.check("").is_valid());
//! assert!(validator.validate("", &Context::new().optional(true)).is_valid());
//! ```

/// Declares a lazily compiled, static regular expression.
macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        static $name: ::std::sync::LazyLock<::regex::Regex> = ::std::sync::LazyLock::new(|| {
            ::regex::Regex::new($pattern).expect("static pattern is a valid regex")
        });
    };
}

pub mod config;
pub mod eval;
pub mod grammar;
pub mod message;
pub mod rules;
