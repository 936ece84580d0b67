//! The built-in rule library and the rule registry.
//!
//! A rule is a plain function of the value under test (through a [`Scope`])
//! and its compiled argument list. It either passes or returns an
//! [`Expectation`] describing what a valid value looks like.
//!
//! # Design
//!
//! - **Registry**: [`Registry`] maps rule names to [`Rule`] handles. It is
//!   immutable once built, and compiled programs keep the handles directly,
//!   so no name lookup happens during evaluation.
//! - **Lazy arguments**: nested calls in an argument list are never
//!   evaluated up front. Combinators such as `or` decide whether and when
//!   to run them.
//! - **Families**: rules are grouped by topic (`numeric`, `length`,
//!   `network`, `host`, `text`, `temporal`, `combinator`).

mod addr;
mod combinator;
mod host;
mod length;
mod network;
pub(crate) mod numeric;
mod scope;
mod temporal;
mod text;

#[cfg(test)]
mod combinator_tests;
#[cfg(test)]
mod host_tests;
#[cfg(test)]
mod test_support;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::grammar::{Arg, CompileError, Compiler, Program, format_number};
use crate::message::{Expectation, MessageKey};

pub use addr::{parse_ipv4, parse_ipv6};
pub(crate) use scope::Marks;
pub use scope::Scope;

/// Result of applying one rule: `Ok` on success, otherwise the description
/// of the expected shape.
pub type Outcome = Result<(), Expectation>;

/// Signature of a rule implementation.
pub type RuleFn = fn(&Scope<'_>, &[Arg]) -> Outcome;

/// A named reference to a rule implementation.
///
/// Rules compare equal by name.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    func: RuleFn,
}

impl Rule {
    /// Creates a rule handle.
    #[must_use]
    pub const fn new(name: &'static str, func: RuleFn) -> Self {
        Self { name, func }
    }

    /// The registered name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the rule to the scope's value.
    ///
    /// # Errors
    ///
    /// Returns the rule's [`Expectation`] if the value does not satisfy it.
    pub fn apply(&self, scope: &Scope<'_>, args: &[Arg]) -> Outcome {
        (self.func)(scope, args)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Rule {}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({})", self.name)
    }
}

/// Immutable table of named rules.
///
/// # Examples
///
/// ```
/// use datatype_check::grammar::Arg;
/// use datatype_check::message::{Expectation, MessageKey};
/// use datatype_check::rules::{Outcome, Registry, Scope};
///
/// fn even(scope: &Scope<'_>, _args: &[Arg]) -> Outcome {
///     match scope.value().parse::<u64>() {
///         Ok(n) if n % 2 == 0 => Ok(()),
///         _ => Err(Expectation::new(MessageKey::Integer)),
///     }
/// }
///
/// let registry = Registry::builder().rule("even", even).build();
/// assert!(registry.get("even").is_some());
/// assert!(registry.get("port").is_some());
/// assert!(registry.compile("list(even)").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    rules: HashMap<&'static str, Rule>,
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| RegistryBuilder::empty().builtins().build());

impl Registry {
    /// The process-wide registry of built-in rules.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Starts a builder pre-populated with the built-in rules.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::empty().builtins()
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rule> {
        self.rules.get(name).copied()
    }

    /// Registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compiles a descriptor, resolving rule names in this registry.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the descriptor is malformed.
    pub fn compile(&self, descriptor: &str) -> Result<Program, CompileError> {
        Compiler::new(self).compile(descriptor)
    }
}

/// Builder for a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    rules: HashMap<&'static str, Rule>,
}

impl RegistryBuilder {
    /// Starts with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a rule.
    #[must_use]
    pub fn rule(mut self, name: &'static str, func: RuleFn) -> Self {
        self.rules.insert(name, Rule::new(name, func));
        self
    }

    /// Finishes the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry { rules: self.rules }
    }

    fn builtins(self) -> Self {
        let table = numeric::RULES
            .iter()
            .chain(length::RULES)
            .chain(network::RULES)
            .chain(host::RULES)
            .chain(text::RULES)
            .chain(temporal::RULES)
            .chain(combinator::RULES);

        table.fold(self, |builder, &(name, func)| builder.rule(name, func))
    }
}

/// Passes when `condition` holds, otherwise fails with `expectation`.
fn ensure(condition: bool, expectation: impl Into<Expectation>) -> Outcome {
    if condition {
        Ok(())
    } else {
        Err(expectation.into())
    }
}

/// Truthiness of the optional flag argument at `index`.
fn flag(args: &[Arg], index: usize) -> bool {
    args.get(index).is_some_and(Arg::is_truthy)
}

/// Numeric value of the argument at `index`, `NaN` when absent or not numeric.
fn number(args: &[Arg], index: usize) -> f64 {
    args.get(index).and_then(Arg::as_number).unwrap_or(f64::NAN)
}

/// Message form of the argument at `index`.
fn shown(args: &[Arg], index: usize) -> String {
    match args.get(index) {
        Some(Arg::Number(n)) => format_number(*n),
        Some(Arg::Text(text)) => text.clone(),
        Some(Arg::Call(call)) => call.name().to_string(),
        None => String::new(),
    }
}

/// Picks the message key depending on whether a mask suffix is allowed.
const fn mask_key(nomask: bool, without: MessageKey, with: MessageKey) -> MessageKey {
    if nomask { without } else { with }
}
