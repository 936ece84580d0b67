//! Field validators: a compiled program bound to a message catalog and
//! optional caller-supplied checks.

use std::fmt;
use std::sync::Arc;

use crate::grammar::{self, CompileError, Program};
use crate::message::{Catalog, MessageKey};
use crate::rules::{Marks, Scope};

use super::{Context, Evaluation, Verdict};

impl Program {
    /// Evaluates the program against `value`.
    ///
    /// An empty value never reaches any rule: it is valid exactly when the
    /// context declares the field optional.
    #[must_use]
    pub fn evaluate(&self, value: &str, context: &Context<'_>) -> Evaluation {
        if value.is_empty() {
            let outcome = if context.is_optional() {
                Ok(())
            } else {
                Err(MessageKey::NonEmpty.into())
            };
            return Evaluation::new(outcome, false);
        }

        let marks = Marks::default();
        let outcome = Scope::new(value, context, &marks).call(self.root());
        Evaluation::new(outcome, marks.is_list())
    }
}

/// A caller-supplied check run after the compiled program passes.
///
/// Returns a complete message on failure; it is surfaced verbatim.
pub type CustomCheck = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// A compiled descriptor ready to judge values.
///
/// # Examples
///
/// ```
/// use datatype_check::eval::{Context, SiblingTable, SiblingValue, Validator};
///
/// let validator = Validator::compile("or(ip4addr,ip6addr)").unwrap();
/// assert!(validator.check("192.168.1.1").is_valid());
/// assert!(validator.check("2001:db8::1").is_valid());
/// assert!(!validator.check("router.lan").is_valid());
///
/// let names = Validator::compile("unique").unwrap();
/// let siblings = SiblingTable::new().with("name", SiblingValue::single("a"));
/// let context = Context::new().field("name").siblings(&siblings);
/// assert!(!names.validate("a", &context).is_valid());
/// assert!(names.validate("c", &context).is_valid());
/// ```
pub struct Validator {
    program: Program,
    catalog: Arc<Catalog>,
    checks: Vec<CustomCheck>,
}

impl Validator {
    /// Wraps an already compiled program using the built-in messages.
    #[must_use]
    pub fn new(program: Program) -> Self {
        Self {
            program,
            catalog: Arc::new(Catalog::new()),
            checks: Vec::new(),
        }
    }

    /// Compiles `descriptor` with the built-in rules.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the descriptor is malformed.
    pub fn compile(descriptor: &str) -> Result<Self, CompileError> {
        grammar::compile(descriptor).map(Self::new)
    }

    /// Uses `catalog` to render failure messages.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Appends a check run, in order, after the program passes.
    #[must_use]
    pub fn with_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// The compiled program.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The message catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Judges `value` in `context`.
    #[must_use]
    pub fn validate(&self, value: &str, context: &Context<'_>) -> Verdict {
        let evaluation = self.program.evaluate(value, context);
        let is_list = evaluation.is_list();
        let mut verdict = evaluation.into_verdict(&self.catalog);

        if verdict.is_valid() {
            if let Some(message) = self.checks.iter().find_map(|check| check(value).err()) {
                verdict = Verdict::fail(message, is_list);
            }
        }

        tracing::trace!(
            descriptor = self.program.descriptor(),
            valid = verdict.is_valid(),
            "Evaluated value"
        );
        verdict
    }

    /// Judges `value` as a required field without sibling access.
    #[must_use]
    pub fn check(&self, value: &str) -> Verdict {
        self.validate(value, &Context::new())
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("program", &self.program.descriptor())
            .field("catalog_overrides", &self.catalog.len())
            .field("checks", &self.checks.len())
            .finish()
    }
}
