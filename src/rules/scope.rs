//! The view a rule gets of the evaluation in progress.

use std::cell::Cell;

use crate::eval::Context;
use crate::grammar::{Arg, Call, format_number};
use crate::message::Expectation;

use super::Outcome;
use super::numeric::parse_decimal;

/// Side flags raised while one evaluation runs.
#[derive(Debug, Default)]
pub(crate) struct Marks {
    list: Cell<bool>,
}

impl Marks {
    pub(crate) fn is_list(&self) -> bool {
        self.list.get()
    }
}

/// The value under test plus access to the evaluation context.
///
/// Combinators derive new scopes with [`Scope::with_value`] to run
/// sub-rules against a token or a transformed value.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    value: &'a str,
    context: &'a Context<'a>,
    marks: &'a Marks,
}

impl<'a> Scope<'a> {
    pub(crate) const fn new(value: &'a str, context: &'a Context<'a>, marks: &'a Marks) -> Self {
        Self {
            value,
            context,
            marks,
        }
    }

    /// The value under test.
    #[must_use]
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// The evaluation context.
    #[must_use]
    pub const fn context(&self) -> &'a Context<'a> {
        self.context
    }

    /// A scope over a different value sharing this scope's context.
    #[must_use]
    pub const fn with_value<'b>(&'b self, value: &'b str) -> Scope<'b> {
        Scope {
            value,
            context: self.context,
            marks: self.marks,
        }
    }

    /// Runs `call` against this scope's value.
    ///
    /// # Errors
    ///
    /// Returns the rule's [`Expectation`] if the value fails it.
    pub fn call(&self, call: &Call) -> Outcome {
        call.rule().apply(self, call.args())
    }

    /// Checks the value against a combinator argument: literals must be
    /// equal, nested calls are run.
    ///
    /// # Errors
    ///
    /// Returns the literal or the sub-rule's [`Expectation`] on mismatch.
    pub fn check_arg(&self, arg: &Arg) -> Outcome {
        match arg {
            Arg::Call(call) => self.call(call),
            Arg::Number(n) if parse_decimal(self.value) == Some(*n) => Ok(()),
            Arg::Number(n) => Err(Expectation::Literal(format_number(*n))),
            Arg::Text(text) if text == self.value => Ok(()),
            Arg::Text(text) => Err(Expectation::Literal(text.clone())),
        }
    }

    /// Marks the field as holding a multi-value list.
    pub fn mark_list(&self) {
        self.marks.list.set(true);
    }
}
