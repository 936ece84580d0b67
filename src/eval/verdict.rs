//! Evaluation results.

use serde::Serialize;

use crate::message::{Catalog, Expectation};
use crate::rules::Outcome;

/// Raw result of running a program: the outcome plus side flags.
///
/// The expectation is not rendered yet; see [`Evaluation::into_verdict`].
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    outcome: Outcome,
    is_list: bool,
}

impl Evaluation {
    pub(crate) const fn new(outcome: Outcome, is_list: bool) -> Self {
        Self { outcome, is_list }
    }

    /// Returns true if the value passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The description of the expected shape, if the value failed.
    #[must_use]
    pub fn expectation(&self) -> Option<&Expectation> {
        self.outcome.as_ref().err()
    }

    /// Returns true if a `list` combinator ran.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        self.is_list
    }

    /// Renders the outcome into a user-facing [`Verdict`].
    #[must_use]
    pub fn into_verdict(self, catalog: &Catalog) -> Verdict {
        match self.outcome {
            Ok(()) => Verdict::pass(self.is_list),
            Err(expectation) => Verdict::fail(expectation.sentence(catalog), self.is_list),
        }
    }
}

/// Final validity judgement for one value.
///
/// # Examples
///
/// ```
/// use datatype_check::eval::{Context, Validator};
///
/// let validator = Validator::compile("range(1,65535)").unwrap();
///
/// let verdict = validator.validate("0", &Context::new());
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.message(), Some("Expecting: value between 1 and 65535"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    list: bool,
}

impl Verdict {
    pub(crate) const fn pass(list: bool) -> Self {
        Self {
            valid: true,
            message: None,
            list,
        }
    }

    pub(crate) const fn fail(message: String, list: bool) -> Self {
        Self {
            valid: false,
            message: Some(message),
            list,
        }
    }

    /// Returns true if the value is valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The failure message, e.g. `Expecting: valid port value`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true if the field was marked as holding a multi-value list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        self.list
    }
}
