//! Evaluation context and the sibling lookup capability.

use std::collections::HashMap;
use std::fmt;

/// Read access to the values of sibling fields.
///
/// A sibling is another instance of the same logically named field within
/// the same record collection (for example the `name` option of every other
/// host entry). Implemented by the caller; the engine never looks for
/// siblings on its own.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one compiled program can be
/// evaluated from several threads against the same lookup.
pub trait SiblingLookup: Send + Sync {
    /// Returns the current values of every *other* field sharing the
    /// identity `field`. The field being validated must not be included.
    fn sibling_values(&self, field: &str) -> Vec<SiblingValue>;
}

/// The current value of one sibling field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingValue {
    value: String,
    is_list: bool,
}

impl SiblingValue {
    /// A sibling holding a single value.
    #[must_use]
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_list: false,
        }
    }

    /// A sibling holding a whitespace separated list of values.
    #[must_use]
    pub fn list(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_list: true,
        }
    }

    /// The raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the sibling is list-typed.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        self.is_list
    }

    /// Returns true if the sibling holds `candidate`, either as its whole
    /// value or, for list siblings, as one of its whitespace separated tokens.
    #[must_use]
    pub fn holds(&self, candidate: &str) -> bool {
        if self.is_list {
            self.value
                .split_whitespace()
                .any(|token| token == candidate)
        } else {
            self.value == candidate
        }
    }
}

/// A simple in-memory [`SiblingLookup`] keyed by field identity.
///
/// # Examples
///
/// ```
/// use datatype_check::eval::{SiblingLookup, SiblingTable, SiblingValue};
///
/// let table = SiblingTable::new()
///     .with("hostname", SiblingValue::single("router"))
///     .with("hostname", SiblingValue::single("nas"));
///
/// assert_eq!(table.sibling_values("hostname").len(), 2);
/// assert!(table.sibling_values("ipaddr").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiblingTable {
    fields: HashMap<String, Vec<SiblingValue>>,
}

impl SiblingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sibling value for `field` (builder style).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: SiblingValue) -> Self {
        self.insert(field, value);
        self
    }

    /// Adds a sibling value for `field`.
    pub fn insert(&mut self, field: impl Into<String>, value: SiblingValue) {
        self.fields.entry(field.into()).or_default().push(value);
    }

    /// Returns true if no sibling values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }
}

impl SiblingLookup for SiblingTable {
    fn sibling_values(&self, field: &str) -> Vec<SiblingValue> {
        self.fields.get(field).cloned().unwrap_or_default()
    }
}

/// Per-evaluation inputs besides the candidate value.
///
/// Cheap to copy; holds only borrowed data.
#[derive(Clone, Copy, Default)]
pub struct Context<'a> {
    optional: bool,
    field: Option<&'a str>,
    siblings: Option<&'a dyn SiblingLookup>,
}

impl<'a> Context<'a> {
    /// A context for a required field with no sibling access.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            optional: false,
            field: None,
            siblings: None,
        }
    }

    /// Sets whether an empty value is acceptable.
    #[must_use]
    pub const fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Sets the declared identity of the field being validated.
    #[must_use]
    pub const fn field(mut self, field: &'a str) -> Self {
        self.field = Some(field);
        self
    }

    /// Injects the sibling lookup used by `unique`.
    #[must_use]
    pub const fn siblings(mut self, siblings: &'a dyn SiblingLookup) -> Self {
        self.siblings = Some(siblings);
        self
    }

    /// Returns true if an empty value is acceptable.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// The declared field identity, if any.
    #[must_use]
    pub const fn field_name(&self) -> Option<&'a str> {
        self.field
    }

    /// Values of the other fields sharing this field's identity.
    ///
    /// Empty when no lookup was injected.
    #[must_use]
    pub fn sibling_values(&self) -> Vec<SiblingValue> {
        match self.siblings {
            Some(lookup) => lookup.sibling_values(self.field.unwrap_or_default()),
            None => {
                tracing::debug!("No sibling lookup in context, uniqueness is trivially satisfied");
                Vec::new()
            }
        }
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("optional", &self.optional)
            .field("field", &self.field)
            .field("siblings", &self.siblings.is_some())
            .finish()
    }
}
