//! Structured failure descriptions.

use super::{Catalog, MessageKey};

/// Description of what a valid value must look like.
///
/// Rules never format strings themselves; they return an `Expectation`
/// that is rendered once, through a [`Catalog`], by the evaluator. The
/// candidate value never appears inside an expectation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// A rule-specific shape description with its declared arguments.
    Shape {
        /// Template key
        key: MessageKey,
        /// Placeholder arguments, taken from the rule's declared arguments
        args: Vec<String>,
    },

    /// The value had to equal this literal.
    Literal(String),

    /// None of the alternatives matched (`or`).
    OneOf(Vec<Expectation>),

    /// The value, with an optional `!` prefix stripped, failed the inner shape (`neg`).
    Negation(Box<Expectation>),
}

impl Expectation {
    /// Creates a shape description without arguments.
    #[must_use]
    pub const fn new(key: MessageKey) -> Self {
        Self::Shape {
            key,
            args: Vec::new(),
        }
    }

    /// Creates a shape description with placeholder arguments.
    #[must_use]
    pub fn with_args<I, S>(key: MessageKey, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Shape {
            key,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the description (without the "Expecting:" wrapper).
    #[must_use]
    pub fn render(&self, catalog: &Catalog) -> String {
        match self {
            Self::Shape { key, args } => catalog.format(*key, args.as_slice()),
            Self::Literal(text) => catalog.format(MessageKey::Literal, &[text]),
            Self::OneOf(alternatives) => {
                let list: String = alternatives
                    .iter()
                    .map(|alt| format!("\n - {}", alt.render(catalog)))
                    .collect();
                catalog.format(MessageKey::OneOf, &[list])
            }
            Self::Negation(inner) => {
                catalog.format(MessageKey::Negation, &[inner.render(catalog)])
            }
        }
    }

    /// Renders the full user-facing sentence, e.g. `Expecting: valid port value`.
    #[must_use]
    pub fn sentence(&self, catalog: &Catalog) -> String {
        catalog.format(MessageKey::Expecting, &[self.render(catalog)])
    }
}

impl From<MessageKey> for Expectation {
    fn from(key: MessageKey) -> Self {
        Self::new(key)
    }
}
