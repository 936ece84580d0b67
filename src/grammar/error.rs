//! Error types for descriptor compilation.

use thiserror::Error;

/// Error type for descriptor compilation.
///
/// These are defects in a field definition, never a judgement about a
/// candidate value. Positions are byte offsets into the full descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The descriptor contains no rule at all.
    #[error("Empty datatype descriptor")]
    Empty,

    /// A bare token is neither a number, a quoted string nor a known rule.
    #[error("Unhandled token \"{token}\" at position {position}")]
    UnhandledToken {
        /// The offending token, unescaped and trimmed
        token: String,
        /// Byte offset of the token
        position: usize,
    },

    /// An argument list is attached to something that is not a rule name.
    #[error("Argument list follows non-rule token \"{token}\" at position {position}")]
    ArgumentsFollowNonRule {
        /// The token preceding the argument list
        token: String,
        /// Byte offset of the opening parenthesis
        position: usize,
    },

    /// A closing parenthesis without a matching opening one.
    #[error("Unexpected ')' at position {position}")]
    UnexpectedClose {
        /// Byte offset of the parenthesis
        position: usize,
    },

    /// An opening parenthesis that is never closed.
    #[error("Unclosed '(' at position {position}")]
    Unclosed {
        /// Byte offset of the parenthesis
        position: usize,
    },

    /// The descriptor starts with a literal instead of a rule.
    #[error("Descriptor must start with a rule, found literal {token}")]
    LiteralRoot {
        /// The literal, as written back
        token: String,
    },

    /// Extra top-level items after the root rule.
    #[error("Unexpected input after the root rule: {token}")]
    TrailingInput {
        /// The first extra item, as written back
        token: String,
    },
}

impl CompileError {
    /// Returns the byte offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnhandledToken { position, .. }
            | Self::ArgumentsFollowNonRule { position, .. }
            | Self::UnexpectedClose { position }
            | Self::Unclosed { position } => Some(*position),
            Self::Empty | Self::LiteralRoot { .. } | Self::TrailingInput { .. } => None,
        }
    }
}
