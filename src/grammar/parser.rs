//! Recursive-descent compilation of descriptors into programs.

use crate::rules::Registry;

use super::lexer::{Cursor, Delimiter, RawToken, trim_blanks, unescape};
use super::{Arg, Call, CompileError, Program};

static_regex!(NUMBER, r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$");

/// Compiles descriptor text against a rule registry.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'r> {
    registry: &'r Registry,
}

impl<'r> Compiler<'r> {
    /// Creates a compiler resolving rule names in `registry`.
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Compiles a complete descriptor.
    ///
    /// The descriptor must consist of exactly one root rule invocation.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] for malformed grammar, unknown rule names,
    /// or a descriptor that does not start with a rule.
    pub fn compile(&self, descriptor: &str) -> Result<Program, CompileError> {
        let mut items = self.compile_list(descriptor, 0)?.into_iter();

        let root = match items.next() {
            None => return Err(CompileError::Empty),
            Some(Arg::Call(call)) => call,
            Some(literal) => {
                return Err(CompileError::LiteralRoot {
                    token: literal.to_string(),
                });
            }
        };

        if let Some(extra) = items.next() {
            return Err(CompileError::TrailingInput {
                token: extra.to_string(),
            });
        }

        tracing::debug!(descriptor, rule = root.name(), "Compiled datatype descriptor");
        Ok(Program::new(descriptor.to_string(), root))
    }

    /// Compiles a comma separated argument list located at `base`.
    fn compile_list(&self, src: &str, base: usize) -> Result<Vec<Arg>, CompileError> {
        let mut cursor = Cursor::new(src, base);
        let mut args = Vec::new();

        while !cursor.is_done() {
            let token = cursor.next_token();
            match token.delimiter {
                Delimiter::Close => {
                    return Err(CompileError::UnexpectedClose {
                        position: token.delimiter_position,
                    });
                }
                Delimiter::Open => {
                    let call = self.rule_with_group(&token)?;
                    let (inner, offset) = cursor.read_group()?;
                    let nested = self.compile_list(inner, offset)?;
                    args.push(Arg::Call(Call::new(call.rule(), nested)));
                }
                Delimiter::Comma | Delimiter::End => {
                    if let Some(arg) = self.classify(&token)? {
                        args.push(arg);
                    }
                }
            }
        }

        Ok(args)
    }

    /// Resolves the token preceding an argument list, which must be a rule name.
    fn rule_with_group(&self, token: &RawToken<'_>) -> Result<Call, CompileError> {
        match self.classify(token)? {
            Some(Arg::Call(call)) => Ok(call),
            Some(other) => Err(CompileError::ArgumentsFollowNonRule {
                token: other.to_string(),
                position: token.delimiter_position,
            }),
            None => Err(CompileError::ArgumentsFollowNonRule {
                token: String::new(),
                position: token.delimiter_position,
            }),
        }
    }

    /// Turns a bare token into a number, string literal or argument-less call.
    ///
    /// Blank tokens yield `None`.
    fn classify(&self, token: &RawToken<'_>) -> Result<Option<Arg>, CompileError> {
        let label = unescape(token.text);
        let label = trim_blanks(&label);

        if label.is_empty() {
            return Ok(None);
        }

        if NUMBER.is_match(label) {
            if let Ok(n) = label.parse::<f64>() {
                return Ok(Some(Arg::Number(n)));
            }
        }

        if let Some(text) = strip_quotes(label) {
            return Ok(Some(Arg::Text(text.to_string())));
        }

        self.registry
            .get(label)
            .map(|rule| Some(Arg::Call(Call::new(rule, Vec::new()))))
            .ok_or_else(|| CompileError::UnhandledToken {
                token: label.to_string(),
                position: token.position,
            })
    }
}

/// Strips one pair of matching single or double quotes.
fn strip_quotes(label: &str) -> Option<&str> {
    let first = label.chars().next()?;
    if (first == '"' || first == '\'') && label.len() >= 2 && label.ends_with(first) {
        Some(&label[1..label.len() - 1])
    } else {
        None
    }
}
