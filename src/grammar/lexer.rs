//! Character-level scanning of descriptor text.
//!
//! The lexer only knows about structure: escapes, quoted spans, commas and
//! parenthesis nesting. Deciding what a token *means* is the parser's job.

use super::CompileError;

/// What terminated a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// An unescaped `,` at the current level.
    Comma,
    /// An unescaped `(` opening an argument list.
    Open,
    /// An unescaped `)` with no matching `(` at this level.
    Close,
    /// End of input (the implicit trailing comma).
    End,
}

/// A raw, not yet unescaped, token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// Source text of the token
    pub text: &'a str,
    /// Absolute byte offset of the token
    pub position: usize,
    /// Delimiter that ended it
    pub delimiter: Delimiter,
    /// Absolute byte offset of the delimiter
    pub delimiter_position: usize,
}

/// Scanning cursor over one argument list.
///
/// `base` is the absolute offset of `src` inside the full descriptor, so
/// nested lists report positions relative to the original text.
#[derive(Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    base: usize,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `src`, located at `base` in the descriptor.
    #[must_use]
    pub const fn new(src: &'a str, base: usize) -> Self {
        Self { src, base, pos: 0 }
    }

    /// Returns true once the whole input has been consumed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.pos > self.src.len()
    }

    /// Reads text up to the next structural delimiter and consumes the
    /// delimiter, except `(` which is left for [`Cursor::read_group`].
    pub fn next_token(&mut self) -> RawToken<'a> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut i = start;

        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'"' | b'\'' => i = skip_quoted(bytes, i),
                b',' | b'(' | b')' => break,
                _ => i += 1,
            }
        }

        let end = i.min(bytes.len());
        let delimiter = match bytes.get(end) {
            None => Delimiter::End,
            Some(b',') => Delimiter::Comma,
            Some(b'(') => Delimiter::Open,
            Some(_) => Delimiter::Close,
        };

        self.pos = if delimiter == Delimiter::Open { end } else { end + 1 };

        RawToken {
            text: &self.src[start..end],
            position: self.base + start,
            delimiter,
            delimiter_position: self.base + end,
        }
    }

    /// Consumes a parenthesised group starting at the current `(` and
    /// returns its inner text together with the inner text's absolute offset.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Unclosed`] if the group never closes.
    pub fn read_group(&mut self) -> Result<(&'a str, usize), CompileError> {
        let bytes = self.src.as_bytes();
        let open = self.pos;
        let mut depth = 0usize;
        let mut i = open;

        while i < bytes.len() {
            match bytes[i] {
                b'\\' => {
                    i += 2;
                    continue;
                }
                b'"' | b'\'' => {
                    i = skip_quoted(bytes, i);
                    continue;
                }
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos = i + 1;
                        return Ok((&self.src[open + 1..i], self.base + open + 1));
                    }
                }
                _ => {}
            }
            i += 1;
        }

        Err(CompileError::Unclosed {
            position: self.base + open,
        })
    }
}

/// Skips a quoted span starting at `start`, returning the index after the
/// closing quote. An unterminated quote is treated as an ordinary character.
fn skip_quoted(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut j = start + 1;

    while j < bytes.len() {
        if bytes[j] == b'\\' {
            j += 2;
            continue;
        }
        if bytes[j] == quote {
            return j + 1;
        }
        j += 1;
    }

    start + 1
}

/// Removes single-character escapes: `\x` becomes `x`.
///
/// A trailing lone backslash is kept as is.
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Trims blanks (spaces and tabs) from both ends.
#[must_use]
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}
