//! Compiled program representation.

use std::fmt;

use crate::rules::Rule;

/// A single compiled argument.
///
/// Combinators treat `Number` and `Text` as literals the value must equal
/// and `Call` as a sub-rule they decide when to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A token that parsed as a number.
    Number(f64),
    /// A quoted string literal, quotes stripped.
    Text(String),
    /// A nested rule invocation.
    Call(Call),
}

impl Arg {
    /// Returns the numeric interpretation of the argument, if any.
    ///
    /// Text arguments holding a number are accepted, nested rules are not.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok().filter(|n: &f64| n.is_finite()),
            Self::Call(_) => None,
        }
    }

    /// Returns the nested call, if this argument is one.
    #[must_use]
    pub const fn as_call(&self) -> Option<&Call> {
        match self {
            Self::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Truthiness of an argument used as a flag (`nomask`, `strict`, ...).
    ///
    /// Zero, `NaN` and the empty string are false; everything else is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Call(_) => true,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Call(call) => fmt::Display::fmt(call, f),
        }
    }
}

/// A rule reference together with its compiled argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    rule: Rule,
    args: Vec<Arg>,
}

impl Call {
    /// Creates a call of `rule` with `args`.
    #[must_use]
    pub const fn new(rule: Rule, args: Vec<Arg>) -> Self {
        Self { rule, args }
    }

    /// The referenced rule.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// The compiled arguments.
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Name of the referenced rule.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.name(), indent = depth * 2)?;
        for arg in &self.args {
            match arg {
                Arg::Call(call) => call.write_tree(f, depth + 1)?,
                other => writeln!(f, "{:indent$}{other}", "", indent = (depth + 1) * 2)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Call {
    /// Writes the call back in descriptor syntax, e.g. `or(ip4addr,"auto")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if self.args.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(arg, f)?;
        }
        f.write_str(")")
    }
}

/// The executable form of a descriptor.
///
/// A program is immutable after compilation and holds direct rule
/// references, so it can be shared and evaluated concurrently.
///
/// # Equality
///
/// Two programs are equal if their call trees are equal; rules compare by name.
#[derive(Debug, Clone)]
pub struct Program {
    descriptor: String,
    root: Call,
}

impl Program {
    pub(crate) const fn new(descriptor: String, root: Call) -> Self {
        Self { descriptor, root }
    }

    /// The descriptor this program was compiled from.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// The root invocation.
    #[must_use]
    pub const fn root(&self) -> &Call {
        &self.root
    }

    /// Returns an indented, one-node-per-line rendering of the call tree.
    #[must_use]
    pub fn tree(&self) -> String {
        struct Tree<'a>(&'a Call);

        impl fmt::Display for Tree<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.write_tree(f, 0)
            }
        }

        Tree(&self.root).to_string()
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// Formats a number the way descriptors and messages show it:
/// integral values without a fractional part.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // guarded by the magnitude check
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
