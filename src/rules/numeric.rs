//! Numeric rules: `integer`, `uinteger`, `float`, `ufloat`, `range`, `min`, `max`.

use crate::grammar::Arg;
use crate::message::{Expectation, MessageKey};

use super::{Outcome, RuleFn, Scope, ensure, number, shown};

pub(super) const RULES: &[(&str, RuleFn)] = &[
    ("integer", integer),
    ("uinteger", uinteger),
    ("float", float),
    ("ufloat", ufloat),
    ("range", range),
    ("min", min),
    ("max", max),
];

static_regex!(INTEGER, r"^-?\d+$");
static_regex!(DECIMAL, r"^-?\d+(?:\.\d+)?$");

/// Parses an optionally negative run of digits.
pub(crate) fn parse_integer(s: &str) -> Option<f64> {
    if INTEGER.is_match(s) {
        s.parse().ok()
    } else {
        None
    }
}

/// Parses an optionally negative decimal with at most one decimal point.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    if DECIMAL.is_match(s) {
        s.parse().ok()
    } else {
        None
    }
}

fn integer(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(parse_integer(scope.value()).is_some(), MessageKey::Integer)
}

fn uinteger(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(
        parse_integer(scope.value()).is_some_and(|n| n >= 0.0),
        MessageKey::UInteger,
    )
}

fn float(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(parse_decimal(scope.value()).is_some(), MessageKey::Float)
}

fn ufloat(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(
        parse_decimal(scope.value()).is_some_and(|n| n >= 0.0),
        MessageKey::UFloat,
    )
}

fn range(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let (lo, hi) = (number(args, 0), number(args, 1));
    ensure(
        parse_decimal(scope.value()).is_some_and(|n| (lo..=hi).contains(&n)),
        Expectation::with_args(MessageKey::Range, [shown(args, 0), shown(args, 1)]),
    )
}

fn min(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let lo = number(args, 0);
    ensure(
        parse_decimal(scope.value()).is_some_and(|n| n >= lo),
        Expectation::with_args(MessageKey::Min, [shown(args, 0)]),
    )
}

fn max(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let hi = number(args, 0);
    ensure(
        parse_decimal(scope.value()).is_some_and(|n| n <= hi),
        Expectation::with_args(MessageKey::Max, [shown(args, 0)]),
    )
}
