//! Length rules. Lengths are counted in UTF-8 bytes, not characters.

use crate::grammar::Arg;
use crate::message::{Expectation, MessageKey};

use super::{Outcome, RuleFn, Scope, ensure, number, shown};

pub(super) const RULES: &[(&str, RuleFn)] = &[
    ("length", length),
    ("minlength", minlength),
    ("maxlength", maxlength),
    ("rangelength", rangelength),
];

#[allow(clippy::cast_precision_loss)] // values are far below 2^52 bytes
fn byte_len(scope: &Scope<'_>) -> f64 {
    scope.value().len() as f64
}

fn length(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    #[allow(clippy::float_cmp)] // both sides are whole numbers
    let exact = byte_len(scope) == number(args, 0);
    ensure(
        exact,
        Expectation::with_args(MessageKey::Length, [shown(args, 0)]),
    )
}

fn minlength(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(
        byte_len(scope) >= number(args, 0),
        Expectation::with_args(MessageKey::MinLength, [shown(args, 0)]),
    )
}

fn maxlength(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(
        byte_len(scope) <= number(args, 0),
        Expectation::with_args(MessageKey::MaxLength, [shown(args, 0)]),
    )
}

fn rangelength(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let len = byte_len(scope);
    ensure(
        (number(args, 0)..=number(args, 1)).contains(&len),
        Expectation::with_args(MessageKey::RangeLength, [shown(args, 0), shown(args, 1)]),
    )
}
