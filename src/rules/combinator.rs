//! Combinators: rules that run other rules.
//!
//! Arguments of a combinator are either nested calls, which it runs when it
//! decides to, or literals the value must equal (see [`Scope::check_arg`]).

use crate::grammar::Arg;
use crate::message::{Expectation, MessageKey};

use super::{Outcome, RuleFn, Scope, ensure, shown};

pub(super) const RULES: &[(&str, RuleFn)] = &[
    ("or", or),
    ("and", and),
    ("neg", neg),
    ("list", list),
    ("unique", unique),
    ("tuple", tuple),
];

static_regex!(NEGATION, r"^[ \t]*![ \t]*");

/// Passes on the first alternative that passes; otherwise lists every
/// attempted alternative's description.
fn or(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let mut attempted = Vec::with_capacity(args.len());
    for arg in args {
        match scope.check_arg(arg) {
            Ok(()) => return Ok(()),
            Err(expectation) => attempted.push(expectation),
        }
    }
    Err(Expectation::OneOf(attempted))
}

/// Fails on the first argument that fails, with that argument's description.
fn and(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    args.iter().try_for_each(|arg| scope.check_arg(arg))
}

/// Strips one leading `!` (blanks around it allowed), then runs the sub-rule.
fn neg(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let Some(sub) = args.first() else {
        return Ok(());
    };
    let stripped = NEGATION.replace(scope.value(), "");
    scope
        .with_value(&stripped)
        .check_arg(sub)
        .map_err(|inner| Expectation::Negation(Box::new(inner)))
}

/// Applies the sub-rule to every whitespace separated token and flags the field
/// as a list.
fn list(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    scope.mark_list();

    let mut tokens = scope.value().split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(MessageKey::NonEmpty.into());
    }

    let Some(sub) = args.first() else {
        return Ok(());
    };
    tokens.try_for_each(|token| scope.with_value(token).check_arg(sub))
}

/// Rejects a value already held by a sibling field, then runs the optional
/// sub-rule.
fn unique(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let candidate = scope.value();
    let taken = scope
        .context()
        .sibling_values()
        .iter()
        .any(|sibling| sibling.holds(candidate));

    ensure(!taken, MessageKey::Unique)?;

    args.first().map_or(Ok(()), |sub| scope.check_arg(sub))
}

/// One token per element rule. A trailing `sep("x")` element switches
/// from whitespace splitting to splitting on `x` with trimmed tokens.
fn tuple(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let mut separator = None;
    let mut elements = Vec::with_capacity(args.len());
    for arg in args {
        match arg.as_call() {
            Some(call) if call.name() == "sep" => {
                separator = Some(shown(call.args(), 0)).filter(|sep| !sep.is_empty());
            }
            _ => elements.push(arg),
        }
    }

    let value = scope.value();
    let tokens: Vec<&str> = match separator.as_deref() {
        Some(sep) => value.split(sep).map(str::trim).collect(),
        None => value.split_whitespace().collect(),
    };

    if tokens.len() != elements.len() {
        return Err(tuple_shape(&elements, separator.as_deref()));
    }

    tokens
        .iter()
        .zip(&elements)
        .try_for_each(|(token, element)| scope.with_value(token).check_arg(element))
}

fn tuple_shape(elements: &[&Arg], separator: Option<&str>) -> Expectation {
    let names: Vec<String> = elements
        .iter()
        .map(|arg| match arg.as_call() {
            Some(call) => call.name().to_string(),
            None => format!("\"{}\"", shown(std::slice::from_ref(*arg), 0)),
        })
        .collect();
    let count = elements.len().to_string();

    match separator {
        _ if elements.len() == 1 => Expectation::with_args(MessageKey::TupleSingle, names),
        None => Expectation::with_args(MessageKey::TupleTokens, [names.join(" "), count]),
        Some(sep) => Expectation::with_args(
            MessageKey::TupleTokensSep,
            [names.join(sep), count, sep.to_string()],
        ),
    }
}
