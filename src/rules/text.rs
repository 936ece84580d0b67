//! Credential, identifier and free-form text rules.

use crate::grammar::Arg;
use crate::message::{Expectation, MessageKey};

use super::{Outcome, RuleFn, Scope, ensure, shown};

pub(super) const RULES: &[(&str, RuleFn)] = &[
    ("wpakey", wpakey),
    ("wepkey", wepkey),
    ("uciname", uciname),
    ("ucifw4zonename", ucifw4zonename),
    ("netdevname", netdevname),
    ("phonedigit", phonedigit),
    ("string", string),
    ("sep", string),
    ("hexstring", accept),
    ("directory", accept),
    ("file", accept),
    ("device", accept),
];

static_regex!(UCI_NAME, r"^[a-zA-Z0-9_]+$");
static_regex!(FW4_ZONE, r"^[a-zA-Z_][a-zA-Z0-9_]+$");
static_regex!(NETDEV, r"^[^:/%\s]{1,15}$");
static_regex!(PHONE_DIGIT, r"^[0-9*#!.]+$");

pub(super) fn is_uciname(value: &str) -> bool {
    UCI_NAME.is_match(value)
}

fn is_hex(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// 64 hex digits, or a passphrase of 8 to 63 printable ASCII characters.
fn wpakey(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    let value = scope.value();
    if value.len() == 64 {
        return ensure(is_hex(value), MessageKey::WpaKeyHex);
    }
    let printable = value.bytes().all(|b| (b' '..=b'~').contains(&b));
    ensure(
        printable && (8..=63).contains(&value.len()),
        MessageKey::WpaKeyLength,
    )
}

/// Optional `s:` prefix, then 10 or 26 hex digits or 5 or 13 raw characters.
fn wepkey(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    let value = scope.value();
    let key = value.strip_prefix("s:").unwrap_or(value);
    let len = key.chars().count();

    if len == 10 || len == 26 {
        return ensure(is_hex(key), MessageKey::WepKeyHex);
    }
    ensure(len == 5 || len == 13, MessageKey::WepKeyLength)
}

fn uciname(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(is_uciname(scope.value()), MessageKey::UciName)
}

fn ucifw4zonename(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(FW4_ZONE.is_match(scope.value()), MessageKey::Fw4ZoneName)
}

fn netdevname(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    let value = scope.value();
    if value == "." || value == ".." {
        return Err(MessageKey::NetDevDots.into());
    }
    ensure(NETDEV.is_match(value), MessageKey::NetDevName)
}

fn phonedigit(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(PHONE_DIGIT.is_match(scope.value()), MessageKey::PhoneDigit)
}

/// Without an argument anything passes; with one the value must equal it.
fn string(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    if args.is_empty() {
        return Ok(());
    }
    let expected = shown(args, 0);
    ensure(
        scope.value() == expected,
        Expectation::with_args(MessageKey::StringEquals, [expected.clone()]),
    )
}

/// Hint-only rules that never reject a value.
#[allow(clippy::unnecessary_wraps)] // must match the rule signature
const fn accept(_: &Scope<'_>, _: &[Arg]) -> Outcome {
    Ok(())
}
