//! Host rules: hostnames and composites of host, address and port.

use crate::grammar::Arg;
use crate::message::MessageKey;

use super::network::{is_ip4addr, is_ip6addr, is_port};
use super::text::is_uciname;
use super::{Outcome, RuleFn, Scope, ensure, flag};

pub(super) const RULES: &[(&str, RuleFn)] = &[
    ("hostname", hostname),
    ("host", host),
    ("network", network),
    ("hostport", hostport),
    ("ip4addrport", ip4addrport),
    ("ipaddrport", ipaddrport),
];

const MAX_HOSTNAME_LEN: usize = 253;

static_regex!(WORD, r"^[a-zA-Z0-9_]+$");
static_regex!(LABEL, r"^[a-zA-Z0-9_](?:[a-zA-Z0-9_\-]*[a-zA-Z0-9_])?$");
static_regex!(NOT_NUMERIC, r"[^0-9.]");
static_regex!(V4_PORT, r"^([^\[\]:]+):(\d+)$");
static_regex!(V6_PORT, r"^([^\[\]]+):(\d+)$");
static_regex!(V6_BRACKETED_PORT, r"^\[(.+)\]:(\d+)$");

/// Every label is non-empty and neither starts nor ends with `-`; one
/// trailing dot is allowed.
fn has_valid_labels(value: &str) -> bool {
    let name = value.strip_suffix('.').unwrap_or(value);
    name.split('.').all(|label| LABEL.is_match(label))
}

/// A single word, or dotted labels containing at least one character that
/// rules out a bare IPv4 address. `strict` additionally forbids a leading `_`.
fn is_hostname(value: &str, strict: bool) -> bool {
    if value.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    let shaped =
        WORD.is_match(value) || (has_valid_labels(value) && NOT_NUMERIC.is_match(value));
    shaped && !(strict && value.starts_with('_'))
}

fn is_host(value: &str, ipv4only: bool) -> bool {
    is_hostname(value, false)
        || is_ip4addr(value, true)
        || (!ipv4only && is_ip6addr(value, true))
}

/// Splits `host:port`; more than one colon never matches.
fn split_host_port(value: &str) -> Option<(&str, &str)> {
    let (host, port) = value.split_once(':')?;
    (!port.contains(':')).then_some((host, port))
}

fn hostname(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(is_hostname(scope.value(), flag(args, 0)), MessageKey::Hostname)
}

fn host(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(is_host(scope.value(), flag(args, 0)), MessageKey::Host)
}

fn network(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    let value = scope.value();
    ensure(
        is_uciname(value)
            || is_hostname(value, false)
            || is_ip4addr(value, false)
            || is_ip6addr(value, false),
        MessageKey::Network,
    )
}

fn hostport(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let ipv4only = flag(args, 0);
    ensure(
        split_host_port(scope.value())
            .is_some_and(|(host, port)| is_host(host, ipv4only) && is_port(port)),
        MessageKey::HostPort,
    )
}

fn ip4addrport(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(
        split_host_port(scope.value())
            .is_some_and(|(addr, port)| is_ip4addr(addr, true) && is_port(port)),
        MessageKey::Ip4AddrPort,
    )
}

/// `a.b.c.d:port`, or an IPv6 address and port; with `bracketed` the IPv6
/// form must be written `[addr]:port`.
fn ipaddrport(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let value = scope.value();

    let valid = if let Some(caps) = V4_PORT.captures(value) {
        is_ip4addr(&caps[1], true) && is_port(&caps[2])
    } else {
        let v6 = if flag(args, 0) {
            &V6_BRACKETED_PORT
        } else {
            &V6_PORT
        };
        v6.captures(value)
            .is_some_and(|caps| is_ip6addr(&caps[1], true) && is_port(&caps[2]))
    };

    ensure(valid, MessageKey::IpAddrPort)
}
