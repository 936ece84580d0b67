//! Network addressing rules: IPv4/IPv6 addresses, prefixes, networks,
//! ranges, ports and MAC addresses.

use crate::grammar::Arg;
use crate::message::MessageKey;

use super::addr::{leading_hextet, parse_ipv4, parse_ipv6};
use super::numeric::{parse_decimal, parse_integer};
use super::{Outcome, RuleFn, Scope, ensure, flag, mask_key};

pub(super) const RULES: &[(&str, RuleFn)] = &[
    ("ipaddr", ipaddr),
    ("ip4addr", ip4addr),
    ("ip6addr", ip6addr),
    ("ip6ll", ip6ll),
    ("ip6ula", ip6ula),
    ("ip4prefix", ip4prefix),
    ("ip6prefix", ip6prefix),
    ("cidr", cidr),
    ("cidr4", cidr4),
    ("cidr6", cidr6),
    ("ipnet4", ipnet4),
    ("ipnet6", ipnet6),
    ("ip6hostid", ip6hostid),
    ("ipmask", ipmask),
    ("ipmask4", ipmask4),
    ("ipmask6", ipmask6),
    ("iprange", iprange),
    ("iprange4", iprange4),
    ("iprange6", iprange6),
    ("port", port),
    ("portrange", portrange),
    ("macaddr", macaddr),
];

static_regex!(
    IP4_WITH_MASK,
    r"^(\d+\.\d+\.\d+\.\d+)(?:/(\d+\.\d+\.\d+\.\d+)|/(\d{1,2}))?$"
);
static_regex!(IP6_WITH_PREFIX, r"^([0-9a-fA-F:.]+)(?:/(\d{1,3}))?$");
static_regex!(CIDR4, r"^(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})/(-)?(\d{1,2})$");
static_regex!(CIDR6, r"^([0-9a-fA-F:.]+)/(-)?(\d{1,3})$");
static_regex!(PORT_RANGE, r"^(\d+)-(\d+)$");
static_regex!(MAC, r"^([a-fA-F0-9]{2}):(?:[a-fA-F0-9]{2}:){4}[a-fA-F0-9]{2}$");

const MAX_PORT: f64 = 65535.0;

// ============================================================================
// Predicates shared with the host rules
// ============================================================================

fn in_prefix_range(s: &str, max: f64) -> bool {
    parse_decimal(s).is_some_and(|bits| (0.0..=max).contains(&bits))
}

pub(super) fn is_ip4addr(value: &str, nomask: bool) -> bool {
    if nomask {
        return parse_ipv4(value).is_some();
    }
    let Some(caps) = IP4_WITH_MASK.captures(value) else {
        return false;
    };
    parse_ipv4(&caps[1]).is_some()
        && match (caps.get(2), caps.get(3)) {
            (Some(netmask), _) => parse_ipv4(netmask.as_str()).is_some(),
            (None, Some(bits)) => in_prefix_range(bits.as_str(), 32.0),
            (None, None) => true,
        }
}

pub(super) fn is_ip6addr(value: &str, nomask: bool) -> bool {
    if nomask {
        return parse_ipv6(value).is_some();
    }
    let Some(caps) = IP6_WITH_PREFIX.captures(value) else {
        return false;
    };
    parse_ipv6(&caps[1]).is_some()
        && caps
            .get(2)
            .is_none_or(|bits| in_prefix_range(bits.as_str(), 128.0))
}

fn is_cidr4(value: &str, negative: bool) -> bool {
    CIDR4.captures(value).is_some_and(|caps| {
        parse_ipv4(&caps[1]).is_some()
            && (negative || caps.get(2).is_none())
            && in_prefix_range(&caps[3], 32.0)
    })
}

fn is_cidr6(value: &str, negative: bool) -> bool {
    CIDR6.captures(value).is_some_and(|caps| {
        parse_ipv6(&caps[1]).is_some()
            && (negative || caps.get(2).is_none())
            && in_prefix_range(&caps[3], 128.0)
    })
}

fn is_ipnet4(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(addr, mask)| parse_ipv4(addr).is_some() && parse_ipv4(mask).is_some())
}

fn is_ipnet6(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(addr, mask)| parse_ipv6(addr).is_some() && parse_ipv6(mask).is_some())
}

fn is_ipmask4(value: &str, negative: bool) -> bool {
    is_cidr4(value, negative) || is_ipnet4(value) || is_ip4addr(value, false)
}

fn is_ipmask6(value: &str, negative: bool) -> bool {
    is_cidr6(value, negative) || is_ipnet6(value) || is_ip6addr(value, false)
}

/// Two addresses separated by a single `-`, the first not above the second.
fn is_ordered_range<T: Ord>(value: &str, parse: fn(&str) -> Option<T>) -> bool {
    let mut parts = value.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(last), None) => match (parse(first), parse(last)) {
            (Some(first), Some(last)) => first <= last,
            _ => false,
        },
        _ => false,
    }
}

pub(super) fn is_port(value: &str) -> bool {
    parse_integer(value).is_some_and(|p| (0.0..=MAX_PORT).contains(&p))
}

// ============================================================================
// Rules
// ============================================================================

fn ipaddr(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let nomask = flag(args, 0);
    let value = scope.value();
    ensure(
        is_ip4addr(value, nomask) || is_ip6addr(value, nomask),
        mask_key(nomask, MessageKey::IpAddrNoMask, MessageKey::IpAddr),
    )
}

fn ip4addr(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let nomask = flag(args, 0);
    ensure(
        is_ip4addr(scope.value(), nomask),
        mask_key(nomask, MessageKey::Ip4AddrNoMask, MessageKey::Ip4Addr),
    )
}

fn ip6addr(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let nomask = flag(args, 0);
    ensure(
        is_ip6addr(scope.value(), nomask),
        mask_key(nomask, MessageKey::Ip6AddrNoMask, MessageKey::Ip6Addr),
    )
}

/// fe80::/10
fn ip6ll(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let value = scope.value();
    let link_local = (leading_hextet(value) & 0xffc0) == 0xfe80;
    ensure(
        link_local && is_ip6addr(value, flag(args, 0)),
        MessageKey::Ip6LinkLocal,
    )
}

/// fc00::/7
fn ip6ula(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let value = scope.value();
    let unique_local = (leading_hextet(value) & 0xfe00) == 0xfc00;
    ensure(
        unique_local && is_ip6addr(value, flag(args, 0)),
        MessageKey::Ip6Ula,
    )
}

fn ip4prefix(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(in_prefix_range(scope.value(), 32.0), MessageKey::Ip4Prefix)
}

fn ip6prefix(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(in_prefix_range(scope.value(), 128.0), MessageKey::Ip6Prefix)
}

fn cidr(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let negative = flag(args, 0);
    let value = scope.value();
    ensure(
        is_cidr4(value, negative) || is_cidr6(value, negative),
        MessageKey::Cidr,
    )
}

fn cidr4(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(is_cidr4(scope.value(), flag(args, 0)), MessageKey::Cidr4)
}

fn cidr6(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(is_cidr6(scope.value(), flag(args, 0)), MessageKey::Cidr6)
}

fn ipnet4(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(is_ipnet4(scope.value()), MessageKey::IpNet4)
}

fn ipnet6(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(is_ipnet6(scope.value()), MessageKey::IpNet6)
}

fn ip6hostid(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    let value = scope.value();
    if value == "eui64" || value == "random" {
        return Ok(());
    }
    let host_only = parse_ipv6(value).is_some_and(|addr| addr.segments()[..4] == [0; 4]);
    ensure(host_only, MessageKey::Ip6HostId)
}

fn ipmask(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let negative = flag(args, 0);
    let value = scope.value();
    ensure(
        is_ipmask4(value, negative) || is_ipmask6(value, negative),
        MessageKey::IpMask,
    )
}

fn ipmask4(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(is_ipmask4(scope.value(), flag(args, 0)), MessageKey::IpMask4)
}

fn ipmask6(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    ensure(is_ipmask6(scope.value(), flag(args, 0)), MessageKey::IpMask6)
}

fn iprange(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    let value = scope.value();
    ensure(
        is_ordered_range(value, parse_ipv4) || is_ordered_range(value, parse_ipv6),
        MessageKey::IpRange,
    )
}

fn iprange4(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(
        is_ordered_range(scope.value(), parse_ipv4),
        MessageKey::IpRange4,
    )
}

fn iprange6(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(
        is_ordered_range(scope.value(), parse_ipv6),
        MessageKey::IpRange6,
    )
}

fn port(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    ensure(is_port(scope.value()), MessageKey::Port)
}

fn portrange(scope: &Scope<'_>, _: &[Arg]) -> Outcome {
    let value = scope.value();
    let valid = match PORT_RANGE.captures(value) {
        Some(caps) => match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
            (Ok(first), Ok(last)) => (first..=MAX_PORT).contains(&last),
            _ => false,
        },
        None => is_port(value),
    };
    ensure(valid, MessageKey::PortRange)
}

/// Without an argument any MAC address passes; with one, the multicast bit
/// (low bit of the first octet) must equal the argument's truthiness.
///
/// The bare form stays permissive so that `list(macaddr)` accepts addresses
/// such as `11:22:33:44:55:66`, whose first octet has the multicast bit set.
/// Use `macaddr(0)` to require unicast.
fn macaddr(scope: &Scope<'_>, args: &[Arg]) -> Outcome {
    let expected = args.first().map(Arg::is_truthy);
    let key = match expected {
        None => MessageKey::MacAddr,
        Some(true) => MessageKey::MacAddrMulticast,
        Some(false) => MessageKey::MacAddrUnicast,
    };

    let multicast = MAC
        .captures(scope.value())
        .and_then(|caps| u8::from_str_radix(&caps[1], 16).ok())
        .map(|first| first & 1 == 1);

    let valid = match (multicast, expected) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(actual), Some(wanted)) => actual == wanted,
    };
    ensure(valid, key)
}
