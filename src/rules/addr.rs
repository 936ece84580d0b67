//! Textual IPv4 / IPv6 address parsing.
//!
//! These parsers are deliberately stricter and more literal than
//! [`std::str::FromStr`] for [`Ipv4Addr`]/[`Ipv6Addr`]: they accept exactly
//! the notations configuration screens accept, including leading zeros in
//! IPv4 octets and an embedded dotted quad at the end of an IPv6 address.
//!
//! Results are returned as std address types, whose `Ord` compares
//! component-wise, which is what range checks need.

use std::net::{Ipv4Addr, Ipv6Addr};

static_regex!(DOTTED_QUAD, r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$");
static_regex!(EMBEDDED_V4, r"^([a-fA-F0-9:]+):(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})$");
static_regex!(HEX_COLON, r"^[a-fA-F0-9:]+$");

/// Parses four dot separated decimal octets, each `0..=255`.
///
/// # Examples
///
/// ```
/// use datatype_check::rules::parse_ipv4;
///
/// assert_eq!(parse_ipv4("192.168.001.1"), Some([192, 168, 1, 1].into()));
/// assert_eq!(parse_ipv4("256.1.1.1"), None);
/// assert_eq!(parse_ipv4("1.2.3"), None);
/// ```
#[must_use]
pub fn parse_ipv4(s: &str) -> Option<Ipv4Addr> {
    let caps = DOTTED_QUAD.captures(s)?;
    let mut octets = [0u8; 4];
    for (slot, i) in octets.iter_mut().zip(1..=4) {
        *slot = caps[i].parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Parses a textual IPv6 address.
///
/// Supports `::` compression (at most once) and a trailing embedded IPv4
/// dotted quad, which is folded into the last two hextets. The result
/// always expands to exactly eight hextets.
///
/// # Examples
///
/// ```
/// use datatype_check::rules::parse_ipv6;
///
/// assert_eq!(parse_ipv6("::1"), Some(std::net::Ipv6Addr::LOCALHOST));
/// assert!(parse_ipv6("::ffff:192.168.1.1").is_some());
/// assert_eq!(parse_ipv6("2001:db8::1::2"), None);
/// assert_eq!(parse_ipv6("gggg::1"), None);
/// ```
#[must_use]
pub fn parse_ipv6(s: &str) -> Option<Ipv6Addr> {
    let folded;
    let text = match EMBEDDED_V4.captures(s) {
        Some(caps) => {
            let [a, b, c, d] = parse_ipv4(&caps[2])?.octets();
            let hi = u16::from_be_bytes([a, b]);
            let lo = u16::from_be_bytes([c, d]);
            folded = format!("{}:{hi:x}:{lo:x}", &caps[1]);
            folded.as_str()
        }
        None => s,
    };

    if !HEX_COLON.is_match(text) {
        return None;
    }

    let halves: Vec<&str> = text.split("::").collect();
    if halves.len() > 2 {
        return None;
    }

    let head = groups(non_empty_or_zero(halves[0]))?;
    let tail = match halves.get(1) {
        Some(second) => groups(non_empty_or_zero(second))?,
        None => Vec::new(),
    };

    let compressed = halves.len() == 2;
    let fits = if compressed {
        head.len() + tail.len() <= 7
    } else {
        head.len() == 8
    };
    if !fits {
        return None;
    }

    let mut words = [0u16; 8];
    words[..head.len()].copy_from_slice(&head);
    words[8 - tail.len()..].copy_from_slice(&tail);
    Some(Ipv6Addr::from(words))
}

const fn non_empty_or_zero(s: &str) -> &str {
    if s.is_empty() { "0" } else { s }
}

/// Parses colon separated hextets of at most four hex digits each.
fn groups(s: &str) -> Option<Vec<u16>> {
    s.split(':')
        .map(|group| {
            if group.is_empty() || group.len() > 4 {
                None
            } else {
                u16::from_str_radix(group, 16).ok()
            }
        })
        .collect()
}

/// Value of the leading run of hex digits, as used for link-local and
/// unique-local prefix checks. Non-hex input yields zero.
pub(super) fn leading_hextet(s: &str) -> u32 {
    let end = s
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(s.len())
        .min(8);
    u32::from_str_radix(&s[..end], 16).unwrap_or(0)
}
