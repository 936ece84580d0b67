//! Message keys and their default English templates.
//!
//! Every failure description produced by a rule is looked up through a
//! [`MessageKey`]. Templates use `{}` placeholders that are filled in order
//! with the rule's declared arguments (never with the candidate value).

use std::fmt;
use std::str::FromStr;

macro_rules! message_keys {
    ($($(#[$doc:meta])* $variant:ident => $name:literal, $template:literal;)+) => {
        /// Identifier of a localizable message template.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKey {
            $($(#[$doc])* $variant,)+
        }

        impl MessageKey {
            /// All known keys, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Stable snake_case name used in message override tables.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Built-in English template.
            #[must_use]
            pub const fn default_template(self) -> &'static str {
                match self {
                    $(Self::$variant => $template,)+
                }
            }
        }

        impl FromStr for MessageKey {
            type Err = UnknownMessageKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(UnknownMessageKey(s.to_string())),
                }
            }
        }
    };
}

message_keys! {
    /// Wrapper sentence around the final description.
    Expecting => "expecting", "Expecting: {}";
    /// Empty value in a required field.
    NonEmpty => "non_empty", "non-empty value";
    /// Header of an `or` enumeration.
    OneOf => "one_of", "One of the following: {}";
    /// Reframing used by `neg`.
    Negation => "negation", "Potential negation of: {}";
    /// A literal alternative the value had to equal.
    Literal => "literal", "\"{}\"";
    Integer => "integer", "valid integer value";
    UInteger => "uinteger", "positive integer value";
    Float => "float", "valid decimal value";
    UFloat => "ufloat", "positive decimal value";
    Range => "range", "value between {} and {}";
    Min => "min", "value greater or equal to {}";
    Max => "max", "value smaller or equal to {}";
    Length => "length", "value with {} characters";
    RangeLength => "rangelength", "value between {} and {} characters";
    MinLength => "minlength", "value with at least {} characters";
    MaxLength => "maxlength", "value with at most {} characters";
    IpAddr => "ipaddr", "valid IP address or prefix";
    IpAddrNoMask => "ipaddr_nomask", "valid IP address";
    Ip4Addr => "ip4addr", "valid IPv4 address or network";
    Ip4AddrNoMask => "ip4addr_nomask", "valid IPv4 address";
    Ip6Addr => "ip6addr", "valid IPv6 address or prefix";
    Ip6AddrNoMask => "ip6addr_nomask", "valid IPv6 address";
    Ip6LinkLocal => "ip6ll", "valid IPv6 Link Local address";
    Ip6Ula => "ip6ula", "valid IPv6 ULA address";
    Ip4Prefix => "ip4prefix", "valid IPv4 prefix value (0-32)";
    Ip6Prefix => "ip6prefix", "valid IPv6 prefix value (0-128)";
    Cidr => "cidr", "valid IPv4 or IPv6 CIDR";
    Cidr4 => "cidr4", "valid IPv4 CIDR";
    Cidr6 => "cidr6", "valid IPv6 CIDR";
    IpNet4 => "ipnet4", "IPv4 network in address/netmask notation";
    IpNet6 => "ipnet6", "IPv6 network in address/netmask notation";
    Ip6HostId => "ip6hostid", "valid IPv6 host id";
    IpMask => "ipmask", "valid network in address/netmask notation";
    IpMask4 => "ipmask4", "valid IPv4 network";
    IpMask6 => "ipmask6", "valid IPv6 network";
    IpRange => "iprange", "valid IP address range";
    IpRange4 => "iprange4", "valid IPv4 address range";
    IpRange6 => "iprange6", "valid IPv6 address range";
    Port => "port", "valid port value";
    PortRange => "portrange", "valid port or port range (port1-port2)";
    MacAddr => "macaddr", "valid MAC address";
    MacAddrUnicast => "macaddr_unicast", "valid unicast MAC address";
    MacAddrMulticast => "macaddr_multicast", "valid multicast MAC address";
    Hostname => "hostname", "valid hostname";
    Host => "host", "valid hostname or IP address";
    Network => "network", "valid UCI identifier, hostname or IP address range";
    HostPort => "hostport", "valid host:port";
    Ip4AddrPort => "ip4addrport", "valid IPv4 address:port";
    IpAddrPort => "ipaddrport", "valid address:port";
    WpaKeyHex => "wpakey_hex", "valid hexadecimal WPA key";
    WpaKeyLength => "wpakey_length", "key between 8 and 63 printable characters";
    WepKeyHex => "wepkey_hex", "valid hexadecimal WEP key";
    WepKeyLength => "wepkey_length", "key with either 5 or 13 characters";
    UciName => "uciname", "valid UCI identifier";
    Fw4ZoneName => "ucifw4zonename", "valid fw4 zone name UCI identifier";
    NetDevDots => "netdevname_dots", "valid network device name, not \".\" or \"..\"";
    NetDevName => "netdevname", "valid network device name between 1 and 15 characters not containing \":\", \"/\", \"%\" or spaces";
    PhoneDigit => "phonedigit", "valid phone digit (0-9, \"*\", \"#\", \"!\" or \".\")";
    Time => "timehhmmss", "valid time (HH:MM:SS)";
    Date => "dateyyyymmdd", "valid date (YYYY-MM-DD)";
    Unique => "unique", "unique value";
    /// Token count mismatch for a whitespace-separated `tuple`.
    TupleTokens => "tuple_tokens", "{}; {} tokens separated by whitespace";
    /// Token count mismatch for a `tuple` with an explicit separator.
    TupleTokensSep => "tuple_tokens_sep", "{}; {} tokens separated by \"{}\"";
    /// Single-element `tuple` shape.
    TupleSingle => "tuple_single", "{}";
    /// `string`/`sep` with a required literal.
    StringEquals => "string", "string: \"{}\"";
}

impl MessageKey {
    /// Number of `{}` placeholders in the default template.
    #[must_use]
    pub fn arity(self) -> usize {
        placeholder_count(self.default_template())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown message key name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown message key '{0}'")]
pub struct UnknownMessageKey(pub String);

/// Counts `{}` placeholders in a template.
pub(crate) fn placeholder_count(template: &str) -> usize {
    template.matches("{}").count()
}
