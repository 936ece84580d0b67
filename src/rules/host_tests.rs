//! Tests for hostname and host:port rules.

use super::test_support::{assert_accepts, assert_rejects, failure};

mod hostname {
    use super::*;

    #[test]
    fn accepts_words_and_dotted_names() {
        assert_accepts(
            "hostname",
            &[
                "openwrt",
                "router.lan",
                "my-host.example.com",
                "host.",
                "_srv",
                "a",
                "_dmarc.example.com",
                "x-1.y_2.lan",
            ],
        );
    }

    #[test]
    fn rejects_bare_ipv4_and_bad_edges() {
        assert_rejects(
            "hostname",
            &[
                "192.168.1.1",
                "-bad",
                "bad-",
                "has space",
                "a..",
                "",
                ".",
                "a..b",
                ".lan",
                "foo-.bar",
                "foo.-bar",
                "foo.bar-",
            ],
        );
    }

    #[test]
    fn length_limit() {
        let label = "a".repeat(63);
        let long = [label.as_str(); 4].join(".");
        assert!(long.len() > 253);
        assert_rejects("hostname", &[long.as_str()]);

        let ok = [label.as_str(); 3].join(".");
        assert_accepts("hostname", &[ok.as_str()]);
    }

    #[test]
    fn strict_forbids_leading_underscore() {
        assert_rejects("hostname(1)", &["_srv"]);
        assert_accepts("hostname(1)", &["srv"]);
        assert_eq!(
            failure("hostname(1)", "_srv").as_deref(),
            Some("Expecting: valid hostname")
        );
    }
}

mod composites {
    use super::*;

    #[test]
    fn host_is_hostname_or_bare_address() {
        assert_accepts("host", &["router.lan", "10.0.0.1", "2001:db8::1"]);
        assert_rejects("host", &["10.0.0.1/24", "2001:db8::/32", "bad host"]);
    }

    #[test]
    fn host_ipv4only_rejects_ipv6() {
        assert_rejects("host(1)", &["2001:db8::1"]);
        assert_accepts("host(1)", &["10.0.0.1", "router"]);
    }

    #[test]
    fn network() {
        assert_accepts("network", &["lan", "10.0.0.0/8", "2001:db8::/32", "router.lan"]);
        assert_rejects("network", &["bad name", "lan!"]);
    }

    #[test]
    fn hostport() {
        assert_accepts("hostport", &["router.lan:80", "10.0.0.1:8080"]);
        assert_rejects(
            "hostport",
            &["router.lan", "router.lan:99999", "2001:db8::1:80", ":80"],
        );
        assert_eq!(
            failure("hostport", "router.lan").as_deref(),
            Some("Expecting: valid host:port")
        );
    }

    #[test]
    fn ip4addrport() {
        assert_accepts("ip4addrport", &["10.0.0.1:80"]);
        assert_rejects("ip4addrport", &["router:80", "10.0.0.1", "10.0.0.1:65536"]);
    }

    #[test]
    fn ipaddrport_unbracketed() {
        assert_accepts("ipaddrport", &["10.0.0.1:80", "2001:db8::1:80"]);
        assert_rejects("ipaddrport", &["[2001:db8::1]:80", "router:80"]);
    }

    #[test]
    fn ipaddrport_bracketed() {
        assert_accepts("ipaddrport(1)", &["10.0.0.1:80", "[2001:db8::1]:80"]);
        assert_rejects("ipaddrport(1)", &["2001:db8::1:80", "[10.0.0.1]:80"]);
    }
}
