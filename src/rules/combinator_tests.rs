//! Tests for the combinator rules.

use super::test_support::{assert_accepts, assert_rejects, evaluate, evaluate_in, failure};
use crate::eval::{Context, SiblingTable, SiblingValue};

mod or {
    use super::*;

    #[test]
    fn accepts_either_alternative() {
        assert_accepts("or(ip4addr,ip6addr)", &["192.168.1.1", "2001:db8::1"]);
        assert_rejects("or(ip4addr,ip6addr)", &["router.lan"]);
    }

    #[test]
    fn failure_enumerates_every_alternative() {
        assert_eq!(
            failure("or(ip4addr,ip6addr)", "router.lan").as_deref(),
            Some(
                "Expecting: One of the following: \n - valid IPv4 address or network\n - valid IPv6 address or prefix"
            )
        );
    }

    #[test]
    fn literals_must_match_exactly() {
        assert_accepts("or(ip4addr,'auto')", &["auto", "10.0.0.1"]);
        assert_rejects("or(ip4addr,'auto')", &["Auto", "auto "]);
        assert_eq!(
            failure("or(ip4addr,'auto')", "x").as_deref(),
            Some("Expecting: One of the following: \n - valid IPv4 address or network\n - \"auto\"")
        );
    }

    #[test]
    fn numeric_literals_compare_numerically() {
        assert_accepts("or(80,443)", &["443", "443.0"]);
        assert_eq!(
            failure("or(80,443)", "22").as_deref(),
            Some("Expecting: One of the following: \n - \"80\"\n - \"443\"")
        );
    }
}

mod and {
    use super::*;

    #[test]
    fn all_must_pass() {
        assert_accepts("and(uinteger,max(10))", &["0", "10"]);
        assert_rejects("and(uinteger,max(10))", &["11", "-1"]);
    }

    #[test]
    fn reports_first_failure() {
        assert_eq!(
            failure("and(uinteger,max(10))", "x").as_deref(),
            Some("Expecting: positive integer value")
        );
        assert_eq!(
            failure("and(uinteger,max(10))", "11").as_deref(),
            Some("Expecting: value smaller or equal to 10")
        );
    }
}

mod neg {
    use super::*;

    #[test]
    fn strips_one_optional_marker() {
        assert_accepts("neg(ip4addr)", &["!10.0.0.1", "10.0.0.1", " ! 10.0.0.1", "!\t10.0.0.1"]);
        assert_rejects("neg(ip4addr)", &["!!10.0.0.1", "10.0.0.1!"]);
    }

    #[test]
    fn failure_reframes_inner_description() {
        assert_eq!(
            failure("neg(ip4addr)", "!x").as_deref(),
            Some("Expecting: Potential negation of: valid IPv4 address or network")
        );
    }

    #[test]
    fn composes_with_list() {
        assert_accepts("list(neg(port))", &["80 !443 !8080"]);
    }
}

mod list {
    use super::*;

    #[test]
    fn applies_sub_rule_to_every_token() {
        assert_accepts(
            "list(macaddr)",
            &["AA:BB:CC:DD:EE:FF 11:22:33:44:55:66", "AA:BB:CC:DD:EE:FF"],
        );
        assert_rejects("list(macaddr)", &["AA:BB:CC:DD:EE:FF not-a-mac"]);
        assert_eq!(
            failure("list(macaddr)", "AA:BB:CC:DD:EE:FF not-a-mac").as_deref(),
            Some("Expecting: valid MAC address")
        );
    }

    #[test]
    fn splits_on_blank_runs() {
        assert_accepts("list(port)", &["80  443\t8080", " 80 "]);
    }

    #[test]
    fn splits_on_line_breaks() {
        assert_accepts(
            "list(macaddr)",
            &["AA:BB:CC:DD:EE:FF\n11:22:33:44:55:66", "80:00:00:00:00:01\r\nAA:BB:CC:DD:EE:FF"],
        );
        assert_rejects("list(port)", &["80\nhttp", "\r\n\n"]);
    }

    #[test]
    fn blank_value_is_empty_list() {
        assert_eq!(
            failure("list(port)", "  \t ").as_deref(),
            Some("Expecting: non-empty value")
        );
    }

    #[test]
    fn marks_field_as_list() {
        assert!(evaluate("list(port)", "80 443").is_list());
        assert!(evaluate("list(port)", "80 http").is_list());
        assert!(evaluate("or(port,list(port))", "80 443").is_list());
        assert!(!evaluate("port", "80").is_list());
    }

    #[test]
    fn without_sub_rule_accepts_any_tokens() {
        assert_accepts("list", &["anything goes"]);
    }
}

mod unique {
    use super::*;

    fn siblings() -> SiblingTable {
        SiblingTable::new()
            .with("name", SiblingValue::single("a"))
            .with("name", SiblingValue::single("b"))
            .with("aliases", SiblingValue::list("x  y"))
    }

    #[test]
    fn rejects_value_held_by_a_sibling() {
        let table = siblings();
        let context = Context::new().field("name").siblings(&table);

        let taken = evaluate_in("unique", "a", &context);
        assert!(!taken.is_valid());
        assert!(evaluate_in("unique", "c", &context).is_valid());
    }

    #[test]
    fn list_siblings_are_split() {
        let table = siblings();
        let context = Context::new().field("aliases").siblings(&table);

        assert!(!evaluate_in("unique", "y", &context).is_valid());
        assert!(evaluate_in("unique", "x y", &context).is_valid());
    }

    #[test]
    fn list_siblings_split_on_line_breaks() {
        let table = SiblingTable::new().with("aliases", SiblingValue::list("x\na\r\nb"));
        let context = Context::new().field("aliases").siblings(&table);

        assert!(!evaluate_in("unique", "a", &context).is_valid());
        assert!(!evaluate_in("unique", "b", &context).is_valid());
        assert!(evaluate_in("unique", "c", &context).is_valid());
    }

    #[test]
    fn siblings_are_scoped_by_field_identity() {
        let table = siblings();
        let context = Context::new().field("other").siblings(&table);

        assert!(evaluate_in("unique", "a", &context).is_valid());
    }

    #[test]
    fn sub_rule_runs_after_uniqueness() {
        let table = siblings();
        let context = Context::new().field("name").siblings(&table);

        assert!(!evaluate_in("unique(uciname)", "bad-name", &context).is_valid());
        assert!(evaluate_in("unique(uciname)", "good_name", &context).is_valid());
    }

    #[test]
    fn without_lookup_every_value_is_unique() {
        assert_accepts("unique", &["a"]);
    }

    #[test]
    fn failure_message() {
        let table = siblings();
        let context = Context::new().field("name").siblings(&table);
        let evaluation = evaluate_in("unique", "b", &context);

        assert_eq!(
            evaluation
                .expectation()
                .map(|e| e.sentence(&crate::message::Catalog::new()))
                .as_deref(),
            Some("Expecting: unique value")
        );
    }
}

mod tuple {
    use super::*;

    #[test]
    fn whitespace_separated_elements() {
        assert_accepts("tuple(uinteger,hostname)", &["5 router", " 5\trouter "]);
        assert_rejects("tuple(uinteger,hostname)", &["x router", "5 -bad"]);
    }

    #[test]
    fn token_count_mismatch() {
        assert_eq!(
            failure("tuple(uinteger,hostname)", "5").as_deref(),
            Some("Expecting: uinteger hostname; 2 tokens separated by whitespace")
        );
    }

    #[test]
    fn custom_separator() {
        assert_accepts("tuple(uinteger,hostname,sep(':'))", &["5:router", "5 : router"]);
        assert_eq!(
            failure("tuple(uinteger,hostname,sep(':'))", "5 router").as_deref(),
            Some("Expecting: uinteger:hostname; 2 tokens separated by \":\"")
        );
    }

    #[test]
    fn single_element_names_the_rule() {
        assert_eq!(
            failure("tuple(port)", "80 81").as_deref(),
            Some("Expecting: port")
        );
    }

    #[test]
    fn element_failure_is_reported() {
        assert_eq!(
            failure("tuple(uinteger,hostname)", "x router").as_deref(),
            Some("Expecting: positive integer value")
        );
    }
}
