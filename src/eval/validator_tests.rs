//! Tests for program evaluation and field validators.

use std::sync::Arc;

use super::{Context, SiblingTable, SiblingValue, Validator, Verdict};
use crate::grammar::{CompileError, Program, compile};
use crate::message::Catalog;

fn validator(descriptor: &str) -> Validator {
    Validator::compile(descriptor).unwrap()
}

mod empty_values {
    use super::*;

    #[test]
    fn required_field_rejects_empty() {
        let verdict = validator("integer").check("");

        assert!(!verdict.is_valid());
        assert_eq!(verdict.message(), Some("Expecting: non-empty value"));
    }

    #[test]
    fn optional_field_accepts_empty_without_running_rules() {
        let context = Context::new().optional(true);

        assert!(validator("integer").validate("", &context).is_valid());
        assert!(validator("length(5)").validate("", &context).is_valid());
    }

    #[test]
    fn optional_does_not_relax_non_empty_values() {
        let context = Context::new().optional(true);
        assert!(!validator("integer").validate("abc", &context).is_valid());
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert_eq!(
            validator("integer").check(" ").message(),
            Some("Expecting: valid integer value")
        );
    }
}

mod determinism {
    use super::*;

    const DESCRIPTORS: &[&str] = &[
        "or(ip4addr,ip6addr)",
        "list(macaddr)",
        "range(1,65535)",
        "and(uinteger,max(10))",
        "neg(or(port,'any'))",
    ];

    const VALUES: &[&str] = &["", "0", "80", "10.0.0.1", "!any", "AA:BB:CC:DD:EE:FF 1", "x y"];

    #[test]
    fn compiling_twice_gives_identical_verdicts() {
        for descriptor in DESCRIPTORS {
            let first = validator(descriptor);
            let second = validator(descriptor);
            assert_eq!(first.program(), second.program());

            for value in VALUES {
                assert_eq!(first.check(value), second.check(value), "{descriptor} / {value:?}");
            }
        }
    }

    #[test]
    fn list_flag_does_not_leak_between_evaluations() {
        let program = compile("or(port,list(port))").unwrap();
        let context = Context::new();

        assert!(!program.evaluate("80", &context).is_list());
        assert!(program.evaluate("80 443", &context).is_list());
        assert!(!program.evaluate("80", &context).is_list());
    }
}

mod custom_checks {
    use super::*;

    fn even(value: &str) -> Result<(), String> {
        match value.parse::<u32>() {
            Ok(n) if n % 2 == 0 => Ok(()),
            _ => Err("Must be an even number".to_string()),
        }
    }

    #[test]
    fn runs_after_program_passes() {
        let validator = validator("port").with_check(even);

        assert!(validator.check("80").is_valid());
        assert_eq!(validator.check("81").message(), Some("Must be an even number"));
    }

    #[test]
    fn skipped_when_program_fails() {
        let validator = validator("port").with_check(even);
        assert_eq!(validator.check("x").message(), Some("Expecting: valid port value"));
    }

    #[test]
    fn first_failing_check_wins() {
        let validator = validator("port")
            .with_check(|_| Err("first".to_string()))
            .with_check(|_| Err("second".to_string()));

        assert_eq!(validator.check("80").message(), Some("first"));
    }

    #[test]
    fn runs_for_empty_optional_value() {
        let validator = validator("port").with_check(|v| {
            if v.is_empty() {
                Err("Required when the interface is enabled".to_string())
            } else {
                Ok(())
            }
        });
        let verdict = validator.validate("", &Context::new().optional(true));

        assert_eq!(verdict.message(), Some("Required when the interface is enabled"));
    }

    #[test]
    fn keeps_list_flag() {
        let validator = validator("list(port)").with_check(|_| Err("no".to_string()));
        let verdict = validator.check("80 443");

        assert!(!verdict.is_valid());
        assert!(verdict.is_list());
    }
}

mod messages {
    use super::*;

    #[test]
    fn catalog_overrides_are_used() {
        let catalog = Catalog::with_overrides([
            ("expecting", "Erwartet: {}"),
            ("port", "gültiger Port"),
        ])
        .unwrap();
        let validator = validator("port").with_catalog(Arc::new(catalog));

        assert_eq!(validator.check("x").message(), Some("Erwartet: gültiger Port"));
    }

    #[test]
    fn message_never_contains_the_value() {
        let verdict = validator("ip4addr").check("secret-value");
        assert!(!verdict.message().unwrap().contains("secret-value"));
    }

    #[test]
    fn unique_failure_through_validator() {
        let siblings = SiblingTable::new()
            .with("name", SiblingValue::single("a"))
            .with("name", SiblingValue::single("b"));
        let context = Context::new().field("name").siblings(&siblings);
        let unique = validator("unique");

        assert_eq!(
            unique.validate("a", &context).message(),
            Some("Expecting: unique value")
        );
        assert!(unique.validate("c", &context).is_valid());
    }
}

mod verdicts {
    use super::*;

    #[test]
    fn serializes_failure() {
        let verdict = validator("port").check("x");
        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"valid":false,"message":"Expecting: valid port value","list":false}"#
        );
    }

    #[test]
    fn serializes_success_without_message() {
        let verdict = validator("list(port)").check("80 443");
        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"valid":true,"list":true}"#
        );
    }

    #[test]
    fn evaluation_renders_through_catalog() {
        let evaluation = compile("range(1,10)").unwrap().evaluate("0", &Context::new());
        assert!(evaluation.expectation().is_some());

        let verdict = evaluation.into_verdict(&Catalog::new());
        assert_eq!(verdict.message(), Some("Expecting: value between 1 and 10"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn malformed_descriptor_is_a_compile_error() {
        let result = Validator::compile("or(ip4addr");
        assert!(matches!(result, Err(CompileError::Unclosed { position: 2 })));
    }

    #[test]
    fn debug_summarizes_validator() {
        let validator = validator("port").with_check(|_| Ok(()));
        assert_eq!(
            format!("{validator:?}"),
            r#"Validator { program: "port", catalog_overrides: 0, checks: 1 }"#
        );
    }
}

mod concurrency {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shared_types_are_thread_safe() {
        assert_send_sync::<Program>();
        assert_send_sync::<Validator>();
        assert_send_sync::<Verdict>();
        assert_send_sync::<SiblingTable>();
    }

    #[test]
    fn one_validator_many_threads() {
        let validator = validator("or(ip4addr,ip6addr)");
        let siblings = SiblingTable::new();

        std::thread::scope(|s| {
            for i in 0..8u8 {
                let validator = &validator;
                let siblings = &siblings;
                s.spawn(move || {
                    let context = Context::new().siblings(siblings);
                    let value = format!("10.0.0.{i}");
                    assert!(validator.validate(&value, &context).is_valid());
                    assert!(!validator.validate("nope", &context).is_valid());
                });
            }
        });
    }
}
