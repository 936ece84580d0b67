//! Shared fixtures for rule tests.

use crate::eval::{Context, Evaluation};
use crate::grammar::compile;
use crate::message::Catalog;

/// Evaluates `value` as a required field without sibling access.
pub fn evaluate(descriptor: &str, value: &str) -> Evaluation {
    evaluate_in(descriptor, value, &Context::new())
}

pub fn evaluate_in(descriptor: &str, value: &str, context: &Context<'_>) -> Evaluation {
    compile(descriptor)
        .unwrap_or_else(|e| panic!("{descriptor} should compile: {e}"))
        .evaluate(value, context)
}

/// The rendered failure sentence, `None` if the value passed.
pub fn failure(descriptor: &str, value: &str) -> Option<String> {
    evaluate(descriptor, value)
        .expectation()
        .map(|expectation| expectation.sentence(&Catalog::new()))
}

#[track_caller]
pub fn assert_accepts(descriptor: &str, values: &[&str]) {
    for value in values {
        let evaluation = evaluate(descriptor, value);
        assert!(
            evaluation.is_valid(),
            "{descriptor} should accept {value:?}, got {:?}",
            evaluation.expectation()
        );
    }
}

#[track_caller]
pub fn assert_rejects(descriptor: &str, values: &[&str]) {
    for value in values {
        assert!(
            !evaluate(descriptor, value).is_valid(),
            "{descriptor} should reject {value:?}"
        );
    }
}
