//! Evaluation of compiled programs against candidate values.
//!
//! This module provides:
//! - The per-evaluation inputs ([`Context`]) and the injected sibling
//!   capability used by `unique` ([`SiblingLookup`], [`SiblingTable`])
//! - Raw results ([`Evaluation`]) and rendered results ([`Verdict`])
//! - A reusable field validator ([`Validator`])
//!
//! # Thread Safety
//!
//! Programs and validators hold no mutable state. Evaluating the same
//! program concurrently is safe as long as the injected lookup is.

mod context;
mod validator;
mod verdict;

#[cfg(test)]
mod context_tests;
#[cfg(test)]
mod validator_tests;

pub use context::{Context, SiblingLookup, SiblingTable, SiblingValue};
pub use validator::{CustomCheck, Validator};
pub use verdict::{Evaluation, Verdict};
