//! Localizable failure messages.
//!
//! This module provides:
//! - Message identifiers and their English defaults ([`MessageKey`])
//! - Structured, value-independent failure descriptions ([`Expectation`])
//! - Override tables for localization ([`Catalog`])

mod catalog;
mod expectation;
mod key;


pub use catalog::{Catalog, CatalogError};
pub use expectation::Expectation;
pub use key::{MessageKey, UnknownMessageKey};
