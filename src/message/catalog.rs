//! Message catalog with per-key template overrides.

use std::collections::HashMap;

use thiserror::Error;

use super::key::{MessageKey, UnknownMessageKey, placeholder_count};

/// Error type for building a message catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The override table names a key that does not exist.
    #[error(transparent)]
    UnknownKey(#[from] UnknownMessageKey),

    /// The override template has a different number of `{}` placeholders.
    #[error("Template for '{key}' must contain {expected} placeholder(s), found {found}")]
    PlaceholderMismatch {
        /// The overridden key
        key: MessageKey,
        /// Placeholder count of the built-in template
        expected: usize,
        /// Placeholder count of the override
        found: usize,
    },
}

/// Lookup table from [`MessageKey`] to template text.
///
/// Keys without an override fall back to the built-in English template,
/// so an empty catalog is always complete.
///
/// # Examples
///
/// ```
/// use datatype_check::message::{Catalog, MessageKey};
///
/// let catalog = Catalog::with_overrides([("port", "gültiger Port")]).unwrap();
/// assert_eq!(catalog.template(MessageKey::Port), "gültiger Port");
/// assert_eq!(catalog.template(MessageKey::Integer), "valid integer value");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    overrides: HashMap<MessageKey, String>,
}

impl Catalog {
    /// Creates a catalog using only the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from `(key name, template)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a key name is unknown or a template's
    /// placeholder count differs from the built-in one.
    pub fn with_overrides<I, K, V>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, template) in entries {
            let key = name.as_ref().parse::<MessageKey>()?;
            catalog.set(key, template)?;
        }
        Ok(catalog)
    }

    /// Overrides the template for one key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PlaceholderMismatch`] if the template does not
    /// carry the same number of placeholders as the built-in one.
    pub fn set(&mut self, key: MessageKey, template: impl Into<String>) -> Result<(), CatalogError> {
        let template = template.into();
        let expected = key.arity();
        let found = placeholder_count(&template);
        if expected != found {
            return Err(CatalogError::PlaceholderMismatch {
                key,
                expected,
                found,
            });
        }
        self.overrides.insert(key, template);
        Ok(())
    }

    /// Returns the effective template for `key`.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map_or_else(|| key.default_template(), String::as_str)
    }

    /// Returns the number of overridden keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns true if no key is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Formats `key`'s template, filling placeholders with `args` in order.
    ///
    /// Missing arguments leave their placeholder empty; extra arguments are ignored.
    #[must_use]
    pub fn format<S: AsRef<str>>(&self, key: MessageKey, args: &[S]) -> String {
        fill(self.template(key), args)
    }
}

fn fill<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        if let Some(arg) = args.next() {
            out.push_str(arg.as_ref());
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
