//! Tests for the evaluation context and sibling lookups.

use super::{Context, SiblingLookup, SiblingTable, SiblingValue};

mod sibling_value {
    use super::*;

    #[test]
    fn single_matches_whole_value_only() {
        let sibling = SiblingValue::single("a b");

        assert!(sibling.holds("a b"));
        assert!(!sibling.holds("a"));
        assert!(!sibling.is_list());
    }

    #[test]
    fn list_matches_any_token() {
        let sibling = SiblingValue::list(" a\tb  c ");

        assert!(sibling.holds("a"));
        assert!(sibling.holds("c"));
        assert!(!sibling.holds("a b"));
        assert!(!sibling.holds(""));
        assert_eq!(sibling.value(), " a\tb  c ");
    }

    #[test]
    fn list_splits_on_any_whitespace() {
        let sibling = SiblingValue::list("x\na\r\nb\u{0B}c");

        assert!(sibling.holds("a"));
        assert!(sibling.holds("b"));
        assert!(sibling.holds("c"));
        assert!(!sibling.holds("x\na"));
    }
}

mod table {
    use super::*;

    #[test]
    fn groups_values_by_field() {
        let mut table = SiblingTable::new();
        table.insert("name", SiblingValue::single("a"));
        table.insert("name", SiblingValue::single("b"));
        table.insert("port", SiblingValue::single("80"));

        assert_eq!(
            table.sibling_values("name"),
            vec![SiblingValue::single("a"), SiblingValue::single("b")]
        );
        assert_eq!(table.sibling_values("port").len(), 1);
        assert!(table.sibling_values("missing").is_empty());
    }

    #[test]
    fn empty_table() {
        assert!(SiblingTable::new().is_empty());
        assert!(!SiblingTable::new().with("x", SiblingValue::single("1")).is_empty());
    }
}

mod context {
    use super::*;

    /// Returns the same values for every field.
    struct Fixed(Vec<SiblingValue>);

    impl SiblingLookup for Fixed {
        fn sibling_values(&self, _field: &str) -> Vec<SiblingValue> {
            self.0.clone()
        }
    }

    #[test]
    fn defaults_to_required_without_siblings() {
        let context = Context::new();

        assert!(!context.is_optional());
        assert_eq!(context.field_name(), None);
        assert!(context.sibling_values().is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let lookup = Fixed(vec![SiblingValue::single("x")]);
        let context = Context::new().optional(true).field("name").siblings(&lookup);

        assert!(context.is_optional());
        assert_eq!(context.field_name(), Some("name"));
        assert_eq!(context.sibling_values(), vec![SiblingValue::single("x")]);
    }

    #[test]
    fn debug_hides_lookup() {
        let lookup = Fixed(Vec::new());
        let context = Context::new().siblings(&lookup);

        assert_eq!(
            format!("{context:?}"),
            "Context { optional: false, field: None, siblings: true }"
        );
    }
}
