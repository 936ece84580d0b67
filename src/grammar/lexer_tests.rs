//! Tests for the descriptor lexer.

use super::CompileError;
use super::lexer::{Cursor, Delimiter, trim_blanks, unescape};

fn tokens(src: &str) -> Vec<(String, Delimiter)> {
    let mut cursor = Cursor::new(src, 0);
    let mut out = Vec::new();
    while !cursor.is_done() {
        let token = cursor.next_token();
        out.push((token.text.to_string(), token.delimiter));
        if token.delimiter == Delimiter::Open {
            cursor.read_group().unwrap();
        }
    }
    out
}

mod next_token {
    use super::*;

    #[test]
    fn splits_on_commas_and_flushes_last_token() {
        assert_eq!(
            tokens("a,b,c"),
            vec![
                ("a".to_string(), Delimiter::Comma),
                ("b".to_string(), Delimiter::Comma),
                ("c".to_string(), Delimiter::End),
            ]
        );
    }

    #[test]
    fn escaped_comma_stays_in_token() {
        assert_eq!(tokens(r"a\,b"), vec![(r"a\,b".to_string(), Delimiter::End)]);
    }

    #[test]
    fn quoted_comma_stays_in_token() {
        assert_eq!(tokens("'a,b',c")[0], ("'a,b'".to_string(), Delimiter::Comma));
    }

    #[test]
    fn unterminated_quote_is_ordinary_character() {
        assert_eq!(
            tokens("'a,b"),
            vec![
                ("'a".to_string(), Delimiter::Comma),
                ("b".to_string(), Delimiter::End),
            ]
        );
    }

    #[test]
    fn open_paren_leaves_group_for_read_group() {
        let mut cursor = Cursor::new("range(1,2),x", 0);
        let token = cursor.next_token();
        assert_eq!(token.text, "range");
        assert_eq!(token.delimiter, Delimiter::Open);
        assert_eq!(cursor.read_group().unwrap(), ("1,2", 6));
        let next = cursor.next_token();
        assert_eq!(next.text, "");
        assert_eq!(next.delimiter, Delimiter::Comma);
    }

    #[test]
    fn stray_close_is_reported_as_delimiter() {
        let mut cursor = Cursor::new("a)", 0);
        let token = cursor.next_token();
        assert_eq!(token.delimiter, Delimiter::Close);
        assert_eq!(token.delimiter_position, 1);
    }

    #[test]
    fn positions_are_offset_by_base() {
        let mut cursor = Cursor::new("x,y", 10);
        cursor.next_token();
        assert_eq!(cursor.next_token().position, 12);
    }
}

mod read_group {
    use super::*;

    #[test]
    fn tracks_nesting_depth() {
        let mut cursor = Cursor::new("(a(b),c)d", 0);
        assert_eq!(cursor.read_group().unwrap(), ("a(b),c", 1));
    }

    #[test]
    fn escaped_paren_does_not_close() {
        let mut cursor = Cursor::new(r"(a\)b)", 0);
        assert_eq!(cursor.read_group().unwrap(), (r"a\)b", 1));
    }

    #[test]
    fn quoted_paren_does_not_close() {
        let mut cursor = Cursor::new("(')')", 0);
        assert_eq!(cursor.read_group().unwrap(), ("')'", 1));
    }

    #[test]
    fn unclosed_group_is_an_error() {
        let mut cursor = Cursor::new("(a(b)", 4);
        assert_eq!(
            cursor.read_group().unwrap_err(),
            CompileError::Unclosed { position: 4 }
        );
    }
}

mod helpers {
    use super::*;

    #[test]
    fn unescape_removes_one_backslash_per_character() {
        assert_eq!(unescape(r"a\,b"), "a,b");
        assert_eq!(unescape(r"\\\,"), r"\,");
        assert_eq!(unescape(r"x\"), r"x\");
    }

    #[test]
    fn trim_blanks_only_strips_spaces_and_tabs() {
        assert_eq!(trim_blanks(" \tabc\t "), "abc");
        assert_eq!(trim_blanks("\nabc"), "\nabc");
    }
}
