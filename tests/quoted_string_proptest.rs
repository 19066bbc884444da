use proptest::prelude::*;
use rust_http_cache_core::internet::syntax::{collect_http_quoted_string, unescape_http_quoted_string};

// quoted-string body: plain characters or escape pairs, never a bare quote or backslash
fn body_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::string::string_regex("[a-zA-Z0-9 ,;=/-]").expect("plain regex"),
            proptest::string::string_regex("\\\\[\"\\\\a-z]").expect("escape regex"),
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn well_formed_token_is_returned_unchanged(body in body_strategy(), tail in "[a-z ,]{0,8}") {
        let token = format!("\"{}\"", body);
        let input = format!("{}{}", token, tail);
        let mut position = 0;

        let collected = collect_http_quoted_string(input.as_bytes(), &mut position);

        prop_assert_eq!(collected, Some(token.as_bytes()));
        prop_assert_eq!(position, token.len());
    }

    #[test]
    fn leading_text_is_skipped(prefix in "[a-z =]{0,8}", body in body_strategy()) {
        let token = format!("\"{}\"", body);
        let input = format!("{}{}", prefix, token);
        let mut position = 0;

        let collected = collect_http_quoted_string(input.as_bytes(), &mut position);

        prop_assert_eq!(collected, Some(token.as_bytes()));
        prop_assert_eq!(position, input.len());
    }

    #[test]
    fn unterminated_token_is_rejected(body in body_strategy()) {
        let input = format!("\"{}", body);
        let mut position = 0;

        prop_assert!(collect_http_quoted_string(input.as_bytes(), &mut position).is_none());
        prop_assert_eq!(position, 0);
    }

    #[test]
    fn unescaping_drops_quotes_and_backslashes(body in "[a-z0-9 ]{0,16}") {
        let token = format!("\"{}\"", body);
        let value = unescape_http_quoted_string(token.as_bytes()).expect("well-formed token");

        prop_assert_eq!(value.as_ref(), body.as_bytes());
    }
}
