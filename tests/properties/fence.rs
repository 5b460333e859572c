//! Property tests for code-fence stripping.

use proptest::prelude::*;

use cardsmith::domain::services::FENCE_LANGUAGES;
use cardsmith::strip_code_fence;

fn body_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _{}();:=<>/@.'\\-]{0,40}")
        .unwrap()
        .prop_filter("not a closing fence", |s| s.trim() != "```")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A fenced block with a known tag yields exactly its interior.
    #[test]
    fn property_known_fence_yields_interior(
        tag in proptest::sample::select(FENCE_LANGUAGES),
        lines in proptest::collection::vec(body_line(), 0..=10),
    ) {
        let body = lines.join("\n");
        let text = format!("```{tag}\n{body}\n```");
        prop_assert_eq!(strip_code_fence(&text), body.as_str());
    }

    /// PROPERTY: A closing fence glued to the last code line is dropped too.
    #[test]
    fn property_inline_closing_fence_yields_interior(
        tag in proptest::sample::select(FENCE_LANGUAGES),
        lines in proptest::collection::vec(body_line(), 0..=8),
        last in "[A-Za-z0-9 ;{}()]{0,20}[A-Za-z0-9;{}()]",
    ) {
        let mut all = lines;
        all.push(last);
        let body = all.join("\n");
        let text = format!("```{tag}\n{body}```");
        prop_assert_eq!(strip_code_fence(&text), body.as_str());
    }

    /// PROPERTY: Text that does not open with a fence is returned unchanged.
    #[test]
    fn property_unfenced_text_unchanged(text in "[^`]{0,200}") {
        prop_assert_eq!(strip_code_fence(&text), text.as_str());
    }

    /// PROPERTY: Stripping never panics and only ever narrows the input.
    #[test]
    fn property_strip_is_a_substring(text in "(```)?[a-z]{0,6}\n?[\\s\\S]{0,200}") {
        let stripped = strip_code_fence(&text);
        prop_assert!(text.contains(stripped));
    }
}
