//! Property-based tests for expression parsing and resolution.

use super::normalize::ascend;
use super::{classify, PathExpression, Resolver, Segment};
use proptest::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn pattern_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}".prop_filter("not a literal", |s| s != "." && s != "..")
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        pattern_strategy(),
    ]
}

fn navigation_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop_oneof![Just("."), Just("..")], 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Any non-empty token classifies, and only "." and ".." are literals
    #[test]
    fn classify_is_total(token in "[^/]{1,16}") {
        let segment = classify(&token).unwrap();
        let literal = token == "." || token == "..";
        prop_assert_eq!(segment.is_literal(), literal);
    }

    // Display gives back the text the expression was parsed from
    #[test]
    fn parse_display_roundtrip(
        parts in prop::collection::vec(segment_strategy(), 1..8),
        anchored in any::<bool>(),
    ) {
        let raw = format!("{}{}", if anchored { "/" } else { "" }, parts.join("/"));
        let expr = PathExpression::parse(&raw).unwrap();
        prop_assert_eq!(expr.len(), parts.len());
        prop_assert_eq!(expr.is_anchored(), anchored);
        prop_assert_eq!(expr.to_string(), raw);
    }

    // A doubled separator anywhere is rejected
    #[test]
    fn empty_segment_is_malformed(
        left in prop::collection::vec(segment_strategy(), 1..4),
        right in prop::collection::vec(segment_strategy(), 1..4),
    ) {
        let raw = format!("{}//{}", left.join("/"), right.join("/"));
        prop_assert!(PathExpression::parse(&raw).unwrap_err().is_malformed());
    }

    // Pure navigation lands where lexical ascension does, clamped at the root
    #[test]
    fn navigation_matches_lexical_ascension(
        depth in 0usize..5,
        steps in navigation_strategy(),
    ) {
        let root = TempDir::new().unwrap();
        let mut start = root.path().to_path_buf();
        for i in 0..depth {
            start.push(format!("d{i}"));
        }
        std::fs::create_dir_all(&start).unwrap();

        let raw = steps.join("/");
        let expr = PathExpression::parse(&raw).unwrap();
        prop_assert!(expr.is_navigation_only());

        let mut expected: PathBuf = start.clone();
        for step in &steps {
            if *step == ".." {
                expected = ascend(&expected);
            }
        }

        let resolved = Resolver::new().resolve(&expr, &start, 0).unwrap();
        prop_assert_eq!(resolved, expected);
    }

    // The final segment of a parsed expression is the last token
    #[test]
    fn final_segment_is_last_token(parts in prop::collection::vec(segment_strategy(), 1..8)) {
        let expr = PathExpression::parse(&parts.join("/")).unwrap();
        let last = classify(parts.last().unwrap()).unwrap();
        prop_assert_eq!(expr.final_segment(), Some(&last));
        if let Some(Segment::Pattern(text)) = expr.final_segment() {
            prop_assert!(!text.is_empty());
        }
    }
}
