//! Property-based tests for whitespace normalization
//!
//! Trees are generated from a small vocabulary of text fragments with every combination of
//! leading and trailing spaces, mixed with line breaks, verse separators, headlines and
//! footnotes. Normalization must reach a fixed point and leave nothing the validator's
//! whitespace rules would reject.

mod common;

use bible_text::formatted::{FormattedText, NormalizeOptions, Violation};
use common::{apply, bible, open_tree, Op};
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "a", "a ", " a", " a ", "b c", "In the beginning"])
}

fn footnote_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => fragment().prop_map(Op::Text),
        1 => Just(Op::LineBreak),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => fragment().prop_map(Op::Text),
        1 => Just(Op::LineBreak),
        1 => Just(Op::VerseSeparator),
        1 => (1u8..=9, prop::collection::vec(fragment(), 1..4))
            .prop_map(|(depth, texts)| Op::Headline(depth, texts)),
        1 => prop::collection::vec(footnote_op(), 1..5).prop_map(Op::Footnote),
    ]
}

fn tree(ops: &[Op]) -> FormattedText {
    open_tree(|b| {
        for op in ops {
            apply(b, op)?;
        }
        Ok(())
    })
}

fn is_whitespace_violation(violation: Violation) -> bool {
    matches!(
        violation,
        Violation::WhitespaceAdjacentToWhitespace
            | Violation::LeadingWhitespace
            | Violation::WhitespaceBeforeLineBreak
            | Violation::WhitespaceBeforeHeadline
            | Violation::TrailingWhitespace
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_normalization_reaches_a_fixed_point(ops in prop::collection::vec(op(), 0..16)) {
        let mut once = tree(&ops);
        once.trim_whitespace(NormalizeOptions::default()).unwrap();
        let mut twice = once.clone();
        twice.trim_whitespace(NormalizeOptions::default()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_normalized_trees_pass_whitespace_rules(ops in prop::collection::vec(op(), 0..16)) {
        let mut text = tree(&ops);
        text.trim_whitespace(NormalizeOptions::default()).unwrap();
        text.finish().unwrap();
        let mut dangling = Vec::new();
        if let Err(err) = text.validate_verse(&bible(), &mut dangling) {
            let violation = err.violation();
            prop_assert!(
                !violation.map(is_whitespace_violation).unwrap_or(false),
                "normalized tree broke a whitespace rule: {}",
                err
            );
        }
    }

    #[test]
    fn prop_keep_whitespace_is_a_no_op(ops in prop::collection::vec(op(), 0..16)) {
        let original = tree(&ops);
        let mut kept = original.clone();
        kept.trim_whitespace(NormalizeOptions { keep_whitespace: true }).unwrap();
        prop_assert_eq!(kept, original);
    }
}
