//! Element-type signatures and serializable snapshots

mod common;

use bible_text::bible::BookId;
use bible_text::formatted::{
    ExtraAttributePriority, FormattingInstructionKind, RawHtmlMode, TextSnapshot, Visitor,
};
use common::sealed_tree;
use insta::assert_snapshot;

#[test]
fn test_footnote_and_cross_reference_signatures_differ() {
    let footnote = sealed_tree(|b| {
        if let Some(mut note) = b.visit_footnote()? {
            note.visit_text("note")?;
        }
        Ok(())
    });
    let reference = sealed_tree(|b| {
        if let Some(mut xref) = b.visit_cross_reference("Mt", BookId::Matthew, 5, "3", 5, "12")? {
            xref.visit_text("Mt 5:3-12")?;
        }
        Ok(())
    });

    assert_snapshot!(footnote.element_types(2).unwrap(), @"f<t>");
    assert_snapshot!(reference.element_types(2).unwrap(), @"x<t>");
}

#[test]
fn test_every_element_kind_has_a_code() {
    let text = sealed_tree(|b| {
        if let Some(mut h) = b.visit_headline(1)? {
            h.visit_text("Psalm 23")?;
        }
        b.visit_text("The")?;
        b.visit_formatting_instruction(FormattingInstructionKind::DivineName)?;
        b.visit_css_formatting("color: green")?;
        b.visit_verse_separator()?;
        b.visit_line_break(bible_text::formatted::LineBreakKind::Paragraph)?;
        b.visit_grammar_information(&[3588], Some(&["T-NSM".to_string()]), None)?;
        b.visit_dictionary_entry("names", "David")?;
        b.visit_raw_html(RawHtmlMode::Offline, "<hr>")?;
        b.visit_variation_text(&["v1".to_string()])?;
        b.visit_extra_attribute(ExtraAttributePriority::Skip, "osis", "type", "x")?;
        b.visit_footnote()?;
        Ok(())
    });
    assert_snapshot!(text.element_types(1).unwrap(), @"htFc/bgdHoXf");
}

#[test]
fn test_snapshot_serializes_fields() {
    let text = sealed_tree(|b| {
        b.visit_text("Blessed are the poor")?;
        if let Some(mut note) = b.visit_footnote()? {
            if let Some(mut xref) =
                note.visit_cross_reference("Lk", BookId::Luke, 6, "20", 6, "23")?
            {
                xref.visit_text("Lk 6:20")?;
            }
        }
        if let Some(mut grammar) =
            b.visit_grammar_information(&[3107], Some(&["A-NPM".to_string()]), Some(&[1]))?
        {
            grammar.visit_text("blessed")?;
        }
        Ok(())
    });

    let snapshot = TextSnapshot::from_text(&text);
    assert_eq!(snapshot.children.len(), 3);
    let xref = &snapshot.children[1].children[0];
    assert_eq!(xref.node_type, "CrossReference");
    assert_eq!(xref.label, "Lk 6:20-6:23");
    assert_eq!(xref.attributes["book"], "Luke");
    let grammar = &snapshot.children[2];
    assert_eq!(grammar.attributes["strongs"], "3107");
    assert_eq!(grammar.attributes["rmac"], "A-NPM");
    assert_eq!(grammar.attributes["sourceIndices"], "1");

    let json = snapshot.to_json().unwrap();
    let parsed: TextSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}
