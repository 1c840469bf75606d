//! Element-type signatures
//!
//! A signature lists the kinds of a node's children, one character each:
//!
//! | code | element               | code | element             |
//! |------|-----------------------|------|---------------------|
//! | `h`  | headline              | `/`  | verse separator     |
//! | `t`  | text                  | `b`  | line break          |
//! | `f`  | footnote              | `g`  | grammar information |
//! | `x`  | cross reference       | `d`  | dictionary entry    |
//! | `F`  | formatting instruction| `H`  | raw HTML            |
//! | `c`  | CSS formatting        | `o`  | variation text      |
//! | `X`  | extra attribute       |      |                     |
//!
//! At depth 1 only the node's own children appear. Each additional level of depth
//! expands container content inside angle brackets, so a footnote holding text reads
//! `f<t>` at depth 2.

use crate::bible::BookId;
use crate::formatted::ast::kinds::{
    ExtraAttributePriority, FormattingInstructionKind, LineBreakKind, RawHtmlMode,
};
use crate::formatted::ast::FormattedText;
use crate::formatted::error::{Error, Result};
use crate::formatted::visitor::{Nested, Visitor};
use std::convert::Infallible;

/// Appends a node's signature to a string.
#[derive(Debug)]
pub struct SignatureVisitor<'a> {
    out: &'a mut String,
    depth: usize,
    suffix: &'static str,
}

impl<'a> SignatureVisitor<'a> {
    /// A visitor writing the signature of the visited node, `depth` levels deep, to `out`.
    pub fn new(out: &'a mut String, depth: usize) -> Self {
        Self::with_suffix(out, depth, "")
    }

    fn with_suffix(out: &'a mut String, depth: usize, suffix: &'static str) -> Self {
        SignatureVisitor { out, depth, suffix }
    }

    fn leaf(&mut self, code: char) -> Result<(), Infallible> {
        self.out.push(code);
        Ok(())
    }

    fn container(&mut self, code: char) -> Result<Nested<'_, Infallible>, Infallible> {
        self.out.push(code);
        if self.depth > 1 {
            self.out.push('<');
            Ok(Some(Box::new(SignatureVisitor::with_suffix(
                &mut *self.out,
                self.depth - 1,
                ">",
            ))))
        } else {
            Ok(None)
        }
    }
}

impl Visitor for SignatureVisitor<'_> {
    type Error = Infallible;

    fn visit_headline(&mut self, _depth: u8) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('h')
    }

    fn visit_text(&mut self, _text: &str) -> Result<(), Infallible> {
        self.leaf('t')
    }

    fn visit_footnote(&mut self) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('f')
    }

    fn visit_cross_reference(
        &mut self,
        _book_abbr: &str,
        _book: BookId,
        _first_chapter: u32,
        _first_verse: &str,
        _last_chapter: u32,
        _last_verse: &str,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('x')
    }

    fn visit_formatting_instruction(
        &mut self,
        _kind: FormattingInstructionKind,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('F')
    }

    fn visit_css_formatting(&mut self, _css: &str) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('c')
    }

    fn visit_verse_separator(&mut self) -> Result<(), Infallible> {
        self.leaf('/')
    }

    fn visit_line_break(&mut self, _kind: LineBreakKind) -> Result<(), Infallible> {
        self.leaf('b')
    }

    fn visit_grammar_information(
        &mut self,
        _strongs: &[u32],
        _rmac: Option<&[String]>,
        _source_indices: Option<&[u32]>,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('g')
    }

    fn visit_dictionary_entry(
        &mut self,
        _dictionary: &str,
        _entry: &str,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('d')
    }

    fn visit_raw_html(&mut self, _mode: RawHtmlMode, _raw: &str) -> Result<(), Infallible> {
        self.leaf('H')
    }

    fn visit_variation_text(
        &mut self,
        _variations: &[String],
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('o')
    }

    fn visit_extra_attribute(
        &mut self,
        _priority: ExtraAttributePriority,
        _category: &str,
        _key: &str,
        _value: &str,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container('X')
    }

    fn visit_end(&mut self) -> Result<bool, Infallible> {
        self.out.push_str(self.suffix);
        Ok(false)
    }
}

impl FormattedText {
    /// Signature of this node's children, `depth` levels deep. Empty for depth 0.
    ///
    /// The tree must be finished.
    pub fn element_types(&self, depth: usize) -> Result<String> {
        if !self.is_finished() {
            return Err(Error::illegal_state(
                "formatted text must be finished before computing its signature",
            ));
        }
        Ok(self.signature_unchecked(depth))
    }

    /// Signature computation without the lifecycle check, used during visitor negotiation.
    pub(crate) fn signature_unchecked(&self, depth: usize) -> String {
        let mut out = String::new();
        if depth == 0 {
            return out;
        }
        match self.accept(&mut SignatureVisitor::new(&mut out, depth)) {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn footnote_with_text() -> FormattedText {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_text("a").unwrap();
            let mut note = builder.visit_footnote().unwrap().unwrap();
            note.visit_text("b").unwrap();
            note.visit_line_break(LineBreakKind::Newline).unwrap();
            note.visit_text("c").unwrap();
        }
        text.finish().unwrap();
        text
    }

    #[test]
    fn test_depth_one_lists_children_only() {
        assert_snapshot!(footnote_with_text().element_types(1).unwrap(), @"tf");
    }

    #[test]
    fn test_deeper_levels_expand_containers() {
        assert_snapshot!(footnote_with_text().element_types(2).unwrap(), @"tf<tbt>");
    }

    #[test]
    fn test_depth_zero_is_empty() {
        assert_eq!(footnote_with_text().element_types(0).unwrap(), "");
    }

    #[test]
    fn test_headline_run_comes_first() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_headline(1).unwrap().unwrap().visit_text("T").unwrap();
            builder.visit_verse_separator().unwrap();
            builder.visit_raw_html(RawHtmlMode::Both, "<hr>").unwrap();
        }
        text.finish().unwrap();
        assert_snapshot!(text.element_types(3).unwrap(), @"h<t>/H");
    }

    #[test]
    fn test_open_tree_is_rejected() {
        assert!(matches!(
            FormattedText::new().element_types(1),
            Err(Error::IllegalState(_))
        ));
    }
}
