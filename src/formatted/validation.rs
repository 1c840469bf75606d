//! Structural validation of sealed trees
//!
//! Validation walks a finished tree with a [ValidatingVisitor]. The first broken rule
//! aborts the walk with [Error::StructuralViolation]. Cross references whose endpoints the
//! [Bible] cannot resolve are not errors: they are appended to a caller-supplied list and
//! validation carries on.
//!
//! Rules, by element:
//!
//! - Text: a leading space is rejected right after another space, at the start of a node,
//!   and after a line break or headline.
//! - Line breaks: no space before them; only in verse, normal-text or footnote context.
//! - Headlines: not inside headlines, footnotes or cross references; no space before them;
//!   consecutive headlines must get deeper (depth 9 counts as 8).
//! - Footnotes: not nested. Cross references: only inside footnotes, not nested, and the
//!   first verse may not come after the last one within a chapter.
//! - Verse separators: only in verse context.
//! - Every node: no trailing space and no empty nodes.

use crate::bible::{verse_index, Bible, BookId};
use crate::formatted::ast::kinds::{
    ExtraAttributePriority, FormattingInstructionKind, LineBreakKind, RawHtmlMode,
};
use crate::formatted::ast::FormattedText;
use crate::formatted::error::{DanglingReference, Error, Result, Violation};
use crate::formatted::visitor::{Nested, Visitor};
use tracing::{debug, warn};

/// Where the node being validated sits. Ordered from least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationContext {
    Verse,
    NormalText,
    Headline,
    Footnote,
    CrossReference,
}

pub struct ValidatingVisitor<'a, B: Bible + ?Sized> {
    bible: &'a B,
    dangling: &'a mut Vec<DanglingReference>,
    context: ValidationContext,
    last_headline_depth: u8,
    leading_whitespace_allowed: bool,
    trailing_whitespace_found: bool,
    is_empty: bool,
}

impl<'a, B: Bible + ?Sized> ValidatingVisitor<'a, B> {
    pub fn new(
        bible: &'a B,
        dangling: &'a mut Vec<DanglingReference>,
        context: ValidationContext,
    ) -> Self {
        ValidatingVisitor {
            bible,
            dangling,
            context,
            last_headline_depth: 0,
            leading_whitespace_allowed: false,
            trailing_whitespace_found: false,
            is_empty: true,
        }
    }

    fn nested(&mut self, context: ValidationContext) -> Nested<'_, Error> {
        Some(Box::new(ValidatingVisitor::new(
            self.bible,
            &mut *self.dangling,
            context,
        )))
    }

    fn inline_element(&mut self) {
        self.is_empty = false;
        self.leading_whitespace_allowed = true;
        self.trailing_whitespace_found = false;
        self.last_headline_depth = 0;
    }

    fn resolve(&mut self, book_abbr: &str, book: BookId, chapter: u32, verse: &str) -> Option<usize> {
        let index = verse_index(self.bible, book_abbr, book, chapter, verse);
        if index.is_none() {
            let reference = DanglingReference {
                book_abbr: book_abbr.to_string(),
                book,
                chapter,
                verse: verse.to_string(),
            };
            warn!(%reference, "dangling cross reference");
            self.dangling.push(reference);
        }
        index
    }
}

impl<B: Bible + ?Sized> Visitor for ValidatingVisitor<'_, B> {
    type Error = Error;

    fn visit_headline(&mut self, depth: u8) -> Result<Nested<'_, Error>> {
        if self.context >= ValidationContext::Headline {
            return Err(Violation::NestedHeadline.into());
        }
        let depth = depth.min(8);
        if depth <= self.last_headline_depth {
            return Err(Violation::HeadlineDepthOrder.into());
        }
        if self.trailing_whitespace_found {
            return Err(Violation::WhitespaceBeforeHeadline.into());
        }
        self.is_empty = false;
        self.leading_whitespace_allowed = false;
        self.last_headline_depth = depth;
        Ok(self.nested(ValidationContext::Headline))
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        self.is_empty = false;
        self.last_headline_depth = 0;
        if text.starts_with(' ') {
            if self.trailing_whitespace_found {
                return Err(Violation::WhitespaceAdjacentToWhitespace.into());
            }
            if !self.leading_whitespace_allowed {
                return Err(Violation::LeadingWhitespace.into());
            }
        }
        self.trailing_whitespace_found = text.ends_with(' ');
        Ok(())
    }

    fn visit_footnote(&mut self) -> Result<Nested<'_, Error>> {
        if self.context >= ValidationContext::Footnote {
            return Err(Violation::NestedFootnote.into());
        }
        self.inline_element();
        Ok(self.nested(ValidationContext::Footnote))
    }

    fn visit_cross_reference(
        &mut self,
        book_abbr: &str,
        book: BookId,
        first_chapter: u32,
        first_verse: &str,
        last_chapter: u32,
        last_verse: &str,
    ) -> Result<Nested<'_, Error>> {
        if self.context >= ValidationContext::CrossReference {
            return Err(Violation::NestedCrossReference.into());
        }
        if self.context < ValidationContext::Footnote {
            return Err(Violation::CrossReferenceOutsideFootnote.into());
        }
        self.inline_element();
        let first = self.resolve(book_abbr, book, first_chapter, first_verse);
        let last = self.resolve(book_abbr, book, last_chapter, last_verse);
        if let (Some(first), Some(last)) = (first, last) {
            if first_chapter == last_chapter && first > last {
                return Err(Violation::CrossReferenceRangeOrder.into());
            }
        }
        Ok(self.nested(ValidationContext::CrossReference))
    }

    fn visit_formatting_instruction(
        &mut self,
        _kind: FormattingInstructionKind,
    ) -> Result<Nested<'_, Error>> {
        self.inline_element();
        Ok(self.nested(self.context))
    }

    fn visit_css_formatting(&mut self, _css: &str) -> Result<Nested<'_, Error>> {
        self.inline_element();
        Ok(self.nested(self.context))
    }

    fn visit_verse_separator(&mut self) -> Result<()> {
        if self.context != ValidationContext::Verse {
            return Err(Violation::VerseSeparatorOutsideVerse.into());
        }
        self.inline_element();
        Ok(())
    }

    fn visit_line_break(&mut self, _kind: LineBreakKind) -> Result<()> {
        if self.trailing_whitespace_found {
            return Err(Violation::WhitespaceBeforeLineBreak.into());
        }
        if self.context >= ValidationContext::Headline && self.context != ValidationContext::Footnote
        {
            return Err(Violation::LineBreakOutsideBlock.into());
        }
        self.is_empty = false;
        self.leading_whitespace_allowed = false;
        self.last_headline_depth = 0;
        Ok(())
    }

    fn visit_grammar_information(
        &mut self,
        _strongs: &[u32],
        _rmac: Option<&[String]>,
        _source_indices: Option<&[u32]>,
    ) -> Result<Nested<'_, Error>> {
        self.inline_element();
        Ok(self.nested(self.context))
    }

    fn visit_dictionary_entry(&mut self, _dictionary: &str, _entry: &str) -> Result<Nested<'_, Error>> {
        self.inline_element();
        Ok(self.nested(self.context))
    }

    fn visit_raw_html(&mut self, _mode: RawHtmlMode, _raw: &str) -> Result<()> {
        self.inline_element();
        Ok(())
    }

    fn visit_variation_text(&mut self, _variations: &[String]) -> Result<Nested<'_, Error>> {
        self.inline_element();
        Ok(self.nested(self.context))
    }

    fn visit_extra_attribute(
        &mut self,
        priority: ExtraAttributePriority,
        _category: &str,
        _key: &str,
        _value: &str,
    ) -> Result<Nested<'_, Error>> {
        self.is_empty = false;
        match priority {
            ExtraAttributePriority::KeepContent => {
                self.inline_element();
                Ok(self.nested(self.context))
            }
            ExtraAttributePriority::Error => {
                self.trailing_whitespace_found = false;
                self.leading_whitespace_allowed = true;
                self.last_headline_depth = 0;
                Ok(None)
            }
            ExtraAttributePriority::Skip => Ok(None),
        }
    }

    fn visit_end(&mut self) -> Result<bool> {
        if self.trailing_whitespace_found {
            return Err(Violation::TrailingWhitespace.into());
        }
        if self.is_empty {
            return Err(Violation::EmptyElement.into());
        }
        Ok(false)
    }
}

impl FormattedText {
    /// Validate as normal (non-verse) text. The tree must be finished.
    pub fn validate<B: Bible + ?Sized>(
        &self,
        bible: &B,
        dangling: &mut Vec<DanglingReference>,
    ) -> Result<()> {
        self.validate_in(bible, dangling, ValidationContext::NormalText)
    }

    /// Validate as verse content, where verse separators are allowed.
    pub fn validate_verse<B: Bible + ?Sized>(
        &self,
        bible: &B,
        dangling: &mut Vec<DanglingReference>,
    ) -> Result<()> {
        self.validate_in(bible, dangling, ValidationContext::Verse)
    }

    pub fn validate_in<B: Bible + ?Sized>(
        &self,
        bible: &B,
        dangling: &mut Vec<DanglingReference>,
        context: ValidationContext,
    ) -> Result<()> {
        if !self.is_finished() {
            return Err(Error::illegal_state(
                "formatted text must be finished before validation",
            ));
        }
        let before = dangling.len();
        self.accept(&mut ValidatingVisitor::new(bible, dangling, context))?;
        debug!(
            ?context,
            dangling = dangling.len() - before,
            "validated formatted text"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::{MemoryBible, MemoryBook, MemoryChapter};

    fn bible() -> MemoryBible {
        MemoryBible::new().with_book(
            MemoryBook::new("Joh", BookId::John).with_chapter(MemoryChapter::numbered(21)),
        )
    }

    fn visitor<'a>(
        bible: &'a MemoryBible,
        dangling: &'a mut Vec<DanglingReference>,
        context: ValidationContext,
    ) -> ValidatingVisitor<'a, MemoryBible> {
        ValidatingVisitor::new(bible, dangling, context)
    }

    #[test]
    fn test_context_order() {
        assert!(ValidationContext::Verse < ValidationContext::NormalText);
        assert!(ValidationContext::Headline < ValidationContext::Footnote);
        assert!(ValidationContext::Footnote < ValidationContext::CrossReference);
    }

    #[test]
    fn test_adjacent_whitespace_across_text_calls() {
        let bible = bible();
        let mut dangling = Vec::new();
        let mut v = visitor(&bible, &mut dangling, ValidationContext::NormalText);
        v.visit_text("hello ").unwrap();
        assert_eq!(
            v.visit_text(" world").unwrap_err().violation(),
            Some(Violation::WhitespaceAdjacentToWhitespace)
        );
    }

    #[test]
    fn test_leading_whitespace_at_start() {
        let bible = bible();
        let mut dangling = Vec::new();
        let mut v = visitor(&bible, &mut dangling, ValidationContext::NormalText);
        assert_eq!(
            v.visit_text(" a").unwrap_err().violation(),
            Some(Violation::LeadingWhitespace)
        );
    }

    #[test]
    fn test_headline_depth_saturates_at_eight() {
        let bible = bible();
        let mut dangling = Vec::new();
        let mut v = visitor(&bible, &mut dangling, ValidationContext::NormalText);
        drop(v.visit_headline(8).unwrap());
        assert_eq!(
            v.visit_headline(9).err().and_then(|e| e.violation()),
            Some(Violation::HeadlineDepthOrder)
        );
    }

    #[test]
    fn test_dangling_endpoints_are_collected() {
        let bible = bible();
        let mut dangling = Vec::new();
        {
            let mut v = visitor(&bible, &mut dangling, ValidationContext::Footnote);
            let nested = v
                .visit_cross_reference("Joh", BookId::John, 30, "1", 30, "2")
                .unwrap();
            assert!(nested.is_some());
        }
        assert_eq!(dangling.len(), 2);
        assert_eq!(dangling[0].to_string(), "Joh(John) 30:1");
    }

    #[test]
    fn test_unfinished_tree_cannot_be_validated() {
        let mut dangling = Vec::new();
        let err = FormattedText::new()
            .validate(&bible(), &mut dangling)
            .unwrap_err();
        assert!(matches!(err, Error::IllegalState(_)));
    }
}
