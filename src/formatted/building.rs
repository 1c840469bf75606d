//! Tree construction through the visitor protocol
//!
//! A [Builder] appends every visited element to its target node. Container calls return a
//! builder for the new element's content, so a whole tree can be built (or copied) by
//! feeding it visitor calls:
//!
//! ```ignore
//! let mut copy = FormattedText::new();
//! source.accept(&mut copy.append_visitor()?)?;
//! ```
//!
//! Text arriving next to a text leaf is merged into it. When the old text ends and the new
//! one starts with a space, one of the two spaces is dropped.

use crate::bible::BookId;
use crate::formatted::ast::elements::{
    CrossReference, CssFormatting, DictionaryEntry, ExtraAttribute, Footnote, FormattedElement,
    FormattingInstruction, GrammarInformation, Headline, RawHtml, Text, VariationText,
};
use crate::formatted::ast::kinds::{
    ExtraAttributePriority, FormattingInstructionKind, LineBreakKind, RawHtmlMode,
};
use crate::formatted::ast::FormattedText;
use crate::formatted::error::{Error, Result};
use crate::formatted::visitor::{Nested, Visitor};
use tracing::trace;

/// Appends visited elements to a [FormattedText]. Obtained from
/// [FormattedText::append_visitor].
#[derive(Debug)]
pub struct Builder<'a> {
    target: &'a mut FormattedText,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(target: &'a mut FormattedText) -> Self {
        Builder { target }
    }

    fn push(&mut self, element: FormattedElement) -> Nested<'_, Error> {
        self.target.elements.push(element);
        self.target
            .elements
            .last_mut()
            .and_then(FormattedElement::content_mut)
            .map(nested)
    }
}

fn nested(content: &mut FormattedText) -> Box<dyn Visitor<Error = Error> + '_> {
    Box::new(Builder::new(content))
}

/// Concatenate two texts, dropping one space where both meet with a space.
pub(crate) fn merge_texts(previous: &str, next: &str) -> String {
    let next = match (previous.ends_with(' '), next.strip_prefix(' ')) {
        (true, Some(rest)) => rest,
        _ => next,
    };
    let mut merged = String::with_capacity(previous.len() + next.len());
    merged.push_str(previous);
    merged.push_str(next);
    merged
}

impl Visitor for Builder<'_> {
    type Error = Error;

    fn visit_headline(&mut self, depth: u8) -> Result<Nested<'_, Error>> {
        let headline = Headline::new(depth)?;
        if self.target.elements.is_empty() {
            self.target.headlines.push(headline);
            Ok(self
                .target
                .headlines
                .last_mut()
                .map(|headline| nested(&mut headline.content)))
        } else {
            Ok(self.push(FormattedElement::Headline(headline)))
        }
    }

    fn visit_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if let Some(FormattedElement::Text(previous)) = self.target.elements.last_mut() {
            let merged = Text::new(merge_texts(previous.as_str(), text))?;
            trace!(previous = previous.as_str(), text, "merging adjacent text");
            *previous = merged;
            return Ok(());
        }
        self.target
            .elements
            .push(FormattedElement::Text(Text::new(text)?));
        Ok(())
    }

    fn visit_footnote(&mut self) -> Result<Nested<'_, Error>> {
        Ok(self.push(FormattedElement::Footnote(Footnote::new())))
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
        let reference = CrossReference::new(
            book_abbr,
            book,
            first_chapter,
            first_verse,
            last_chapter,
            last_verse,
        )?;
        Ok(self.push(FormattedElement::CrossReference(reference)))
    }

    fn visit_formatting_instruction(
        &mut self,
        kind: FormattingInstructionKind,
    ) -> Result<Nested<'_, Error>> {
        Ok(self.push(FormattedElement::FormattingInstruction(
            FormattingInstruction::new(kind),
        )))
    }

    fn visit_css_formatting(&mut self, css: &str) -> Result<Nested<'_, Error>> {
        let css = CssFormatting::new(css)?;
        Ok(self.push(FormattedElement::CssFormatting(css)))
    }

    fn visit_verse_separator(&mut self) -> Result<()> {
        self.target.elements.push(FormattedElement::VerseSeparator);
        Ok(())
    }

    fn visit_line_break(&mut self, kind: LineBreakKind) -> Result<()> {
        self.target.elements.push(FormattedElement::LineBreak(kind));
        Ok(())
    }

    fn visit_grammar_information(
        &mut self,
        strongs: &[u32],
        rmac: Option<&[String]>,
        source_indices: Option<&[u32]>,
    ) -> Result<Nested<'_, Error>> {
        let grammar = GrammarInformation::new(
            strongs.to_vec(),
            rmac.map(<[String]>::to_vec),
            source_indices.map(<[u32]>::to_vec),
        )?;
        Ok(self.push(FormattedElement::GrammarInformation(grammar)))
    }

    fn visit_dictionary_entry(&mut self, dictionary: &str, entry: &str) -> Result<Nested<'_, Error>> {
        let entry = DictionaryEntry::new(dictionary, entry)?;
        Ok(self.push(FormattedElement::DictionaryEntry(entry)))
    }

    fn visit_raw_html(&mut self, mode: RawHtmlMode, raw: &str) -> Result<()> {
        let raw = RawHtml::new(mode, raw)?;
        self.target.elements.push(FormattedElement::RawHtml(raw));
        Ok(())
    }

    fn visit_variation_text(&mut self, variations: &[String]) -> Result<Nested<'_, Error>> {
        let variation = VariationText::new(variations.to_vec())?;
        Ok(self.push(FormattedElement::VariationText(variation)))
    }

    fn visit_extra_attribute(
        &mut self,
        priority: ExtraAttributePriority,
        category: &str,
        key: &str,
        value: &str,
    ) -> Result<Nested<'_, Error>> {
        let attribute = ExtraAttribute::new(priority, category, key, value)?;
        Ok(self.push(FormattedElement::ExtraAttribute(attribute)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_texts_drops_one_seam_space() {
        assert_eq!(merge_texts("a ", " b"), "a b");
        assert_eq!(merge_texts("a", " b"), "a b");
        assert_eq!(merge_texts("a ", "b"), "a b");
        assert_eq!(merge_texts("a", "b"), "ab");
    }

    #[test]
    fn test_consecutive_text_merges_into_one_leaf() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_text("hello ").unwrap();
            builder.visit_text(" world").unwrap();
        }
        assert_eq!(text.elements().len(), 1);
        assert_eq!(text.elements()[0].as_text().unwrap().as_str(), "hello world");
    }

    #[test]
    fn test_invalid_merge_leaves_previous_text() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_text("a").unwrap();
            assert!(builder.visit_text("\tb").is_err());
        }
        assert_eq!(text.elements()[0].as_text().unwrap().as_str(), "a");
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let mut text = FormattedText::new();
        text.append_visitor().unwrap().visit_text("").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_headline_placement_follows_body_run() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_headline(1).unwrap().unwrap().visit_text("Title").unwrap();
            builder.visit_text("body").unwrap();
            builder.visit_headline(2).unwrap().unwrap().visit_text("Sub").unwrap();
        }
        assert_eq!(text.headlines().len(), 1);
        assert_eq!(text.elements().len(), 2);
        assert_eq!(text.elements()[1].as_headline().unwrap().depth(), 2);
    }

    #[test]
    fn test_leaves_return_no_nested_builder() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_verse_separator().unwrap();
            builder.visit_line_break(LineBreakKind::Newline).unwrap();
            builder.visit_raw_html(RawHtmlMode::Both, "<hr>").unwrap();
            assert!(!builder.visit_end().unwrap());
        }
        assert_eq!(text.elements().len(), 3);
    }

    #[test]
    fn test_invalid_headline_depth_is_rejected() {
        let mut text = FormattedText::new();
        let mut builder = text.append_visitor().unwrap();
        assert!(matches!(
            builder.visit_headline(10),
            Err(Error::InvalidField { field: "depth", .. })
        ));
    }
}
