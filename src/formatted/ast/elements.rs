//! Element variants
//!
//! `FormattedElement` is the common wrapper for everything that can appear in a body run.
//! Headlines additionally appear, unwrapped, in a node's headline run.

use super::kinds::{ExtraAttributePriority, FormattingInstructionKind, LineBreakKind, RawHtmlMode};
use super::patterns::{self, validate_number, validate_string};
use super::text_node::FormattedText;
use crate::bible::BookId;
use crate::formatted::error::{Error, Result};
use crate::formatted::visitor::{Nested, Visitor};

#[derive(Debug, Clone, PartialEq)]
pub enum FormattedElement {
    Text(Text),
    Headline(Headline),
    Footnote(Footnote),
    CrossReference(CrossReference),
    FormattingInstruction(FormattingInstruction),
    CssFormatting(CssFormatting),
    VerseSeparator,
    LineBreak(LineBreakKind),
    GrammarInformation(GrammarInformation),
    DictionaryEntry(DictionaryEntry),
    RawHtml(RawHtml),
    VariationText(VariationText),
    ExtraAttribute(ExtraAttribute),
}

impl FormattedElement {
    pub fn element_type(&self) -> &'static str {
        match self {
            FormattedElement::Text(_) => "Text",
            FormattedElement::Headline(_) => "Headline",
            FormattedElement::Footnote(_) => "Footnote",
            FormattedElement::CrossReference(_) => "CrossReference",
            FormattedElement::FormattingInstruction(_) => "FormattingInstruction",
            FormattedElement::CssFormatting(_) => "CSSFormatting",
            FormattedElement::VerseSeparator => "VerseSeparator",
            FormattedElement::LineBreak(_) => "LineBreak",
            FormattedElement::GrammarInformation(_) => "GrammarInformation",
            FormattedElement::DictionaryEntry(_) => "DictionaryEntry",
            FormattedElement::RawHtml(_) => "RawHTML",
            FormattedElement::VariationText(_) => "VariationText",
            FormattedElement::ExtraAttribute(_) => "ExtraAttribute",
        }
    }

    /// Nested content of a container element, `None` for leaves.
    pub fn content(&self) -> Option<&FormattedText> {
        match self {
            FormattedElement::Headline(h) => Some(&h.content),
            FormattedElement::Footnote(f) => Some(&f.content),
            FormattedElement::CrossReference(x) => Some(&x.content),
            FormattedElement::FormattingInstruction(fi) => Some(&fi.content),
            FormattedElement::CssFormatting(css) => Some(&css.content),
            FormattedElement::GrammarInformation(g) => Some(&g.content),
            FormattedElement::DictionaryEntry(d) => Some(&d.content),
            FormattedElement::VariationText(v) => Some(&v.content),
            FormattedElement::ExtraAttribute(x) => Some(&x.content),
            FormattedElement::Text(_)
            | FormattedElement::VerseSeparator
            | FormattedElement::LineBreak(_)
            | FormattedElement::RawHtml(_) => None,
        }
    }

    pub(crate) fn content_mut(&mut self) -> Option<&mut FormattedText> {
        match self {
            FormattedElement::Headline(h) => Some(&mut h.content),
            FormattedElement::Footnote(f) => Some(&mut f.content),
            FormattedElement::CrossReference(x) => Some(&mut x.content),
            FormattedElement::FormattingInstruction(fi) => Some(&mut fi.content),
            FormattedElement::CssFormatting(css) => Some(&mut css.content),
            FormattedElement::GrammarInformation(g) => Some(&mut g.content),
            FormattedElement::DictionaryEntry(d) => Some(&mut d.content),
            FormattedElement::VariationText(v) => Some(&mut v.content),
            FormattedElement::ExtraAttribute(x) => Some(&mut x.content),
            FormattedElement::Text(_)
            | FormattedElement::VerseSeparator
            | FormattedElement::LineBreak(_)
            | FormattedElement::RawHtml(_) => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.content().is_some()
    }

    pub fn as_text(&self) -> Option<&Text> {
        if let FormattedElement::Text(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn as_headline(&self) -> Option<&Headline> {
        if let FormattedElement::Headline(h) = self {
            Some(h)
        } else {
            None
        }
    }

    /// Line breaks and headlines end a line of running text.
    pub fn is_block_boundary(&self) -> bool {
        matches!(
            self,
            FormattedElement::LineBreak(_) | FormattedElement::Headline(_)
        )
    }

    /// Emit this element (and, if the visitor descends, its content) to `visitor`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            FormattedElement::Text(text) => visitor.visit_text(text.as_str()),
            FormattedElement::Headline(headline) => headline.accept(visitor),
            FormattedElement::Footnote(footnote) => {
                descend(visitor.visit_footnote()?, &footnote.content)
            }
            FormattedElement::CrossReference(x) => descend(
                visitor.visit_cross_reference(
                    &x.book_abbr,
                    x.book,
                    x.first_chapter,
                    &x.first_verse,
                    x.last_chapter,
                    &x.last_verse,
                )?,
                &x.content,
            ),
            FormattedElement::FormattingInstruction(fi) => {
                descend(visitor.visit_formatting_instruction(fi.kind)?, &fi.content)
            }
            FormattedElement::CssFormatting(css) => {
                descend(visitor.visit_css_formatting(&css.css)?, &css.content)
            }
            FormattedElement::VerseSeparator => visitor.visit_verse_separator(),
            FormattedElement::LineBreak(kind) => visitor.visit_line_break(*kind),
            FormattedElement::GrammarInformation(g) => descend(
                visitor.visit_grammar_information(
                    &g.strongs,
                    g.rmac.as_deref(),
                    g.source_indices.as_deref(),
                )?,
                &g.content,
            ),
            FormattedElement::DictionaryEntry(d) => {
                descend(visitor.visit_dictionary_entry(&d.dictionary, &d.entry)?, &d.content)
            }
            FormattedElement::RawHtml(raw) => visitor.visit_raw_html(raw.mode, &raw.raw),
            FormattedElement::VariationText(v) => {
                descend(visitor.visit_variation_text(&v.variations)?, &v.content)
            }
            FormattedElement::ExtraAttribute(x) => descend(
                visitor.visit_extra_attribute(x.priority, &x.category, &x.key, &x.value)?,
                &x.content,
            ),
        }
    }
}

fn descend<E>(nested: Nested<'_, E>, content: &FormattedText) -> Result<(), E> {
    match nested {
        Some(mut child) => content.accept(&mut *child),
        None => Ok(()),
    }
}

// ============================================================================
// LEAVES
// ============================================================================

/// A run of text with normalized whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        validate_string("text", &text, &patterns::TEXT)?;
        Ok(Text(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A raw markup fragment passed through to HTML-like outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHtml {
    mode: RawHtmlMode,
    raw: String,
}

impl RawHtml {
    pub fn new(mode: RawHtmlMode, raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        validate_string("raw", &raw, &patterns::RAW_HTML)?;
        Ok(RawHtml { mode, raw })
    }

    pub fn mode(&self) -> RawHtmlMode {
        self.mode
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

// ============================================================================
// CONTAINERS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    depth: u8,
    pub(crate) content: FormattedText,
}

impl Headline {
    /// A headline of the given depth, 1 (outermost) to 9.
    pub fn new(depth: u8) -> Result<Self> {
        validate_number("depth", u32::from(depth), 1, 9)?;
        Ok(Headline {
            depth,
            content: FormattedText::new(),
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        descend(visitor.visit_headline(self.depth)?, &self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footnote {
    pub(crate) content: FormattedText,
}

impl Footnote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}

/// A reference to a verse range, only valid inside a footnote.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossReference {
    book_abbr: String,
    book: BookId,
    first_chapter: u32,
    first_verse: String,
    last_chapter: u32,
    last_verse: String,
    pub(crate) content: FormattedText,
}

impl CrossReference {
    pub fn new(
        book_abbr: impl Into<String>,
        book: BookId,
        first_chapter: u32,
        first_verse: impl Into<String>,
        last_chapter: u32,
        last_verse: impl Into<String>,
    ) -> Result<Self> {
        let book_abbr = book_abbr.into();
        let first_verse = first_verse.into();
        let last_verse = last_verse.into();
        validate_string("bookAbbr", &book_abbr, &patterns::BOOK_ABBR)?;
        validate_number("firstChapter", first_chapter, 1, u32::MAX)?;
        validate_string("firstVerse", &first_verse, &patterns::VERSE)?;
        validate_number("lastChapter", last_chapter, first_chapter, u32::MAX)?;
        validate_string("lastVerse", &last_verse, &patterns::VERSE)?;
        Ok(CrossReference {
            book_abbr,
            book,
            first_chapter,
            first_verse,
            last_chapter,
            last_verse,
            content: FormattedText::new(),
        })
    }

    pub fn book_abbr(&self) -> &str {
        &self.book_abbr
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn first_chapter(&self) -> u32 {
        self.first_chapter
    }

    pub fn first_verse(&self) -> &str {
        &self.first_verse
    }

    pub fn last_chapter(&self) -> u32 {
        self.last_chapter
    }

    pub fn last_verse(&self) -> &str {
        &self.last_verse
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattingInstruction {
    kind: FormattingInstructionKind,
    pub(crate) content: FormattedText,
}

impl FormattingInstruction {
    pub fn new(kind: FormattingInstructionKind) -> Self {
        FormattingInstruction {
            kind,
            content: FormattedText::new(),
        }
    }

    pub fn kind(&self) -> FormattingInstructionKind {
        self.kind
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CssFormatting {
    css: String,
    pub(crate) content: FormattedText,
}

impl CssFormatting {
    pub fn new(css: impl Into<String>) -> Result<Self> {
        let css = css.into();
        validate_string("css", &css, &patterns::CSS)?;
        Ok(CssFormatting {
            css,
            content: FormattedText::new(),
        })
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}

/// Strong's numbers, optionally with RMAC codes and source word indices.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarInformation {
    strongs: Vec<u32>,
    rmac: Option<Vec<String>>,
    source_indices: Option<Vec<u32>>,
    pub(crate) content: FormattedText,
}

impl GrammarInformation {
    pub fn new(
        strongs: Vec<u32>,
        rmac: Option<Vec<String>>,
        source_indices: Option<Vec<u32>>,
    ) -> Result<Self> {
        if strongs.is_empty() {
            return Err(Error::invalid_field("strongs", "[]", "may not be empty"));
        }
        if let Some(strong) = strongs.iter().find(|&&s| s == 0) {
            return Err(Error::invalid_field("strongs", strong, "must be positive"));
        }
        match &rmac {
            None => {
                if let Some(indices) = &source_indices {
                    return Err(Error::invalid_field(
                        "sourceIndices",
                        format!("{indices:?}"),
                        "may not be present if rmac is missing",
                    ));
                }
            }
            Some(rmac) => {
                if rmac.len() != strongs.len() {
                    return Err(Error::invalid_field(
                        "rmac",
                        format!("{rmac:?}"),
                        "must have the same length as strongs",
                    ));
                }
                for entry in rmac {
                    validate_string("rmac", entry, &patterns::RMAC)?;
                }
                if let Some(indices) = &source_indices {
                    if indices.len() != strongs.len() {
                        return Err(Error::invalid_field(
                            "sourceIndices",
                            format!("{indices:?}"),
                            "must have the same length as strongs",
                        ));
                    }
                    for &index in indices {
                        validate_number("sourceIndices", index, 1, 100)?;
                    }
                }
            }
        }
        Ok(GrammarInformation {
            strongs,
            rmac,
            source_indices,
            content: FormattedText::new(),
        })
    }

    pub fn strongs(&self) -> &[u32] {
        &self.strongs
    }

    pub fn rmac(&self) -> Option<&[String]> {
        self.rmac.as_deref()
    }

    pub fn source_indices(&self) -> Option<&[u32]> {
        self.source_indices.as_deref()
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    dictionary: String,
    entry: String,
    pub(crate) content: FormattedText,
}

impl DictionaryEntry {
    pub fn new(dictionary: impl Into<String>, entry: impl Into<String>) -> Result<Self> {
        let dictionary = dictionary.into();
        let entry = entry.into();
        validate_string("dictionary", &dictionary, &patterns::ALNUM)?;
        if dictionary == "strongs" || dictionary == "rmac" {
            return Err(Error::invalid_field(
                "dictionary",
                &dictionary,
                "use grammar information for Strongs and/or RMAC",
            ));
        }
        validate_string("entry", &entry, &patterns::ALNUM_HYPHEN)?;
        Ok(DictionaryEntry {
            dictionary,
            entry,
            content: FormattedText::new(),
        })
    }

    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}

/// Content that only belongs to some of the variations of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct VariationText {
    variations: Vec<String>,
    pub(crate) content: FormattedText,
}

impl VariationText {
    pub fn new(variations: Vec<String>) -> Result<Self> {
        if variations.is_empty() {
            return Err(Error::invalid_field("variations", "[]", "may not be empty"));
        }
        for variation in &variations {
            validate_string("variation", variation, &patterns::ALNUM_HYPHEN)?;
        }
        Ok(VariationText {
            variations,
            content: FormattedText::new(),
        })
    }

    pub fn variations(&self) -> &[String] {
        &self.variations
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}

/// Format-specific data that generic consumers handle according to its priority.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraAttribute {
    priority: ExtraAttributePriority,
    category: String,
    key: String,
    value: String,
    pub(crate) content: FormattedText,
}

impl ExtraAttribute {
    pub fn new(
        priority: ExtraAttributePriority,
        category: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let category = category.into();
        let key = key.into();
        let value = value.into();
        validate_string("category", &category, &patterns::LOWER_ALNUM)?;
        validate_string("key", &key, &patterns::LOWER_ALNUM_HYPHEN)?;
        validate_string("value", &value, &patterns::ALNUM_HYPHEN)?;
        Ok(ExtraAttribute {
            priority,
            category,
            key,
            value,
            content: FormattedText::new(),
        })
    }

    pub fn priority(&self) -> ExtraAttributePriority {
        self.priority
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn content(&self) -> &FormattedText {
        &self.content
    }
}
