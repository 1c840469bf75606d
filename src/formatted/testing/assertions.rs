//! Fluent assertions over nodes and elements

use super::matchers::TextMatch;
use crate::bible::BookId;
use crate::formatted::ast::elements::{CrossReference, FormattedElement, Headline};
use crate::formatted::ast::kinds::LineBreakKind;
use crate::formatted::ast::FormattedText;

fn summarize(elements: &[FormattedElement]) -> String {
    elements
        .iter()
        .map(|e| match e.as_text() {
            Some(text) => format!("Text({:?})", text.as_str()),
            None => e.element_type().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Nodes
// ============================================================================

pub struct TextAssertion<'a> {
    pub(crate) text: &'a FormattedText,
    pub(crate) context: String,
}

impl<'a> TextAssertion<'a> {
    pub fn headline_count(self, expected: usize) -> Self {
        let actual = self.text.headlines().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} headlines in the headline run, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.text.elements().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} elements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.text.elements())
        );
        self
    }

    pub fn is_finished(self) -> Self {
        assert!(
            self.text.is_finished(),
            "{}: Expected formatted text to be finished",
            self.context
        );
        self
    }

    pub fn signature(self, depth: usize, expected: &str) -> Self {
        let actual = match self.text.element_types(depth) {
            Ok(signature) => signature,
            Err(err) => panic!("{}: Cannot compute signature: {}", self.context, err),
        };
        assert_eq!(
            actual, expected,
            "{}: Expected signature {:?} at depth {}, got {:?}",
            self.context, expected, depth, actual
        );
        self
    }

    pub fn headline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(HeadlineAssertion<'a>),
    {
        let headlines = self.text.headlines();
        assert!(
            index < headlines.len(),
            "{}: Headline index {} out of bounds ({} headlines)",
            self.context,
            index,
            headlines.len()
        );
        assertion(HeadlineAssertion {
            headline: &headlines[index],
            context: format!("{}.headlines[{}]", self.context, index),
        });
        self
    }

    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let elements = self.text.elements();
        assert!(
            index < elements.len(),
            "{}: Element index {} out of bounds ({} elements)",
            self.context,
            index,
            elements.len()
        );
        assertion(ElementAssertion {
            element: &elements[index],
            context: format!("{}.elements[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Elements
// ============================================================================

pub struct ElementAssertion<'a> {
    pub(crate) element: &'a FormattedElement,
    pub(crate) context: String,
}

impl<'a> ElementAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.element.element_type()
        )
    }

    pub fn element_type(self, expected: &str) -> Self {
        assert_eq!(
            self.element.element_type(),
            expected,
            "{}: Unexpected element type",
            self.context
        );
        self
    }

    pub fn assert_text(self) -> TextLeafAssertion<'a> {
        match self.element {
            FormattedElement::Text(text) => TextLeafAssertion {
                text: text.as_str(),
                context: self.context,
            },
            _ => self.mismatch("Text"),
        }
    }

    pub fn assert_headline(self) -> HeadlineAssertion<'a> {
        match self.element {
            FormattedElement::Headline(headline) => HeadlineAssertion {
                headline,
                context: self.context,
            },
            _ => self.mismatch("Headline"),
        }
    }

    /// Assert a footnote and continue with its content.
    pub fn assert_footnote(self) -> TextAssertion<'a> {
        match self.element {
            FormattedElement::Footnote(footnote) => TextAssertion {
                text: footnote.content(),
                context: format!("{}.content", self.context),
            },
            _ => self.mismatch("Footnote"),
        }
    }

    pub fn assert_cross_reference(self) -> CrossReferenceAssertion<'a> {
        match self.element {
            FormattedElement::CrossReference(reference) => CrossReferenceAssertion {
                reference,
                context: self.context,
            },
            _ => self.mismatch("CrossReference"),
        }
    }

    pub fn assert_line_break(self, kind: LineBreakKind) {
        match self.element {
            FormattedElement::LineBreak(actual) => assert_eq!(
                *actual, kind,
                "{}: Unexpected line break kind",
                self.context
            ),
            _ => self.mismatch("LineBreak"),
        }
    }

    pub fn assert_verse_separator(self) {
        if !matches!(self.element, FormattedElement::VerseSeparator) {
            self.mismatch("VerseSeparator")
        }
    }

    /// Content of any container element.
    pub fn content(self) -> TextAssertion<'a> {
        match self.element.content() {
            Some(text) => TextAssertion {
                text,
                context: format!("{}.content", self.context),
            },
            None => self.mismatch("a container element"),
        }
    }
}

pub struct TextLeafAssertion<'a> {
    pub(crate) text: &'a str,
    pub(crate) context: String,
}

impl TextLeafAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(self.text, &self.context);
        self
    }
}

pub struct HeadlineAssertion<'a> {
    pub(crate) headline: &'a Headline,
    pub(crate) context: String,
}

impl<'a> HeadlineAssertion<'a> {
    pub fn depth(self, expected: u8) -> Self {
        assert_eq!(
            self.headline.depth(),
            expected,
            "{}: Unexpected headline depth",
            self.context
        );
        self
    }

    pub fn content(self) -> TextAssertion<'a> {
        TextAssertion {
            text: self.headline.content(),
            context: format!("{}.content", self.context),
        }
    }
}

pub struct CrossReferenceAssertion<'a> {
    pub(crate) reference: &'a CrossReference,
    pub(crate) context: String,
}

impl<'a> CrossReferenceAssertion<'a> {
    pub fn book(self, abbreviation: &str, id: BookId) -> Self {
        assert_eq!(
            (self.reference.book_abbr(), self.reference.book()),
            (abbreviation, id),
            "{}: Unexpected cross reference book",
            self.context
        );
        self
    }

    pub fn range(self, first_chapter: u32, first_verse: &str, last_chapter: u32, last_verse: &str) -> Self {
        let r = self.reference;
        assert_eq!(
            (r.first_chapter(), r.first_verse(), r.last_chapter(), r.last_verse()),
            (first_chapter, first_verse, last_chapter, last_verse),
            "{}: Unexpected cross reference range",
            self.context
        );
        self
    }

    pub fn content(self) -> TextAssertion<'a> {
        TextAssertion {
            text: self.reference.content(),
            context: format!("{}.content", self.context),
        }
    }
}
