//! Error types for formatted-text operations
//!
//! Hard errors propagate to the immediate caller and are never partially applied:
//!
//! - [Error::InvalidField]: a node could not be constructed from the given field value.
//! - [Error::IllegalState]: the tree lifecycle was violated (mutation after sealing, ...).
//! - [Error::StructuralViolation]: a sealed tree broke a validation rule.
//! - [Error::UnhandledExtraAttribute]: an extra attribute demanding explicit support was
//!   exercised by a consumer that has none.
//!
//! [DanglingReference] is the one soft outcome: it is collected during validation, never
//! raised.

use crate::bible::BookId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid {field} {value:?}: {constraint}")]
    InvalidField {
        field: &'static str,
        value: String,
        constraint: String,
    },

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("{0}")]
    StructuralViolation(Violation),

    #[error("Unhandled extra attribute of category {category}")]
    UnhandledExtraAttribute { category: String },
}

impl Error {
    pub(crate) fn invalid_field(
        field: &'static str,
        value: impl fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        Error::InvalidField {
            field,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    pub(crate) fn illegal_state(message: impl Into<String>) -> Self {
        Error::IllegalState(message.into())
    }

    /// The violated rule, if this is a structural violation.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Error::StructuralViolation(violation) => Some(*violation),
            _ => None,
        }
    }
}

impl From<Violation> for Error {
    fn from(violation: Violation) -> Self {
        Error::StructuralViolation(violation)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A validation rule breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    WhitespaceAdjacentToWhitespace,
    LeadingWhitespace,
    WhitespaceBeforeLineBreak,
    WhitespaceBeforeHeadline,
    TrailingWhitespace,
    EmptyElement,
    VerseSeparatorOutsideVerse,
    LineBreakOutsideBlock,
    NestedHeadline,
    HeadlineDepthOrder,
    NestedFootnote,
    NestedCrossReference,
    CrossReferenceOutsideFootnote,
    CrossReferenceRangeOrder,
}

impl Violation {
    pub fn message(self) -> &'static str {
        match self {
            Violation::WhitespaceAdjacentToWhitespace => "Whitespace adjacent to whitespace found",
            Violation::LeadingWhitespace => {
                "No whitespace allowed at beginning or after line breaks or headlines"
            }
            Violation::WhitespaceBeforeLineBreak => "No whitespace allowed before line breaks",
            Violation::WhitespaceBeforeHeadline => "No whitespace allowed before headlines",
            Violation::TrailingWhitespace => "No whitespace allowed at end of element",
            Violation::EmptyElement => "Element is empty",
            Violation::VerseSeparatorOutsideVerse => "Verse separators are only allowed in verses",
            Violation::LineBreakOutsideBlock => {
                "Line breaks only allowed in block context or footnotes"
            }
            Violation::NestedHeadline => "Invalid nested headline",
            Violation::HeadlineDepthOrder => "Invalid headline depth order",
            Violation::NestedFootnote => "Invalid nested footnote",
            Violation::NestedCrossReference => "Invalid nested cross reference",
            Violation::CrossReferenceOutsideFootnote => {
                "Cross references may only appear inside footnotes"
            }
            Violation::CrossReferenceRangeOrder => "First xref verse is after last xref verse",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A cross-reference endpoint the Bible collaborator could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DanglingReference {
    pub book_abbr: String,
    pub book: BookId,
    pub chapter: u32,
    pub verse: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {}:{}",
            self.book_abbr,
            self.book.osis_id(),
            self.chapter,
            self.verse
        )
    }
}
