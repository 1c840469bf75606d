//! Formatted text: the element tree and everything that walks it
//!
//! Tree Shape
//!
//!     A [FormattedText] node owns two ordered runs of children:
//!
//!         - the headline run, holding only headlines, and
//!         - the body run, holding every other element (and headlines that show up once
//!           body content exists).
//!
//!     Elements are either leaves (text, verse separators, line breaks, raw HTML) or
//!     containers, which own a nested FormattedText with its own two runs. See
//!     [ast] for the element catalogue.
//!
//! One Protocol, Both Directions
//!
//!     The [Visitor] trait is used to inspect a tree and to build one. Walking a tree with
//!     [FormattedText::accept] emits one call per child; feeding the same calls into the
//!     [Builder] returned by [FormattedText::append_visitor] materializes them as new nodes.
//!     Copying a tree is therefore just `source.accept(&mut target.append_visitor()?)`.
//!
//!     The other protocol implementations live next to the builder:
//!
//!         - [validation]: whitespace, nesting and reference rules on sealed trees.
//!         - [normalization]: whitespace cleanup before sealing.
//!         - [signature]: compact element-kind fingerprints for pattern matching.
//!         - [snapshot]: a serializable dump of a tree.
//!
//!     [VisitorAdapter] wraps any visitor with hooks that also reach nested content.
//!
//! Lifecycle
//!
//!     Nodes are created open, mutated only while open, then sealed once with
//!     [FormattedText::finish] (or consumed into a [SealedText]). Sealing is recursive and
//!     irreversible; afterwards every mutating call fails with [Error::IllegalState].

pub mod adapter;
pub mod ast;
pub mod building;
pub mod error;
pub mod normalization;
pub mod signature;
pub mod snapshot;
pub mod testing;
pub mod validation;
pub mod visitor;

pub use adapter::{AdapterHooks, Descending, ElementHook, VisitorAdapter};
pub use ast::elements::{
    CrossReference, CssFormatting, DictionaryEntry, ExtraAttribute, Footnote,
    FormattedElement, FormattingInstruction, GrammarInformation, Headline, RawHtml, Text,
    VariationText,
};
pub use ast::kinds::{
    ExtraAttributeHandling, ExtraAttributePriority, FormattingInstructionKind, LineBreakKind,
    RawHtmlMode,
};
pub use ast::{FormattedText, SealedText, XREF_MARKER};
pub use building::Builder;
pub use error::{DanglingReference, Error, Result, Violation};
pub use normalization::NormalizeOptions;
pub use signature::SignatureVisitor;
pub use snapshot::TextSnapshot;
pub use validation::{ValidatingVisitor, ValidationContext};
pub use visitor::{Nested, Visitor};
