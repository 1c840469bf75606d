//! Element model
//!
//!     The tree is made of [FormattedText] nodes. Each node owns a headline run and a body
//!     run of [FormattedElement]s. Elements come in two shapes:
//!
//!         - Leaves: text, verse separators, line breaks and raw HTML fragments.
//!         - Containers: headlines, footnotes, cross references, formatting instructions,
//!           CSS formatting, grammar information, dictionary entries, variation texts and
//!           extra attributes. Each one owns a nested FormattedText.
//!
//!     Every element validates its fields in its constructor, so an element holding
//!     malformed data cannot exist. Constraints that depend on where an element sits in the
//!     tree (cross references only inside footnotes, headline ordering, whitespace rules)
//!     are checked later by the [validator](super::validation).

pub mod elements;
pub mod kinds;
mod patterns;
mod text_node;

pub use elements::FormattedElement;
pub use text_node::{FormattedText, SealedText};

/// Text at the beginning of a footnote that marks it as a list of cross references.
pub const XREF_MARKER: &str = "\u{2118} ";
