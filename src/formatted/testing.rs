//! Testing utilities for formatted text
//!
//!     Trees are easy to build and tedious to inspect by hand. [assert_text] starts a fluent
//!     assertion chain over a node; every step carries a context path such as
//!     `text.elements[1].content.elements[0]` so a failing assertion names the exact spot.
//!
//!     ```rust,ignore
//!     use bible_text::formatted::testing::assert_text;
//!
//!     assert_text(&tree)
//!         .headline_count(1)
//!         .element_count(2)
//!         .element(0, |e| {
//!             e.assert_text().text("In the beginning");
//!         })
//!         .element(1, |e| {
//!             e.assert_footnote().element_count(1);
//!         });
//!     ```
//!
//!     For whole-tree comparisons prefer [signatures](super::signature) or
//!     [snapshots](super::snapshot) together with insta.

mod assertions;
pub mod matchers;

pub use assertions::{
    CrossReferenceAssertion, ElementAssertion, HeadlineAssertion, TextAssertion,
    TextLeafAssertion,
};
pub use matchers::TextMatch;

use super::ast::FormattedText;

/// Start an assertion chain on `text`.
pub fn assert_text(text: &FormattedText) -> TextAssertion<'_> {
    TextAssertion {
        text,
        context: "text".to_string(),
    }
}
