//! Traversal protocol
//!
//! [Visitor] is the single interface a tree produces when it is inspected and consumes when
//! it is built. Driving a node through [FormattedText::accept] looks like this:
//!
//! ```text
//! visit_element_types(None)          -> depth d  (0 = not needed)
//! visit_element_types(Some(sig(d)))  -> depth d' (loop until 0)
//! visit_headline(..)                 for each headline in the headline run
//! visit_start()
//! visit_text(..) / visit_footnote() / ...   for each element in the body run
//! visit_end()                        -> true replays the whole sequence from the top
//! ```
//!
//! Container calls return a [Nested] visitor for the element's own content, or `None` to
//! skip it. A nested visitor is driven to its own `visit_end` before the parent resumes,
//! which is why it may borrow from its parent.
//!
//! Every method has a default that forwards to [Visitor::next], and does nothing when
//! there is no next visitor. Implementations that care about a few calls override just
//! those; decorators return an inner visitor from `next` and override what they wrap.
//!
//! [FormattedText::accept]: super::FormattedText::accept

use super::ast::kinds::{
    ExtraAttributePriority, FormattingInstructionKind, LineBreakKind, RawHtmlMode,
};
use crate::bible::BookId;

/// Visitor for a container's content, or `None` to skip it.
pub type Nested<'v, E> = Option<Box<dyn Visitor<Error = E> + 'v>>;

pub trait Visitor {
    type Error;

    /// The visitor unhandled calls are forwarded to.
    fn next(&mut self) -> Option<&mut dyn Visitor<Error = Self::Error>> {
        None
    }

    /// Signature negotiation.
    ///
    /// Called first with `None`, then with the signature computed to the requested depth,
    /// until this returns 0.
    fn visit_element_types(&mut self, element_types: Option<&str>) -> Result<usize, Self::Error> {
        match self.next() {
            Some(next) => next.visit_element_types(element_types),
            None => Ok(0),
        }
    }

    fn visit_headline(&mut self, depth: u8) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_headline(depth),
            None => Ok(None),
        }
    }

    /// Marks the end of the headline run.
    fn visit_start(&mut self) -> Result<(), Self::Error> {
        match self.next() {
            Some(next) => next.visit_start(),
            None => Ok(()),
        }
    }

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error> {
        match self.next() {
            Some(next) => next.visit_text(text),
            None => Ok(()),
        }
    }

    fn visit_footnote(&mut self) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_footnote(),
            None => Ok(None),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn visit_cross_reference(
        &mut self,
        book_abbr: &str,
        book: BookId,
        first_chapter: u32,
        first_verse: &str,
        last_chapter: u32,
        last_verse: &str,
    ) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_cross_reference(
                book_abbr,
                book,
                first_chapter,
                first_verse,
                last_chapter,
                last_verse,
            ),
            None => Ok(None),
        }
    }

    fn visit_formatting_instruction(
        &mut self,
        kind: FormattingInstructionKind,
    ) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_formatting_instruction(kind),
            None => Ok(None),
        }
    }

    fn visit_css_formatting(&mut self, css: &str) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_css_formatting(css),
            None => Ok(None),
        }
    }

    fn visit_verse_separator(&mut self) -> Result<(), Self::Error> {
        match self.next() {
            Some(next) => next.visit_verse_separator(),
            None => Ok(()),
        }
    }

    fn visit_line_break(&mut self, kind: LineBreakKind) -> Result<(), Self::Error> {
        match self.next() {
            Some(next) => next.visit_line_break(kind),
            None => Ok(()),
        }
    }

    fn visit_grammar_information(
        &mut self,
        strongs: &[u32],
        rmac: Option<&[String]>,
        source_indices: Option<&[u32]>,
    ) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_grammar_information(strongs, rmac, source_indices),
            None => Ok(None),
        }
    }

    fn visit_dictionary_entry(
        &mut self,
        dictionary: &str,
        entry: &str,
    ) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_dictionary_entry(dictionary, entry),
            None => Ok(None),
        }
    }

    fn visit_raw_html(&mut self, mode: RawHtmlMode, raw: &str) -> Result<(), Self::Error> {
        match self.next() {
            Some(next) => next.visit_raw_html(mode, raw),
            None => Ok(()),
        }
    }

    fn visit_variation_text(
        &mut self,
        variations: &[String],
    ) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_variation_text(variations),
            None => Ok(None),
        }
    }

    fn visit_extra_attribute(
        &mut self,
        priority: ExtraAttributePriority,
        category: &str,
        key: &str,
        value: &str,
    ) -> Result<Nested<'_, Self::Error>, Self::Error> {
        match self.next() {
            Some(next) => next.visit_extra_attribute(priority, category, key, value),
            None => Ok(None),
        }
    }

    /// End of the node. Returning `true` replays the node as if it were unvisited.
    fn visit_end(&mut self) -> Result<bool, Self::Error> {
        match self.next() {
            Some(next) => next.visit_end(),
            None => Ok(false),
        }
    }
}

/// A boxed child visitor forwards everything to the visitor it holds, so it can itself be
/// wrapped (see [VisitorAdapter](super::adapter::VisitorAdapter)).
impl<'v, E> Visitor for Box<dyn Visitor<Error = E> + 'v> {
    type Error = E;

    fn next(&mut self) -> Option<&mut dyn Visitor<Error = E>> {
        Some(&mut **self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Visitor for Recorder {
        type Error = Infallible;

        fn visit_text(&mut self, text: &str) -> Result<(), Infallible> {
            self.calls.push(format!("text:{text}"));
            Ok(())
        }

        fn visit_footnote(&mut self) -> Result<Nested<'_, Infallible>, Infallible> {
            self.calls.push("footnote".to_string());
            Ok(None)
        }
    }

    /// Upper-cases text before handing it on.
    struct Shout<'a> {
        inner: &'a mut Recorder,
    }

    impl Visitor for Shout<'_> {
        type Error = Infallible;

        fn next(&mut self) -> Option<&mut dyn Visitor<Error = Infallible>> {
            Some(&mut *self.inner)
        }

        fn visit_text(&mut self, text: &str) -> Result<(), Infallible> {
            self.inner.visit_text(&text.to_uppercase())
        }
    }

    #[test]
    fn test_unhandled_calls_are_no_ops() {
        let mut recorder = Recorder::default();
        assert!(matches!(recorder.visit_headline(1), Ok(None)));
        assert!(matches!(recorder.visit_element_types(None), Ok(0)));
        assert!(matches!(recorder.visit_end(), Ok(false)));
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_decorator_overrides_selected_calls() {
        let mut recorder = Recorder::default();
        {
            let mut shout = Shout {
                inner: &mut recorder,
            };
            shout.visit_text("amen").unwrap();
            assert!(shout.visit_footnote().unwrap().is_none());
        }
        assert_eq!(recorder.calls, vec!["text:AMEN", "footnote"]);
    }
}
