//! Decorators that reach nested content
//!
//! Overriding a few [Visitor] methods and forwarding the rest through [Visitor::next] only
//! decorates the scope it was installed at: container calls hand back the inner visitor's
//! child, undecorated. [VisitorAdapter] closes that gap. It forwards every call to the
//! visitor it wraps, runs [AdapterHooks::before_visit] ahead of every element, and passes
//! every nested child through [AdapterHooks::wrap_child] so the hooks can install
//! themselves one level down.
//!
//! The wrapped visitor and the hooks are separate fields, so a hook can be called while
//! the child it wraps still borrows the wrapped visitor.

use super::ast::kinds::{
    ExtraAttributePriority, FormattingInstructionKind, LineBreakKind, RawHtmlMode,
};
use super::visitor::{Nested, Visitor};
use crate::bible::BookId;

/// Behaviour a [VisitorAdapter] adds around the visitor it wraps.
pub trait AdapterHooks<E> {
    /// Runs before every element call (not before start, end or signature negotiation).
    fn before_visit(&mut self) -> Result<(), E> {
        Ok(())
    }

    /// Decorates a child visitor returned for a container.
    fn wrap_child<'v>(
        &mut self,
        child: Box<dyn Visitor<Error = E> + 'v>,
    ) -> Box<dyn Visitor<Error = E> + 'v> {
        child
    }
}

/// Hooks that descend into every container by wrapping each child in another adapter
/// holding a clone of themselves. State shared across levels belongs behind an `Rc`.
#[derive(Debug, Clone, Default)]
pub struct Descending<H>(pub H);

pub struct VisitorAdapter<V, H> {
    next: V,
    hooks: H,
}

impl<V, H> VisitorAdapter<V, H> {
    pub fn new(next: V, hooks: H) -> Self {
        Self { next, hooks }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn into_inner(self) -> (V, H) {
        (self.next, self.hooks)
    }
}

/// Per-element callback used by [Descending].
pub trait ElementHook<E> {
    fn before_visit(&mut self) -> Result<(), E>;
}

impl<E, H> AdapterHooks<E> for Descending<H>
where
    H: ElementHook<E> + Clone + 'static,
    E: 'static,
{
    fn before_visit(&mut self) -> Result<(), E> {
        self.0.before_visit()
    }

    fn wrap_child<'v>(
        &mut self,
        child: Box<dyn Visitor<Error = E> + 'v>,
    ) -> Box<dyn Visitor<Error = E> + 'v> {
        Box::new(VisitorAdapter::new(child, self.clone()))
    }
}

fn wrap<'v, E, H: AdapterHooks<E>>(hooks: &mut H, child: Nested<'v, E>) -> Nested<'v, E> {
    child.map(|child| hooks.wrap_child(child))
}

impl<V, H> Visitor for VisitorAdapter<V, H>
where
    V: Visitor,
    H: AdapterHooks<V::Error>,
{
    type Error = V::Error;

    fn next(&mut self) -> Option<&mut dyn Visitor<Error = V::Error>> {
        Some(&mut self.next)
    }

    fn visit_headline(&mut self, depth: u8) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self.next.visit_headline(depth)?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_text(&mut self, text: &str) -> Result<(), V::Error> {
        self.hooks.before_visit()?;
        self.next.visit_text(text)
    }

    fn visit_footnote(&mut self) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self.next.visit_footnote()?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_cross_reference(
        &mut self,
        book_abbr: &str,
        book: BookId,
        first_chapter: u32,
        first_verse: &str,
        last_chapter: u32,
        last_verse: &str,
    ) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self.next.visit_cross_reference(
            book_abbr,
            book,
            first_chapter,
            first_verse,
            last_chapter,
            last_verse,
        )?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_formatting_instruction(
        &mut self,
        kind: FormattingInstructionKind,
    ) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self.next.visit_formatting_instruction(kind)?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_css_formatting(&mut self, css: &str) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self.next.visit_css_formatting(css)?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_verse_separator(&mut self) -> Result<(), V::Error> {
        self.hooks.before_visit()?;
        self.next.visit_verse_separator()
    }

    fn visit_line_break(&mut self, kind: LineBreakKind) -> Result<(), V::Error> {
        self.hooks.before_visit()?;
        self.next.visit_line_break(kind)
    }

    fn visit_grammar_information(
        &mut self,
        strongs: &[u32],
        rmac: Option<&[String]>,
        source_indices: Option<&[u32]>,
    ) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self
            .next
            .visit_grammar_information(strongs, rmac, source_indices)?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_dictionary_entry(
        &mut self,
        dictionary: &str,
        entry: &str,
    ) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self.next.visit_dictionary_entry(dictionary, entry)?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_raw_html(&mut self, mode: RawHtmlMode, raw: &str) -> Result<(), V::Error> {
        self.hooks.before_visit()?;
        self.next.visit_raw_html(mode, raw)
    }

    fn visit_variation_text(
        &mut self,
        variations: &[String],
    ) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self.next.visit_variation_text(variations)?;
        Ok(wrap(&mut self.hooks, child))
    }

    fn visit_extra_attribute(
        &mut self,
        priority: ExtraAttributePriority,
        category: &str,
        key: &str,
        value: &str,
    ) -> Result<Nested<'_, V::Error>, V::Error> {
        self.hooks.before_visit()?;
        let child = self
            .next
            .visit_extra_attribute(priority, category, key, value)?;
        Ok(wrap(&mut self.hooks, child))
    }
}
