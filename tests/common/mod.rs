//! Shared tree-building helpers for integration tests

#![allow(dead_code)]

use bible_text::bible::{BookId, MemoryBible, MemoryBook, MemoryChapter};
use bible_text::formatted::{Builder, Error, FormattedText, LineBreakKind, Visitor};

/// Build an open tree by feeding calls to its builder.
pub fn open_tree<F>(build: F) -> FormattedText
where
    F: FnOnce(&mut Builder<'_>) -> bible_text::Result<()>,
{
    let mut text = FormattedText::new();
    {
        let mut builder = text.append_visitor().expect("fresh tree is open");
        build(&mut builder).expect("tree builds");
    }
    text
}

/// Build and seal a tree.
pub fn sealed_tree<F>(build: F) -> FormattedText
where
    F: FnOnce(&mut Builder<'_>) -> bible_text::Result<()>,
{
    let mut text = open_tree(build);
    text.finish().expect("fresh tree seals");
    text
}

/// Compact operations used by property tests.
#[derive(Debug, Clone)]
pub enum Op {
    Text(&'static str),
    LineBreak,
    VerseSeparator,
    Headline(u8, Vec<&'static str>),
    Footnote(Vec<Op>),
}

pub fn apply<V>(visitor: &mut V, op: &Op) -> bible_text::Result<()>
where
    V: Visitor<Error = Error> + ?Sized,
{
    match op {
        Op::Text(text) => visitor.visit_text(text),
        Op::LineBreak => visitor.visit_line_break(LineBreakKind::Newline),
        Op::VerseSeparator => visitor.visit_verse_separator(),
        Op::Headline(depth, texts) => {
            if let Some(mut headline) = visitor.visit_headline(*depth)? {
                for text in texts {
                    headline.visit_text(text)?;
                }
            }
            Ok(())
        }
        Op::Footnote(ops) => {
            if let Some(mut footnote) = visitor.visit_footnote()? {
                for op in ops {
                    apply(&mut *footnote, op)?;
                }
            }
            Ok(())
        }
    }
}

/// John with 3 chapters, 36 verses in chapter 3.
pub fn bible() -> MemoryBible {
    MemoryBible::new().with_book(
        MemoryBook::new("Joh", BookId::John)
            .with_chapter(MemoryChapter::numbered(51))
            .with_chapter(MemoryChapter::numbered(25))
            .with_chapter(MemoryChapter::numbered(36)),
    )
}
