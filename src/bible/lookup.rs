//! Verse lookups consumed by cross-reference validation

use super::BookId;

/// A collection of books that cross references can point into.
pub trait Bible {
    type Book: BibleBook;

    /// Find the book with the given abbreviation and identifier.
    fn lookup_book(&self, abbreviation: &str, id: BookId) -> Option<&Self::Book>;
}

/// A book: an ordered run of chapters numbered from 1.
pub trait BibleBook {
    type Chapter: BibleChapter;

    fn chapter_count(&self) -> usize;

    /// Chapter by its 1-based number.
    fn chapter(&self, number: usize) -> Option<&Self::Chapter>;
}

/// A chapter: an ordered run of verse labels.
pub trait BibleChapter {
    /// Position of the verse with the given label, `None` if the chapter has no such verse.
    fn verse_index(&self, verse: &str) -> Option<usize>;
}

/// Resolve a single cross-reference endpoint.
///
/// Returns `None` when the book is unknown, the chapter lies beyond the end of the book,
/// or the chapter has no verse with that label.
pub fn verse_index<B: Bible + ?Sized>(
    bible: &B,
    abbreviation: &str,
    id: BookId,
    chapter: u32,
    verse: &str,
) -> Option<usize> {
    let book = bible.lookup_book(abbreviation, id)?;
    let number = chapter as usize;
    if number == 0 || book.chapter_count() < number {
        return None;
    }
    book.chapter(number)?.verse_index(verse)
}

/// In-memory [Bible] built from explicit verse labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBible {
    books: Vec<MemoryBook>,
}

impl MemoryBible {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, book: MemoryBook) -> Self {
        self.books.push(book);
        self
    }
}

impl Bible for MemoryBible {
    type Book = MemoryBook;

    fn lookup_book(&self, abbreviation: &str, id: BookId) -> Option<&MemoryBook> {
        self.books
            .iter()
            .find(|book| book.id == id && book.abbreviation == abbreviation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBook {
    abbreviation: String,
    id: BookId,
    chapters: Vec<MemoryChapter>,
}

impl MemoryBook {
    pub fn new(abbreviation: impl Into<String>, id: BookId) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            id,
            chapters: Vec::new(),
        }
    }

    /// Append the next chapter.
    pub fn with_chapter(mut self, chapter: MemoryChapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    /// Append the next chapter with verses labelled `1..=verse_count`.
    pub fn with_numbered_chapter(self, verse_count: usize) -> Self {
        self.with_chapter(MemoryChapter::numbered(verse_count))
    }
}

impl BibleBook for MemoryBook {
    type Chapter = MemoryChapter;

    fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    fn chapter(&self, number: usize) -> Option<&MemoryChapter> {
        self.chapters.get(number.checked_sub(1)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryChapter {
    verses: Vec<String>,
}

impl MemoryChapter {
    pub fn new<I, S>(verses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verses: verses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numbered(verse_count: usize) -> Self {
        Self::new((1..=verse_count).map(|n| n.to_string()))
    }
}

impl BibleChapter for MemoryChapter {
    fn verse_index(&self, verse: &str) -> Option<usize> {
        self.verses.iter().position(|label| label == verse)
    }
}
