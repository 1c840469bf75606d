//! Bible data model boundary
//!
//!     The formatted-text core does not own books, chapters or verses. It only needs to
//!     resolve the endpoints of a cross reference while validating, so this module defines
//!     the narrow lookup surface it consumes:
//!
//!         - [BookId]: the closed set of book identifiers, with OSIS names.
//!         - [Bible] / [BibleBook] / [BibleChapter]: pure, synchronous lookups.
//!         - [MemoryBible]: a small in-memory implementation for callers (and tests) that
//!           only need verse indices.
//!
//!     Lookups never fail: an unknown book or verse is reported as `None` and turned into a
//!     dangling reference by the validator.

mod book_id;
mod lookup;

pub use book_id::BookId;
pub use lookup::{
    verse_index, Bible, BibleBook, BibleChapter, MemoryBible, MemoryBook, MemoryChapter,
};
