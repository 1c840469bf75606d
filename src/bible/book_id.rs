//! Book identifiers
//!
//! The closed set of canonical books, keyed by their OSIS names. Cross references carry a
//! `BookId` next to the (free-form) abbreviation used in the source text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a canonical book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BookId {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    FirstSamuel,
    SecondSamuel,
    FirstKings,
    SecondKings,
    FirstChronicles,
    SecondChronicles,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSongs,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    FirstCorinthians,
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    FirstThessalonians,
    SecondThessalonians,
    FirstTimothy,
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    FirstPeter,
    SecondPeter,
    FirstJohn,
    SecondJohn,
    ThirdJohn,
    Jude,
    Revelation,
}

impl BookId {
    /// The OSIS identifier of this book (e.g. `Gen`, `1Cor`).
    pub fn osis_id(self) -> &'static str {
        match self {
            BookId::Genesis => "Gen",
            BookId::Exodus => "Exod",
            BookId::Leviticus => "Lev",
            BookId::Numbers => "Num",
            BookId::Deuteronomy => "Deut",
            BookId::Joshua => "Josh",
            BookId::Judges => "Judg",
            BookId::Ruth => "Ruth",
            BookId::FirstSamuel => "1Sam",
            BookId::SecondSamuel => "2Sam",
            BookId::FirstKings => "1Kgs",
            BookId::SecondKings => "2Kgs",
            BookId::FirstChronicles => "1Chr",
            BookId::SecondChronicles => "2Chr",
            BookId::Ezra => "Ezra",
            BookId::Nehemiah => "Neh",
            BookId::Esther => "Esth",
            BookId::Job => "Job",
            BookId::Psalms => "Ps",
            BookId::Proverbs => "Prov",
            BookId::Ecclesiastes => "Eccl",
            BookId::SongOfSongs => "Song",
            BookId::Isaiah => "Isa",
            BookId::Jeremiah => "Jer",
            BookId::Lamentations => "Lam",
            BookId::Ezekiel => "Ezek",
            BookId::Daniel => "Dan",
            BookId::Hosea => "Hos",
            BookId::Joel => "Joel",
            BookId::Amos => "Amos",
            BookId::Obadiah => "Obad",
            BookId::Jonah => "Jonah",
            BookId::Micah => "Mic",
            BookId::Nahum => "Nah",
            BookId::Habakkuk => "Hab",
            BookId::Zephaniah => "Zeph",
            BookId::Haggai => "Hag",
            BookId::Zechariah => "Zech",
            BookId::Malachi => "Mal",
            BookId::Matthew => "Matt",
            BookId::Mark => "Mark",
            BookId::Luke => "Luke",
            BookId::John => "John",
            BookId::Acts => "Acts",
            BookId::Romans => "Rom",
            BookId::FirstCorinthians => "1Cor",
            BookId::SecondCorinthians => "2Cor",
            BookId::Galatians => "Gal",
            BookId::Ephesians => "Eph",
            BookId::Philippians => "Phil",
            BookId::Colossians => "Col",
            BookId::FirstThessalonians => "1Thess",
            BookId::SecondThessalonians => "2Thess",
            BookId::FirstTimothy => "1Tim",
            BookId::SecondTimothy => "2Tim",
            BookId::Titus => "Titus",
            BookId::Philemon => "Phlm",
            BookId::Hebrews => "Heb",
            BookId::James => "Jas",
            BookId::FirstPeter => "1Pet",
            BookId::SecondPeter => "2Pet",
            BookId::FirstJohn => "1John",
            BookId::SecondJohn => "2John",
            BookId::ThirdJohn => "3John",
            BookId::Jude => "Jude",
            BookId::Revelation => "Rev",
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.osis_id())
    }
}
