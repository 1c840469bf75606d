//! Field patterns enforced at construction time
//!
//! Every string carried by an element is checked against one of these patterns before the
//! element exists, so no tree ever holds malformed field data.

use crate::formatted::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of non-space, non-control characters separated by single spaces.
const NORMALIZED_WHITESPACE: &str = r"[^ \p{Cc}]+(?: [^ \p{Cc}]+)*";

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("field pattern compiles")
}

/// Normalized whitespace, optionally with one leading and/or one trailing space, or a
/// lone space.
pub(crate) static TEXT: Lazy<Regex> =
    Lazy::new(|| anchored(&format!(" |(?: )?{NORMALIZED_WHITESPACE}(?: )?")));

pub(crate) static RAW_HTML: Lazy<Regex> = Lazy::new(|| anchored(NORMALIZED_WHITESPACE));

pub(crate) static BOOK_ABBR: Lazy<Regex> =
    Lazy::new(|| anchored(r"[\p{Lu}\p{Lt}0-9][\p{L}0-9]*"));

/// Verse labels: `5`, `5a`, `5G`, and compound forms such as `5.1` or `5/6`.
pub(crate) static VERSE: Lazy<Regex> =
    Lazy::new(|| anchored(r"[1-9][0-9]*[a-zG]?(?:[.,/][1-9][0-9]*[a-zG]?)?"));

/// Robinson's Morphological Analysis Codes.
pub(crate) static RMAC: Lazy<Regex> = Lazy::new(|| {
    anchored(concat!(
        r"(?:ADV|CONJ|COND|PRT|PREP|INJ|ARAM|HEB|N-PRI|A-NUI|N-LI|N-OI)(?:-[A-Z]{3})?",
        r"|[NARCDTKIXQFSP](?:-[123]?[NVGDA][SP][MFN]?)?(?:-(?:S|C|ABB|I|N|K|ATT|ARAM|HEB))?",
        r"|V-(?:[PIFARLX]|2[FARL])[AMPEDONQX][ISOMNP](?:-(?:[123][SP]|[NGDAV][SPD][MFN]))?(?:-ATT|-ARAM|-HEB)?",
    ))
});

pub(crate) static CSS: Lazy<Regex> = Lazy::new(|| anchored(r#"[^\p{Cc}"<>&]*"#));

pub(crate) static ALNUM: Lazy<Regex> = Lazy::new(|| anchored("[A-Za-z0-9]+"));

pub(crate) static ALNUM_HYPHEN: Lazy<Regex> = Lazy::new(|| anchored("[A-Za-z0-9-]+"));

pub(crate) static LOWER_ALNUM: Lazy<Regex> = Lazy::new(|| anchored("[a-z0-9]+"));

pub(crate) static LOWER_ALNUM_HYPHEN: Lazy<Regex> = Lazy::new(|| anchored("[a-z0-9-]+"));

/// Check `value` against `pattern`, naming `field` in the error.
pub(crate) fn validate_string(field: &'static str, value: &str, pattern: &Regex) -> Result<()> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid_field(
            field,
            value,
            format!("must match {}", pattern.as_str()),
        ))
    }
}

/// Check that `value` lies within `min..=max`.
pub(crate) fn validate_number(field: &'static str, value: u32, min: u32, max: u32) -> Result<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::invalid_field(
            field,
            value,
            format!("must be between {min} and {max}"),
        ))
    }
}
