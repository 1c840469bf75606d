//! Closed enumerations carried by elements

use crate::formatted::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Kind of a formatting instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormattingInstructionKind {
    Bold,
    Italic,
    Underline,
    Link,
    /// Has to contain a footnote; the content is the link text for it (covered range).
    FootnoteLink,
    Subscript,
    Superscript,
    DivineName,
    StrikeThrough,
    WordsOfJesus,
}

impl FormattingInstructionKind {
    pub const ALL: [FormattingInstructionKind; 10] = [
        FormattingInstructionKind::Bold,
        FormattingInstructionKind::Italic,
        FormattingInstructionKind::Underline,
        FormattingInstructionKind::Link,
        FormattingInstructionKind::FootnoteLink,
        FormattingInstructionKind::Subscript,
        FormattingInstructionKind::Superscript,
        FormattingInstructionKind::DivineName,
        FormattingInstructionKind::StrikeThrough,
        FormattingInstructionKind::WordsOfJesus,
    ];

    /// Single lowercase letter identifying the kind in compact encodings.
    pub fn code(self) -> char {
        match self {
            FormattingInstructionKind::Bold => 'b',
            FormattingInstructionKind::Italic => 'i',
            FormattingInstructionKind::Underline => 'u',
            FormattingInstructionKind::Link => 'l',
            FormattingInstructionKind::FootnoteLink => 'f',
            FormattingInstructionKind::Subscript => 's',
            FormattingInstructionKind::Superscript => 'p',
            FormattingInstructionKind::DivineName => 'd',
            FormattingInstructionKind::StrikeThrough => 't',
            FormattingInstructionKind::WordsOfJesus => 'w',
        }
    }

    /// Plain HTML tag rendering this kind, if there is one.
    pub fn html_tag(self) -> Option<&'static str> {
        match self {
            FormattingInstructionKind::Bold => Some("b"),
            FormattingInstructionKind::Italic => Some("i"),
            FormattingInstructionKind::Underline => Some("u"),
            FormattingInstructionKind::Subscript => Some("sub"),
            FormattingInstructionKind::Superscript => Some("sup"),
            _ => None,
        }
    }

    /// Inline CSS equivalent.
    pub fn css(self) -> &'static str {
        match self {
            FormattingInstructionKind::Bold => "font-weight: bold;",
            FormattingInstructionKind::Italic => "font-style: italic;",
            FormattingInstructionKind::Underline => "text-decoration: underline;",
            FormattingInstructionKind::Link | FormattingInstructionKind::FootnoteLink => {
                "color: blue;"
            }
            FormattingInstructionKind::Subscript => "font-size: .83em; vertical-align: sub;",
            FormattingInstructionKind::Superscript => "font-size: .83em; vertical-align: super;",
            FormattingInstructionKind::DivineName => "font-variant: small-caps;",
            FormattingInstructionKind::StrikeThrough => "text-decoration: line-through;",
            FormattingInstructionKind::WordsOfJesus => "color: red;",
        }
    }

    pub fn from_code(code: char) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::invalid_field("kind", code, "unknown formatting code"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBreakKind {
    Paragraph,
    Newline,
    NewlineWithIndent,
}

/// Where a raw HTML fragment should be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RawHtmlMode {
    Online,
    Offline,
    Both,
}

/// How consumers without explicit support for an extra attribute must treat it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraAttributePriority {
    /// Ignore the attribute, keep its content.
    KeepContent,
    /// Drop the attribute together with its content.
    Skip,
    /// Refuse to process the attribute at all.
    Error,
}

/// Outcome of [ExtraAttributePriority::resolve].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraAttributeHandling {
    /// Descend into the content as if the attribute were not there.
    KeepContent,
    /// Do not descend.
    SkipContent,
}

impl ExtraAttributePriority {
    /// Decide what a consumer without support for `category` does with the attribute.
    pub fn resolve(self, category: &str) -> Result<ExtraAttributeHandling> {
        match self {
            ExtraAttributePriority::KeepContent => Ok(ExtraAttributeHandling::KeepContent),
            ExtraAttributePriority::Skip => Ok(ExtraAttributeHandling::SkipContent),
            ExtraAttributePriority::Error => Err(Error::UnhandledExtraAttribute {
                category: category.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_lowercase_letters() {
        let mut codes: Vec<char> = FormattingInstructionKind::ALL
            .iter()
            .map(|k| k.code())
            .collect();
        assert!(codes.iter().all(|c| c.is_ascii_lowercase()));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), FormattingInstructionKind::ALL.len());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            FormattingInstructionKind::from_code('w').unwrap(),
            FormattingInstructionKind::WordsOfJesus
        );
        assert!(matches!(
            FormattingInstructionKind::from_code('z'),
            Err(Error::InvalidField { field: "kind", .. })
        ));
    }

    #[test]
    fn test_html_tags() {
        assert_eq!(FormattingInstructionKind::Superscript.html_tag(), Some("sup"));
        assert_eq!(FormattingInstructionKind::DivineName.html_tag(), None);
    }

    #[test]
    fn test_extra_attribute_resolution() {
        assert_eq!(
            ExtraAttributePriority::KeepContent.resolve("lang"),
            Ok(ExtraAttributeHandling::KeepContent)
        );
        assert_eq!(
            ExtraAttributePriority::Skip.resolve("lang"),
            Ok(ExtraAttributeHandling::SkipContent)
        );
        assert_eq!(
            ExtraAttributePriority::Error.resolve("lang"),
            Err(Error::UnhandledExtraAttribute {
                category: "lang".to_string()
            })
        );
    }
}
