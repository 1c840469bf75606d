//! Whitespace normalization of open trees
//!
//! [FormattedText::trim_whitespace] rewrites every body run of a tree until nothing changes:
//!
//! - adjacent text leaves are merged, collapsing the double space at the seam,
//! - a leading space is dropped from text at the start of a run or after a line break or
//!   headline,
//! - a trailing space is dropped from text at the end of a run or before a line break or
//!   headline,
//! - text left empty by trimming is removed.
//!
//! The result passes the whitespace rules of the validator, and a second pass is a no-op.

use crate::formatted::ast::elements::{FormattedElement, Text};
use crate::formatted::ast::FormattedText;
use crate::formatted::building::merge_texts;
use crate::formatted::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Leave whitespace exactly as built.
    pub keep_whitespace: bool,
}

impl FormattedText {
    /// Normalize whitespace in this node and all nodes below it.
    pub fn trim_whitespace(&mut self, options: NormalizeOptions) -> Result<()> {
        if self.is_finished() {
            return Err(Error::illegal_state(
                "cannot normalize formatted text that is already finished",
            ));
        }
        if options.keep_whitespace {
            debug!("whitespace normalization disabled");
            return Ok(());
        }
        let passes = self.normalize_runs()?;
        debug!(passes, "normalized whitespace");
        Ok(())
    }

    /// Returns the number of passes over this node's body run that changed something.
    fn normalize_runs(&mut self) -> Result<usize> {
        for headline in &mut self.headlines {
            headline.content.normalize_runs()?;
        }
        for element in &mut self.elements {
            if let Some(content) = element.content_mut() {
                content.normalize_runs()?;
            }
        }
        let mut passes = 0;
        while normalize_pass(&mut self.elements)? {
            passes += 1;
        }
        Ok(passes)
    }
}

fn normalize_pass(elements: &mut Vec<FormattedElement>) -> Result<bool> {
    let mut changed = false;
    let mut i = 0;
    while i < elements.len() {
        let Some(current) = elements[i].as_text().map(|t| t.as_str().to_owned()) else {
            i += 1;
            continue;
        };

        if i > 0 {
            if let Some(previous) = elements[i - 1].as_text() {
                let merged = Text::new(merge_texts(previous.as_str(), &current))?;
                elements[i - 1] = FormattedElement::Text(merged);
                elements.remove(i);
                changed = true;
                continue;
            }
        }

        let at_start = i == 0 || elements[i - 1].is_block_boundary();
        let at_end = i + 1 == elements.len() || elements[i + 1].is_block_boundary();
        let mut trimmed = current.as_str();
        if at_start {
            trimmed = trimmed.strip_prefix(' ').unwrap_or(trimmed);
        }
        if at_end {
            trimmed = trimmed.strip_suffix(' ').unwrap_or(trimmed);
        }
        if trimmed.len() != current.len() {
            changed = true;
            if trimmed.is_empty() {
                elements.remove(i);
                continue;
            }
            elements[i] = FormattedElement::Text(Text::new(trimmed)?);
        }
        i += 1;
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatted::ast::kinds::LineBreakKind;
    use crate::formatted::visitor::Visitor;

    fn texts(node: &FormattedText) -> Vec<String> {
        node.elements()
            .iter()
            .map(|e| match e.as_text() {
                Some(t) => t.as_str().to_string(),
                None => format!("<{}>", e.element_type()),
            })
            .collect()
    }

    #[test]
    fn test_trims_around_line_breaks() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_text(" a ").unwrap();
            builder.visit_line_break(LineBreakKind::Newline).unwrap();
            builder.visit_text(" b ").unwrap();
        }
        text.trim_whitespace(NormalizeOptions::default()).unwrap();
        assert_eq!(texts(&text), vec!["a", "<LineBreak>", "b"]);
    }

    #[test]
    fn test_lone_space_is_removed() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_text(" ").unwrap();
            builder.visit_verse_separator().unwrap();
        }
        text.trim_whitespace(NormalizeOptions::default()).unwrap();
        assert_eq!(texts(&text), vec!["<VerseSeparator>"]);
    }

    #[test]
    fn test_leading_space_after_inline_element_is_kept() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_text("a").unwrap();
            builder.visit_footnote().unwrap().unwrap().visit_text("n").unwrap();
            builder.visit_text(" b").unwrap();
        }
        text.trim_whitespace(NormalizeOptions::default()).unwrap();
        assert_eq!(texts(&text), vec!["a", "<Footnote>", " b"]);
    }

    #[test]
    fn test_keep_whitespace_leaves_tree_alone() {
        let mut text = FormattedText::new();
        text.append_visitor().unwrap().visit_text(" a ").unwrap();
        let before = text.clone();
        text.trim_whitespace(NormalizeOptions {
            keep_whitespace: true,
        })
        .unwrap();
        assert_eq!(text, before);
    }

    #[test]
    fn test_nested_content_is_normalized() {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_headline(1).unwrap().unwrap().visit_text(" Title ").unwrap();
        }
        text.trim_whitespace(NormalizeOptions::default()).unwrap();
        assert_eq!(texts(text.headlines()[0].content()), vec!["Title"]);
    }

    #[test]
    fn test_finished_tree_is_rejected() {
        let mut text = FormattedText::new();
        text.finish().unwrap();
        assert!(matches!(
            text.trim_whitespace(NormalizeOptions::default()),
            Err(Error::IllegalState(_))
        ));
    }
}
