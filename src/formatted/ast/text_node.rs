//! The FormattedText node and its sealed handle

use super::elements::{FormattedElement, Headline};
use crate::formatted::building::Builder;
use crate::formatted::error::{Error, Result};
use crate::formatted::visitor::Visitor;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// A node of formatted text: a headline run followed by a body run.
///
/// Headlines appended while the body run is still empty land in the headline run; once
/// any other element exists they are appended to the body run instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedText {
    pub(crate) headlines: Vec<Headline>,
    pub(crate) elements: Vec<FormattedElement>,
    finished: bool,
}

impl FormattedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headlines(&self) -> &[Headline] {
        &self.headlines
    }

    pub fn elements(&self) -> &[FormattedElement] {
        &self.elements
    }

    /// True if neither run holds anything.
    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty() && self.elements.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// A builder appending to this node.
    pub fn append_visitor(&mut self) -> Result<Builder<'_>> {
        self.ensure_open("append to")?;
        Ok(Builder::new(self))
    }

    /// Drive `visitor` over this node.
    ///
    /// Runs signature negotiation, the headline run, `visit_start`, the body run and
    /// `visit_end`, repeating from the top for as long as `visit_end` asks for a replay.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        loop {
            let mut depth = visitor.visit_element_types(None)?;
            while depth > 0 {
                let element_types = self.signature_unchecked(depth);
                depth = visitor.visit_element_types(Some(&element_types))?;
            }
            for headline in &self.headlines {
                headline.accept(visitor)?;
            }
            visitor.visit_start()?;
            for element in &self.elements {
                element.accept(visitor)?;
            }
            if !visitor.visit_end()? {
                return Ok(());
            }
        }
    }

    /// Remove and return the last body element, if any.
    pub fn remove_last_element(&mut self) -> Result<Option<FormattedElement>> {
        self.ensure_open("remove elements from")?;
        Ok(self.elements.pop())
    }

    /// Seal this node and everything below it.
    pub fn finish(&mut self) -> Result<()> {
        self.ensure_open("finish")?;
        self.seal();
        debug!(
            headlines = self.headlines.len(),
            elements = self.elements.len(),
            "sealed formatted text"
        );
        Ok(())
    }

    /// Seal and wrap into a shareable read-only handle.
    pub fn into_sealed(mut self) -> Result<SealedText> {
        self.finish()?;
        Ok(SealedText(Arc::new(self)))
    }

    /// Split into one new node per child.
    ///
    /// With `inner_content` each piece holds the child's content instead of the child
    /// itself, so leaves produce empty pieces. Headline-run headlines are only included
    /// when `include_headlines` is set.
    pub fn split_content(
        &self,
        include_headlines: bool,
        inner_content: bool,
    ) -> Result<Vec<FormattedText>> {
        let mut pieces = Vec::new();
        if include_headlines {
            for headline in &self.headlines {
                let mut piece = FormattedText::new();
                {
                    let mut builder = piece.append_visitor()?;
                    if inner_content {
                        headline.content().accept(&mut builder)?;
                    } else {
                        headline.accept(&mut builder)?;
                    }
                }
                pieces.push(piece);
            }
        }
        for element in &self.elements {
            let mut piece = FormattedText::new();
            {
                let mut builder = piece.append_visitor()?;
                match (inner_content, element.content()) {
                    (true, Some(content)) => content.accept(&mut builder)?,
                    (true, None) => {}
                    (false, _) => element.accept(&mut builder)?,
                }
            }
            pieces.push(piece);
        }
        Ok(pieces)
    }

    fn ensure_open(&self, action: &str) -> Result<()> {
        if self.finished {
            Err(Error::illegal_state(format!(
                "cannot {action} formatted text that is already finished"
            )))
        } else {
            Ok(())
        }
    }

    fn seal(&mut self) {
        self.finished = true;
        self.headlines.shrink_to_fit();
        self.elements.shrink_to_fit();
        for headline in &mut self.headlines {
            headline.content.seal();
        }
        for element in &mut self.elements {
            if let Some(content) = element.content_mut() {
                content.seal();
            }
        }
    }
}

/// A sealed tree behind a shared pointer.
///
/// Only reachable through [FormattedText::into_sealed], so holding one proves the tree
/// can no longer change. Cloning shares the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SealedText(Arc<FormattedText>);

impl Deref for SealedText {
    type Target = FormattedText;

    fn deref(&self) -> &FormattedText {
        &self.0
    }
}

impl AsRef<FormattedText> for SealedText {
    fn as_ref(&self) -> &FormattedText {
        &self.0
    }
}
