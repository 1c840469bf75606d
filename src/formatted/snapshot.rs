//! Serializable snapshots of formatted text
//!
//! A [TextSnapshot] is a plain data copy of a tree: node type, a label for the node's
//! main string (text, CSS, raw markup, reference), its remaining fields as string
//! attributes, and its children. Headline-run entries are kept apart from the body run so
//! that the two runs survive a round trip through JSON or YAML.
//!
//! Snapshots are built by driving a [FormattedText] through the visitor protocol, like
//! every other consumer of the tree.

use crate::bible::BookId;
use crate::formatted::ast::kinds::{
    ExtraAttributePriority, FormattingInstructionKind, LineBreakKind, RawHtmlMode,
};
use crate::formatted::ast::FormattedText;
use crate::formatted::visitor::{Nested, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSnapshot {
    /// The type of node (e.g. "FormattedText", "Footnote", "Text")
    pub node_type: String,

    /// The primary string of the node, empty if it has none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Headline run, only ever set on FormattedText nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headlines: Vec<TextSnapshot>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TextSnapshot>,
}

impl TextSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        TextSnapshot {
            node_type: node_type.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Snapshot of a whole tree.
    pub fn from_text(text: &FormattedText) -> Self {
        let mut root = TextSnapshot::new("FormattedText", "");
        let mut visitor = SnapshotVisitor {
            node: &mut root,
            started: false,
        };
        if let Err(never) = text.accept(&mut visitor) {
            match never {}
        }
        root
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl FormattedText {
    pub fn snapshot(&self) -> TextSnapshot {
        TextSnapshot::from_text(self)
    }
}

/// The serialized name of a unit enum variant.
fn serialized_name<T: Serialize>(value: T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|value| value.as_str().map(str::to_owned))
        .unwrap_or_default()
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

struct SnapshotVisitor<'a> {
    node: &'a mut TextSnapshot,
    started: bool,
}

impl SnapshotVisitor<'_> {
    fn run(&mut self) -> &mut Vec<TextSnapshot> {
        if self.started {
            &mut self.node.children
        } else {
            &mut self.node.headlines
        }
    }

    fn leaf(&mut self, snapshot: TextSnapshot) -> Result<(), Infallible> {
        self.node.children.push(snapshot);
        Ok(())
    }

    fn container(&mut self, snapshot: TextSnapshot) -> Result<Nested<'_, Infallible>, Infallible> {
        let run = self.run();
        run.push(snapshot);
        Ok(run.last_mut().map(nested))
    }
}

fn nested(node: &mut TextSnapshot) -> Box<dyn Visitor<Error = Infallible> + '_> {
    Box::new(SnapshotVisitor {
        node,
        started: false,
    })
}

impl Visitor for SnapshotVisitor<'_> {
    type Error = Infallible;

    fn visit_headline(&mut self, depth: u8) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container(TextSnapshot::new("Headline", "").with_attribute("depth", depth))
    }

    fn visit_start(&mut self) -> Result<(), Infallible> {
        self.started = true;
        Ok(())
    }

    fn visit_text(&mut self, text: &str) -> Result<(), Infallible> {
        self.leaf(TextSnapshot::new("Text", text))
    }

    fn visit_footnote(&mut self) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container(TextSnapshot::new("Footnote", ""))
    }

    fn visit_cross_reference(
        &mut self,
        book_abbr: &str,
        book: BookId,
        first_chapter: u32,
        first_verse: &str,
        last_chapter: u32,
        last_verse: &str,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        let label = format!("{book_abbr} {first_chapter}:{first_verse}-{last_chapter}:{last_verse}");
        self.container(TextSnapshot::new("CrossReference", label).with_attribute("book", book))
    }

    fn visit_formatting_instruction(
        &mut self,
        kind: FormattingInstructionKind,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container(
            TextSnapshot::new("FormattingInstruction", "")
                .with_attribute("kind", serialized_name(kind)),
        )
    }

    fn visit_css_formatting(&mut self, css: &str) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container(TextSnapshot::new("CSSFormatting", css))
    }

    fn visit_verse_separator(&mut self) -> Result<(), Infallible> {
        self.leaf(TextSnapshot::new("VerseSeparator", ""))
    }

    fn visit_line_break(&mut self, kind: LineBreakKind) -> Result<(), Infallible> {
        self.leaf(TextSnapshot::new("LineBreak", "").with_attribute("kind", serialized_name(kind)))
    }

    fn visit_grammar_information(
        &mut self,
        strongs: &[u32],
        rmac: Option<&[String]>,
        source_indices: Option<&[u32]>,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        let mut snapshot =
            TextSnapshot::new("GrammarInformation", "").with_attribute("strongs", join(strongs));
        if let Some(rmac) = rmac {
            snapshot = snapshot.with_attribute("rmac", join(rmac));
        }
        if let Some(indices) = source_indices {
            snapshot = snapshot.with_attribute("sourceIndices", join(indices));
        }
        self.container(snapshot)
    }

    fn visit_dictionary_entry(
        &mut self,
        dictionary: &str,
        entry: &str,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container(
            TextSnapshot::new("DictionaryEntry", entry).with_attribute("dictionary", dictionary),
        )
    }

    fn visit_raw_html(&mut self, mode: RawHtmlMode, raw: &str) -> Result<(), Infallible> {
        self.leaf(TextSnapshot::new("RawHTML", raw).with_attribute("mode", serialized_name(mode)))
    }

    fn visit_variation_text(
        &mut self,
        variations: &[String],
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container(TextSnapshot::new("VariationText", join(variations)))
    }

    fn visit_extra_attribute(
        &mut self,
        priority: ExtraAttributePriority,
        category: &str,
        key: &str,
        value: &str,
    ) -> Result<Nested<'_, Infallible>, Infallible> {
        self.container(
            TextSnapshot::new("ExtraAttribute", "")
                .with_attribute("priority", serialized_name(priority))
                .with_attribute("category", category)
                .with_attribute("key", key)
                .with_attribute("value", value),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FormattedText {
        let mut text = FormattedText::new();
        {
            let mut builder = text.append_visitor().unwrap();
            builder.visit_headline(1).unwrap().unwrap().visit_text("Title").unwrap();
            builder.visit_text("Word").unwrap();
            builder.visit_line_break(LineBreakKind::NewlineWithIndent).unwrap();
        }
        text
    }

    #[test]
    fn test_runs_are_kept_apart() {
        let snapshot = sample().snapshot();
        assert_eq!(snapshot.headlines.len(), 1);
        assert_eq!(snapshot.headlines[0].attributes["depth"], "1");
        assert_eq!(snapshot.headlines[0].children[0].label, "Title");
        assert_eq!(snapshot.children.len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&sample().snapshot().to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "node_type": "FormattedText",
                "headlines": [{
                    "node_type": "Headline",
                    "attributes": {"depth": "1"},
                    "children": [{"node_type": "Text", "label": "Title"}]
                }],
                "children": [
                    {"node_type": "Text", "label": "Word"},
                    {"node_type": "LineBreak", "attributes": {"kind": "newline-with-indent"}}
                ]
            })
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let snapshot = sample().snapshot();
        let yaml = snapshot.to_yaml().unwrap();
        let parsed: TextSnapshot = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
