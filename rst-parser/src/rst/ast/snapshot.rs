//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! The snapshot captures the tree as node types, labels, attributes and children, so that
//! every serializer (JSON, YAML, treeviz) works off the same traversal instead of walking the
//! AST on its own. Inline items of text-bearing nodes appear as children of type `Text`,
//! `Highlighted`, `Link` and `NoWrap`.

use super::inline::{Inline, TextRegion};
use super::nodes::{Document, Footnote, ListItem, Node};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Paragraph", "List", "Link")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute to this snapshot
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children
    pub fn with_children(mut self, children: impl IntoIterator<Item = AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Build a snapshot for the document root.
pub fn snapshot_from_document(doc: &Document) -> AstSnapshot {
    AstSnapshot::new(doc.node_type(), doc.display_label())
        .with_children(doc.items.iter().map(snapshot_from_node))
}

/// Build a snapshot of a block node and all its descendants.
pub fn snapshot_from_node(node: &Node) -> AstSnapshot {
    let snapshot = AstSnapshot::new(node.node_type(), node.display_label());
    match node {
        Node::ThematicBreak => snapshot,
        Node::Heading(heading) => snapshot
            .with_attribute("level", heading.level.to_string())
            .with_children(heading.items.iter().map(snapshot_from_inline)),
        Node::Paragraph(paragraph) => {
            snapshot.with_children(paragraph.items.iter().map(snapshot_from_inline))
        }
        Node::Quote(quote) => snapshot.with_children(quote.items.iter().map(snapshot_from_node)),
        Node::List(list) => {
            let snapshot = snapshot.with_attribute("enumerator", list.enumerator_kind.to_string());
            let snapshot = match list.marker_kind {
                Some(marker) => snapshot.with_attribute("marker", marker.to_string()),
                None => snapshot,
            };
            snapshot.with_children(list.items.iter().map(snapshot_from_list_item))
        }
        Node::Code(code) => snapshot.with_children(
            code.lines
                .iter()
                .map(|line| AstSnapshot::new("CodeLine", line.as_str())),
        ),
        Node::Admonition(admonition) => snapshot
            .with_attribute("kind", admonition.kind.as_str())
            .with_children(admonition.items.iter().map(snapshot_from_node)),
        Node::FootnoteContainer(container) => {
            snapshot.with_children(container.items.iter().map(snapshot_from_footnote))
        }
    }
}

fn snapshot_from_list_item(item: &ListItem) -> AstSnapshot {
    AstSnapshot::new(item.node_type(), item.display_label())
        .with_children(item.items.iter().map(snapshot_from_node))
}

fn snapshot_from_footnote(footnote: &Footnote) -> AstSnapshot {
    AstSnapshot::new(footnote.node_type(), footnote.display_label())
        .with_children(footnote.items.iter().map(snapshot_from_node))
}

/// Build a snapshot of one inline item.
pub fn snapshot_from_inline(item: &Inline) -> AstSnapshot {
    match item {
        Inline::Text(text) => AstSnapshot::new("Text", text.as_str()),
        Inline::Region(region) => snapshot_from_region(region),
    }
}

fn snapshot_from_region(region: &TextRegion) -> AstSnapshot {
    match region {
        TextRegion::Highlighted { text, color } => {
            AstSnapshot::new("Highlighted", text.as_str()).with_attribute("color", color.as_str())
        }
        TextRegion::Link { text, url } => {
            let snapshot = AstSnapshot::new("Link", text.as_str());
            match url {
                Some(url) => snapshot.with_attribute("url", url.as_str()),
                None => snapshot,
            }
        }
        TextRegion::NoWrap(inner) => {
            AstSnapshot::new("NoWrap", inner.content()).with_child(snapshot_from_region(inner))
        }
    }
}
