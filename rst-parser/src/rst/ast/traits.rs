//! AST traits - uniform access to node information
//!
//! [AstNode] gives every node a type name and a short label, used by the snapshot builder and
//! the test assertions.

use super::inline::plain_text;
use super::nodes::{Document, Footnote, ListItem, Node};

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} items", self.items.len())
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::ThematicBreak => "ThematicBreak",
            Node::Heading(_) => "Heading",
            Node::Paragraph(_) => "Paragraph",
            Node::Quote(_) => "Quote",
            Node::List(_) => "List",
            Node::Code(_) => "Code",
            Node::Admonition(_) => "Admonition",
            Node::FootnoteContainer(_) => "FootnoteContainer",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::ThematicBreak => String::new(),
            Node::Heading(heading) => plain_text(&heading.items),
            Node::Paragraph(paragraph) => plain_text(&paragraph.items),
            Node::Quote(quote) => format!("{} items", quote.items.len()),
            Node::List(list) => match list.marker_kind {
                Some(marker) => format!("{} {}", list.enumerator_kind, marker),
                None => list.enumerator_kind.to_string(),
            },
            Node::Code(code) => code.syntax.clone(),
            Node::Admonition(admonition) => plain_text(&admonition.title),
            Node::FootnoteContainer(container) => format!("{} footnotes", container.items.len()),
        }
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        "ListItem"
    }

    fn display_label(&self) -> String {
        self.number.map(|n| n.to_string()).unwrap_or_default()
    }
}

impl AstNode for Footnote {
    fn node_type(&self) -> &'static str {
        "Footnote"
    }

    fn display_label(&self) -> String {
        self.marker.clone()
    }
}
