//! Dump format
//!
//! An s-expression listing of the tree, one node or inline item per line, nested by two
//! spaces. Strings are quoted with Rust escaping, so control characters (the vertical tab
//! separating line block entries, for instance) stay visible.
//!
//!     (Document
//!       (Heading 1
//!         "Title")
//!       (List Number Dot
//!         (ListItem 1
//!           (Paragraph
//!             "one"
//!             (Highlighted em "two")))))
//!
//! Tests compare dumps, so the format must stay stable.

use super::registry::{FormatError, FormatParams, Formatter};
use crate::rst::ast::{Document, Inline, Node, TextRegion};

/// Dumps a whole document.
pub fn to_dump_str(doc: &Document) -> String {
    let mut dumper = Dumper::default();
    dumper.open(0, "Document".to_string());
    for item in &doc.items {
        dumper.node(1, item);
    }
    dumper.close();
    dumper.lines.join("\n")
}

/// Dumps one node and its descendants.
pub fn dump_node(node: &Node) -> String {
    let mut dumper = Dumper::default();
    dumper.node(0, node);
    dumper.lines.join("\n")
}

/// Renders a region on one line.
pub fn dump_region(region: &TextRegion) -> String {
    match region {
        TextRegion::Highlighted { text, color } => format!("(Highlighted {} {:?})", color, text),
        TextRegion::Link {
            text,
            url: Some(url),
        } => format!("(Link {:?} {:?})", text, url),
        TextRegion::Link { text, url: None } => format!("(Link {:?})", text),
        TextRegion::NoWrap(inner) => format!("(NoWrap {})", dump_region(inner)),
    }
}

#[derive(Default)]
struct Dumper {
    lines: Vec<String>,
}

impl Dumper {
    fn line(&mut self, depth: usize, text: String) {
        self.lines.push(format!("{}{}", "  ".repeat(depth), text));
    }

    fn open(&mut self, depth: usize, header: String) {
        self.line(depth, format!("({}", header));
    }

    fn close(&mut self) {
        if let Some(last) = self.lines.last_mut() {
            last.push(')');
        }
    }

    fn inlines(&mut self, depth: usize, items: &[Inline]) {
        for item in items {
            let text = match item {
                Inline::Text(text) => format!("{:?}", text),
                Inline::Region(region) => dump_region(region),
            };
            self.line(depth, text);
        }
    }

    fn nodes(&mut self, depth: usize, items: &[Node]) {
        for item in items {
            self.node(depth, item);
        }
    }

    fn node(&mut self, depth: usize, node: &Node) {
        match node {
            Node::ThematicBreak => self.open(depth, "ThematicBreak".to_string()),
            Node::Heading(heading) => {
                self.open(depth, format!("Heading {}", heading.level));
                self.inlines(depth + 1, &heading.items);
            }
            Node::Paragraph(paragraph) => {
                self.open(depth, "Paragraph".to_string());
                self.inlines(depth + 1, &paragraph.items);
            }
            Node::Quote(quote) => {
                self.open(depth, "Quote".to_string());
                self.nodes(depth + 1, &quote.items);
            }
            Node::List(list) => {
                let header = match list.marker_kind {
                    Some(marker) => format!("List {} {}", list.enumerator_kind, marker),
                    None => format!("List {}", list.enumerator_kind),
                };
                self.open(depth, header);
                for item in &list.items {
                    match item.number {
                        Some(number) => self.open(depth + 1, format!("ListItem {}", number)),
                        None => self.open(depth + 1, "ListItem".to_string()),
                    }
                    self.nodes(depth + 2, &item.items);
                    self.close();
                }
            }
            Node::Code(code) => {
                self.open(depth, format!("Code {:?}", code.syntax));
                for line in &code.lines {
                    self.line(depth + 1, format!("{:?}", line));
                }
            }
            Node::Admonition(admonition) => {
                self.open(depth, format!("Admonition {}", admonition.kind));
                self.open(depth + 1, "Title".to_string());
                self.inlines(depth + 2, &admonition.title);
                self.close();
                self.nodes(depth + 1, &admonition.items);
            }
            Node::FootnoteContainer(container) => {
                self.open(depth, "FootnoteContainer".to_string());
                for footnote in &container.items {
                    self.open(depth + 1, format!("Footnote {:?}", footnote.marker));
                    self.nodes(depth + 2, &footnote.items);
                    self.close();
                }
            }
        }
        self.close();
    }
}

/// Formatter implementation for the dump format
pub struct DumpFormatter;

impl Formatter for DumpFormatter {
    fn name(&self) -> &str {
        "dump"
    }

    fn serialize(&self, doc: &Document, _params: &FormatParams) -> Result<String, FormatError> {
        Ok(to_dump_str(doc))
    }

    fn description(&self) -> &str {
        "S-expression listing of blocks and inline regions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::parser::parse;

    #[test]
    fn dumps_blocks_and_inlines() {
        let doc = parse(concat!(
            "Title\n=====\n\n",
            "1. one\n2. *two*\n\n",
            ".. note::\n\n   See `docs`_.\n\n",
            ".. _docs: https://d.example",
        ));
        insta::assert_snapshot!(to_dump_str(&doc), @r###"
        (Document
          (Heading 1
            "Title")
          (List Number Dot
            (ListItem 1
              (Paragraph
                "one"))
            (ListItem 2
              (Paragraph
                (Highlighted em "two"))))
          (Admonition note
            (Title
              "Note")
            (Paragraph
              "See "
              (Link "docs" "https://d.example")
              ".")))
        "###);
    }

    #[test]
    fn dumps_code_and_footnotes() {
        let doc = parse("----\n\n>>> x\n\n.. [#] A note.");
        insta::assert_snapshot!(to_dump_str(&doc), @r###"
        (Document
          (ThematicBreak)
          (Code "python"
            ">>> x")
          (FootnoteContainer
            (Footnote "1"
              (Paragraph
                "A note."))))
        "###);
    }

    #[test]
    fn dumps_nested_regions() {
        let region = TextRegion::no_wrap(TextRegion::highlighted("x", "code"));
        assert_eq!(dump_region(&region), r#"(NoWrap (Highlighted code "x"))"#);
        assert_eq!(dump_region(&TextRegion::link("a", None)), r#"(Link "a")"#);
    }

    #[test]
    fn dumps_bullet_list_node() {
        let doc = parse("- a");
        assert_eq!(
            dump_node(&doc.items[0]),
            "(List '-'\n  (ListItem\n    (Paragraph\n      \"a\")))"
        );
    }
}
