//! Tree cleanup run between block parsing and inline processing.
//!
//! Block handlers create containers eagerly, before they know whether anything ends up inside.
//! Empty quotes, lists and footnote containers, and text nodes without text, are removed here so
//! renderers never see them. List items, admonitions and footnotes are kept even when empty: an
//! empty `- ` item or a `.. note::` without body is still meaningful.

use super::inline::Inline;
use super::nodes::{Document, Node};

/// Removes empty containers from the document, depth first.
pub fn clean_tree(document: &mut Document) {
    clean_items(&mut document.items);
}

fn clean_items(items: &mut Vec<Node>) {
    for item in items.iter_mut() {
        clean_node(item);
    }
    items.retain(|item| !is_empty(item));
}

fn clean_node(node: &mut Node) {
    match node {
        Node::Quote(quote) => clean_items(&mut quote.items),
        Node::List(list) => {
            for item in &mut list.items {
                clean_items(&mut item.items);
            }
        }
        Node::Admonition(admonition) => clean_items(&mut admonition.items),
        Node::FootnoteContainer(container) => {
            for footnote in &mut container.items {
                clean_items(&mut footnote.items);
            }
        }
        Node::ThematicBreak | Node::Heading(_) | Node::Paragraph(_) | Node::Code(_) => {}
    }
}

fn is_empty(node: &Node) -> bool {
    match node {
        Node::Quote(quote) => quote.items.is_empty(),
        Node::List(list) => list.items.is_empty(),
        Node::FootnoteContainer(container) => container.items.is_empty(),
        Node::Heading(heading) => is_blank_text(&heading.items),
        Node::Paragraph(paragraph) => is_blank_text(&paragraph.items),
        Node::ThematicBreak | Node::Code(_) | Node::Admonition(_) => false,
    }
}

fn is_blank_text(items: &[Inline]) -> bool {
    items.iter().all(|item| match item {
        Inline::Text(text) => text.trim().is_empty(),
        Inline::Region(_) => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::ast::nodes::{EnumeratorKind, List, ListItem, Paragraph, Quote};

    #[test]
    fn prunes_nested_empty_containers() {
        let quote = Quote {
            items: vec![
                Node::Quote(Quote::default()),
                Paragraph::from_lines([""]).into(),
            ],
        };
        let mut doc = Document::new(vec![quote.into(), Paragraph::from_lines(["kept"]).into()]);
        clean_tree(&mut doc);
        assert_eq!(doc.items.len(), 1);
        assert!(matches!(doc.items[0], Node::Paragraph(_)));
    }

    #[test]
    fn keeps_empty_list_items() {
        let mut list = List::new(EnumeratorKind::Bullet('-'), None);
        list.items.push(ListItem::new(None));
        let mut doc = Document::new(vec![list.into()]);
        clean_tree(&mut doc);
        match &doc.items[0] {
            Node::List(list) => assert_eq!(list.items.len(), 1),
            other => panic!("Expected List, found {:?}", other),
        }
    }
}
