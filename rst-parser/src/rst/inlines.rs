//! Inline markup
//!
//!     After block parsing, every text-bearing node holds its raw source lines. The inline pass
//!     joins them with newlines and runs a single forward scan over the result, recognizing
//!     emphasis, strong emphasis, inline literals, interpreted text with roles, hyperlink
//!     references, footnote references and substitution references.
//!
//!     Recognition follows the reStructuredText word-boundary rules: a start string must
//!     follow whitespace or opening punctuation and be followed by non-whitespace, and an end
//!     string mirrors that (see [punctuation]). Anything that does not satisfy the rules, or
//!     is never closed, stays plain text. The scanner never fails.
//!
//!     Link and footnote references are resolved against the document's [LinkResolver], and
//!     role rendering is delegated to the [RoleHandler] hook.

pub mod parser;
pub mod punctuation;

pub use parser::{parse_inlines, InlineParser};

use crate::rst::ast::{Document, Inline, Node};
use crate::rst::diagnostics::Diagnostic;
use crate::rst::hooks::RoleHandler;
use crate::rst::links::LinkResolver;

/// Replaces raw lines with tokenized inline content in every text-bearing node, including
/// admonition titles.
pub fn process_document(
    document: &mut Document,
    resolver: &mut LinkResolver,
    roles: &dyn RoleHandler,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut pass = InlinePass {
        resolver,
        roles,
        diagnostics,
    };
    pass.process_items(&mut document.items);
}

struct InlinePass<'a> {
    resolver: &'a mut LinkResolver,
    roles: &'a dyn RoleHandler,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl InlinePass<'_> {
    fn process_items(&mut self, items: &mut [Node]) {
        for item in items {
            self.process_node(item);
        }
    }

    fn process_node(&mut self, node: &mut Node) {
        match node {
            Node::Heading(heading) => self.process_text(&mut heading.items),
            Node::Paragraph(paragraph) => self.process_text(&mut paragraph.items),
            Node::Quote(quote) => self.process_items(&mut quote.items),
            Node::List(list) => {
                for item in &mut list.items {
                    self.process_items(&mut item.items);
                }
            }
            Node::Admonition(admonition) => {
                self.process_text(&mut admonition.title);
                self.process_items(&mut admonition.items);
            }
            Node::FootnoteContainer(container) => {
                for footnote in &mut container.items {
                    self.process_items(&mut footnote.items);
                }
            }
            Node::ThematicBreak | Node::Code(_) => {}
        }
    }

    fn process_text(&mut self, items: &mut Vec<Inline>) {
        let source = items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        *items = parse_inlines(&source, self.resolver, self.roles, self.diagnostics);
    }
}
