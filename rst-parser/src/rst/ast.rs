//! AST definitions and utilities for parsed rst documents
//!
//!     This module provides the document tree produced by the parser. The tree is deliberately
//!     small: it models what a terminal renderer or a documentation backend needs to draw the
//!     document, not every construct of the reStructuredText specification.
//!
//! Blocks and Text
//!
//!     Block nodes ([Node]) either contain other blocks (quotes, list items, admonitions,
//!     footnotes) or text. Text-bearing nodes (headings and paragraphs, plus admonition titles)
//!     hold a sequence of [Inline] items. Right after block parsing each item is one raw source
//!     line; the inline pass then replaces them with plain strings and [TextRegion]s.
//!
//!     Code blocks are the only leaves that keep raw lines after parsing.
//!
//! Cleanup
//!
//!     Empty containers are pruned from the tree before inline processing, see
//!     [clean_tree](cleanup::clean_tree).

pub mod cleanup;
pub mod inline;
pub mod nodes;
pub mod snapshot;
pub mod traits;

pub use cleanup::clean_tree;
pub use inline::{Inline, TextRegion};
pub use nodes::{
    Admonition, Code, Document, EnumeratorKind, Footnote, FootnoteContainer, Heading, List,
    ListItem, MarkerKind, Node, Paragraph, Quote,
};
pub use snapshot::{snapshot_from_document, snapshot_from_node, AstSnapshot};
pub use traits::AstNode;
