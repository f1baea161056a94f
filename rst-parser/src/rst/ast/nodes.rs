//! Block nodes
//!
//!     The tree is a plain enum: every block kind is a variant of [Node], and walkers match on it
//!     exhaustively. Containers own their children directly.
//!
//!     Examples:
//!
//!         Title
//!         =====
//!
//!         - item
//!
//!     parses into
//!
//!         Document
//!           Heading(level 1, "Title")
//!           List(bullet '-')
//!             ListItem
//!               Paragraph("item")

use super::inline::Inline;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub items: Vec<Node>,
}

impl Document {
    pub fn new(items: Vec<Node>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Any block that can appear in a document or a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    ThematicBreak,
    Heading(Heading),
    Paragraph(Paragraph),
    Quote(Quote),
    List(List),
    Code(Code),
    Admonition(Admonition),
    FootnoteContainer(FootnoteContainer),
}

/// Section title. Levels start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub items: Vec<Inline>,
}

impl Heading {
    pub fn new(level: usize, title: impl Into<String>) -> Self {
        Self {
            level,
            items: vec![Inline::text(title)],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub items: Vec<Inline>,
}

impl Paragraph {
    /// Paragraph with one raw item per source line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: lines.into_iter().map(Inline::text).collect(),
        }
    }
}

/// Block quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    pub items: Vec<Node>,
}

/// Numbering alphabet of a list, or the bullet character of a bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnumeratorKind {
    Bullet(char),
    /// `1, 2, 3`
    Number,
    /// `a, b, c`
    SmallLetter,
    /// `A, B, C`
    CapitalLetter,
    /// `i, ii, iii`
    SmallRoman,
    /// `I, II, III`
    CapitalRoman,
}

impl EnumeratorKind {
    pub fn is_bullet(&self) -> bool {
        matches!(self, EnumeratorKind::Bullet(_))
    }
}

impl fmt::Display for EnumeratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumeratorKind::Bullet(ch) => write!(f, "{:?}", ch),
            EnumeratorKind::Number => f.write_str("Number"),
            EnumeratorKind::SmallLetter => f.write_str("SmallLetter"),
            EnumeratorKind::CapitalLetter => f.write_str("CapitalLetter"),
            EnumeratorKind::SmallRoman => f.write_str("SmallRoman"),
            EnumeratorKind::CapitalRoman => f.write_str("CapitalRoman"),
        }
    }
}

/// Punctuation around an enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    /// `1.`
    Dot,
    /// `1)`
    Paren,
    /// `(1)`
    Enclosed,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Dot => f.write_str("Dot"),
            MarkerKind::Paren => f.write_str("Paren"),
            MarkerKind::Enclosed => f.write_str("Enclosed"),
        }
    }
}

/// A run of list items sharing enumerator and marker kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub enumerator_kind: EnumeratorKind,
    /// `None` for bullet lists.
    pub marker_kind: Option<MarkerKind>,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(enumerator_kind: EnumeratorKind, marker_kind: Option<MarkerKind>) -> Self {
        Self {
            enumerator_kind,
            marker_kind,
            items: Vec::new(),
        }
    }

    /// Number of the last item, if the list is numbered and not empty.
    pub fn last_number(&self) -> Option<u64> {
        self.items.last().and_then(|item| item.number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub items: Vec<Node>,
    pub number: Option<u64>,
}

impl ListItem {
    pub fn new(number: Option<u64>) -> Self {
        Self {
            items: Vec::new(),
            number,
        }
    }
}

/// Literal, doctest or directive code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub lines: Vec<String>,
    pub syntax: String,
}

impl Code {
    pub fn new(lines: Vec<String>, syntax: impl Into<String>) -> Self {
        Self {
            lines,
            syntax: syntax.into(),
        }
    }
}

/// Titled block: field list entries, definition list entries and directive admonitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admonition {
    pub title: Vec<Inline>,
    /// `field`, `definition`, or the directive name (`note`, `warning`, ...).
    pub kind: String,
    pub items: Vec<Node>,
}

impl Admonition {
    pub fn new(title: impl Into<String>, kind: impl Into<String>, items: Vec<Node>) -> Self {
        Self {
            title: vec![Inline::text(title)],
            kind: kind.into(),
            items,
        }
    }
}

/// Adjacent footnotes, rendered compactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootnoteContainer {
    pub items: Vec<Footnote>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub items: Vec<Node>,
    /// Visible label: explicit name, auto number or auto symbol.
    pub marker: String,
}

impl Footnote {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            marker: marker.into(),
        }
    }
}

impl Node {
    /// Inline items of text-bearing nodes.
    pub fn text_items(&self) -> Option<&[Inline]> {
        match self {
            Node::Heading(heading) => Some(&heading.items),
            Node::Paragraph(paragraph) => Some(&paragraph.items),
            _ => None,
        }
    }
}

impl From<Heading> for Node {
    fn from(node: Heading) -> Self {
        Node::Heading(node)
    }
}

impl From<Paragraph> for Node {
    fn from(node: Paragraph) -> Self {
        Node::Paragraph(node)
    }
}

impl From<Quote> for Node {
    fn from(node: Quote) -> Self {
        Node::Quote(node)
    }
}

impl From<List> for Node {
    fn from(node: List) -> Self {
        Node::List(node)
    }
}

impl From<Code> for Node {
    fn from(node: Code) -> Self {
        Node::Code(node)
    }
}

impl From<Admonition> for Node {
    fn from(node: Admonition) -> Self {
        Node::Admonition(node)
    }
}

impl From<FootnoteContainer> for Node {
    fn from(node: FootnoteContainer) -> Self {
        Node::FootnoteContainer(node)
    }
}
