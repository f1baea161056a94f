//! Fluent assertion API for AST nodes
//!
//!     Every assertion carries a context string naming the path from the document root,
//!     e.g. `items[2]:items[0]:children[1]`, so a failure points at the node that broke.
//!     Methods consume and return `self`, and descend into children through closures.

use super::matchers::TextMatch;
use crate::rst::ast::inline::plain_text;
use crate::rst::ast::{
    Admonition, AstNode, Code, Document, EnumeratorKind, Footnote, FootnoteContainer, Heading,
    Inline, List, ListItem, MarkerKind, Node, Paragraph, Quote, TextRegion,
};

/// Starts a fluent assertion on a document.
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_items(items: &[Node]) -> String {
    items
        .iter()
        .map(|item| item.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

fn child_assertion<'a>(items: &'a [Node], index: usize, context: &str) -> NodeAssertion<'a> {
    assert!(
        index < items.len(),
        "{}: Child index {} out of bounds ({} children: [{}])",
        context,
        index,
        items.len(),
        summarize_items(items)
    );
    NodeAssertion {
        item: &items[index],
        context: format!("{}:children[{}]", context, index),
    }
}

fn assert_child_count(items: &[Node], expected: usize, context: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: Expected {} children, found {}: [{}]",
        context,
        expected,
        items.len(),
        summarize_items(items)
    );
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top level items
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.items.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_items(&self.doc.items)
        );
        self
    }

    /// Assert on a specific item by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.items.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.items.len()
        );
        assertion(NodeAssertion {
            item: &self.doc.items[index],
            context: format!("items[{}]", index),
        });
        self
    }

    pub fn is_empty(self) -> Self {
        assert!(
            self.doc.is_empty(),
            "Expected an empty document, found [{}]",
            summarize_items(&self.doc.items)
        );
        self
    }
}

pub struct NodeAssertion<'a> {
    item: &'a Node,
    context: String,
}

macro_rules! expect_variant {
    ($self:ident, $variant:ident, $assertion:ident, $field:ident) => {
        match $self.item {
            Node::$variant(node) => $assertion {
                $field: node,
                context: $self.context,
            },
            other => panic!(
                "{}: Expected {}, found {}",
                $self.context,
                stringify!($variant),
                other.node_type()
            ),
        }
    };
}

impl<'a> NodeAssertion<'a> {
    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.item.node_type(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.item.node_type()
        );
        self
    }

    pub fn assert_heading(self) -> HeadingAssertion<'a> {
        expect_variant!(self, Heading, HeadingAssertion, heading)
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        expect_variant!(self, Paragraph, ParagraphAssertion, paragraph)
    }

    pub fn assert_quote(self) -> QuoteAssertion<'a> {
        expect_variant!(self, Quote, QuoteAssertion, quote)
    }

    pub fn assert_list(self) -> ListAssertion<'a> {
        expect_variant!(self, List, ListAssertion, list)
    }

    pub fn assert_code(self) -> CodeAssertion<'a> {
        expect_variant!(self, Code, CodeAssertion, code)
    }

    pub fn assert_admonition(self) -> AdmonitionAssertion<'a> {
        expect_variant!(self, Admonition, AdmonitionAssertion, admonition)
    }

    pub fn assert_footnotes(self) -> FootnotesAssertion<'a> {
        expect_variant!(self, FootnoteContainer, FootnotesAssertion, container)
    }

    pub fn assert_thematic_break(self) {
        assert!(
            matches!(self.item, Node::ThematicBreak),
            "{}: Expected ThematicBreak, found {}",
            self.context,
            self.item.node_type()
        );
    }
}

fn inline_assertion<'a>(items: &'a [Inline], index: usize, context: &str) -> InlineAssertion<'a> {
    assert!(
        index < items.len(),
        "{}: Inline index {} out of bounds ({} inlines)",
        context,
        index,
        items.len()
    );
    InlineAssertion {
        inline: &items[index],
        context: format!("{}:inlines[{}]", context, index),
    }
}

pub struct HeadingAssertion<'a> {
    heading: &'a Heading,
    context: String,
}

impl<'a> HeadingAssertion<'a> {
    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.heading.level, expected,
            "{}: Expected heading level {}, found {}",
            self.context, expected, self.heading.level
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(&plain_text(&self.heading.items), &self.context);
        self
    }
}

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// Assert the visible text, regions included
    pub fn text(self, expected: &str) -> Self {
        self.text_matches(TextMatch::Exact(expected.to_string()))
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        self.text_matches(TextMatch::StartsWith(prefix.to_string()))
    }

    pub fn text_contains(self, substring: &str) -> Self {
        self.text_matches(TextMatch::Contains(substring.to_string()))
    }

    /// Assert the visible text line by line
    pub fn lines(self, expected: &[&str]) -> Self {
        self.text_matches(TextMatch::Lines(
            expected.iter().map(|line| line.to_string()).collect(),
        ))
    }

    fn text_matches(self, matcher: TextMatch) -> Self {
        matcher.assert(&plain_text(&self.paragraph.items), &self.context);
        self
    }

    pub fn inline_count(self, expected: usize) -> Self {
        assert_eq!(
            self.paragraph.items.len(),
            expected,
            "{}: Expected {} inlines, found {}: {:?}",
            self.context,
            expected,
            self.paragraph.items.len(),
            self.paragraph.items
        );
        self
    }

    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assertion(inline_assertion(&self.paragraph.items, index, &self.context));
        self
    }
}

pub struct InlineAssertion<'a> {
    inline: &'a Inline,
    context: String,
}

impl<'a> InlineAssertion<'a> {
    fn region(&self) -> &'a TextRegion {
        match self.inline {
            Inline::Region(region) => region,
            Inline::Text(text) => panic!(
                "{}: Expected a region, found text '{}'",
                self.context, text
            ),
        }
    }

    pub fn is_text(self, expected: &str) -> Self {
        match self.inline {
            Inline::Text(text) => {
                TextMatch::Exact(expected.to_string()).assert(text, &self.context)
            }
            Inline::Region(region) => panic!(
                "{}: Expected text '{}', found region {:?}",
                self.context, expected, region
            ),
        }
        self
    }

    /// Assert the visible text of a region
    pub fn content(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.region().content(), &self.context);
        self
    }

    /// Assert the color path, looking through no-wrap wrappers
    pub fn color(self, expected: &str) -> Self {
        let actual = self.region().color();
        assert_eq!(
            actual,
            Some(expected),
            "{}: Expected color {}, found {:?}",
            self.context,
            expected,
            actual
        );
        self
    }

    /// Assert a link and its target; `None` for an unresolved reference
    pub fn link(self, expected: Option<&str>) -> Self {
        match self.region() {
            TextRegion::Link { url, .. } => assert_eq!(
                url.as_deref(),
                expected,
                "{}: Expected link to {:?}, found {:?}",
                self.context,
                expected,
                url
            ),
            other => panic!("{}: Expected Link, found {:?}", self.context, other),
        }
        self
    }

    pub fn no_wrap(self) -> Self {
        assert!(
            matches!(self.region(), TextRegion::NoWrap(_)),
            "{}: Expected NoWrap, found {:?}",
            self.context,
            self.inline
        );
        self
    }
}

pub struct QuoteAssertion<'a> {
    quote: &'a Quote,
    context: String,
}

impl<'a> QuoteAssertion<'a> {
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.quote.items, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(child_assertion(&self.quote.items, index, &self.context));
        self
    }
}

pub struct ListAssertion<'a> {
    list: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn enumerator(self, expected: EnumeratorKind) -> Self {
        assert_eq!(
            self.list.enumerator_kind, expected,
            "{}: Expected enumerator {}, found {}",
            self.context, expected, self.list.enumerator_kind
        );
        self
    }

    pub fn bullet(self, expected: char) -> Self {
        self.enumerator(EnumeratorKind::Bullet(expected))
    }

    pub fn marker(self, expected: Option<MarkerKind>) -> Self {
        assert_eq!(
            self.list.marker_kind, expected,
            "{}: Expected marker {:?}, found {:?}",
            self.context, expected, self.list.marker_kind
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.list.items.len(),
            expected,
            "{}: Expected {} list items, found {}",
            self.context,
            expected,
            self.list.items.len()
        );
        self
    }

    /// Assert the numbers of all items at once
    pub fn numbers(self, expected: &[Option<u64>]) -> Self {
        let actual: Vec<_> = self.list.items.iter().map(|item| item.number).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected item numbers {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        assert!(
            index < self.list.items.len(),
            "{}: List item index {} out of bounds ({} items)",
            self.context,
            index,
            self.list.items.len()
        );
        assertion(ListItemAssertion {
            item: &self.list.items[index],
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }
}

pub struct ListItemAssertion<'a> {
    item: &'a ListItem,
    context: String,
}

impl<'a> ListItemAssertion<'a> {
    pub fn number(self, expected: Option<u64>) -> Self {
        assert_eq!(
            self.item.number, expected,
            "{}: Expected item number {:?}, found {:?}",
            self.context, expected, self.item.number
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.item.items, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(child_assertion(&self.item.items, index, &self.context));
        self
    }
}

pub struct CodeAssertion<'a> {
    code: &'a Code,
    context: String,
}

impl<'a> CodeAssertion<'a> {
    pub fn syntax(self, expected: &str) -> Self {
        assert_eq!(
            self.code.syntax, expected,
            "{}: Expected syntax '{}', found '{}'",
            self.context, expected, self.code.syntax
        );
        self
    }

    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.code.lines, expected,
            "{}: Expected code lines {:?}, found {:?}",
            self.context, expected, self.code.lines
        );
        self
    }
}

pub struct AdmonitionAssertion<'a> {
    admonition: &'a Admonition,
    context: String,
}

impl<'a> AdmonitionAssertion<'a> {
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(
            self.admonition.kind, expected,
            "{}: Expected admonition kind '{}', found '{}'",
            self.context, expected, self.admonition.kind
        );
        self
    }

    pub fn title(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
            .assert(&plain_text(&self.admonition.title), &self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.admonition.items, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(child_assertion(&self.admonition.items, index, &self.context));
        self
    }
}

pub struct FootnotesAssertion<'a> {
    container: &'a FootnoteContainer,
    context: String,
}

impl<'a> FootnotesAssertion<'a> {
    /// Assert the markers of all footnotes, in order
    pub fn markers(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self
            .container
            .items
            .iter()
            .map(|footnote| footnote.marker.as_str())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Expected footnote markers {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn footnote<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(FootnoteAssertion<'a>),
    {
        assert!(
            index < self.container.items.len(),
            "{}: Footnote index {} out of bounds ({} footnotes)",
            self.context,
            index,
            self.container.items.len()
        );
        assertion(FootnoteAssertion {
            footnote: &self.container.items[index],
            context: format!("{}:footnotes[{}]", self.context, index),
        });
        self
    }
}

pub struct FootnoteAssertion<'a> {
    footnote: &'a Footnote,
    context: String,
}

impl<'a> FootnoteAssertion<'a> {
    pub fn marker(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.footnote.marker, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(child_assertion(&self.footnote.items, index, &self.context));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::ast::Paragraph;

    fn doc() -> Document {
        Document::new(vec![
            Heading::new(1, "Title").into(),
            Paragraph::from_lines(["Hello world"]).into(),
        ])
    }

    #[test]
    fn test_fluent_chain() {
        assert_ast(&doc())
            .item_count(2)
            .item(0, |item| {
                item.assert_heading().level(1).text("Title");
            })
            .item(1, |item| {
                item.assert_paragraph()
                    .text_starts_with("Hello")
                    .text_contains("world")
                    .inline(0, |inline| {
                        inline.is_text("Hello world");
                    });
            });
    }

    #[test]
    #[should_panic(expected = "items[1]: Expected Heading, found Paragraph")]
    fn test_wrong_variant_names_path() {
        assert_ast(&doc()).item(1, |item| {
            item.assert_heading();
        });
    }

    #[test]
    #[should_panic(expected = "Expected 3 items, found 2 items: [Heading, Paragraph]")]
    fn test_item_count_summarizes() {
        assert_ast(&doc()).item_count(3);
    }
}
