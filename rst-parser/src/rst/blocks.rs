//! Block structure
//!
//!     Block parsing walks the line buffer top to bottom. At each non-blank line the dispatcher
//!     tries the block kinds in a fixed order and hands the line to the first handler that
//!     accepts it. A handler consumes one block, appends the resulting nodes to the parent
//!     container and returns the index of the first line it did not consume.
//!
//!     Containers (quotes, list items, footnotes, field and definition bodies, directive
//!     bodies) are parsed by the same dispatcher: the handler gathers the nested lines, strips
//!     their indentation in place and recurses over the gathered range.
//!
//! Dispatch order
//!
//!     1. literal block, when the previous paragraph ended with `::`
//!     2. heading with underline
//!     3. heading with overline and underline
//!     4. doctest block (`>>>`)
//!     5. block quote (indented line)
//!     6. line block (`| `)
//!     7. bullet list item
//!     8. numbered list item (may decline)
//!     9. explicit markup (`.. `)
//!     10. anonymous hyperlink target (`__ `)
//!     11. field list entry (`:name: `)
//!     12. definition list entry (next line indented)
//!     13. paragraph
//!
//!     The only state carried from one block to the next is whether the previous paragraph
//!     ended with a literal mark.
//!
//!     Containers nest at most [MAX_NESTING] levels deep. Lines below that depth are kept
//!     as a plain paragraph and reported as malformed markup.
//!
//!     Heading levels are assigned in order of first appearance of each adornment style, and
//!     collected targets go into a [LinkTable] that is resolved after the whole document is
//!     read.

pub mod handlers;
pub mod markers;

use std::collections::HashMap;

use crate::rst::ast::{Document, Node, Paragraph};
use crate::rst::diagnostics::{Diagnostic, DiagnosticKind};
use crate::rst::hooks::DirectiveHandler;
use crate::rst::lines::{is_blank, LineBuffer};
use crate::rst::links::LinkTable;
use crate::rst::parser::ParserOptions;

use markers::{
    anonymous_target_marker, bullet_marker, explicit_marker, field_marker, heading_overline,
    heading_underline, is_punctuation, line_block_marker, numbered_marker,
};

/// Deepest container nesting the dispatcher recurses into.
pub const MAX_NESTING: usize = 64;

/// How the previous block ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Normal,
    /// The previous paragraph ended with `::`; an indented or quoted block is literal.
    LiteralMark,
}

/// Everything the block pass produces.
#[derive(Debug)]
pub struct BlockOutput {
    pub document: Document,
    pub links: LinkTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Block parser for one document.
pub struct BlockParser<'h> {
    lines: LineBuffer,
    /// Heading level per `(adornment, has_overline)`.
    headings: HashMap<(char, bool), usize>,
    links: LinkTable,
    diagnostics: Vec<Diagnostic>,
    directives: &'h dyn DirectiveHandler,
    options: &'h ParserOptions,
    /// Containers currently open around the range being parsed.
    depth: usize,
}

impl<'h> BlockParser<'h> {
    pub fn new(
        lines: LineBuffer,
        directives: &'h dyn DirectiveHandler,
        options: &'h ParserOptions,
    ) -> Self {
        Self {
            lines,
            headings: HashMap::new(),
            links: LinkTable::new(),
            diagnostics: Vec::new(),
            directives,
            options,
            depth: 0,
        }
    }

    /// Parses the whole buffer.
    pub fn parse(mut self) -> BlockOutput {
        let mut items = Vec::new();
        let end = self.lines.len();
        self.process_block(&mut items, 0, end);
        BlockOutput {
            document: Document::new(items),
            links: self.links,
            diagnostics: self.diagnostics,
        }
    }

    /// Parses lines `start..end` into `items`.
    pub fn process_block(&mut self, items: &mut Vec<Node>, start: usize, end: usize) {
        if self.depth >= MAX_NESTING {
            self.flatten(items, start, end);
            return;
        }

        self.depth += 1;
        let mut i = start;
        let mut ending = LineEnding::Normal;
        while i < end {
            let (next, next_ending) = self.consume_block(items, i, end, ending);
            i = next.max(i + 1);
            ending = next_ending;
        }
        self.depth -= 1;
    }

    /// Keeps lines `start..end` as one paragraph without looking for blocks.
    fn flatten(&mut self, items: &mut Vec<Node>, start: usize, end: usize) {
        let lines: Vec<String> = self
            .lines
            .slice(start, end)
            .iter()
            .filter(|line| !is_blank(line))
            .cloned()
            .collect();
        if lines.is_empty() {
            return;
        }

        log::debug!("line {}: nesting deeper than {} levels", start, MAX_NESTING);
        self.diagnostics.push(
            Diagnostic::new(
                DiagnosticKind::MalformedMarkup,
                format!("blocks nested deeper than {} levels are kept as text", MAX_NESTING),
            )
            .at_line(start),
        );
        items.push(Paragraph::from_lines(lines).into());
    }

    /// Consumes one block starting at `start`.
    fn consume_block(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        prev_ending: LineEnding,
    ) -> (usize, LineEnding) {
        let line = self.lines.get(start).to_string();
        if is_blank(&line) {
            return (start + 1, prev_ending);
        }

        let starts_quoted = line.starts_with(' ') || line.starts_with(is_punctuation);

        let consumed = if prev_ending == LineEnding::LiteralMark && starts_quoted {
            Some(self.literal_block(items, start, end))
        } else if let Some(adornment) = heading_underline(&self.lines, start, end) {
            self.title(items, &line, adornment, false);
            Some(start + 2)
        } else if let Some(adornment) = heading_overline(&self.lines, start, end) {
            let title = self.lines.get(start + 1).to_string();
            self.title(items, &title, adornment, true);
            Some(start + 3)
        } else if line.starts_with(">>>") {
            Some(self.doctest_block(items, start, end))
        } else if line.starts_with(' ') {
            Some(self.block_quote(items, start, end))
        } else if let Some(marker) = line_block_marker(&line) {
            Some(self.line_block(items, start, end, marker))
        } else if let Some((bullet, marker)) = bullet_marker(&line) {
            Some(self.bullet_item(items, start, end, bullet, marker))
        } else if let Some((enumerator, marker)) = numbered_marker(&line) {
            self.numbered_item(items, start, end, &enumerator, marker)
        } else if let Some(marker) = explicit_marker(&line) {
            Some(self.explicit_markup(items, start, end, marker.tail))
        } else if let Some(marker) = anonymous_target_marker(&line) {
            Some(self.anonymous_target(start, end, marker.tail))
        } else if let Some((name, marker)) = field_marker(&line) {
            Some(self.field(items, start, end, name, marker.tail))
        } else if start + 1 < end
            && self.lines.get(start + 1).starts_with(' ')
            && !self.lines.is_blank(start + 1)
        {
            Some(self.definition(items, start, end))
        } else {
            None
        };

        match consumed {
            Some(next) => (next, LineEnding::Normal),
            None => self.paragraph(items, start, end),
        }
    }
}
