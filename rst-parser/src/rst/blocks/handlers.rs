//! Block handlers
//!
//! One method per block kind. Every handler receives the parent's item list and the line
//! range it may consume, and returns the first unconsumed line. Handlers that may decline
//! (numbered list items) return `None` and leave the buffer untouched.

use super::markers::{numbered_marker, Marker};
use super::BlockParser;
use super::LineEnding;
use crate::rst::ast::{
    Admonition, Code, EnumeratorKind, Footnote, FootnoteContainer, Heading, List, ListItem,
    Node, Paragraph, Quote,
};
use crate::rst::blocks::markers::{is_transition, line_block_marker};
use crate::rst::diagnostics::{Diagnostic, DiagnosticKind};
use crate::rst::links::{normalize_anchor, normalize_target, Hyperlink, HyperlinkKind};
use crate::rst::numbering::{detect_numbering, Enumerator, ItemNumbering};

/// Numbering of the last item of a numbered list.
fn last_numbering(list: &List) -> Option<ItemNumbering> {
    if list.enumerator_kind.is_bullet() {
        return None;
    }
    Some(ItemNumbering {
        enumerator_kind: list.enumerator_kind,
        marker_kind: list.marker_kind?,
        number: list.last_number()?,
    })
}

/// True when `line` starts the item right after `numbering` in the same list.
fn is_list_start(line: &str, numbering: &ItemNumbering) -> bool {
    numbered_marker(line)
        .and_then(|(enumerator, _)| detect_numbering(&enumerator, Some(numbering)))
        .is_some_and(|next| numbering.is_followed_by(&next))
}

/// Splits `anchor: target` at the first colon that is not escaped and not inside a
/// backquoted anchor. Without a colon everything is anchor.
fn split_target(text: &str) -> (&str, &str) {
    let quoted_end = if text.starts_with('`') {
        text[1..].find('`').map_or(0, |i| i + 2)
    } else {
        0
    };
    let mut chars = text[quoted_end..].char_indices();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            ':' => {
                let colon = quoted_end + i;
                return (&text[..colon], &text[colon + 1..]);
            }
            _ => {}
        }
    }
    (text, "")
}

/// Removes one pair of surrounding backquotes.
fn strip_backquotes(anchor: &str) -> &str {
    let anchor = anchor.trim();
    anchor
        .strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(anchor)
}

impl BlockParser<'_> {
    pub(super) fn title(
        &mut self,
        items: &mut Vec<Node>,
        title: &str,
        adornment: char,
        is_overline: bool,
    ) {
        let next_level = self.headings.len() + 1;
        let level = *self
            .headings
            .entry((adornment, is_overline))
            .or_insert(next_level);
        items.push(Heading::new(level, title.trim()).into());
    }

    /// Indented literal block, or a quoted one where every line starts with the same
    /// punctuation character.
    pub(super) fn literal_block(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
    ) -> usize {
        let end = match self.lines.get(start).chars().next() {
            Some(' ') => self.lines.gather_indented(start, end, true),
            Some(quote) => self.lines.gather_prefixed(start, end, quote),
            None => start + 1,
        };
        let lines = self.lines.slice(start, end).to_vec();
        items.push(Code::new(lines, self.options.literal_syntax.as_str()).into());
        end
    }

    pub(super) fn doctest_block(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
    ) -> usize {
        let mut block_end = start;
        let mut lines = Vec::new();
        for i in start..end {
            if self.lines.is_blank(i) {
                break;
            }
            lines.push(self.lines.get(i).to_string());
            block_end = i + 1;
        }
        items.push(Code::new(lines, self.options.doctest_syntax.as_str()).into());
        block_end
    }

    pub(super) fn block_quote(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
    ) -> usize {
        let end = self.lines.gather_indented(start, end, true);
        let mut quote = Quote::default();
        self.process_block(&mut quote.items, start, end);
        items.push(quote.into());
        end
    }

    /// Consecutive `| ` lines become one paragraph. Continuation lines join their entry with
    /// a space, entries are separated by a vertical tab.
    pub(super) fn line_block(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        marker: Marker<'_>,
    ) -> usize {
        let mut entries = Vec::new();
        let mut entry_start = start;
        let mut block_end = start + 1;
        let mut tail = Some(marker.tail.to_string());

        while let Some(text) = tail {
            self.lines.set(entry_start, text);
            block_end = self.lines.gather_indented(entry_start + 1, end, false);
            entries.push(self.lines.slice(entry_start, block_end).join(" "));

            entry_start = block_end;
            tail = if entry_start < end {
                line_block_marker(self.lines.get(entry_start)).map(|m| m.tail.to_string())
            } else {
                None
            };
        }

        items.push(Paragraph::from_lines([entries.join("\u{0b}")]).into());
        block_end
    }

    /// Replaces the marker line with its tail and gathers the item body.
    fn gather_item(&mut self, start: usize, end: usize, marker: Marker<'_>) -> usize {
        self.lines.set(start, marker.tail);
        if marker.has_space {
            self.lines.gather_exactly_indented(start + 1, end, marker.width, true)
        } else {
            self.lines.gather_indented(start + 1, end, true)
        }
    }

    pub(super) fn bullet_item(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        bullet: char,
        marker: Marker<'_>,
    ) -> usize {
        let kind = EnumeratorKind::Bullet(bullet);
        let continues = matches!(
            items.last(),
            Some(Node::List(list)) if !list.items.is_empty()
                && list.enumerator_kind == kind
                && list.marker_kind.is_none()
                && list.last_number().is_none()
        );

        let end = self.gather_item(start, end, marker);
        let mut item = ListItem::new(None);
        self.process_block(&mut item.items, start, end);
        push_item(items, item, continues, || List::new(kind, None));
        end
    }

    /// Numbered list item. Declines malformed markers and lines that look like a marker but
    /// are followed by unindented text that does not continue the list.
    pub(super) fn numbered_item(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        enumerator: &Enumerator<'_>,
        marker: Marker<'_>,
    ) -> Option<usize> {
        let prev = match items.last() {
            Some(Node::List(list)) => last_numbering(list),
            _ => None,
        };

        let Some(numbering) = detect_numbering(enumerator, prev.as_ref()) else {
            log::trace!("line {}: `{}` is not an enumerator", start, enumerator.token);
            return None;
        };

        if start + 1 < end {
            let next = self.lines.get(start + 1);
            if !(next.is_empty() || next.starts_with(' ') || is_list_start(next, &numbering)) {
                log::trace!("line {}: list start declined, next line is text", start);
                return None;
            }
        }

        let continues = prev.is_some_and(|prev| prev.is_followed_by(&numbering));

        let end = self.gather_item(start, end, marker);
        let mut item = ListItem::new(Some(numbering.number));
        self.process_block(&mut item.items, start, end);
        push_item(items, item, continues, || {
            List::new(numbering.enumerator_kind, Some(numbering.marker_kind))
        });
        Some(end)
    }

    /// `.. ` followed by a comment, footnote, substitution, hyperlink target or directive.
    pub(super) fn explicit_markup(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        tail: &str,
    ) -> usize {
        let content = tail.trim();

        if content.is_empty() {
            let next = start + 1;
            return if next < end && !self.lines.is_blank(next) {
                self.lines.gather_indented(next + 1, end, true)
            } else {
                next
            };
        }

        if content.starts_with('[') {
            return self.footnote(items, start, end, content);
        }
        if content.starts_with('|') {
            // Substitution definitions are consumed without effect.
            return self.lines.gather_indented(start + 1, end, false);
        }
        if content.starts_with('_') {
            return self.hyperlink_target(start, end, content);
        }
        if content.contains("::") {
            return self.directive(items, start, end, content);
        }

        self.lines.gather_indented(start + 1, end, true)
    }

    /// `_name: target`, `__: target`, `_name: other_`. Continuation lines are appended.
    pub(super) fn hyperlink_target(&mut self, start: usize, end: usize, content: &str) -> usize {
        let end = self.lines.gather_indented(start + 1, end, false);
        let mut text = content.strip_prefix('_').unwrap_or(content).to_string();
        for line in self.lines.slice(start + 1, end) {
            text.push('\n');
            text.push_str(line);
        }

        let (anchor, target) = split_target(&text);
        let name = normalize_anchor(strip_backquotes(anchor));
        let (content, is_redirect) = normalize_target(target);
        let kind = if is_redirect {
            HyperlinkKind::Redirect
        } else {
            HyperlinkKind::Link
        };

        self.links
            .add_link(Hyperlink::new(start, end, name, kind, content), &self.lines);
        end
    }

    pub(super) fn anonymous_target(&mut self, start: usize, end: usize, tail: &str) -> usize {
        self.hyperlink_target(start, end, &format!("__: {}", tail))
    }

    /// `[label] body`. Auto-numbered (`#`, `#name`) and auto-symbol (`*`, `*name`) labels
    /// are allocated here; bare `#` and `*` labels are also queued for `[#]_` and `[*]_`.
    pub(super) fn footnote(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        content: &str,
    ) -> usize {
        let end = self.lines.gather_indented(start + 1, end, true);
        let body = content.strip_prefix('[').unwrap_or(content);
        let (name, rest) = body.split_once(']').unwrap_or((body, ""));
        let name = name.to_string();
        self.lines.set(start, rest.trim());

        let (label, alias) = if let Some(alias) = name.strip_prefix('#') {
            (self.links.allocate_auto_number(alias.is_empty()), alias)
        } else if let Some(alias) = name.strip_prefix('*') {
            (self.links.allocate_auto_symbol(alias.is_empty()), alias)
        } else {
            (name.clone(), "")
        };

        let link = Hyperlink::new(
            start,
            end,
            normalize_anchor(&label),
            HyperlinkKind::Footnote,
            label.as_str(),
        );
        let index = self.links.add_link(link, &self.lines);
        if !alias.is_empty() {
            self.links.add_alias(normalize_anchor(alias), index);
        }

        let mut footnote = Footnote::new(label);
        self.process_block(&mut footnote.items, start, end);
        match items.last_mut() {
            Some(Node::FootnoteContainer(container)) => container.items.push(footnote),
            _ => items.push(
                FootnoteContainer {
                    items: vec![footnote],
                }
                .into(),
            ),
        }
        end
    }

    /// `name:: argument`, options up to the first blank line, then the body.
    pub(super) fn directive(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        content: &str,
    ) -> usize {
        let (name, argument) = content.split_once("::").unwrap_or((content, ""));
        let (name, argument) = (name.trim(), argument.trim());

        let end = self.lines.gather_indented(start + 1, end, true);

        let mut body_start = start + 1;
        while body_start < end {
            let blank = self.lines.is_blank(body_start);
            body_start += 1;
            if blank {
                break;
            }
        }

        let directives = self.directives;
        if !directives.is_known(name) {
            log::debug!("line {}: unknown directive `{}`", start, name);
            self.diagnostics.push(
                Diagnostic::new(
                    DiagnosticKind::UnknownDirective,
                    format!("unknown directive `{}`", name),
                )
                .at_line(start),
            );
        }

        let raw = self.lines.slice(body_start, end).to_vec();
        let nodes = directives.process_directive(
            name,
            argument,
            &mut || raw.clone(),
            &mut || {
                let mut body = Vec::new();
                self.process_block(&mut body, body_start, end);
                body
            },
        );
        items.extend(nodes);
        end
    }

    /// `:name: body`. The title keeps the raw name and ends with an escaped-space colon so
    /// the inline pass renders it as `name:`.
    pub(super) fn field(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
        name: &str,
        tail: &str,
    ) -> usize {
        self.lines.set(start, tail);
        let end = self.lines.gather_indented(start + 1, end, true);
        let mut field = Admonition::new(format!("{}\\ :", name.trim()), "field", Vec::new());
        self.process_block(&mut field.items, start, end);
        items.push(field.into());
        end
    }

    pub(super) fn definition(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
    ) -> usize {
        let end = self.lines.gather_indented(start + 1, end, true);
        let term = self.lines.get(start).trim().to_string();
        let mut definition = Admonition::new(term, "definition", Vec::new());
        self.process_block(&mut definition.items, start + 1, end);
        items.push(definition.into());
        end
    }

    /// Unindented lines up to the next blank line. Also recognizes a lone `::` and
    /// transitions.
    pub(super) fn paragraph(
        &mut self,
        items: &mut Vec<Node>,
        start: usize,
        end: usize,
    ) -> (usize, LineEnding) {
        let end = self.lines.gather_exactly_indented(start, end, 0, false);

        if end == start + 1 {
            let line = self.lines.get(start);
            if line.trim() == "::" {
                return (end, LineEnding::LiteralMark);
            }
            if is_transition(line) {
                items.push(Node::ThematicBreak);
                return (end, LineEnding::Normal);
            }
        }

        let mut ending = LineEnding::Normal;
        if end > start {
            let last = self.lines.get(end - 1).trim_end();
            if last.ends_with("::") {
                let shortened = last[..last.len() - 1].to_string();
                self.lines.set(end - 1, shortened);
                ending = LineEnding::LiteralMark;
            }
        }

        let lines = self.lines.slice(start, end).iter().cloned();
        items.push(Paragraph::from_lines(lines).into());
        (end, ending)
    }
}

/// Appends a list item to the trailing list, or to a new list when the item starts one.
fn push_item(
    items: &mut Vec<Node>,
    item: ListItem,
    continues: bool,
    new_list: impl FnOnce() -> List,
) {
    if continues {
        if let Some(Node::List(list)) = items.last_mut() {
            list.items.push(item);
            return;
        }
    }
    let mut list = new_list();
    list.items.push(item);
    items.push(list.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::ast::MarkerKind;
    use crate::rst::blocks::{BlockOutput, MAX_NESTING};
    use crate::rst::hooks::StandardDirectives;
    use crate::rst::lines::LineBuffer;
    use crate::rst::parser::ParserOptions;
    use rstest::rstest;

    fn blocks(text: &str) -> BlockOutput {
        let options = ParserOptions::default();
        let directives = StandardDirectives;
        BlockParser::new(LineBuffer::new(text, 4), &directives, &options).parse()
    }

    fn items(text: &str) -> Vec<Node> {
        blocks(text).document.items
    }

    fn raw_text(node: &Node) -> Vec<String> {
        node.text_items()
            .map(|items| items.iter().map(|item| item.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let nodes = items("one\ntwo\n\nthree");
        assert_eq!(nodes.len(), 2);
        assert_eq!(raw_text(&nodes[0]), ["one", "two"]);
        assert_eq!(raw_text(&nodes[1]), ["three"]);
    }

    #[test]
    fn heading_levels_follow_first_appearance() {
        let nodes = items("A\n=\n\nB\n-\n\nC\n=\n\n===\nD\n===");
        let levels: Vec<_> = nodes
            .iter()
            .map(|node| match node {
                Node::Heading(heading) => heading.level,
                other => panic!("Expected Heading, found {:?}", other),
            })
            .collect();
        assert_eq!(levels, [1, 2, 1, 3]);
    }

    #[test]
    fn literal_block_after_double_colon() {
        let nodes = items("Example::\n\n    x = 1\n\n      y\n\nafter");
        assert_eq!(raw_text(&nodes[0]), ["Example:"]);
        assert_eq!(
            nodes[1],
            Node::Code(Code::new(vec!["x = 1".into(), "".into(), "  y".into()], "text"))
        );
        assert_eq!(raw_text(&nodes[2]), ["after"]);
    }

    #[test]
    fn quoted_literal_block_and_lone_marker() {
        let nodes = items("::\n\n> quoted\n> text\n\nnext");
        assert_eq!(
            nodes[0],
            Node::Code(Code::new(vec!["> quoted".into(), "> text".into()], "text"))
        );
        assert_eq!(raw_text(&nodes[1]), ["next"]);
    }

    #[test]
    fn transition_and_doctest() {
        let nodes = items("----\n\n>>> 1 + 1\n2\n\ntext");
        assert_eq!(nodes[0], Node::ThematicBreak);
        assert_eq!(
            nodes[1],
            Node::Code(Code::new(vec![">>> 1 + 1".into(), "2".into()], "python"))
        );
    }

    #[test]
    fn block_quote_is_parsed_recursively() {
        let nodes = items("    quoted\n\n    - item");
        match &nodes[0] {
            Node::Quote(quote) => {
                assert_eq!(raw_text(&quote.items[0]), ["quoted"]);
                assert!(matches!(quote.items[1], Node::List(_)));
            }
            other => panic!("Expected Quote, found {:?}", other),
        }
    }

    #[test]
    fn line_block_joins_entries() {
        let nodes = items("| first\n|   continued\n  wrapped\n| last");
        assert_eq!(raw_text(&nodes[0]), ["first\u{0b}continued wrapped\u{0b}last"]);
    }

    #[test]
    fn bullet_list_items_and_bodies() {
        let nodes = items("- one\n  more\n\n- two\n* other");
        assert_eq!(nodes.len(), 2);
        match &nodes[0] {
            Node::List(list) => {
                assert_eq!(list.enumerator_kind, EnumeratorKind::Bullet('-'));
                assert_eq!(list.items.len(), 2);
                assert_eq!(raw_text(&list.items[0].items[0]), ["one", "more"]);
            }
            other => panic!("Expected List, found {:?}", other),
        }
        assert!(matches!(
            &nodes[1],
            Node::List(list) if list.enumerator_kind == EnumeratorKind::Bullet('*')
        ));
    }

    #[rstest]
    #[case("1. a\n2. b\n3. c", EnumeratorKind::Number, MarkerKind::Dot, vec![1, 2, 3])]
    #[case("(a) x\n(b) y", EnumeratorKind::SmallLetter, MarkerKind::Enclosed, vec![1, 2])]
    #[case("i) x\nii) y", EnumeratorKind::SmallRoman, MarkerKind::Paren, vec![1, 2])]
    #[case("#. x\n#. y", EnumeratorKind::Number, MarkerKind::Dot, vec![1, 2])]
    #[case("3. x\n04. y", EnumeratorKind::Number, MarkerKind::Dot, vec![3, 4])]
    fn numbered_lists(
        #[case] text: &str,
        #[case] kind: EnumeratorKind,
        #[case] marker: MarkerKind,
        #[case] numbers: Vec<u64>,
    ) {
        let nodes = items(text);
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            Node::List(list) => {
                assert_eq!(list.enumerator_kind, kind);
                assert_eq!(list.marker_kind, Some(marker));
                let found: Vec<_> = list.items.iter().filter_map(|item| item.number).collect();
                assert_eq!(found, numbers);
            }
            other => panic!("Expected List, found {:?}", other),
        }
    }

    #[test]
    fn numbered_list_breaks_on_gap() {
        let nodes = items("1. a\n\n3. b");
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn numbered_gap_without_blank_line_is_a_paragraph() {
        let nodes = items("1. a\n3. b\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(raw_text(&nodes[0]), ["1. a", "3. b"]);
    }

    #[test]
    fn deep_nesting_stops_at_limit() {
        let output = blocks(&("- ".repeat(5000) + "x"));

        let mut node = &output.document.items[0];
        let mut lists = 0;
        while let Node::List(list) = node {
            lists += 1;
            node = &list.items[0].items[0];
        }
        assert_eq!(lists, MAX_NESTING);
        match node {
            Node::Paragraph(paragraph) => {
                let text = paragraph.items[0].to_string();
                assert!(text.starts_with("- - "));
                assert!(text.ends_with(" x"));
            }
            other => panic!("Expected Paragraph, found {:?}", other),
        }

        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::MalformedMarkup);
    }

    #[test]
    fn nesting_below_limit_is_untouched() {
        let output = blocks(&("- ".repeat(10) + "x"));
        let mut node = &output.document.items[0];
        let mut lists = 0;
        while let Node::List(list) = node {
            lists += 1;
            node = &list.items[0].items[0];
        }
        assert_eq!(lists, 10);
        assert_eq!(raw_text(node), ["x"]);
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn number_followed_by_text_is_a_paragraph() {
        let nodes = items("2. is a number\nthat starts a sentence");
        assert!(matches!(nodes[0], Node::Paragraph(_)));
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn field_and_definition_lists() {
        let nodes = items(":param x: the value\n    more\n\nterm\n    definition");
        match &nodes[0] {
            Node::Admonition(field) => {
                assert_eq!(field.kind, "field");
                assert_eq!(field.title[0].as_text(), Some("param x\\ :"));
                assert_eq!(raw_text(&field.items[0]), ["the value", "more"]);
            }
            other => panic!("Expected Admonition, found {:?}", other),
        }
        match &nodes[1] {
            Node::Admonition(definition) => {
                assert_eq!(definition.kind, "definition");
                assert_eq!(definition.title[0].as_text(), Some("term"));
                assert_eq!(raw_text(&definition.items[0]), ["definition"]);
            }
            other => panic!("Expected Admonition, found {:?}", other),
        }
    }

    #[test]
    fn directives_skip_options() {
        let nodes = items(".. code-block:: python\n    :linenos:\n\n    x = 1\n\nafter");
        assert_eq!(nodes[0], Node::Code(Code::new(vec!["x = 1".into()], "python")));
        assert_eq!(raw_text(&nodes[1]), ["after"]);
    }

    #[test]
    fn admonition_body_is_parsed() {
        let nodes = items(".. note::\n\n    Body text.");
        match &nodes[0] {
            Node::Admonition(note) => {
                assert_eq!(note.kind, "note");
                assert_eq!(raw_text(&note.items[0]), ["Body text."]);
            }
            other => panic!("Expected Admonition, found {:?}", other),
        }
    }

    #[test]
    fn unknown_directive_is_reported() {
        let output = blocks(".. frobnicate:: arg\n\n    raw body");
        assert_eq!(
            output.document.items,
            vec![Node::Code(Code::new(vec!["raw body".into()], "text"))]
        );
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::UnknownDirective);
        assert_eq!(output.diagnostics[0].line, Some(0));
    }

    #[test]
    fn comments_and_substitutions_produce_nothing() {
        let text = ".. a comment\n   continued\n\n.. |sub| replace:: x\n\n..\n   empty\n\ntext";
        let nodes = items(text);
        assert_eq!(nodes.len(), 1);
        assert_eq!(raw_text(&nodes[0]), ["text"]);
    }

    #[test]
    fn hyperlink_targets_are_collected() {
        let output = blocks(
            ".. _Python Home: https://python.org\n.. _`a: b`: https://x/\n   y\n__ anon",
        );
        assert!(output.document.items.is_empty());
        let links = output.links.links();
        assert_eq!(links[0].name, "python home");
        assert_eq!(links[0].content, "https://python.org");
        assert_eq!(links[1].name, "a: b");
        assert_eq!(links[1].content, "https://x/y");
        assert!(links[2].is_anonymous());
        assert_eq!(links[2].content, "anon");
    }

    #[test]
    fn redirects_and_chains() {
        let output = blocks(".. _a:\n.. _b: c_\n\n.. _c: https://c");
        let links = output.links.links();
        assert_eq!(links[0].kind, HyperlinkKind::Redirect);
        assert_eq!(links[0].content, "c");
        assert_eq!(links[1].kind, HyperlinkKind::Redirect);
        assert_eq!(links[2].kind, HyperlinkKind::Link);
    }

    #[test]
    fn footnotes_are_grouped() {
        let nodes = items(".. [#] first\n.. [*] second\n.. [note] third");
        match &nodes[0] {
            Node::FootnoteContainer(container) => {
                let markers: Vec<_> = container.items.iter().map(|f| f.marker.as_str()).collect();
                assert_eq!(markers, ["1", "*", "note"]);
                assert_eq!(raw_text(&container.items[0].items[0]), ["first"]);
            }
            other => panic!("Expected FootnoteContainer, found {:?}", other),
        }
    }

    #[test]
    fn auto_numbers_skip_explicit_labels() {
        let output = blocks(".. [1] explicit\n.. [#named] auto");
        let container = match &output.document.items[0] {
            Node::FootnoteContainer(container) => container,
            other => panic!("Expected FootnoteContainer, found {:?}", other),
        };
        assert_eq!(container.items[1].marker, "2");
        assert!(output.links.contains("named"));
        assert!(output.links.contains("2"));
    }

    #[test]
    fn literal_mark_without_block_is_dropped() {
        let nodes = items("Text::\n\nnext");
        assert_eq!(raw_text(&nodes[0]), ["Text:"]);
        assert_eq!(raw_text(&nodes[1]), ["next"]);
        assert!(nodes.iter().all(|node| !matches!(node, Node::Code(_))));
    }

    #[test]
    fn definition_needs_an_adjacent_body() {
        let nodes = items("term\n\n    indented");
        assert!(matches!(nodes[0], Node::Paragraph(_)));
        assert!(matches!(nodes[1], Node::Quote(_)));
    }
}
