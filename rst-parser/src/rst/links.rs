//! Hyperlink targets and reference resolution
//!
//!     Targets are collected while blocks are parsed: explicit targets (`.. _name: url`),
//!     anonymous targets (`__ url`), and footnotes (`.. [1]`, `.. [#]`, `.. [*]`). References
//!     are only resolved afterwards, during the inline pass, so a reference may appear before
//!     its target.
//!
//!     Collection happens in a [LinkTable]. Once the block pass is done the table turns into a
//!     [LinkResolver], which answers lookups and keeps the cursors for anonymous references
//!     and auto-labelled footnote references. Both live for a single parse.
//!
//! Naming
//!
//!     Reference names are case-insensitive and whitespace-insensitive: `Foo  Bar`, `foo bar`
//!     and `FOO\nbar` all name the same target. The first target registered under a name
//!     wins; later duplicates stay reachable only as anonymous targets or through chaining.
//!
//! Chains and redirects
//!
//!     Targets without content that directly precede a target with content take over its
//!     content:
//!
//!         .. _a:
//!         .. _b: https://example.com
//!
//!     A target whose content ends with an unescaped `_` is a redirect to another name.
//!     Redirect chains are followed until a real target is found; cycles and dangling names
//!     resolve to nothing.

use std::collections::{HashMap, HashSet};

use super::lines::LineBuffer;

/// Symbols used for auto-symbol footnotes, in order.
const FOOTNOTE_SYMBOLS: &[char] = &['*', '†', '‡', '§', '¶', '#', '♠', '♥', '♦', '♣'];

/// What a hyperlink record points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyperlinkKind {
    /// `content` is a URL or other reference text.
    Link,
    /// `content` is the visible footnote label.
    Footnote,
    /// `content` is the normalized name of another target.
    Redirect,
}

/// A target collected during block parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// First source line of the definition.
    pub start: usize,
    /// Line after the definition.
    pub end: usize,
    /// Normalized name; `_` for anonymous targets.
    pub name: String,
    pub kind: HyperlinkKind,
    /// Empty when the target has no content of its own.
    pub content: String,
}

impl Hyperlink {
    pub fn new(
        start: usize,
        end: usize,
        name: impl Into<String>,
        kind: HyperlinkKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            name: name.into(),
            kind,
            content: content.into(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name == "_"
    }
}

/// Removes backslash escapes: `\x` becomes `x`, a backslash before whitespace disappears
/// together with the whitespace.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some(next) if next.is_whitespace() => {}
            Some(next) => result.push(next),
            None => result.push('\\'),
        }
    }
    result
}

/// Normalizes a reference name: trimmed, whitespace runs collapsed, case-folded, unescaped.
pub fn normalize_anchor(anchor: &str) -> String {
    let collapsed = anchor.split_whitespace().collect::<Vec<_>>().join(" ");
    unescape(&collapsed.to_lowercase())
}

/// Normalizes target content. Returns the content and whether it is a redirect.
///
/// Escapes are removed and whitespace is deleted, so URLs may be wrapped over several lines.
/// A redirect names another target; its name is normalized like an anchor, with optional
/// surrounding backticks removed.
pub fn normalize_target(target: &str) -> (String, bool) {
    let is_redirect = ends_with_unescaped_underscore(target);

    let mut content = String::with_capacity(target.len());
    let mut chars = target.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(next) if next != '\n' => content.push(next),
                Some(_) => content.push('\\'),
                None => content.push('\\'),
            },
            ch if ch.is_whitespace() => {}
            ch => content.push(ch),
        }
    }

    if !is_redirect {
        return (content, false);
    }

    content.pop();
    let name = match target.trim().strip_suffix('_') {
        Some(raw) => {
            let raw = raw.trim();
            let raw = raw
                .strip_prefix('`')
                .and_then(|raw| raw.strip_suffix('`'))
                .unwrap_or(raw);
            normalize_anchor(raw)
        }
        None => content,
    };
    (name, true)
}

fn ends_with_unescaped_underscore(text: &str) -> bool {
    let mut last_is_bare_underscore = false;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        last_is_bare_underscore = ch == '_';
        if ch == '\\' {
            if chars.next().is_none() {
                return false;
            }
        }
    }
    last_is_bare_underscore
}

/// Label of the `n`-th auto-symbol footnote: `*`, `†`, ... `♣`, then `**`, `*†`, ...
///
/// Returns an empty string for zero.
pub fn char_footnote(mut n: usize) -> String {
    let mut result = Vec::new();
    while n > 0 {
        n -= 1;
        result.push(FOOTNOTE_SYMBOLS[n % FOOTNOTE_SYMBOLS.len()]);
        n /= FOOTNOTE_SYMBOLS.len();
    }
    result.iter().rev().collect()
}

/// Target table filled during the block pass.
#[derive(Debug, Default)]
pub struct LinkTable {
    links: Vec<Hyperlink>,
    targets: HashMap<String, usize>,
    anonymous: Vec<usize>,
    next_auto_number: usize,
    next_auto_symbol: usize,
    auto_numbered: Vec<String>,
    auto_symbols: Vec<String>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self {
            next_auto_number: 1,
            next_auto_symbol: 1,
            ..Default::default()
        }
    }

    pub fn links(&self) -> &[Hyperlink] {
        &self.links
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Adds a target.
    ///
    /// A target with content is copied into the empty targets right before it, as long as
    /// only blank lines separate them. Named targets are registered unless the name is taken.
    /// Returns the index of the new record.
    pub fn add_link(&mut self, link: Hyperlink, lines: &LineBuffer) -> usize {
        if !link.content.is_empty() {
            let mut start = link.start;
            for prev in self.links.iter_mut().rev() {
                if !prev.content.is_empty() {
                    break;
                }
                if !(prev.end == start || lines.all_blank(prev.end, start)) {
                    break;
                }
                prev.kind = link.kind;
                prev.content = link.content.clone();
                start = prev.start;
            }
        }

        let index = self.links.len();
        if link.is_anonymous() {
            self.anonymous.push(index);
        } else {
            self.targets.entry(link.name.clone()).or_insert(index);
        }
        self.links.push(link);
        index
    }

    /// Registers an extra name for an existing record. The first registration wins.
    pub fn add_alias(&mut self, name: impl Into<String>, index: usize) {
        self.targets.entry(name.into()).or_insert(index);
    }

    /// Next auto number not already taken by an explicit target.
    pub fn allocate_auto_number(&mut self, queue: bool) -> String {
        loop {
            let label = self.next_auto_number.to_string();
            self.next_auto_number += 1;
            if !self.contains(&label) {
                if queue {
                    self.auto_numbered.push(label.clone());
                }
                return label;
            }
        }
    }

    /// Next auto symbol not already taken by an explicit target.
    pub fn allocate_auto_symbol(&mut self, queue: bool) -> String {
        loop {
            let label = char_footnote(self.next_auto_symbol);
            self.next_auto_symbol += 1;
            if !self.contains(&label) {
                if queue {
                    self.auto_symbols.push(label.clone());
                }
                return label;
            }
        }
    }

    pub fn into_resolver(self) -> LinkResolver {
        LinkResolver {
            links: self.links,
            targets: self.targets,
            anonymous: self.anonymous,
            anonymous_cursor: 0,
            auto_numbered: self.auto_numbered,
            auto_numbered_cursor: 0,
            auto_symbols: self.auto_symbols,
            auto_symbols_cursor: 0,
        }
    }
}

/// Reference lookup for the inline pass.
#[derive(Debug, Default)]
pub struct LinkResolver {
    links: Vec<Hyperlink>,
    targets: HashMap<String, usize>,
    anonymous: Vec<usize>,
    anonymous_cursor: usize,
    auto_numbered: Vec<String>,
    auto_numbered_cursor: usize,
    auto_symbols: Vec<String>,
    auto_symbols_cursor: usize,
}

impl LinkResolver {
    /// Resolver with no targets, used for standalone paragraphs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolves a reference.
    ///
    /// `explicit_target` is the `<...>` part of an embedded link. When given it wins, and
    /// unless the reference is anonymous its title becomes a name for the same target.
    /// Anonymous references consume anonymous targets in source order. `#` and `*` titles
    /// consume auto-numbered and auto-symbol footnotes in order.
    ///
    /// Returns `None` when nothing is found or the target has no content.
    pub fn find_link(
        &mut self,
        title: &str,
        explicit_target: Option<&str>,
        is_anonymous: bool,
    ) -> Option<Hyperlink> {
        let index = match explicit_target.filter(|target| !target.is_empty()) {
            Some(target) => {
                let (target, is_redirect) = normalize_target(target);
                let index = if is_redirect {
                    self.resolve_redirect(&target)
                } else {
                    self.links
                        .push(Hyperlink::new(0, 0, title, HyperlinkKind::Link, target));
                    Some(self.links.len() - 1)
                };
                if let Some(index) = index.filter(|_| !is_anonymous) {
                    self.targets.entry(normalize_anchor(title)).or_insert(index);
                }
                index
            }
            None if is_anonymous => self.next_anonymous(),
            None => {
                let anchor = normalize_anchor(title);
                let anchor = if let Some(rest) = anchor.strip_prefix('#') {
                    if rest.is_empty() {
                        self.next_auto_numbered().unwrap_or_default()
                    } else {
                        rest.to_string()
                    }
                } else if let Some(rest) = anchor.strip_prefix('*') {
                    if rest.is_empty() {
                        self.next_auto_symbol().unwrap_or_default()
                    } else {
                        rest.to_string()
                    }
                } else {
                    anchor
                };
                if anchor.is_empty() {
                    return None;
                }
                self.targets.get(&anchor).copied()
            }
        }?;

        let index = match self.links[index].kind {
            HyperlinkKind::Redirect => {
                let target = self.links[index].content.clone();
                self.resolve_redirect(&target)?
            }
            _ => index,
        };

        let link = &self.links[index];
        if link.content.is_empty() {
            None
        } else {
            Some(link.clone())
        }
    }

    fn next_anonymous(&mut self) -> Option<usize> {
        let index = self.anonymous.get(self.anonymous_cursor).copied()?;
        self.anonymous_cursor += 1;
        Some(index)
    }

    fn next_auto_numbered(&mut self) -> Option<String> {
        let label = self.auto_numbered.get(self.auto_numbered_cursor).cloned()?;
        self.auto_numbered_cursor += 1;
        Some(label)
    }

    fn next_auto_symbol(&mut self) -> Option<String> {
        let label = self.auto_symbols.get(self.auto_symbols_cursor).cloned()?;
        self.auto_symbols_cursor += 1;
        Some(label)
    }

    /// Follows redirects starting at `name` until a non-redirect record is found.
    fn resolve_redirect(&self, name: &str) -> Option<usize> {
        let mut seen = HashSet::new();
        let mut name = name.to_string();
        while seen.insert(name.clone()) {
            let index = *self.targets.get(&name)?;
            let link = &self.links[index];
            match link.kind {
                HyperlinkKind::Redirect => name = link.content.clone(),
                _ => return Some(index),
            }
        }
        log::trace!("redirect cycle at `{}`", name);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(links: Vec<Hyperlink>) -> LinkTable {
        let lines = LineBuffer::from_lines(vec![""; 32]);
        let mut table = LinkTable::new();
        for link in links {
            table.add_link(link, &lines);
        }
        table
    }

    #[test]
    fn normalizes_anchors() {
        assert_eq!(normalize_anchor("  Foo \n  Bar "), "foo bar");
        assert_eq!(normalize_anchor("a\\:b"), "a:b");
    }

    #[test]
    fn normalizes_targets() {
        assert_eq!(
            normalize_target("https://example.com/\n  long"),
            ("https://example.com/long".to_string(), false)
        );
        assert_eq!(normalize_target("Other Name_"), ("other name".to_string(), true));
        assert_eq!(normalize_target("`Other`_"), ("other".to_string(), true));
        assert_eq!(normalize_target("file\\_"), ("file_".to_string(), false));
    }

    #[test]
    fn unescapes() {
        assert_eq!(unescape("a \\*b\\* c"), "a *b* c");
        assert_eq!(unescape("a\\ b"), "ab");
        assert_eq!(unescape("end\\"), "end\\");
    }

    #[test]
    fn footnote_symbols() {
        assert_eq!(char_footnote(1), "*");
        assert_eq!(char_footnote(10), "♣");
        assert_eq!(char_footnote(11), "**");
        assert_eq!(char_footnote(12), "*†");
        assert_eq!(char_footnote(0), "");
    }

    #[test]
    fn redirect_chain_resolves() {
        let mut resolver = table_with(vec![
            Hyperlink::new(0, 1, "a", HyperlinkKind::Redirect, "b"),
            Hyperlink::new(2, 3, "b", HyperlinkKind::Redirect, "c"),
            Hyperlink::new(4, 5, "c", HyperlinkKind::Link, "https://c.example"),
        ])
        .into_resolver();
        let link = resolver.find_link("a", None, false).unwrap();
        assert_eq!(link.content, "https://c.example");
    }

    #[test]
    fn redirect_cycle_is_unresolved() {
        let mut resolver =
            table_with(vec![Hyperlink::new(0, 1, "a", HyperlinkKind::Redirect, "a")])
                .into_resolver();
        assert_eq!(resolver.find_link("a", None, false), None);
    }

    #[test]
    fn first_registration_wins() {
        let mut resolver = table_with(vec![
            Hyperlink::new(0, 1, "x", HyperlinkKind::Link, "first"),
            Hyperlink::new(5, 6, "x", HyperlinkKind::Link, "second"),
        ])
        .into_resolver();
        assert_eq!(resolver.find_link("X", None, false).unwrap().content, "first");
    }

    #[test]
    fn anonymous_targets_in_order() {
        let mut resolver = table_with(vec![
            Hyperlink::new(0, 1, "_", HyperlinkKind::Link, "one"),
            Hyperlink::new(1, 2, "_", HyperlinkKind::Link, "two"),
        ])
        .into_resolver();
        assert_eq!(resolver.find_link("x", None, true).unwrap().content, "one");
        assert_eq!(resolver.find_link("y", None, true).unwrap().content, "two");
        assert_eq!(resolver.find_link("z", None, true), None);
    }

    #[test]
    fn explicit_target_registers_title() {
        let mut resolver = LinkResolver::empty();
        let link = resolver
            .find_link("Docs", Some("https://docs.example"), false)
            .unwrap();
        assert_eq!(link.content, "https://docs.example");
        let again = resolver.find_link("docs", None, false).unwrap();
        assert_eq!(again.content, "https://docs.example");
    }

    #[test]
    fn chained_targets_share_content() {
        let lines = LineBuffer::from_lines([".. _a:", "", ".. _b: url"]);
        let mut table = LinkTable::new();
        table.add_link(Hyperlink::new(0, 1, "a", HyperlinkKind::Link, ""), &lines);
        table.add_link(Hyperlink::new(2, 3, "b", HyperlinkKind::Link, "url"), &lines);
        assert_eq!(table.links()[0].content, "url");

        let mut resolver = table.into_resolver();
        assert_eq!(resolver.find_link("a", None, false).unwrap().content, "url");
    }

    #[test]
    fn chain_breaks_on_text() {
        let lines = LineBuffer::from_lines([".. _a:", "text", ".. _b: url"]);
        let mut table = LinkTable::new();
        table.add_link(Hyperlink::new(0, 1, "a", HyperlinkKind::Link, ""), &lines);
        table.add_link(Hyperlink::new(2, 3, "b", HyperlinkKind::Link, "url"), &lines);
        assert_eq!(table.links()[0].content, "");
    }

    #[test]
    fn auto_numbers_skip_explicit_names() {
        let mut table = table_with(vec![Hyperlink::new(0, 1, "1", HyperlinkKind::Footnote, "1")]);
        assert_eq!(table.allocate_auto_number(true), "2");
        assert_eq!(table.allocate_auto_number(true), "3");
        assert_eq!(table.allocate_auto_symbol(false), "*");
    }
}
