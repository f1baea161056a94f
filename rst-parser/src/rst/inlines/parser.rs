use super::punctuation::{is_end_string, is_start_string};
use crate::rst::ast::{Inline, TextRegion};
use crate::rst::diagnostics::{Diagnostic, DiagnosticKind};
use crate::rst::hooks::RoleHandler;
use crate::rst::links::{unescape, HyperlinkKind, LinkResolver};

/// Characters that may start inline markup. Everything else is plain text.
const MARKUP_CHARS: &[char] = &['\\', '`', ':', '*', '|', '_', '['];

/// Punctuation allowed inside role names and unquoted link names, one at a time.
const NAME_PUNCTUATION: &[char] = &['-', '_', '+', ':', ','];

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Text,
    Emphasis,
    Strong,
    Formatted(TextRegion),
    Link { title: String, url: Option<String> },
    Footnote { label: Option<String> },
}

/// A span of the character buffer. For markup tokens the span covers the content only.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    start: usize,
    end: usize,
    kind: TokenKind,
}

/// Inline tokenizer for one text-bearing node.
pub struct InlineParser<'a> {
    text: Vec<char>,
    /// Start of pending plain text.
    start: usize,
    pos: usize,
    tokens: Vec<Token>,
    resolver: &'a mut LinkResolver,
    roles: &'a dyn RoleHandler,
    diagnostics: &'a mut Vec<Diagnostic>,
}

/// Tokenizes `text` into plain strings and regions.
pub fn parse_inlines(
    text: &str,
    resolver: &mut LinkResolver,
    roles: &dyn RoleHandler,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Inline> {
    InlineParser::new(text, resolver, roles, diagnostics).run()
}

impl<'a> InlineParser<'a> {
    pub fn new(
        text: &str,
        resolver: &'a mut LinkResolver,
        roles: &'a dyn RoleHandler,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> Self {
        Self {
            text: text.chars().collect(),
            start: 0,
            pos: 0,
            tokens: Vec::new(),
            resolver,
            roles,
            diagnostics,
        }
    }

    pub fn run(mut self) -> Vec<Inline> {
        while self.fits(self.pos) {
            self.step();
        }
        if self.start < self.text.len() {
            self.tokens.push(Token {
                start: self.start,
                end: self.text.len(),
                kind: TokenKind::Text,
            });
        }

        let mut result: Vec<Inline> = Vec::new();
        for token in std::mem::take(&mut self.tokens) {
            let raw = self.slice(token.start, token.end);
            let item = match token.kind {
                TokenKind::Text => Inline::Text(unescape(&raw)),
                TokenKind::Emphasis => TextRegion::highlighted(unescape(&raw), "em").into(),
                TokenKind::Strong => TextRegion::highlighted(unescape(&raw), "strong").into(),
                TokenKind::Formatted(region) => region.into(),
                TokenKind::Link { title, url } => {
                    let text = if title.is_empty() { raw } else { title };
                    TextRegion::link(unescape(&text), url).into()
                }
                TokenKind::Footnote { label } => {
                    let text = label.filter(|label| !label.is_empty()).unwrap_or(raw);
                    let text = format!("[{}]", unescape(&text));
                    TextRegion::no_wrap(TextRegion::highlighted(text, "role/footnote")).into()
                }
            };
            match (result.last_mut(), item) {
                (Some(Inline::Text(prev)), Inline::Text(text)) => prev.push_str(&text),
                (_, Inline::Text(text)) if text.is_empty() => {}
                (_, item) => result.push(item),
            }
        }
        result
    }

    fn fits(&self, i: usize) -> bool {
        i < self.text.len()
    }

    fn ch_is(&self, i: usize, ch: char) -> bool {
        self.text.get(i) == Some(&ch)
    }

    /// Character at `i`, or a space outside the text.
    fn ch_at(&self, i: usize) -> char {
        self.text.get(i).copied().unwrap_or(' ')
    }

    /// Character before `i`, or a space at the start of the text.
    fn ch_before(&self, i: usize) -> char {
        match i.checked_sub(1) {
            Some(prev) => self.ch_at(prev),
            None => ' ',
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.text.len());
        self.text[start.min(end)..end].iter().collect()
    }

    fn eat(&mut self, ch: char) -> usize {
        let start = self.pos;
        while self.ch_is(self.pos, ch) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn emit(
        &mut self,
        token_start: usize,
        content_start: usize,
        content_end: usize,
        kind: TokenKind,
    ) {
        if token_start > self.start {
            self.tokens.push(Token {
                start: self.start,
                end: token_start,
                kind: TokenKind::Text,
            });
        }
        self.start = self.pos;
        self.tokens.push(Token {
            start: content_start,
            end: content_end,
            kind,
        });
    }

    fn malformed(&mut self, problem: &str, at: usize) {
        let context = self.slice(at, at + 20);
        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::MalformedMarkup,
            format!("{} near `{}`", problem, context),
        ));
    }

    fn unresolved(&mut self, what: &str, name: &str) {
        log::debug!("unresolved {} `{}`", what, name);
        self.diagnostics.push(Diagnostic::new(
            DiagnosticKind::UnresolvedReference,
            format!("unresolved {} `{}`", what, name),
        ));
    }

    fn step(&mut self) {
        match self.text[self.pos] {
            '\\' => self.pos += 2,
            '`' if self.ch_is(self.pos + 1, '`') => self.parse_inline_literal(),
            '`' => self.parse_interpreted_text(None, None),
            ':' => self.parse_prefixed_interpreted_text(),
            '*' if self.ch_is(self.pos + 1, '*') => self.parse_strong(),
            '*' => self.parse_emphasis(),
            '|' => self.parse_substitution(),
            '_' if self.ch_is(self.pos + 1, '`') => self.parse_inline_internal_target(),
            '_' => self.parse_unquoted_link(),
            '[' => self.parse_footnote_reference(),
            _ => {
                while self.fits(self.pos) && !MARKUP_CHARS.contains(&self.text[self.pos]) {
                    self.pos += 1;
                }
            }
        }
    }

    /// Scans `:role:` at the current position and leaves the position after it. On failure
    /// returns `None` and leaves the position untouched.
    fn scan_for_explicit_role(&mut self) -> Option<String> {
        if !self.ch_is(self.pos, ':') {
            return None;
        }

        let token_start = self.pos;
        self.pos += 1;
        let content_start = self.pos;

        while self.fits(self.pos) {
            let ch = self.text[self.pos];
            if ch.is_alphanumeric() {
                self.pos += 1;
            } else if ch == ':' {
                if self.ch_at(self.pos + 1).is_alphanumeric() {
                    self.pos += 1;
                    continue;
                }
                let content_end = self.pos;
                self.pos += 1;
                if content_start == content_end {
                    break;
                }
                return Some(self.slice(content_start, content_end));
            } else if NAME_PUNCTUATION.contains(&ch)
                && !NAME_PUNCTUATION.contains(&self.ch_at(self.pos + 1))
            {
                self.pos += 1;
            } else {
                break;
            }
        }

        self.pos = token_start;
        None
    }

    /// Scans a construct opened by `open_len` characters and closed by `close`.
    ///
    /// Returns `(token_start, content_start, content_end)` and leaves the position after the
    /// closing string. On failure the position advances one character past the opener. A
    /// missing closing string is reported as malformed `what`; openers that are common in
    /// prose pass `None` and are never reported.
    fn scan_delimited(
        &mut self,
        what: Option<&str>,
        open_len: usize,
        close: &[char],
        skip_escapes: bool,
    ) -> Option<(usize, usize, usize)> {
        let token_start = self.pos;
        self.pos += open_len;
        let content_start = self.pos;

        if !is_start_string(self.ch_before(token_start), self.ch_at(content_start)) {
            self.pos = content_start + 1;
            return None;
        }

        while self.fits(self.pos) {
            let closes = close
                .iter()
                .enumerate()
                .all(|(offset, ch)| self.ch_is(self.pos + offset, *ch));
            if closes {
                let content_end = self.pos;
                self.pos += close.len();
                let token_end = self.pos;

                if !is_end_string(self.ch_before(content_end), self.ch_at(token_end)) {
                    self.pos = content_end + 1;
                    continue;
                }
                if content_start == content_end {
                    self.pos = content_start + 1;
                    return None;
                }
                return Some((token_start, content_start, content_end));
            } else if skip_escapes && self.ch_is(self.pos, '\\') {
                self.pos += 2;
            } else {
                self.pos += 1;
            }
        }

        if let Some(what) = what {
            self.malformed(&format!("unterminated {}", what), token_start);
        }
        self.pos = content_start + 1;
        None
    }

    fn parse_inline_literal(&mut self) {
        if let Some((token_start, content_start, content_end)) =
            self.scan_delimited(Some("inline literal"), 2, &['`', '`'], false)
        {
            let content = self.slice(content_start, content_end);
            let region = self.roles.process_role(&content, "code");
            self.emit(token_start, content_start, content_end, TokenKind::Formatted(region));
        }
    }

    fn parse_emphasis(&mut self) {
        if let Some((token_start, content_start, content_end)) =
            self.scan_delimited(Some("emphasis"), 1, &['*'], true)
        {
            self.emit(token_start, content_start, content_end, TokenKind::Emphasis);
        }
    }

    fn parse_strong(&mut self) {
        if let Some((token_start, content_start, content_end)) =
            self.scan_delimited(Some("strong emphasis"), 2, &['*', '*'], true)
        {
            self.emit(token_start, content_start, content_end, TokenKind::Strong);
        }
    }

    /// `|name|` is kept as its name; substitutions are not expanded.
    fn parse_substitution(&mut self) {
        if let Some((token_start, content_start, content_end)) =
            self.scan_delimited(Some("substitution reference"), 1, &['|'], true)
        {
            self.emit(token_start, content_start, content_end, TokenKind::Text);
        }
    }

    /// `` _`target` `` renders as its text.
    fn parse_inline_internal_target(&mut self) {
        if let Some((token_start, content_start, content_end)) =
            self.scan_delimited(Some("inline target"), 2, &['`'], true)
        {
            self.emit(token_start, content_start, content_end, TokenKind::Text);
        }
    }

    fn parse_footnote_reference(&mut self) {
        if let Some((token_start, content_start, content_end)) =
            self.scan_delimited(None, 1, &[']', '_'], true)
        {
            let name = self.slice(content_start, content_end);
            let label = self
                .resolver
                .find_link(&name, None, false)
                .filter(|link| link.kind == HyperlinkKind::Footnote)
                .map(|link| link.content);
            if label.is_none() {
                self.unresolved("footnote", &name);
            }
            self.emit(token_start, content_start, content_end, TokenKind::Footnote { label });
        }
    }

    fn parse_prefixed_interpreted_text(&mut self) {
        let token_start = self.pos;
        match self.scan_for_explicit_role() {
            Some(role) if self.ch_is(self.pos, '`') => {
                self.parse_interpreted_text(Some(role), Some(token_start))
            }
            _ => self.pos = token_start + 1,
        }
    }

    /// Scans `` `text` `` with an optional prefix role (already consumed), suffix role, or
    /// link underscores.
    fn parse_interpreted_text(
        &mut self,
        prefix_role: Option<String>,
        prefix_start: Option<usize>,
    ) {
        let token_start = prefix_start.unwrap_or(self.pos);
        self.pos += 1;
        let content_start = self.pos;

        if !is_start_string(self.ch_before(token_start), self.ch_at(content_start)) {
            self.pos = content_start + 1;
            return;
        }

        while self.fits(self.pos) {
            if self.ch_is(self.pos, '`') {
                let content_end = self.pos;
                self.pos += 1;
                let (underscores, suffix_role) = if self.ch_is(self.pos, '_') {
                    (self.eat('_'), None)
                } else if self.ch_is(self.pos, ':') {
                    (0, self.scan_for_explicit_role())
                } else {
                    (0, None)
                };
                let token_end = self.pos;

                if !is_end_string(self.ch_before(content_end), self.ch_at(token_end)) {
                    self.pos = content_end + 1;
                    continue;
                }
                if content_start == content_end {
                    self.pos = content_start + 1;
                    return;
                }
                if underscores > 2 {
                    self.malformed("too many underscores after interpreted text", token_start);
                    self.pos = content_start + 1;
                    return;
                }

                let markers = usize::from(underscores > 0)
                    + usize::from(prefix_role.is_some())
                    + usize::from(suffix_role.is_some());
                if markers > 1 {
                    // Both a role and a link, or two roles: left as text.
                    return;
                }

                let content = self.slice(content_start, content_end);
                if underscores > 0 {
                    let (target, title) = self.roles.process_link(&content);
                    let url = self
                        .resolver
                        .find_link(&title, target.as_deref(), underscores == 2)
                        .filter(|link| link.kind == HyperlinkKind::Link)
                        .map(|link| link.content);
                    if url.is_none() {
                        self.unresolved("link", &title);
                    }
                    self.emit(
                        token_start,
                        content_start,
                        content_end,
                        TokenKind::Link { title, url },
                    );
                } else {
                    let role = prefix_role.or(suffix_role);
                    let region = self
                        .roles
                        .process_role(&content, role.as_deref().unwrap_or("literal"));
                    let kind = TokenKind::Formatted(region);
                    self.emit(token_start, content_start, content_end, kind);
                }
                return;
            } else if self.ch_is(self.pos, '\\') {
                self.pos += 2;
            } else {
                self.pos += 1;
            }
        }

        self.malformed("unterminated interpreted text", token_start);
        self.pos = content_start + 1;
    }

    /// `name_` and `name__`: the name is scanned backwards from the underscores.
    fn parse_unquoted_link(&mut self) {
        let content_end = self.pos;
        let underscores = self.eat('_');
        let token_end = self.pos;

        if underscores > 2 {
            return;
        }
        if !is_end_string(self.ch_before(content_end), self.ch_at(token_end)) {
            return;
        }

        let mut content_start = content_end;
        while content_start > self.start {
            let ch = self.text[content_start - 1];
            let before = content_start
                .checked_sub(2)
                .map(|i| self.text[i])
                .filter(|ch| NAME_PUNCTUATION.contains(ch));
            if ch.is_alphanumeric() || (NAME_PUNCTUATION.contains(&ch) && before.is_none()) {
                content_start -= 1;
            } else {
                break;
            }
        }

        if !is_start_string(self.ch_before(content_start), self.ch_at(content_start)) {
            return;
        }
        if content_start == content_end {
            return;
        }

        let title = self.slice(content_start, content_end);
        let url = self
            .resolver
            .find_link(&title, None, underscores == 2)
            .filter(|link| link.kind == HyperlinkKind::Link)
            .map(|link| link.content);
        if url.is_none() {
            self.unresolved("link", &title);
        }
        self.emit(content_start, content_start, content_end, TokenKind::Link { title, url });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::hooks::StandardRoles;

    fn parse(text: &str) -> Vec<Inline> {
        let mut resolver = LinkResolver::empty();
        let mut diagnostics = Vec::new();
        parse_inlines(text, &mut resolver, &StandardRoles, &mut diagnostics)
    }

    fn diagnostics(text: &str) -> Vec<Diagnostic> {
        let mut resolver = LinkResolver::empty();
        let mut diagnostics = Vec::new();
        parse_inlines(text, &mut resolver, &StandardRoles, &mut diagnostics);
        diagnostics
    }

    fn code(text: &str) -> Inline {
        TextRegion::no_wrap(TextRegion::highlighted(text, "code")).into()
    }

    #[test]
    fn parses_plain_text() {
        assert_eq!(parse("hello world"), vec![Inline::text("hello world")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn parses_emphasis_and_strong() {
        assert_eq!(
            parse("a *b* **c**"),
            vec![
                Inline::text("a "),
                TextRegion::highlighted("b", "em").into(),
                Inline::text(" "),
                TextRegion::highlighted("c", "strong").into(),
            ]
        );
    }

    #[test]
    fn escaped_markup_is_text() {
        assert_eq!(parse("a \\*b\\* c"), vec![Inline::text("a *b* c")]);
    }

    #[test]
    fn unterminated_emphasis_is_text() {
        assert_eq!(
            parse("*unterminated emphasis"),
            vec![Inline::text("*unterminated emphasis")]
        );
    }

    #[test]
    fn unterminated_markup_is_reported() {
        let diagnostics = diagnostics("*unterminated emphasis");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::MalformedMarkup);
        assert!(diagnostics[0].message.starts_with("unterminated emphasis near"));
    }

    #[test]
    fn empty_markup_and_brackets_are_not_reported() {
        assert_eq!(parse("****"), vec![Inline::text("****")]);
        assert!(diagnostics("****").is_empty());
        assert_eq!(parse("see [docs]"), vec![Inline::text("see [docs]")]);
        assert!(diagnostics("see [docs]").is_empty());
    }

    #[test]
    fn extra_underscores_after_interpreted_text_are_reported() {
        let diagnostics = diagnostics("`x`___ here");
        assert!(diagnostics
            .iter()
            .any(|d| d.message.starts_with("too many underscores after interpreted text")));
        assert!(!diagnostics.iter().any(|d| d.message.starts_with("unterminated")));
    }

    #[test]
    fn emphasis_needs_word_boundaries() {
        assert_eq!(parse("2*3*4"), vec![Inline::text("2*3*4")]);
        assert_eq!(parse("a * b * c"), vec![Inline::text("a * b * c")]);
    }

    #[test]
    fn inline_literal_keeps_backslashes() {
        assert_eq!(
            parse("run ``a\\b``."),
            vec![Inline::text("run "), code("a\\b"), Inline::text(".")]
        );
    }

    #[test]
    fn interpreted_text_uses_roles() {
        assert_eq!(parse("`x`"), vec![code("x")]);
        assert_eq!(
            parse(":flag:`--help`"),
            vec![TextRegion::no_wrap(TextRegion::highlighted("--help", "flag")).into()]
        );
        assert_eq!(
            parse("`~a.b`:func:"),
            vec![TextRegion::no_wrap(TextRegion::highlighted("b", "role/func")).into()]
        );
    }

    #[test]
    fn two_roles_leave_text() {
        assert_eq!(parse(":a:`x`:b:"), vec![Inline::text(":a:`x`:b:")]);
    }

    #[test]
    fn embedded_link() {
        assert_eq!(
            parse("see `docs <https://d.example>`_"),
            vec![
                Inline::text("see "),
                TextRegion::link("docs", Some("https://d.example".into())).into(),
            ]
        );
    }

    #[test]
    fn unresolved_unquoted_link() {
        let mut resolver = LinkResolver::empty();
        let mut diagnostics = Vec::new();
        let items =
            parse_inlines("see name_ here", &mut resolver, &StandardRoles, &mut diagnostics);
        assert_eq!(
            items,
            vec![
                Inline::text("see "),
                TextRegion::link("name", None).into(),
                Inline::text(" here"),
            ]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnresolvedReference);
    }

    #[test]
    fn too_many_underscores_is_text() {
        assert_eq!(parse("name___"), vec![Inline::text("name___")]);
    }

    #[test]
    fn substitution_keeps_name() {
        assert_eq!(parse("a |b| c"), vec![Inline::text("a b c")]);
    }

    #[test]
    fn footnote_reference_without_target() {
        assert_eq!(
            parse("text [1]_"),
            vec![
                Inline::text("text "),
                TextRegion::no_wrap(TextRegion::highlighted("[1]", "role/footnote")).into(),
            ]
        );
    }

    #[test]
    fn quoted_delimiters_are_text() {
        assert_eq!(parse("\"*\" and '*'"), vec![Inline::text("\"*\" and '*'")]);
    }
}
