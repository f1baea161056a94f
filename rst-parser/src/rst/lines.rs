//! Line preprocessing
//!
//!     Every parse starts by turning the input into a buffer of owned lines: tabs are expanded
//!     column-aware, the text is split on any line boundary, and (for the free [parse]
//!     function) the common indentation is removed first.
//!
//!     Block handlers then work on the [LineBuffer] by index. Handlers strip the markers they
//!     recognize by rewriting the line in place and re-run block parsing over the remainder, so
//!     a list item like `- text` becomes a line `text` that is parsed as the item's body.
//!
//! Gathering
//!
//!     Nested blocks are delimited by indentation. The gather helpers scan forward from a start
//!     line, decide where the nested block ends, and strip the nested block's indentation from
//!     the consumed lines, so that recursive block parsing sees flush-left text.
//!
//! [parse]: crate::rst::parser::parse

/// Characters that `str.splitlines` treats as line boundaries.
fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Replaces tabs with spaces up to the next multiple of `tab_width`.
///
/// The column counter resets after `\n` and `\r`. A zero width removes tabs.
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                if tab_width > 0 {
                    let fill = tab_width - column % tab_width;
                    result.extend(std::iter::repeat(' ').take(fill));
                    column += fill;
                }
            }
            '\n' | '\r' => {
                result.push(ch);
                column = 0;
            }
            _ => {
                result.push(ch);
                column += 1;
            }
        }
    }
    result
}

/// Splits text into lines without their terminators.
///
/// `\r\n` counts as one boundary. A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    split_lines_keep_ends(text)
        .into_iter()
        .map(|line| strip_line_end(line).to_string())
        .collect()
}

fn split_lines_keep_ends(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        let mut end = i + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                end = j + 1;
                chars.next();
            }
        }
        lines.push(&text[start..end]);
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn strip_line_end(line: &str) -> &str {
    let line = line.strip_suffix("\r\n").unwrap_or(line);
    match line.chars().last() {
        Some(ch) if is_line_boundary(ch) => &line[..line.len() - ch.len_utf8()],
        _ => line,
    }
}

/// Removes indentation from docstring-like text.
///
/// The first line keeps its content (it usually follows the opening quotes), the common
/// indentation of the remaining lines is removed, surrounding whitespace is stripped and a
/// single trailing newline is added. Empty input is returned unchanged.
pub fn dedent(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lines = split_lines_keep_ends(text);
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };

    let rest: Vec<String> = rest
        .iter()
        .map(|line| {
            let content = strip_line_end(line);
            if content.chars().all(|ch| ch == ' ' || ch == '\t') {
                line[content.len()..].to_string()
            } else {
                line.to_string()
            }
        })
        .collect();

    let margin = rest
        .iter()
        .filter(|line| !strip_line_end(line).is_empty())
        .map(|line| {
            let content = strip_line_end(line);
            &content[..content.len() - content.trim_start_matches([' ', '\t']).len()]
        })
        .fold(None::<&str>, |margin, indent| match margin {
            None => Some(indent),
            Some(margin) => Some(common_prefix(margin, indent)),
        })
        .unwrap_or("");

    let mut result = String::with_capacity(text.len() + 1);
    result.push_str(first.trim_end());
    result.push('\n');
    for line in &rest {
        result.push_str(line.strip_prefix(margin).unwrap_or(line));
    }

    let mut result = result.trim().to_string();
    result.push('\n');
    result
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map(|((i, x), _)| i + x.len_utf8())
        .unwrap_or(0);
    &a[..len]
}

/// True for empty and whitespace-only lines.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Number of leading whitespace characters.
pub fn indent_of(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}

/// Drops the first `count` characters of a line.
pub fn drop_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}

/// Mutable buffer of source lines shared by all block handlers of one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Expands tabs and splits the text into lines.
    pub fn new(text: &str, tab_width: usize) -> Self {
        Self {
            lines: split_lines(&expand_tabs(text, tab_width)),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, or an empty string past the end.
    pub fn get(&self, index: usize) -> &str {
        self.lines.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, index: usize, line: impl Into<String>) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line.into();
        }
    }

    /// Lines in `start..end`, clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> &[String] {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        &self.lines[start..end]
    }

    pub fn is_blank(&self, index: usize) -> bool {
        is_blank(self.get(index))
    }

    /// True when every line in `start..end` is blank.
    pub fn all_blank(&self, start: usize, end: usize) -> bool {
        self.slice(start, end).iter().all(|line| is_blank(line))
    }

    fn strip_indent(&mut self, index: usize, count: usize) {
        if let Some(slot) = self.lines.get_mut(index) {
            let stripped = drop_chars(slot, count).to_string();
            *slot = stripped;
        }
    }

    /// Consumes lines indented by at least one column and strips their common indentation.
    ///
    /// Blank lines are skipped when `allow_blank` is set, otherwise they end the block.
    /// Returns the index after the last consumed non-blank line.
    pub fn gather_indented(&mut self, start: usize, end: usize, allow_blank: bool) -> usize {
        let end = end.min(self.lines.len());
        if start >= end {
            return start;
        }

        let mut common_indent: Option<usize> = None;
        let mut result_end = start;

        for i in start..end {
            let line = &self.lines[i];
            if is_blank(line) {
                if allow_blank {
                    continue;
                }
                break;
            }
            let indent = indent_of(line);
            if indent == 0 {
                break;
            }
            result_end = i + 1;
            common_indent = Some(common_indent.map_or(indent, |common| common.min(indent)));
        }

        if let Some(common) = common_indent {
            for i in start..result_end {
                self.strip_indent(i, common);
            }
        }

        result_end
    }

    /// Consumes lines indented by at least `min_indent` columns and strips exactly that much.
    ///
    /// With `min_indent == 0` every non-blank line is consumed unchanged.
    pub fn gather_exactly_indented(
        &mut self,
        start: usize,
        end: usize,
        min_indent: usize,
        allow_blank: bool,
    ) -> usize {
        let end = end.min(self.lines.len());
        let mut result_end = start;

        for i in start..end {
            let line = &self.lines[i];
            if is_blank(line) {
                if allow_blank {
                    continue;
                }
                break;
            }
            if min_indent == 0 {
                result_end = i + 1;
            } else if indent_of(line) >= min_indent {
                result_end = i + 1;
                self.strip_indent(i, min_indent);
            } else {
                break;
            }
        }

        result_end
    }

    /// Consumes lines starting with `prefix`.
    pub fn gather_prefixed(&mut self, start: usize, end: usize, prefix: char) -> usize {
        let end = end.min(self.lines.len());
        let mut result_end = start;
        for i in start..end {
            if self.lines[i].starts_with(prefix) {
                result_end = i + 1;
            } else {
                break;
            }
        }
        result_end
    }
}
