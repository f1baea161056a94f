//! Line classifiers
//!
//!     Each scanner looks at the start of one line and either recognizes a block marker or
//!     returns `None`. Scanners never look past the line and never backtrack.
//!
//!     A recognized marker reports how many columns it occupies together with the whitespace
//!     that follows it (its `width`), whether any whitespace followed at all, and the rest of
//!     the line. For `- item` the width is 2 and the tail is `item`; continuation lines of the
//!     item must be indented by at least the width.

use crate::rst::lines::LineBuffer;
use crate::rst::numbering::Enumerator;

/// A marker recognized at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Columns taken by the marker and the whitespace after it.
    pub width: usize,
    /// Whether whitespace followed the marker. A marker at the end of the line has none.
    pub has_space: bool,
    /// Rest of the line.
    pub tail: &'a str,
}

/// ASCII punctuation, as used for section adornments, transitions and quoted literals.
pub fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// Finishes a marker whose opening part ends at byte `open_end` (`open_chars` characters).
/// The opening part must be followed by whitespace or the end of the line.
fn finish_marker(line: &str, open_end: usize, open_chars: usize) -> Option<Marker<'_>> {
    let rest = &line[open_end..];
    let tail = rest.trim_start();
    let space = &rest[..rest.len() - tail.len()];
    if space.is_empty() && !rest.is_empty() {
        return None;
    }
    Some(Marker {
        width: open_chars + space.chars().count(),
        has_space: !space.is_empty(),
        tail,
    })
}

/// `| text`
pub fn line_block_marker(line: &str) -> Option<Marker<'_>> {
    if !line.starts_with('|') {
        return None;
    }
    finish_marker(line, 1, 1)
}

/// `- text`, `* text`, `+ text`, `• text`, `‣ text`, `⁃ text`
pub fn bullet_marker(line: &str) -> Option<(char, Marker<'_>)> {
    let bullet = line.chars().next()?;
    if !matches!(bullet, '*' | '+' | '•' | '‣' | '⁃' | '-') {
        return None;
    }
    let marker = finish_marker(line, bullet.len_utf8(), 1)?;
    Some((bullet, marker))
}

/// `1. text`, `(a) text`, `iv) text`, `#. text`
///
/// Letters must all be lowercase or all uppercase.
pub fn numbered_marker(line: &str) -> Option<(Enumerator<'_>, Marker<'_>)> {
    let open_paren = line.starts_with('(');
    let body_start = usize::from(open_paren);
    let body = &line[body_start..];

    let token_len = match body.bytes().next()? {
        b'#' => 1,
        b if b.is_ascii_digit() => body.bytes().take_while(u8::is_ascii_digit).count(),
        b if b.is_ascii_lowercase() => body.bytes().take_while(u8::is_ascii_lowercase).count(),
        b if b.is_ascii_uppercase() => body.bytes().take_while(u8::is_ascii_uppercase).count(),
        _ => return None,
    };

    let token = &body[..token_len];
    let close = body[token_len..].chars().next()?;
    if close != ')' && close != '.' {
        return None;
    }

    let open_end = body_start + token_len + 1;
    let marker = finish_marker(line, open_end, open_end)?;
    Some((
        Enumerator {
            open_paren,
            token,
            close,
        },
        marker,
    ))
}

/// `.. text`
pub fn explicit_marker(line: &str) -> Option<Marker<'_>> {
    if !line.starts_with("..") {
        return None;
    }
    finish_marker(line, 2, 2)
}

/// `__ text`, a short anonymous hyperlink target.
pub fn anonymous_target_marker(line: &str) -> Option<Marker<'_>> {
    if !line.starts_with("__") {
        return None;
    }
    finish_marker(line, 2, 2)
}

/// `:name: text`
///
/// The name may contain backslash escapes and colons that are not followed by whitespace or
/// a backtick. Returns the raw name.
pub fn field_marker(line: &str) -> Option<(&str, Marker<'_>)> {
    let body = line.strip_prefix(':')?;
    let mut chars = body.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next()?;
            }
            ':' => match chars.peek() {
                None => return close_field(line, i),
                Some((_, next)) if next.is_whitespace() => return close_field(line, i),
                Some((_, '`')) => return None,
                Some(_) => {}
            },
            _ => {}
        }
    }
    None
}

fn close_field(line: &str, name_len: usize) -> Option<(&str, Marker<'_>)> {
    if name_len == 0 {
        return None;
    }
    let name = &line[1..1 + name_len];
    let open_end = name_len + 2;
    let marker = finish_marker(line, open_end, line[..open_end].chars().count())?;
    Some((name, marker))
}

/// A line of at least four repetitions of one punctuation character.
pub fn is_transition(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) if is_punctuation(first) => {
            line.chars().count() >= 4 && chars.all(|ch| ch == first)
        }
        _ => false,
    }
}

/// Non-empty line made of one repeated punctuation character.
fn adornment_char(line: &str) -> Option<char> {
    let first = line.chars().next()?;
    if is_punctuation(first) && line.chars().all(|ch| ch == first) {
        Some(first)
    } else {
        None
    }
}

/// Title line followed by an adornment at least as long as the title.
///
/// Returns the adornment character.
pub fn heading_underline(lines: &LineBuffer, start: usize, end: usize) -> Option<char> {
    if end < start + 2 {
        return None;
    }
    let title = lines.get(start);
    let underline = lines.get(start + 1);
    if title.is_empty() || title.starts_with(' ') {
        return None;
    }
    let ch = adornment_char(underline)?;
    (title.chars().count() <= underline.chars().count()).then_some(ch)
}

/// Adornment, title, adornment; both adornments use the same character and are at least as
/// long as the title.
///
/// Returns the adornment character.
pub fn heading_overline(lines: &LineBuffer, start: usize, end: usize) -> Option<char> {
    if end < start + 3 {
        return None;
    }
    let overline = lines.get(start);
    let title = lines.get(start + 1);
    let underline = lines.get(start + 2);
    if title.is_empty() {
        return None;
    }
    let ch = adornment_char(overline)?;
    if adornment_char(underline) != Some(ch) {
        return None;
    }
    let title_len = title.chars().count();
    (title_len <= overline.chars().count() && title_len <= underline.chars().count())
        .then_some(ch)
}
