//! Inline content of text-bearing nodes.
//!
//! These types are what the inline tokenizer emits and what renderers consume. Regions carry
//! a color path (e.g. `em`, `strong`, `code`, `role/footnote`) rather than a concrete style;
//! mapping paths to styles is the renderer's business.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One item of a text-bearing node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// Formatted region.
    Region(TextRegion),
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Returns the plain text when this item is not a region.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Inline::Text(text) => Some(text),
            Inline::Region(_) => None,
        }
    }

    /// Returns the region when this item is one.
    pub fn as_region(&self) -> Option<&TextRegion> {
        match self {
            Inline::Text(_) => None,
            Inline::Region(region) => Some(region),
        }
    }
}

impl From<TextRegion> for Inline {
    fn from(region: TextRegion) -> Self {
        Inline::Region(region)
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Text(text) => f.write_str(text),
            Inline::Region(region) => region.fmt(f),
        }
    }
}

/// A highlighted, linked or non-wrapping span of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRegion {
    /// Text rendered with the color at the given path.
    Highlighted { text: String, color: String },
    /// Hyperlink. `url` is `None` when the reference could not be resolved.
    Link { text: String, url: Option<String> },
    /// Region that must not be broken across lines.
    NoWrap(Box<TextRegion>),
}

impl TextRegion {
    pub fn highlighted(text: impl Into<String>, color: impl Into<String>) -> Self {
        TextRegion::Highlighted {
            text: text.into(),
            color: color.into(),
        }
    }

    pub fn link(text: impl Into<String>, url: Option<String>) -> Self {
        TextRegion::Link {
            text: text.into(),
            url,
        }
    }

    pub fn no_wrap(inner: TextRegion) -> Self {
        TextRegion::NoWrap(Box::new(inner))
    }

    /// The visible text of this region.
    pub fn content(&self) -> &str {
        match self {
            TextRegion::Highlighted { text, .. } | TextRegion::Link { text, .. } => text,
            TextRegion::NoWrap(inner) => inner.content(),
        }
    }

    /// Color path of the innermost highlighted region, if any.
    pub fn color(&self) -> Option<&str> {
        match self {
            TextRegion::Highlighted { color, .. } => Some(color),
            TextRegion::Link { .. } => None,
            TextRegion::NoWrap(inner) => inner.color(),
        }
    }
}

impl fmt::Display for TextRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}

/// Concatenates the visible text of inline items.
pub fn plain_text(items: &[Inline]) -> String {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_content_unwraps_no_wrap() {
        let region = TextRegion::no_wrap(TextRegion::highlighted("code", "code"));
        assert_eq!(region.content(), "code");
        assert_eq!(region.color(), Some("code"));
    }

    #[test]
    fn plain_text_joins_items() {
        let items = vec![
            Inline::text("see "),
            TextRegion::link("docs", Some("https://example.com".into())).into(),
        ];
        assert_eq!(plain_text(&items), "see docs");
    }
}
