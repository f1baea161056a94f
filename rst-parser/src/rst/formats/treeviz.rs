//! Treeviz formatter for parsed documents
//!
//! Treeviz is a one line per node rendering of the tree, handy for eyeballing what the parser
//! made of a docstring. Nesting is drawn with box connectors, each line shows an icon and the
//! node's label truncated to 30 characters.
//!
//!     ⧉ 2 items
//!     ├─ § Title
//!     │ └─ ◦ Title
//!     └─ ☰ Number Dot
//!       └─ • 1
//!         └─ ¶ one
//!           └─ ◦ one
//!
//! Icons
//!     Blocks:
//!         Document: ⧉
//!         Heading: §
//!         Paragraph: ¶
//!         Quote: ❝
//!         List: ☰
//!         ListItem: •
//!         Code: 𝒱
//!         CodeLine: ↵
//!         Admonition: ≔
//!         FootnoteContainer: ³
//!         Footnote: †
//!         ThematicBreak: ―
//!     Inlines:
//!         Text: ◦
//!         Highlighted: 𝐼
//!         Link: ⊕
//!         NoWrap: ⊏
//!
//! Parameters
//!     show-inlines: "false" hides inline items, leaving only blocks.

use super::registry::{bool_param, FormatError, FormatParams, Formatter};
use crate::rst::ast::{snapshot_from_document, AstSnapshot, Document};

const INLINE_TYPES: &[&str] = &["Text", "Highlighted", "Link", "NoWrap"];

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "Quote" => "❝",
        "List" => "☰",
        "ListItem" => "•",
        "Code" => "𝒱",
        "CodeLine" => "↵",
        "Admonition" => "≔",
        "FootnoteContainer" => "³",
        "Footnote" => "†",
        "ThematicBreak" => "―",
        "Text" => "◦",
        "Highlighted" => "𝐼",
        "Link" => "⊕",
        "NoWrap" => "⊏",
        _ => "○",
    }
}

/// Single-line label: line breaks would break the tree layout.
fn label_of(snapshot: &AstSnapshot) -> String {
    let flat = snapshot
        .label
        .replace(['\n', '\u{0b}'], "↵");
    truncate(&flat, 30)
}

fn visible_children(snapshot: &AstSnapshot, show_inlines: bool) -> Vec<&AstSnapshot> {
    snapshot
        .children
        .iter()
        .filter(|child| show_inlines || !INLINE_TYPES.contains(&child.node_type.as_str()))
        .collect()
}

/// Build treeviz output from an AstSnapshot
fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_inlines: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(&snapshot.node_type);
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon,
        label_of(snapshot)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = visible_children(snapshot, show_inlines);
    let child_count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == child_count, show_inlines, output);
    }
}

fn format_document_snapshot(snapshot: &AstSnapshot, show_inlines: bool) -> String {
    let icon = get_icon(&snapshot.node_type);
    let mut output = format!("{} {}\n", icon, label_of(snapshot));

    let children = visible_children(snapshot, show_inlines);
    let child_count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        format_snapshot(child, "", i + 1 == child_count, show_inlines, &mut output);
    }

    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    format_document_snapshot(&snapshot_from_document(doc), true)
}

pub fn to_treeviz_str_with_params(
    doc: &Document,
    params: &FormatParams,
) -> Result<String, FormatError> {
    let show_inlines = bool_param(params, "show-inlines", true)?;
    Ok(format_document_snapshot(&snapshot_from_document(doc), show_inlines))
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document, params: &FormatParams) -> Result<String, FormatError> {
        to_treeviz_str_with_params(doc, params)
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::parser::parse;

    #[test]
    fn test_treeviz_blocks_and_inlines() {
        let doc = parse("Title\n=====\n\n1. one");
        let expected = "\
⧉ 2 items
├─ § Title
│ └─ ◦ Title
└─ ☰ Number Dot
  └─ • 1
    └─ ¶ one
      └─ ◦ one
";
        assert_eq!(to_treeviz_str(&doc), expected);
    }

    fn no_inlines() -> FormatParams {
        FormatParams::from([("show-inlines".to_string(), "false".to_string())])
    }

    #[test]
    fn test_treeviz_hides_inlines() {
        let doc = parse("Title\n=====\n\nBody *text*.");
        let expected = "\
⧉ 2 items
├─ § Title
└─ ¶ Body text.
";
        assert_eq!(to_treeviz_str_with_params(&doc, &no_inlines()), Ok(expected.to_string()));
    }

    #[test]
    fn test_treeviz_truncates_labels() {
        let doc = parse("This paragraph is definitely longer than thirty characters.");
        let output = to_treeviz_str_with_params(&doc, &no_inlines()).unwrap();
        assert!(output.contains("└─ ¶ This paragraph is definitely l..."));
    }

    #[test]
    fn test_treeviz_rejects_bad_flag() {
        let params = FormatParams::from([("show-inlines".to_string(), "no".to_string())]);
        assert!(matches!(
            TreevizFormatter.serialize(&Document::default(), &params),
            Err(FormatError::InvalidParam { .. })
        ));
    }
}
