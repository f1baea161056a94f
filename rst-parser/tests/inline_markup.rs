//! Inline markup in paragraphs

use rst_parser::rst::testing::assert_ast;
use rst_parser::{parse, parse_paragraph, Inline, TextRegion};

#[test]
fn test_emphasis_strong_and_literal() {
    let doc = parse("Some *em*, **strong** and ``code``.");

    assert_ast(&doc).item(0, |item| {
        item.assert_paragraph()
            .text("Some em, strong and code.")
            .inline_count(7)
            .inline(1, |inline| {
                inline.color("em").content("em");
            })
            .inline(3, |inline| {
                inline.color("strong").content("strong");
            })
            .inline(5, |inline| {
                inline.no_wrap().color("code").content("code");
            });
    });
}

#[test]
fn test_roles() {
    let items = parse_paragraph("Pass :flag:`--all` to `~pkg.run`:func:.");

    assert_eq!(
        items,
        vec![
            Inline::text("Pass "),
            TextRegion::no_wrap(TextRegion::highlighted("--all", "flag")).into(),
            Inline::text(" to "),
            TextRegion::no_wrap(TextRegion::highlighted("run", "role/func")).into(),
            Inline::text("."),
        ]
    );
}

#[test]
fn test_default_role_is_literal() {
    let items = parse_paragraph("`value`");
    assert_eq!(
        items,
        vec![TextRegion::no_wrap(TextRegion::highlighted("value", "code")).into()]
    );
}

#[test]
fn test_escapes_and_unmatched_markup() {
    assert_eq!(parse_paragraph("\\*not em\\*"), vec![Inline::text("*not em*")]);
    assert_eq!(parse_paragraph("2 * 3 * 4"), vec![Inline::text("2 * 3 * 4")]);
    assert_eq!(parse_paragraph("*open"), vec![Inline::text("*open")]);
}

#[test]
fn test_substitutions_and_internal_targets_render_as_text() {
    assert_eq!(
        parse_paragraph("the |name| of _`anchor`"),
        vec![Inline::text("the name of anchor")]
    );
}

#[test]
fn test_line_block_entries() {
    let doc = parse("| first\n| second\n  wrapped");

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph().text("first\u{0b}second wrapped");
    });
}

#[test]
fn test_markup_spans_paragraph_lines() {
    let doc = parse("An *emphasized\nphrase* here.");

    assert_ast(&doc).item(0, |item| {
        item.assert_paragraph().inline(1, |inline| {
            inline.color("em").content("emphasized\nphrase");
        });
    });
}
