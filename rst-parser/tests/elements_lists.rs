//! Bullet and enumerated lists

use rst_parser::rst::ast::{EnumeratorKind, MarkerKind};
use rst_parser::rst::formats::{to_dump_str, to_json_str};
use rst_parser::rst::testing::assert_ast;
use rst_parser::{parse, DiagnosticKind, RstParser};

#[test]
fn test_bullet_kinds_start_new_lists() {
    let doc = parse("- one\n- two\n\n* three");

    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_list()
                .bullet('-')
                .marker(None)
                .numbers(&[None, None])
                .item(1, |li| {
                    li.child(0, |c| {
                        c.assert_paragraph().text("two");
                    });
                });
        })
        .item(1, |item| {
            item.assert_list().bullet('*').item_count(1);
        });
}

#[test]
fn test_numbered_dot_list() {
    let doc = parse("Steps:\n\n1. fetch\n2. build\n3. test");

    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_paragraph().text("Steps:");
        })
        .item(1, |item| {
            item.assert_list()
                .enumerator(EnumeratorKind::Number)
                .marker(Some(MarkerKind::Dot))
                .numbers(&[Some(1), Some(2), Some(3)])
                .item(2, |li| {
                    li.number(Some(3)).child(0, |c| {
                        c.assert_paragraph().text("test");
                    });
                });
        });
}

#[test]
fn test_enclosed_letters() {
    let doc = parse("(a) first\n(b) second");

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_list()
            .enumerator(EnumeratorKind::SmallLetter)
            .marker(Some(MarkerKind::Enclosed))
            .numbers(&[Some(1), Some(2)]);
    });
}

#[test]
fn test_nested_list_in_item_body() {
    let doc = parse("- outer\n\n  - inner\n\n- next");

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_list()
            .item_count(2)
            .item(0, |li| {
                li.child_count(2)
                    .child(0, |c| {
                        c.assert_paragraph().text("outer");
                    })
                    .child(1, |c| {
                        c.assert_list().bullet('-').item_count(1);
                    });
            })
            .item(1, |li| {
                li.child(0, |c| {
                    c.assert_paragraph().text("next");
                });
            });
    });
}

#[test]
fn test_numbered_gap_on_next_line_is_a_paragraph() {
    // A new list start must be followed by a blank line, an indented line or the next
    // number, so `3.` right after `1.` keeps both lines as text.
    let doc = parse("1. a\n3. b\n");

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph().lines(&["1. a", "3. b"]);
    });
}

#[test]
fn test_numbered_gap_after_blank_line_starts_new_list() {
    let doc = parse("1. a\n\n3. b\n");

    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_list().numbers(&[Some(1)]);
        })
        .item(1, |item| {
            item.assert_list().numbers(&[Some(3)]);
        });
}

#[test]
fn test_thousands_of_nested_bullets() {
    let text = "- ".repeat(5000) + "x";
    let (doc, diagnostics) = RstParser::new().parse_with_diagnostics(&text);

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_list().item_count(1);
    });
    assert!(diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::MalformedMarkup));
    assert!(to_dump_str(&doc).contains("x"));
    assert!(to_json_str(&doc).is_ok());
}

#[test]
fn test_number_followed_by_text_is_a_paragraph() {
    let doc = parse("2023. A good year\nfor wine.");

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph().lines(&["2023. A good year", "for wine."]);
    });
}

#[test]
fn test_item_with_inline_markup() {
    let doc = parse("- use ``--force``");

    assert_ast(&doc).item(0, |item| {
        item.assert_list().item(0, |li| {
            li.child(0, |c| {
                c.assert_paragraph()
                    .text("use --force")
                    .inline(1, |inline| {
                        inline.no_wrap().color("code").content("--force");
                    });
            });
        });
    });
}
