//! Section titles and transitions
//!
//! Levels are handed out in order of first appearance of each adornment style, and an
//! overlined title is a different style from an underlined one with the same character.

use rst_parser::parse;
use rst_parser::rst::testing::assert_ast;

#[test]
fn test_underline_levels_follow_first_use() {
    let doc = parse("Top\n===\n\nSub\n---\n\nAgain\n=====");

    assert_ast(&doc)
        .item_count(3)
        .item(0, |item| {
            item.assert_heading().level(1).text("Top");
        })
        .item(1, |item| {
            item.assert_heading().level(2).text("Sub");
        })
        .item(2, |item| {
            item.assert_heading().level(1).text("Again");
        });
}

#[test]
fn test_overline_is_its_own_style() {
    let doc = parse("=====\nTop\n=====\n\nSub\n===\n\nBody.");

    assert_ast(&doc)
        .item_count(3)
        .item(0, |item| {
            item.assert_heading().level(1).text("Top");
        })
        .item(1, |item| {
            item.assert_heading().level(2).text("Sub");
        })
        .item(2, |item| {
            item.assert_paragraph().text("Body.");
        });
}

#[test]
fn test_short_underline_is_not_a_title() {
    let doc = parse("Title\n==");

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph().text("Title\n==");
    });
}

#[test]
fn test_title_inline_markup() {
    let doc = parse("The *big* one\n=============");

    assert_ast(&doc).item(0, |item| {
        item.assert_heading().level(1).text("The big one");
    });
}

#[test]
fn test_transition_between_paragraphs() {
    let doc = parse("Before.\n\n----\n\nAfter.");

    assert_ast(&doc)
        .item_count(3)
        .item(0, |item| {
            item.assert_paragraph().text("Before.");
        })
        .item(1, |item| item.assert_thematic_break())
        .item(2, |item| {
            item.assert_paragraph().text("After.");
        });
}
