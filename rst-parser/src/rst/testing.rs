//! Testing utilities for AST assertions
//!
//!     Docstring markup is forgiving: almost every input parses, and malformed constructs
//!     quietly turn into paragraphs. A test that only checks "it parsed" therefore checks
//!     nothing, and a test that checks element counts tends to pass for the wrong reasons.
//!
//!     Tests of the parser follow two rules:
//!
//!         1. Assert on structure and content together, via [assert_ast](fn@assert_ast).
//!         2. Keep each sample minimal and written the way it would appear in a real
//!            docstring: one construct per test, with its surrounding blank lines.
//!
//! Rule 1: Use assert_ast
//!
//!     Walking the tree by hand means matching on enum variants at every level, which buries
//!     the intent of the test in boilerplate. The fluent API names what is being checked and
//!     reports the path to the failing node:
//!
//!     ```rust,ignore
//!     use rst_parser::parse;
//!     use rst_parser::rst::testing::assert_ast;
//!
//!     let doc = parse("Title\n=====\n\n- one\n- two");
//!     assert_ast(&doc)
//!         .item_count(2)
//!         .item(0, |item| {
//!             item.assert_heading().level(1).text("Title");
//!         })
//!         .item(1, |item| {
//!             item.assert_list().bullet('-').item_count(2).item(1, |li| {
//!                 li.child(0, |c| {
//!                     c.assert_paragraph().text("two");
//!                 });
//!             });
//!         });
//!     ```
//!
//!     Failures read like `items[1]:items[1]:children[0]: Expected text to be 'two', but got
//!     'three'`.
//!
//! Rule 2: Minimal samples
//!
//!     Indentation is significant, and so are blank lines between blocks. Write samples with
//!     explicit `\n` or `concat!` rather than indented raw strings unless the test is about
//!     dedent itself.
//!
//! Snapshots
//!
//!     Whole-tree checks use the dump format with `insta` inline snapshots, see
//!     [to_dump_str](crate::rst::formats::to_dump_str).

mod ast_assertions;
mod matchers;

pub use ast_assertions::{
    assert_ast, AdmonitionAssertion, CodeAssertion, DocumentAssertion, FootnoteAssertion,
    FootnotesAssertion, HeadingAssertion, InlineAssertion, ListAssertion, ListItemAssertion,
    NodeAssertion, ParagraphAssertion, QuoteAssertion,
};
pub use matchers::TextMatch;
