//! # rst-parser
//!
//! A parser for the subset of reStructuredText used in docstrings, help text and
//! command line documentation.
//!
//! File Layout
//!
//! The parser runs as a short pipeline over a single mutable line buffer:
//!
//! src/rst
//!   ├── lines       Tab expansion, dedent, line gathering
//!   ├── blocks      Block dispatcher and handlers (headings, lists, explicit markup, ...)
//!   ├── numbering   Enumerated list detection, roman and letter numerals
//!   ├── links       Hyperlink target table and reference resolution
//!   ├── inlines     Inline tokenizer (emphasis, roles, links, footnote references)
//!   ├── hooks       Directive and role policies supplied by the caller
//!   └── ast         The document tree handed to renderers
//!
//! For testing guidelines, see the [testing module](rst::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod rst;

pub use rst::ast::{Document, Inline, Node, TextRegion};
pub use rst::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSeverity};
pub use rst::formats::{FormatError, FormatRegistry, Formatter};
pub use rst::hooks::{DirectiveHandler, RoleHandler, StandardDirectives, StandardRoles};
pub use rst::parser::{parse, parse_paragraph, ParserOptions, RstParser};
