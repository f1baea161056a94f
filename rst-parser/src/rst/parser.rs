//! Parser entry points
//!
//!     A parse runs four stages over one input text:
//!
//!     1. Line preprocessing: optional dedent, tab expansion, line splitting.
//!     2. Block parsing into a [Document], collecting hyperlink targets and footnotes.
//!     3. Tree cleanup, removing containers that ended up empty.
//!     4. Inline parsing of every text-bearing node, resolving references against the
//!        targets collected in stage 2.
//!
//!     All tables live for one call, so an [RstParser] can be reused for any number of
//!     documents. Directive and role rendering is delegated to the handlers installed with
//!     [RstParser::with_directives] and [RstParser::with_roles].

use std::borrow::Cow;
use std::fmt;

use super::ast::{clean_tree, Document, Inline};
use super::blocks::{BlockOutput, BlockParser};
use super::diagnostics::Diagnostic;
use super::hooks::{DirectiveHandler, RoleHandler, StandardDirectives, StandardRoles};
use super::inlines::{parse_inlines, process_document};
use super::lines::{dedent, LineBuffer};
use super::links::LinkResolver;

/// Options for one parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Tab stops for tab expansion.
    pub tab_width: usize,
    /// Strip common indentation first, as for docstrings.
    pub dedent: bool,
    /// Syntax name given to literal blocks.
    pub literal_syntax: String,
    /// Syntax name given to doctest blocks.
    pub doctest_syntax: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            dedent: false,
            literal_syntax: "text".to_string(),
            doctest_syntax: "python".to_string(),
        }
    }
}

/// Reusable parser with its options and hooks.
pub struct RstParser {
    options: ParserOptions,
    directives: Box<dyn DirectiveHandler>,
    roles: Box<dyn RoleHandler>,
}

impl fmt::Debug for RstParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RstParser")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for RstParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RstParser {
    /// Parser with default options and the standard directives and roles.
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            directives: Box::new(StandardDirectives),
            roles: Box::new(StandardRoles),
        }
    }

    /// Replaces the directive handler.
    pub fn with_directives(mut self, directives: impl DirectiveHandler + 'static) -> Self {
        self.directives = Box::new(directives);
        self
    }

    /// Replaces the role handler.
    pub fn with_roles(mut self, roles: impl RoleHandler + 'static) -> Self {
        self.roles = Box::new(roles);
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a document. Never fails: anything that is not valid markup is kept as text.
    pub fn parse(&self, text: &str) -> Document {
        self.parse_with_diagnostics(text).0
    }

    /// Parses a document and reports what was degraded along the way.
    pub fn parse_with_diagnostics(&self, text: &str) -> (Document, Vec<Diagnostic>) {
        let text = if self.options.dedent {
            Cow::Owned(dedent(text))
        } else {
            Cow::Borrowed(text)
        };
        let lines = LineBuffer::new(&text, self.options.tab_width);
        log::debug!("parsing {} lines", lines.len());

        let BlockOutput {
            mut document,
            links,
            mut diagnostics,
        } = BlockParser::new(lines, self.directives.as_ref(), &self.options).parse();

        clean_tree(&mut document);

        let mut resolver = links.into_resolver();
        process_document(
            &mut document,
            &mut resolver,
            self.roles.as_ref(),
            &mut diagnostics,
        );

        (document, diagnostics)
    }

    /// Parses inline markup only. References cannot resolve since there are no targets.
    pub fn parse_paragraph(&self, text: &str) -> Vec<Inline> {
        let mut resolver = LinkResolver::empty();
        let mut diagnostics = Vec::new();
        parse_inlines(text, &mut resolver, self.roles.as_ref(), &mut diagnostics)
    }
}

/// Parses docstring-like text: common indentation is removed first.
pub fn parse(text: &str) -> Document {
    RstParser::with_options(ParserOptions {
        dedent: true,
        ..ParserOptions::default()
    })
    .parse(text)
}

/// Parses a single paragraph of inline markup.
pub fn parse_paragraph(text: &str) -> Vec<Inline> {
    RstParser::new().parse_paragraph(text)
}
