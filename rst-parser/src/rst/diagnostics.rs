//! Non-fatal parse diagnostics
//!
//! Parsing never fails: malformed markup degrades to text and unresolved references render
//! without a target. Callers that want to know about such spots (linters, doc builds run with
//! warnings enabled) can collect them with
//! [RstParser::parse_with_diagnostics](crate::rst::parser::RstParser::parse_with_diagnostics).

use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    Warning,
    Information,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
            DiagnosticSeverity::Hint => write!(f, "hint"),
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Markup that looked like a construct but was not terminated or was empty.
    MalformedMarkup,
    /// A link or footnote reference without a target.
    UnresolvedReference,
    /// A directive the directive handler does not know.
    UnknownDirective,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedMarkup => "malformed-markup",
            DiagnosticKind::UnresolvedReference => "unresolved-reference",
            DiagnosticKind::UnknownDirective => "unknown-directive",
        }
    }

    fn default_severity(&self) -> DiagnosticSeverity {
        match self {
            DiagnosticKind::MalformedMarkup => DiagnosticSeverity::Hint,
            DiagnosticKind::UnresolvedReference => DiagnosticSeverity::Warning,
            DiagnosticKind::UnknownDirective => DiagnosticSeverity::Information,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: DiagnosticSeverity,
    pub message: String,
    /// Zero-based source line, when known. Inline diagnostics carry no line.
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "{} [{}]: {} at line {}",
                self.severity,
                self.kind,
                self.message,
                line + 1
            ),
            None => write!(f, "{} [{}]: {}", self.severity, self.kind, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line() {
        let diag = Diagnostic::new(DiagnosticKind::UnknownDirective, "unknown directive `foo`")
            .at_line(2);
        assert_eq!(
            diag.to_string(),
            "info [unknown-directive]: unknown directive `foo` at line 3"
        );
    }

    #[test]
    fn severity_defaults_by_kind() {
        let diag = Diagnostic::new(DiagnosticKind::UnresolvedReference, "x");
        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        let diag = diag.with_severity(DiagnosticSeverity::Hint);
        assert_eq!(diag.to_string(), "hint [unresolved-reference]: x");
    }
}
