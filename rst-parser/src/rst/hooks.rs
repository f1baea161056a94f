//! Directive and role hooks
//!
//!     The parser recognizes the shape of directives (`.. name:: argument`) and interpreted
//!     text (`` :role:`content` ``), but what they turn into is a policy of the application
//!     rendering the document. Both are injected through traits:
//!
//!     - [DirectiveHandler] receives the directive name and argument, plus two suppliers for
//!       the body: the raw body lines, or the body parsed as blocks. A handler calls at most
//!       one of them.
//!     - [RoleHandler] turns interpreted text into a [TextRegion] and splits link text into
//!       title and target.
//!
//!     [StandardDirectives] and [StandardRoles] implement the behavior expected for
//!     docstrings: code blocks, admonitions, version notes, code and flag roles, and
//!     cross-references rendered as highlighted names.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ast::{Admonition, Code, Node, TextRegion};

/// `title <target>`, where the title may contain backslash escapes.
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<title>(?:[^\\]|\\.)*?)(?:\s*<(?P<target>.*)>)?$")
        .unwrap_or_else(|err| panic!("invalid link pattern: {}", err))
});

/// Splits link text into its optional target and its title.
///
/// `Title <https://example.com>` gives `(Some("https://example.com"), "Title")`, and plain
/// text gives `(None, text)`.
pub fn split_link(content: &str) -> (Option<String>, String) {
    match LINK_RE.captures(content) {
        Some(caps) => {
            let title = caps.name("title").map_or("", |m| m.as_str());
            match caps.name("target") {
                Some(target) => (Some(target.as_str().to_string()), title.trim_end().to_string()),
                None => (None, title.to_string()),
            }
        }
        None => (None, content.to_string()),
    }
}

/// Splits cross-reference text into target and visible title.
///
/// Without an explicit `<target>` the text is both; a leading `~` shortens the title to the
/// last dotted component, so `~pkg.mod.func` shows as `func`.
pub fn split_crossref(content: &str) -> (String, String) {
    let Some(caps) = LINK_RE.captures(content) else {
        return (content.to_string(), content.to_string());
    };
    let title = caps.name("title").map_or("", |m| m.as_str());
    match caps.name("target").map(|m| m.as_str()).filter(|t| !t.is_empty()) {
        Some(target) => (target.to_string(), title.trim_end().to_string()),
        None => match title.strip_prefix('~') {
            Some(path) => {
                let short = path.rsplit('.').next().unwrap_or(path);
                (path.to_string(), short.to_string())
            }
            None => (title.to_string(), title.to_string()),
        },
    }
}

/// Policy for `.. name:: argument` blocks.
pub trait DirectiveHandler {
    /// Produces the nodes for one directive.
    ///
    /// `raw_lines` returns the body verbatim, `parsed_body` returns it parsed as blocks.
    fn process_directive(
        &self,
        name: &str,
        argument: &str,
        raw_lines: &mut dyn FnMut() -> Vec<String>,
        parsed_body: &mut dyn FnMut() -> Vec<Node>,
    ) -> Vec<Node>;

    /// Whether `name` is handled specially. Unknown directives are still rendered, but the
    /// parser reports them.
    fn is_known(&self, _name: &str) -> bool {
        true
    }
}

/// Policy for interpreted text and link text.
pub trait RoleHandler {
    /// Renders `` :role:`content` ``. Inline literals use the `code` role and interpreted
    /// text without a role uses `literal`.
    fn process_role(&self, content: &str, role: &str) -> TextRegion;

    /// Splits embedded link text into `(target, title)`.
    fn process_link(&self, content: &str) -> (Option<String>, String) {
        split_link(content)
    }
}

const ADMONITIONS: &[&str] = &[
    "attention",
    "caution",
    "danger",
    "error",
    "hint",
    "important",
    "note",
    "seealso",
    "tip",
    "warning",
];

const CODE_DIRECTIVES: &[&str] = &["code-block", "sourcecode", "code"];

const VERSION_DIRECTIVES: &[(&str, &str)] = &[
    ("versionadded", "Added"),
    ("versionchanged", "Changed"),
    ("deprecated", "Deprecated"),
];

/// Default directives: code blocks, admonitions and version notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDirectives;

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl DirectiveHandler for StandardDirectives {
    fn process_directive(
        &self,
        name: &str,
        argument: &str,
        raw_lines: &mut dyn FnMut() -> Vec<String>,
        parsed_body: &mut dyn FnMut() -> Vec<Node>,
    ) -> Vec<Node> {
        if CODE_DIRECTIVES.contains(&name) {
            return vec![Code::new(raw_lines(), argument).into()];
        }
        if ADMONITIONS.contains(&name) {
            return vec![Admonition::new(title_case(name), name, parsed_body()).into()];
        }
        if name == "admonition" {
            return vec![Admonition::new(argument, name, parsed_body()).into()];
        }
        if let Some((_, verb)) = VERSION_DIRECTIVES.iter().find(|(n, _)| *n == name) {
            let title = format!("{} in version {}", verb, argument);
            return vec![Admonition::new(title, name, parsed_body()).into()];
        }
        vec![Code::new(raw_lines(), "text").into()]
    }

    fn is_known(&self, name: &str) -> bool {
        CODE_DIRECTIVES.contains(&name)
            || ADMONITIONS.contains(&name)
            || name == "admonition"
            || VERSION_DIRECTIVES.iter().any(|(n, _)| *n == name)
    }
}

const FLAG_ROLES: &[&str] = &["flag", "cli:flag", "option", "cmdoption"];

/// Default roles: code, flags, and cross-references.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRoles;

impl RoleHandler for StandardRoles {
    fn process_role(&self, content: &str, role: &str) -> TextRegion {
        let region = match role {
            "code" | "literal" => TextRegion::highlighted(content, "code"),
            role if FLAG_ROLES.contains(&role) => TextRegion::highlighted(content, "flag"),
            role => {
                let (_, title) = split_crossref(content);
                TextRegion::highlighted(title, format!("role/{}", role))
            }
        };
        TextRegion::no_wrap(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Title <https://x.example>", Some("https://x.example"), "Title")]
    #[case("plain", None, "plain")]
    #[case("a \\<b>", None, "a \\<b>")]
    #[case("<only>", Some("only"), "")]
    fn splits_links(#[case] input: &str, #[case] target: Option<&str>, #[case] title: &str) {
        let (t, ti) = split_link(input);
        assert_eq!(t.as_deref(), target);
        assert_eq!(ti, title);
    }

    #[test]
    fn shortens_tilde_crossrefs() {
        assert_eq!(
            split_crossref("~pkg.mod.func"),
            ("pkg.mod.func".to_string(), "func".to_string())
        );
        assert_eq!(
            split_crossref("pkg.func"),
            ("pkg.func".to_string(), "pkg.func".to_string())
        );
    }

    #[test]
    fn crossref_with_explicit_target() {
        assert_eq!(
            split_crossref("the function <pkg.func>"),
            ("pkg.func".to_string(), "the function".to_string())
        );
    }

    #[test]
    fn roles() {
        let roles = StandardRoles;
        assert_eq!(
            roles.process_role("x", "code"),
            TextRegion::no_wrap(TextRegion::highlighted("x", "code"))
        );
        assert_eq!(
            roles.process_role("--help", "flag"),
            TextRegion::no_wrap(TextRegion::highlighted("--help", "flag"))
        );
        assert_eq!(
            roles.process_role("~a.b", "func"),
            TextRegion::no_wrap(TextRegion::highlighted("b", "role/func"))
        );
    }

    #[test]
    fn directives() {
        let directives = StandardDirectives;
        let mut raw = || vec!["x = 1".to_string()];
        let mut parsed = Vec::<Node>::new;

        let nodes = directives.process_directive("code-block", "python", &mut raw, &mut parsed);
        assert_eq!(nodes, vec![Code::new(vec!["x = 1".into()], "python").into()]);

        let nodes = directives.process_directive("versionadded", "1.2", &mut raw, &mut parsed);
        match &nodes[0] {
            Node::Admonition(admonition) => {
                assert_eq!(admonition.kind, "versionadded");
                assert_eq!(admonition.title[0].as_text(), Some("Added in version 1.2"));
            }
            other => panic!("Expected Admonition, found {:?}", other),
        }

        let nodes = directives.process_directive("unknown", "", &mut raw, &mut parsed);
        assert_eq!(nodes, vec![Code::new(vec!["x = 1".into()], "text").into()]);
        assert!(!directives.is_known("unknown"));
        assert!(directives.is_known("note"));
    }
}
