//! Named output formats
//!
//! Every output format implements [Formatter] and is looked up by name in a
//! [FormatRegistry]. Formats take string parameters (`show-inlines=false` for treeviz, for
//! instance); unknown parameters are ignored, malformed values are an error.

use crate::rst::ast::Document;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Parameters passed to a formatter, by name.
pub type FormatParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter registered under this name
    UnknownFormat(String),
    /// A parameter value the formatter does not accept
    InvalidParam { name: String, value: String },
    /// The serializer failed
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "unknown format '{name}'"),
            FormatError::InvalidParam { name, value } => {
                write!(f, "invalid value '{value}' for parameter '{name}'")
            }
            FormatError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Reads a `true`/`false` parameter, falling back to `default` when absent.
pub fn bool_param(params: &FormatParams, name: &str, default: bool) -> Result<bool, FormatError> {
    match params.get(name).map(String::as_str) {
        None => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(value) => Err(FormatError::InvalidParam {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// An output format for parsed documents
pub trait Formatter: Send + Sync {
    /// Name used to select the format, e.g. `treeviz`
    fn name(&self) -> &str;

    /// One line shown by `rst --list-formats`
    fn description(&self) -> &str {
        ""
    }

    fn serialize(&self, doc: &Document, params: &FormatParams) -> Result<String, FormatError>;
}

/// Formatters by name, iterated in name order
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dump, treeviz, json and yaml formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::DumpFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Adds a formatter, replacing one already registered under the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.values().map(|f| f.as_ref())
    }

    pub fn serialize(
        &self,
        doc: &Document,
        format: &str,
        params: &FormatParams,
    ) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::UnknownFormat(format.to_string()))?
            .serialize(doc, params)
    }
}
