//! JSON and YAML output
//!
//! Both serialize the [AstSnapshot] of the document, so node types, labels and attributes
//! are the same as in treeviz. Empty attribute maps and child lists are omitted.

use super::registry::{FormatError, FormatParams, Formatter};
use crate::rst::ast::{snapshot_from_document, AstSnapshot, Document};

pub fn to_json_str(doc: &Document) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&snapshot_from_document(doc))
        .map_err(|err| FormatError::Serialization(err.to_string()))
}

pub fn to_yaml_str(doc: &Document) -> Result<String, FormatError> {
    serde_yaml::to_string(&snapshot_from_document(doc))
        .map_err(|err| FormatError::Serialization(err.to_string()))
}

/// Reads a snapshot back from JSON, e.g. one written by `rst --format json`.
pub fn snapshot_from_json(json: &str) -> Result<AstSnapshot, FormatError> {
    serde_json::from_str(json).map_err(|err| FormatError::Serialization(err.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document, _params: &FormatParams) -> Result<String, FormatError> {
        to_json_str(doc)
    }

    fn description(&self) -> &str {
        "AST snapshot as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document, _params: &FormatParams) -> Result<String, FormatError> {
        to_yaml_str(doc)
    }

    fn description(&self) -> &str {
        "AST snapshot as YAML"
    }
}
