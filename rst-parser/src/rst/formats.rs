//! Output formats for parsed documents
//!
//! This module contains the serializers used by the command line tool and by tests:
//! - dump: a compact s-expression listing of the whole tree, inline regions included
//! - treeviz: one line per node with box-drawing connectors
//! - json / yaml: the [AstSnapshot](crate::rst::ast::AstSnapshot) serialized with serde
//!
//! All of them are available by name through the [FormatRegistry].

pub mod dump;
pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use dump::{to_dump_str, DumpFormatter};
pub use registry::{FormatError, FormatParams, FormatRegistry, Formatter};
pub use serialized::{snapshot_from_json, to_json_str, to_yaml_str, JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_params, TreevizFormatter};
