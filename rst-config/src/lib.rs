//! Shared configuration loader for the rst toolchain.
//!
//! `defaults/rst.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RstConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use rst_parser::ParserOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/rst.default.toml");

/// Top-level configuration consumed by rst applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RstConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Mirrors the parser's [`ParserOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub tab_width: usize,
    pub dedent: bool,
    pub literal_syntax: String,
    pub doctest_syntax: String,
}

impl From<&ParserConfig> for ParserOptions {
    fn from(config: &ParserConfig) -> Self {
        ParserOptions {
            tab_width: config.tab_width,
            dedent: config.dedent,
            literal_syntax: config.literal_syntax.clone(),
            doctest_syntax: config.doctest_syntax.clone(),
        }
    }
}

/// Controls what the CLI prints.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format.
    pub format: String,
    pub show_diagnostics: bool,
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_inlines: bool,
}

/// Builds an [`RstConfig`] from the embedded defaults, config files and command line
/// flags. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Adds a config file. `.yaml`/`.yml` and `.json` files are read as such, anything else
    /// as TOML. A missing file makes [`build`](Self::build) fail.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(path.as_ref(), true)
    }

    /// Like [`with_file`](Self::with_file), but a missing file is skipped.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(path.as_ref(), false)
    }

    fn with_source(mut self, path: &Path, required: bool) -> Self {
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        };
        let source = File::from(path).format(format).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Output format name, `output.format`.
    pub fn format(self, name: &str) -> Result<Self, ConfigError> {
        self.set("output.format", name)
    }

    /// `parser.dedent`
    pub fn dedent(self, dedent: bool) -> Result<Self, ConfigError> {
        self.set("parser.dedent", dedent)
    }

    /// `output.show_diagnostics`
    pub fn show_diagnostics(self, show: bool) -> Result<Self, ConfigError> {
        self.set("output.show_diagnostics", show)
    }

    /// `output.treeviz.show_inlines`
    pub fn show_inlines(self, show: bool) -> Result<Self, ConfigError> {
        self.set("output.treeviz.show_inlines", show)
    }

    fn set(mut self, key: &str, value: impl Into<ValueKind>) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RstConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RstConfig, ConfigError> {
    Loader::new().build()
}
