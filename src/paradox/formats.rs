//! Output formats for node trees
//!
//! - [canonical]: paradox script text, the format the parser reads back
//! - [json] / [yaml]: serde dumps of the tree
//! - [treeviz]: a box-drawing outline for inspecting parse results
//!
//! Every format implements [Formatter]. [OutputFormat] names the formats on the command
//! line and builds the matching formatter from [FormatOptions].

pub mod canonical;
pub mod json;
pub mod treeviz;
pub mod yaml;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::paradox::ast::Node;

pub use canonical::{render, render_to_string, CanonicalRenderer, DEFAULT_INDENT};
pub use json::JsonFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter, DEFAULT_LABEL_WIDTH};
pub use yaml::YamlFormatter;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (expected one of: canonical, json, yaml, treeviz)")]
    UnknownFormat(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Trait for node tree formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g. "canonical", "treeviz")
    fn name(&self) -> &str;

    /// Serialize a tree to this format
    fn serialize(&self, node: &Node) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Settings shared by the formatters that have any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indentation unit of canonical output
    pub indent: String,
    /// Maximum characters of a value summary in treeviz output
    pub label_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Canonical,
    Json,
    Yaml,
    Treeviz,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Canonical,
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Treeviz,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Canonical => "canonical",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
        }
    }

    /// Builds the formatter for this format
    pub fn formatter(&self, options: &FormatOptions) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Canonical => Box::new(CanonicalRenderer::with_indent(
                options.indent.clone(),
            )),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Yaml => Box::new(YamlFormatter),
            OutputFormat::Treeviz => Box::new(TreevizFormatter::new(options.label_width)),
        }
    }

    pub fn serialize(&self, node: &Node, options: &FormatOptions) -> Result<String, FormatError> {
        self.formatter(options).serialize(node)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}
