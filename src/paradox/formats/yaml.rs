//! YAML dump of a node tree

use crate::paradox::ast::Node;
use crate::paradox::formats::{FormatError, Formatter};

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        serde_yaml::to_string(node).map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
