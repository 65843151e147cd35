//! JSON dump of a node tree

use crate::paradox::ast::Node;
use crate::paradox::formats::{FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        serde_json::to_string_pretty(node)
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty printed JSON"
    }
}
