//! Treeviz formatter for node trees
//!
//! One line per node, drawn with box connectors:
//!
//! ```text
//! ├─ a: 1
//! ├─ b: { 1 2 3 }
//! └─ c: {1 children}
//!   └─ d: foo
//! ```

use crate::paradox::ast::Node;
use crate::paradox::formats::{FormatError, Formatter};

/// Value summaries longer than this many characters are cut short
pub const DEFAULT_LABEL_WIDTH: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(node: &Node, label_width: usize) -> String {
    let mut result = String::new();
    if node.is_root() {
        append_children(&mut result, node.children(), "", label_width);
    } else {
        append_node(&mut result, node, "", true, label_width);
    }
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool, width: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    let summary = truncate(&node.value().to_string(), width);

    result.push_str(&format!("{}{} {}: {}\n", prefix, connector, node.key(), summary));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node.children(), &new_prefix, width);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str, width: usize) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last, width);
    }
}

pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        Self { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str(node, self.label_width))
    }

    fn description(&self) -> &str {
        "Tree outline with box drawing connectors"
    }
}
