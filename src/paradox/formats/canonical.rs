//! Canonical paradox script output
//!
//! Layout rules:
//! - a node with an empty key (the root) writes only its children, at its own depth
//! - non-empty text: `key = text`
//! - non-empty integers: `key = { 1 2 3 }`
//! - anything else, including empty text and empty integers: a block with the children
//!   one level deeper and the closing brace on its own line
//!
//! Comments and the input whitespace are not kept. Parsing the output gives back an
//! equal tree.

use std::fmt::{self, Write};

use crate::paradox::ast::{Node, Value};
use crate::paradox::formats::{FormatError, Formatter};

/// Indentation unit used unless configured otherwise
pub const DEFAULT_INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRenderer {
    indent_unit: String,
}

impl CanonicalRenderer {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    pub fn with_indent(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    pub fn render<W: Write + ?Sized>(&self, node: &Node, out: &mut W) -> fmt::Result {
        self.render_node(node, 0, out)
    }

    pub fn render_to_string(&self, node: &Node) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.render(node, &mut out);
        out
    }

    fn render_node<W: Write + ?Sized>(&self, node: &Node, depth: usize, out: &mut W) -> fmt::Result {
        if node.key().is_empty() {
            return self.render_children(node.children(), depth, out);
        }

        self.write_indent(depth, out)?;
        write!(out, "{} = ", node.key())?;

        match node.value() {
            Value::Text(text) if !text.is_empty() => writeln!(out, "{}", text),
            Value::Integers(values) if !values.is_empty() => {
                out.write_char('{')?;
                for value in values {
                    write!(out, " {}", value)?;
                }
                out.write_str(" }\n")
            }
            value => {
                out.write_str("{\n")?;
                if let Value::Children(children) = value {
                    self.render_children(children, depth + 1, out)?;
                }
                self.write_indent(depth, out)?;
                out.write_str("}\n")
            }
        }
    }

    fn render_children<W: Write + ?Sized>(
        &self,
        children: &[Node],
        depth: usize,
        out: &mut W,
    ) -> fmt::Result {
        for child in children {
            self.render_node(child, depth, out)?;
        }
        Ok(())
    }

    fn write_indent<W: Write + ?Sized>(&self, depth: usize, out: &mut W) -> fmt::Result {
        for _ in 0..depth {
            out.write_str(&self.indent_unit)?;
        }
        Ok(())
    }
}

impl Default for CanonicalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CanonicalRenderer {
    fn name(&self) -> &str {
        "canonical"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(self.render_to_string(node))
    }

    fn description(&self) -> &str {
        "Paradox script text"
    }
}

/// Renders `node` as canonical text with two space indentation.
pub fn render<W: Write + ?Sized>(node: &Node, out: &mut W) -> fmt::Result {
    CanonicalRenderer::new().render(node, out)
}

pub fn render_to_string(node: &Node) -> String {
    CanonicalRenderer::new().render_to_string(node)
}
