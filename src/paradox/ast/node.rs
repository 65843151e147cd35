//! The paradox script tree node
//!
//! A [Node] binds a key to a [Value]. The root of a parsed document is a node with an
//! empty key whose children are the top-level entries of the file.
//!
//! Nodes own their children outright: there are no parent links and no shared handles.
//! Queries hand out borrowed views (`&Node`, `&[Node]`), mutation goes through the
//! setters below, each of which replaces whatever variant the value held before.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::Value;
use crate::paradox::formats::canonical;
use crate::paradox::parsing::{self, ParseError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    key: String,
    #[serde(default)]
    value: Value,
}

impl Node {
    /// Creates the keyless root node that holds top-level entries as its children.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Value::Empty,
        }
    }

    pub fn with_text(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Value::Text(text.into()),
        }
    }

    pub fn with_integers(key: impl Into<String>, values: Vec<i32>) -> Self {
        Self {
            key: key.into(),
            value: Value::Integers(values),
        }
    }

    pub fn with_children(key: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            key: key.into(),
            value: Value::Children(children),
        }
    }

    /// Parses a whole document and returns its root node.
    ///
    /// `source_label` names the input in error messages (usually a file path).
    pub fn parse(content: &str, source_label: &str) -> Result<Node, ParseError> {
        parsing::parse(content, source_label)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// The root is the only node without a key.
    pub fn is_root(&self) -> bool {
        self.key.is_empty()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.value = Value::Text(text.into());
    }

    pub fn set_integers(&mut self, values: Vec<i32>) {
        self.value = Value::Integers(values);
    }

    pub fn set_children(&mut self, children: Vec<Node>) {
        self.value = Value::Children(children);
    }

    pub fn clear_value(&mut self) {
        self.value = Value::Empty;
    }

    /// Appends an integer, discarding any text or children held so far.
    pub fn push_integer(&mut self, value: i32) {
        match &mut self.value {
            Value::Integers(values) => values.push(value),
            other => *other = Value::Integers(vec![value]),
        }
    }

    /// Appends a child, discarding any text or integers held so far.
    pub fn push_child(&mut self, child: Node) {
        match &mut self.value {
            Value::Children(children) => children.push(child),
            other => *other = Value::Children(vec![child]),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn integers(&self) -> Option<&[i32]> {
        match &self.value {
            Value::Integers(values) => Some(values),
            _ => None,
        }
    }

    /// Child nodes in source order. Empty unless the value is [Value::Children].
    pub fn children(&self) -> &[Node] {
        match &self.value {
            Value::Children(children) => children,
            _ => &[],
        }
    }

    /// The text value, or an empty string for any other kind of value.
    pub fn value_text(&self) -> &str {
        self.text().unwrap_or("")
    }

    /// Returns the first child with the given key, in insertion order.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.children().iter().find(|child| child.key == key)
    }

    /// Returns the text value with one pair of surrounding quotes (`'` or `"`) removed.
    ///
    /// Only values longer than two bytes are unquoted, so `""` comes back unchanged.
    pub fn value_unquoted(&self) -> &str {
        let text = self.value_text();
        let bytes = text.as_bytes();
        if bytes.len() > 2 {
            let first = bytes[0];
            if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
                return &text[1..text.len() - 1];
            }
        }
        text
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        canonical::render(self, f)
    }
}
