//! The value held by a [Node](super::Node)
//!
//! A value is exactly one of text, an integer sequence, a list of child nodes, or nothing.
//! Being a sum type, a node can never carry text and children at the same time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::node::Node;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// No value assigned yet. Renders as an empty block.
    #[default]
    Empty,
    /// Literal text, quotes included: `name = "Hello World"`
    Text(String),
    /// Whitespace separated integers inside braces: `ids = { 1 2 3 }`
    Integers(Vec<i32>),
    /// Nested entries inside braces: `group = { a = 1 }`
    Children(Vec<Node>),
}

impl Value {
    /// Short lowercase name of the variant, used by the treeviz output and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Text(_) => "text",
            Value::Integers(_) => "integers",
            Value::Children(_) => "children",
        }
    }

    /// True when nothing would be rendered inside the value.
    ///
    /// Empty text and empty sequences count as empty, matching how the serializer
    /// renders them as an empty block.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(text) => text.is_empty(),
            Value::Integers(values) => values.is_empty(),
            Value::Children(children) => children.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => write!(f, "{{}}"),
            Value::Text(text) => write!(f, "{}", text),
            Value::Integers(values) => {
                write!(f, "{{")?;
                for value in values {
                    write!(f, " {}", value)?;
                }
                write!(f, " }}")
            }
            Value::Children(children) => write!(f, "{{{} children}}", children.len()),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<Vec<i32>> for Value {
    fn from(values: Vec<i32>) -> Self {
        Value::Integers(values)
    }
}

impl From<Vec<Node>> for Value {
    fn from(children: Vec<Node>) -> Self {
        Value::Children(children)
    }
}
