//! Testing utilities for tree assertions
//!
//! Parser tests should load their input from
//! [ParadoxSources](crate::paradox::processor::samples::ParadoxSources) where a sample
//! covers the case, and check the result with [assert_node]:
//!
//! ```rust,ignore
//! let root = ParadoxSources::get_node("020-nested.txt")?;
//!
//! assert_node(&root)
//!     .child_count(3)
//!     .child(1, |b| {
//!         b.key("b").integers(&[1, 2, 3]);
//!     })
//!     .child_named("c", |c| {
//!         c.child_count(2).child(0, |d| {
//!             d.key("d").text("foo");
//!         });
//!     });
//! ```
//!
//! Failures name the path to the offending node, e.g. `root.c[0]`.

use crate::paradox::ast::{Node, Value};

/// Create an assertion builder for a node (usually the parsed root)
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    let context = if node.is_root() {
        "root".to_string()
    } else {
        node.key().to_string()
    };
    NodeAssertion { node, context }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn key(self, expected: &str) -> Self {
        assert_eq!(
            self.node.key(),
            expected,
            "{}: expected key '{}', found '{}'",
            self.context,
            expected,
            self.node.key()
        );
        self
    }

    /// Assert the value variant: "empty", "text", "integers" or "children"
    pub fn kind(self, expected: &str) -> Self {
        let actual = self.node.value().kind_name();
        assert_eq!(
            actual, expected,
            "{}: expected a {} value, found {} ({})",
            self.context,
            expected,
            actual,
            self.node.value()
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        match self.node.value() {
            Value::Text(text) => assert_eq!(
                text, expected,
                "{}: expected text '{}', found '{}'",
                self.context, expected, text
            ),
            other => panic!(
                "{}: expected text '{}', found {} value",
                self.context,
                expected,
                other.kind_name()
            ),
        }
        self
    }

    /// Assert the text value with surrounding quotes removed
    pub fn unquoted(self, expected: &str) -> Self {
        let actual = self.node.value_unquoted();
        assert_eq!(
            actual, expected,
            "{}: expected unquoted text '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn integers(self, expected: &[i32]) -> Self {
        match self.node.value() {
            Value::Integers(values) => assert_eq!(
                values.as_slice(),
                expected,
                "{}: integer sequence differs",
                self.context
            ),
            other => panic!(
                "{}: expected integers {:?}, found {} value",
                self.context,
                expected,
                other.kind_name()
            ),
        }
        self
    }

    /// Assert the number of children. Non-composite values count as zero.
    pub fn child_count(self, expected: usize) -> Self {
        let children = self.node.children();
        assert_eq!(
            children.len(),
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize_children(children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert on the first child with the given key
    pub fn child_named<F>(self, key: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node: &'a Node = self.node;
        match node.child(key) {
            Some(child) => assertion(NodeAssertion {
                node: child,
                context: format!("{}.{}", self.context, key),
            }),
            None => panic!(
                "{}: no child with key '{}' among [{}]",
                self.context,
                key,
                summarize_children(node.children())
            ),
        }
        self
    }

    pub fn no_child(self, key: &str) -> Self {
        assert!(
            self.node.child(key).is_none(),
            "{}: unexpected child with key '{}'",
            self.context,
            key
        );
        self
    }
}

fn summarize_children(children: &[Node]) -> String {
    children
        .iter()
        .map(|child| format!("{} = {}", child.key(), child.value()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Node {
        Node::with_children(
            "",
            vec![
                Node::with_text("name", "\"Hello\""),
                Node::with_integers("ids", vec![1, 2]),
                Node::with_children("group", vec![Node::new("inner")]),
            ],
        )
    }

    #[test]
    fn test_passing_assertions() {
        assert_node(&tree())
            .key("")
            .kind("children")
            .child_count(3)
            .child(0, |name| {
                name.key("name").text("\"Hello\"").unquoted("Hello");
            })
            .child_named("ids", |ids| {
                ids.kind("integers").integers(&[1, 2]).child_count(0);
            })
            .child_named("group", |group| {
                group.child_count(1).child(0, |inner| {
                    inner.key("inner").kind("empty");
                });
            })
            .no_child("missing");
    }

    #[test]
    #[should_panic(expected = "root.group[0]: expected text 'x', found empty value")]
    fn test_failure_names_path() {
        assert_node(&tree()).child_named("group", |group| {
            group.child(0, |inner| {
                inner.text("x");
            });
        });
    }

    #[test]
    #[should_panic(expected = "no child with key 'nope'")]
    fn test_missing_child() {
        assert_node(&tree()).child_named("nope", |_| {});
    }
}
