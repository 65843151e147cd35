//! Tree Builder - builds the node tree from grammar matches
//!
//! The grammar reports what it matched as a flat, ordered list of [GrammarMatch]es. This
//! module replays them against a stack of pending child lists:
//!
//! - the base frame collects the top-level entries of the document;
//! - every `{` pushes a frame that assumes the composite is a node set;
//! - the first key or integer inside the braces resolves that assumption;
//! - `}` pops the frame and hands its content to the node one level below.
//!
//! A frame's life is `Open -> AssumingChildren -> {ResolvedAsChildren, ResolvedAsIntegers}
//! -> Closed`. A frame closed while still assuming children is an empty node set.

use std::ops::Range;
use tracing::trace;

use crate::paradox::ast::Node;
use crate::paradox::parsing::error::ParseErrorKind;
use crate::paradox::parsing::grammar::{GrammarEvent, GrammarMatch};

/// Resolution state of the innermost open composite value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// The base frame holding top-level entries
    Document,
    /// Just opened; no key or integer seen yet
    AssumingChildren,
    ResolvedAsChildren,
    ResolvedAsIntegers,
}

#[derive(Debug)]
struct Frame {
    state: FrameState,
    nodes: Vec<Node>,
    integers: Vec<i32>,
}

impl Frame {
    fn new(state: FrameState) -> Self {
        Self {
            state,
            nodes: Vec::new(),
            integers: Vec::new(),
        }
    }
}

/// A build failure and the byte span of the match that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
}

impl BuildError {
    fn new(kind: ParseErrorKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Stateful builder owned by a single parse call
#[derive(Debug)]
pub struct TreeBuilder {
    stack: Vec<Frame>,
    last_span: Range<usize>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            stack: vec![Frame::new(FrameState::Document)],
            last_span: 0..0,
        }
    }

    /// State of the innermost frame
    pub fn state(&self) -> FrameState {
        self.top().state
    }

    /// Number of composite values currently open
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Replays every match in order and returns the finished root.
    pub fn build(
        mut self,
        matches: impl IntoIterator<Item = GrammarMatch>,
    ) -> Result<Node, BuildError> {
        for grammar_match in matches {
            self.apply(grammar_match)?;
        }
        self.finish()
    }

    pub fn apply(&mut self, grammar_match: GrammarMatch) -> Result<(), BuildError> {
        let GrammarMatch { event, span } = grammar_match;
        trace!(?event, ?span, depth = self.depth(), "apply");
        self.last_span = span.clone();

        match event {
            GrammarEvent::Key(key) => self.on_key(key, span),
            GrammarEvent::OpenComposite => self.on_open(span),
            GrammarEvent::Integer(literal) => self.on_integer(&literal, span),
            GrammarEvent::Text(text) => self.on_text(text, span),
            GrammarEvent::CloseComposite => self.on_close(span),
        }
    }

    /// Returns the root node once every composite has been closed.
    pub fn finish(self) -> Result<Node, BuildError> {
        let depth = self.depth();
        if depth > 0 {
            return Err(BuildError::new(
                ParseErrorKind::UnclosedComposite(depth),
                self.last_span.end..self.last_span.end,
            ));
        }

        let mut stack = self.stack;
        let base = stack.pop().map(|frame| frame.nodes).unwrap_or_default();
        let mut root = Node::root();
        root.set_children(base);
        Ok(root)
    }

    fn top(&self) -> &Frame {
        // The base frame is never popped before finish()
        &self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Frame {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn on_key(&mut self, key: String, span: Range<usize>) -> Result<(), BuildError> {
        let frame = self.top_mut();
        match frame.state {
            FrameState::ResolvedAsIntegers => {
                return Err(BuildError::new(ParseErrorKind::MixedComposite, span))
            }
            FrameState::AssumingChildren => {
                trace!("composite resolved as node set");
                frame.state = FrameState::ResolvedAsChildren;
            }
            FrameState::Document | FrameState::ResolvedAsChildren => {}
        }
        frame.nodes.push(Node::new(key));
        Ok(())
    }

    fn on_open(&mut self, span: Range<usize>) -> Result<(), BuildError> {
        if !self.has_pending_node() {
            return Err(BuildError::new(ParseErrorKind::DanglingValue, span));
        }
        self.stack.push(Frame::new(FrameState::AssumingChildren));
        Ok(())
    }

    fn on_integer(&mut self, literal: &str, span: Range<usize>) -> Result<(), BuildError> {
        let value: i32 = literal.parse().map_err(|_| {
            BuildError::new(
                ParseErrorKind::IntegerOutOfRange(literal.to_string()),
                span.clone(),
            )
        })?;

        let frame = self.top_mut();
        match frame.state {
            FrameState::AssumingChildren => {
                trace!("composite resolved as integer sequence");
                frame.state = FrameState::ResolvedAsIntegers;
            }
            FrameState::ResolvedAsIntegers => {}
            FrameState::ResolvedAsChildren => {
                return Err(BuildError::new(ParseErrorKind::MixedComposite, span))
            }
            FrameState::Document => {
                return Err(BuildError::new(ParseErrorKind::DanglingValue, span))
            }
        }
        frame.integers.push(value);
        Ok(())
    }

    fn on_text(&mut self, text: String, span: Range<usize>) -> Result<(), BuildError> {
        let trimmed = text.trim_end_matches(&[' ', '\t', '\r', '\n'][..]);
        match self.top_mut().nodes.last_mut() {
            Some(node) => {
                node.set_text(trimmed);
                Ok(())
            }
            None => Err(BuildError::new(ParseErrorKind::DanglingValue, span)),
        }
    }

    fn on_close(&mut self, span: Range<usize>) -> Result<(), BuildError> {
        if self.depth() == 0 {
            return Err(BuildError::new(ParseErrorKind::UnbalancedClose, span));
        }
        let frame = match self.stack.pop() {
            Some(frame) => frame,
            None => return Err(BuildError::new(ParseErrorKind::UnbalancedClose, span)),
        };

        let parent = self
            .top_mut()
            .nodes
            .last_mut()
            .ok_or_else(|| BuildError::new(ParseErrorKind::DanglingValue, span.clone()))?;

        match frame.state {
            FrameState::ResolvedAsIntegers => parent.set_integers(frame.integers),
            FrameState::AssumingChildren | FrameState::ResolvedAsChildren => {
                parent.set_children(frame.nodes)
            }
            FrameState::Document => {
                return Err(BuildError::new(ParseErrorKind::UnbalancedClose, span))
            }
        }
        Ok(())
    }

    fn has_pending_node(&self) -> bool {
        !self.top().nodes.is_empty()
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
