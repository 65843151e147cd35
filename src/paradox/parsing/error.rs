//! Errors that can occur during parsing
//!
//! Parsing is all-or-nothing: any mismatch aborts the whole parse with a single
//! [ParseError] and no partial tree.

use thiserror::Error;

use crate::paradox::ast::{Position, SourceLocation};

/// A failed parse, located in the named source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_label}:{position}: {kind}")]
pub struct ParseError {
    /// Name of the input, usually the file path
    pub source_label: String,
    /// Byte offset into the comment stripped source
    pub offset: usize,
    /// Line/column of `offset`. Comment stripping keeps line numbers intact.
    pub position: Position,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: String },

    #[error("integer literal {0} does not fit in 32 bits")]
    IntegerOutOfRange(String),

    #[error("composite value mixes bare integers and keyed entries")]
    MixedComposite,

    #[error("value has no key to attach to")]
    DanglingValue,

    #[error("closing brace without a matching opening brace")]
    UnbalancedClose,

    #[error("{0} composite value(s) still open at end of input")]
    UnclosedComposite(usize),

    #[error("invalid character sequence")]
    InvalidCharacter,
}

impl ParseError {
    /// Builds an error at a byte offset of `source`, computing its line and column.
    pub fn at_offset(
        source_label: &str,
        source: &str,
        offset: usize,
        kind: ParseErrorKind,
    ) -> Self {
        let offset = offset.min(source.len());
        let position = SourceLocation::new(source).byte_to_position(offset);
        Self {
            source_label: source_label.to_string(),
            offset,
            position,
            kind,
        }
    }
}
