//! Parser for paradox script
//!
//! Parsing runs in three stages:
//! 1. [lexing](crate::paradox::lexing) strips comments and produces tokens
//! 2. [grammar] matches the token stream and reports what it found
//! 3. [builder] replays the matches into a [Node](crate::paradox::ast::Node) tree
//!
//! [parse] drives all three and turns every failure into a located [ParseError].

pub mod builder;
pub mod error;
pub mod grammar;
pub mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
