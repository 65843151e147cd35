//! # paradox-script
//!
//! A parser and canonical serializer for Paradox Script Syntax, the `key = value`
//! configuration language used by game data files.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](paradox::testing).
//! Parser tests use the verified sample documents and the fluent node assertions.

pub mod paradox;

pub use paradox::ast::{Node, Value};
pub use paradox::formats::{render, render_to_string};
pub use paradox::parsing::{parse, ParseError, ParseErrorKind};
