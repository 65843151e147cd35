//! Main module for paradox script functionality
//!
//! The pipeline is: comment stripping and tokenization ([lexing]), grammar matching and
//! tree construction ([parsing]), and rendering ([formats]). [processor] and [config]
//! are the file and configuration layers used by the `paradox` binary.

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod testing;
