//! Base tokenization implementation
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where (comment stripped) source strings become token streams.

use crate::paradox::lexing::tokens::Token;
use logos::Logos;
use std::ops::Range;
use thiserror::Error;

/// A byte range the lexer could not assign to any token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character sequence at bytes {span:?}")]
pub struct LexError {
    pub span: Range<usize>,
}

/// Tokenize source code with location information
///
/// Unlike a recovering lexer this fails on the first unrecognised input, since the parser
/// never accepts a document it could not fully read.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return Err(LexError { span: lexer.span() }),
        }
    }

    Ok(tokens)
}
