//! Lexer
//!
//! This module turns raw paradox script into a token stream the grammar can match on.
//!
//! The pipeline consists of:
//! 1. Comment stripping: every `#` up to the end of its line is removed ./comments.rs
//! 2. Core tokenization using the logos lexer ./tokens.rs, ./base_tokenization.rs
//!
//! Comment stripping happens on the text itself, before any token exists. The newline that
//! ends a comment is kept, so every line of the stripped text has the same line number it
//! had in the original file and error positions stay meaningful.
//!
//! Text values are not tokens of their own: a text value runs until the next `}` or newline
//! and may contain `=` or digits, which only the grammar can decide. The lexer therefore
//! emits small tokens and the grammar slices text values back out of the source by span.

pub mod base_tokenization;
pub mod comments;
pub mod tokens;

pub use base_tokenization::{tokenize, LexError};
pub use comments::strip_comments;
pub use tokens::Token;

/// Token paired with its byte range in the (comment stripped) source
pub type TokenSpan = (Token, std::ops::Range<usize>);

/// Strips comments and tokenizes, returning the stripped source alongside its tokens.
///
/// The token spans index into the returned source, not the original input.
pub fn lex(source: &str) -> Result<(String, Vec<TokenSpan>), LexError> {
    let stripped = strip_comments(source).into_owned();
    let tokens = tokenize(&stripped)?;
    Ok((stripped, tokens))
}
