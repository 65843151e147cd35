//! Token definitions for paradox script
//!
//! The tokens are defined using the logos derive macro. Every input character belongs to
//! exactly one token rule, so tokenization of comment-stripped text cannot fail on
//! well-formed UTF-8.
use logos::Logos;
use std::fmt;

/// All possible tokens in paradox script
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Spaces, tabs and stray carriage returns. Newlines are separate so text values
    // can stop at them.
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("=")]
    Equals,

    // Unsigned decimal digits. Signs are ordinary symbols.
    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    // Everything else: quotes, dots, minus signs, non-ASCII text...
    #[regex(r"[^ \t\r\n{}=A-Za-z0-9_]+")]
    Symbol,
}

impl Token {
    /// Check if this token is whitespace (including newlines)
    pub fn is_blank(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }

    /// Check if this token may appear inside a text value
    pub fn is_text_content(&self) -> bool {
        !matches!(self, Token::CloseBrace | Token::Newline)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Whitespace => write!(f, "whitespace"),
            Token::Newline => write!(f, "newline"),
            Token::OpenBrace => write!(f, "'{{'"),
            Token::CloseBrace => write!(f, "'}}'"),
            Token::Equals => write!(f, "'='"),
            Token::Integer => write!(f, "integer"),
            Token::Identifier => write!(f, "identifier"),
            Token::Symbol => write!(f, "symbol"),
        }
    }
}
