//! Grammar rules for paradox script, written with chumsky
//!
//! The rules run over the `(Token, span)` stream produced by the lexer:
//!
//! ```text
//! blank            = (whitespace | newline)*
//! key              = identifier
//! integer          = digits
//! integer-sequence = integer (blank+ integer)*
//! text-value       = (token - '}' - newline)+        not starting with '{'
//! composite        = '{' blank (integer-sequence blank | node-set) '}'
//! value            = composite | text-value
//! node             = key blank '=' blank value
//! node-set         = (node blank)*
//! document         = blank node-set EOF
//! ```
//!
//! The rules do not build nodes. A successful match yields the ordered list of
//! [GrammarMatch]es (key, `{`, integer, text, `}`), which the
//! [TreeBuilder](super::builder::TreeBuilder) turns into a tree. Because chumsky only
//! returns the output of alternatives that succeeded, the builder never sees a match from
//! a branch that was later abandoned.
//!
//! Once a value starts with `{` it is a composite: an unbalanced brace is an error rather
//! than a text value that happens to start with a brace.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use crate::paradox::lexing::{Token, TokenSpan};

/// Type alias for parser error
pub type ParserError = Simple<TokenSpan>;

/// What a grammar rule matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarEvent {
    Key(String),
    OpenComposite,
    /// Digits as written; range checking is left to the builder
    Integer(String),
    /// Raw text value, possibly with trailing whitespace
    Text(String),
    CloseComposite,
}

/// A grammar event and the byte range of source it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMatch {
    pub event: GrammarEvent,
    pub span: Range<usize>,
}

impl GrammarMatch {
    pub fn new(event: GrammarEvent, span: Range<usize>) -> Self {
        Self { event, span }
    }
}

/// Helper: match a specific token type
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, TokenSpan, Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| *tok == t)
}

/// Zero or more whitespace and newline tokens
pub(crate) fn blank() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_blank()).repeated().ignored()
}

fn key(source: Arc<str>) -> impl Parser<TokenSpan, GrammarMatch, Error = ParserError> + Clone {
    token(Token::Identifier)
        .map(move |(_, span): TokenSpan| {
            GrammarMatch::new(GrammarEvent::Key(source[span.clone()].to_string()), span)
        })
        .labelled("key")
}

fn integer(source: Arc<str>) -> impl Parser<TokenSpan, GrammarMatch, Error = ParserError> + Clone {
    token(Token::Integer)
        .map(move |(_, span): TokenSpan| {
            GrammarMatch::new(GrammarEvent::Integer(source[span.clone()].to_string()), span)
        })
        .labelled("integer")
}

fn integer_sequence(
    source: Arc<str>,
) -> impl Parser<TokenSpan, Vec<GrammarMatch>, Error = ParserError> + Clone {
    let separator = filter(|(t, _): &TokenSpan| t.is_blank())
        .repeated()
        .at_least(1)
        .ignored();

    integer(source.clone())
        .then(separator.ignore_then(integer(source)).repeated())
        .map(|(first, rest)| {
            let mut integers = Vec::with_capacity(rest.len() + 1);
            integers.push(first);
            integers.extend(rest);
            integers
        })
}

fn text_value(
    source: Arc<str>,
) -> impl Parser<TokenSpan, GrammarMatch, Error = ParserError> + Clone {
    let first = filter(|(t, _): &TokenSpan| t.is_text_content() && *t != Token::OpenBrace);
    let rest = filter(|(t, _): &TokenSpan| t.is_text_content()).repeated();

    first
        .then(rest)
        .map(move |((_, first_span), rest): (TokenSpan, Vec<TokenSpan>)| {
            let end = rest.last().map_or(first_span.end, |(_, span)| span.end);
            let span = first_span.start..end;
            GrammarMatch::new(GrammarEvent::Text(source[span.clone()].to_string()), span)
        })
        .labelled("value")
}

/// Node set rule: zero or more `key = value` entries, each followed by blanks
pub fn node_set(
    source: Arc<str>,
) -> impl Parser<TokenSpan, Vec<GrammarMatch>, Error = ParserError> + Clone {
    let key = key(source.clone());
    let integers = integer_sequence(source.clone());
    let text = text_value(source);

    recursive(move |node_set| {
        let open = token(Token::OpenBrace)
            .map(|(_, span): TokenSpan| GrammarMatch::new(GrammarEvent::OpenComposite, span));
        let close = token(Token::CloseBrace)
            .map(|(_, span): TokenSpan| GrammarMatch::new(GrammarEvent::CloseComposite, span))
            .labelled("'}'");

        let composite = open
            .then_ignore(blank())
            .then(integers.then_ignore(blank()).or(node_set))
            .then(close)
            .map(|((open, body), close): ((GrammarMatch, Vec<GrammarMatch>), GrammarMatch)| {
                let mut matches = Vec::with_capacity(body.len() + 2);
                matches.push(open);
                matches.extend(body);
                matches.push(close);
                matches
            });

        let value = composite.or(text.map(|text| vec![text]));

        let node = key
            .then_ignore(blank())
            .then_ignore(token(Token::Equals).labelled("'='"))
            .then_ignore(blank())
            .then(value)
            .map(|(key, value): (GrammarMatch, Vec<GrammarMatch>)| {
                let mut matches = Vec::with_capacity(value.len() + 1);
                matches.push(key);
                matches.extend(value);
                matches
            });

        node.then_ignore(blank())
            .repeated()
            .map(|nodes: Vec<Vec<GrammarMatch>>| nodes.into_iter().flatten().collect())
    })
}

/// Parse a whole document
///
/// The entire token stream must be consumed: trailing input that is not a node is an error.
pub fn document(
    source: Arc<str>,
) -> impl Parser<TokenSpan, Vec<GrammarMatch>, Error = ParserError> + Clone {
    blank().ignore_then(node_set(source)).then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paradox::lexing::tokenize;

    fn run(source: &str) -> Result<Vec<GrammarEvent>, Vec<ParserError>> {
        let tokens = tokenize(source).unwrap();
        document(Arc::from(source))
            .parse(tokens)
            .map(|matches| matches.into_iter().map(|m| m.event).collect())
    }

    fn key(name: &str) -> GrammarEvent {
        GrammarEvent::Key(name.to_string())
    }

    fn text(value: &str) -> GrammarEvent {
        GrammarEvent::Text(value.to_string())
    }

    fn int(literal: &str) -> GrammarEvent {
        GrammarEvent::Integer(literal.to_string())
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(run("").unwrap(), vec![]);
        assert_eq!(run(" \n\t\n").unwrap(), vec![]);
    }

    #[test]
    fn test_text_value() {
        assert_eq!(run("a = 1\n").unwrap(), vec![key("a"), text("1")]);
    }

    #[test]
    fn test_text_value_keeps_inner_spaces_and_equals() {
        assert_eq!(
            run("a = b = \"c d\"  \n").unwrap(),
            vec![key("a"), text("b = \"c d\"  ")]
        );
    }

    #[test]
    fn test_integer_sequence() {
        assert_eq!(
            run("b = { 1 2 3 }").unwrap(),
            vec![
                key("b"),
                GrammarEvent::OpenComposite,
                int("1"),
                int("2"),
                int("3"),
                GrammarEvent::CloseComposite,
            ]
        );
    }

    #[test]
    fn test_integer_sequence_across_lines() {
        assert_eq!(
            run("b = {\n  1\n  2\n}").unwrap(),
            vec![
                key("b"),
                GrammarEvent::OpenComposite,
                int("1"),
                int("2"),
                GrammarEvent::CloseComposite,
            ]
        );
    }

    #[test]
    fn test_node_set() {
        assert_eq!(
            run("c = {\n  d = foo\n}\n").unwrap(),
            vec![
                key("c"),
                GrammarEvent::OpenComposite,
                key("d"),
                text("foo"),
                GrammarEvent::CloseComposite,
            ]
        );
    }

    #[test]
    fn test_compact_composites() {
        assert_eq!(
            run("a={b=x}c={1}").unwrap(),
            vec![
                key("a"),
                GrammarEvent::OpenComposite,
                key("b"),
                text("x"),
                GrammarEvent::CloseComposite,
                key("c"),
                GrammarEvent::OpenComposite,
                int("1"),
                GrammarEvent::CloseComposite,
            ]
        );
    }

    #[test]
    fn test_empty_composite() {
        assert_eq!(
            run("e = { }").unwrap(),
            vec![
                key("e"),
                GrammarEvent::OpenComposite,
                GrammarEvent::CloseComposite
            ]
        );
    }

    #[test]
    fn test_value_on_next_line() {
        assert_eq!(run("a =\n  foo\n").unwrap(), vec![key("a"), text("foo")]);
    }

    #[test]
    fn test_unclosed_composite_fails() {
        assert!(run("a = { b = 1").is_err());
    }

    #[test]
    fn test_missing_equals_fails() {
        assert!(run("a 1\n").is_err());
    }

    #[test]
    fn test_stray_close_fails() {
        assert!(run("a = 1\n}\n").is_err());
    }

    #[test]
    fn test_mixed_composite_fails() {
        assert!(run("a = { 1 b = 2 }").is_err());
        assert!(run("a = {\n  b = 2\n  1\n}").is_err());
    }

    #[test]
    fn test_value_required() {
        assert!(run("a =").is_err());
        assert!(run("a = }").is_err());
    }
}
