//! Main parser entry point

use chumsky::error::SimpleReason;
use chumsky::Parser;
use std::sync::Arc;
use tracing::debug;

use crate::paradox::ast::Node;
use crate::paradox::lexing::{self, TokenSpan};
use crate::paradox::parsing::builder::TreeBuilder;
use crate::paradox::parsing::error::{ParseError, ParseErrorKind};
use crate::paradox::parsing::grammar::{document, ParserError};

/// Parse paradox script into a tree rooted at a node with an empty key.
///
/// `source_label` names the input in error messages, usually the file path. On failure no
/// partial tree is returned.
pub fn parse(content: &str, source_label: &str) -> Result<Node, ParseError> {
    debug!(label = source_label, bytes = content.len(), "parsing");

    let stripped = lexing::strip_comments(content);
    let tokens = lexing::tokenize(&stripped).map_err(|err| {
        ParseError::at_offset(
            source_label,
            &stripped,
            err.span.start,
            ParseErrorKind::InvalidCharacter,
        )
    })?;

    let matches = document(Arc::from(&*stripped))
        .parse(tokens.clone())
        .map_err(|errors| convert_error(source_label, &stripped, &tokens, errors))?;

    let root = TreeBuilder::new()
        .build(matches)
        .map_err(|err| ParseError::at_offset(source_label, &stripped, err.span.start, err.kind))?;

    debug!(
        label = source_label,
        entries = root.children().len(),
        "parsed"
    );
    Ok(root)
}

/// Turns the first grammar error into a [ParseError].
///
/// Grammar error spans count tokens, so they are mapped back to byte offsets here.
fn convert_error(
    source_label: &str,
    source: &str,
    tokens: &[TokenSpan],
    errors: Vec<ParserError>,
) -> ParseError {
    let Some(err) = errors.into_iter().next() else {
        return ParseError::at_offset(
            source_label,
            source,
            source.len(),
            ParseErrorKind::UnexpectedEnd {
                expected: "valid input".to_string(),
            },
        );
    };

    let offset = tokens
        .get(err.span().start)
        .map_or(source.len(), |(_, span)| span.start);

    let kind = match (err.reason(), err.found()) {
        (SimpleReason::Unclosed { delimiter, .. }, _) => ParseErrorKind::UnexpectedToken {
            expected: format!("match for {}", delimiter.0),
            found: describe_found(err.found()),
        },
        (_, None) => ParseErrorKind::UnexpectedEnd {
            expected: describe_expected(&err),
        },
        (_, Some(_)) => ParseErrorKind::UnexpectedToken {
            expected: describe_expected(&err),
            found: describe_found(err.found()),
        },
    };

    ParseError::at_offset(source_label, source, offset, kind)
}

fn describe_expected(err: &ParserError) -> String {
    if let Some(label) = err.label() {
        return label.to_string();
    }

    let mut expected: Vec<String> = err
        .expected()
        .map(|token| match token {
            Some((token, _)) => token.to_string(),
            None => "end of input".to_string(),
        })
        .collect();
    expected.sort();
    expected.dedup();

    match expected.len() {
        0 => "valid input".to_string(),
        1 => expected.remove(0),
        _ => format!("one of {}", expected.join(", ")),
    }
}

fn describe_found(found: Option<&TokenSpan>) -> String {
    match found {
        Some((token, _)) => token.to_string(),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paradox::ast::{Position, Value};

    #[test]
    fn test_parse_flat_document() {
        let root = parse("a = 1\nb = hello\n", "test").unwrap();
        assert!(root.is_root());
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0], Node::with_text("a", "1"));
        assert_eq!(root.children()[1], Node::with_text("b", "hello"));
    }

    #[test]
    fn test_parse_nested_document() {
        let source = "a = 1\nb = { 1 2 3 }\nc = {\n  d = foo\n}\n";
        let root = parse(source, "test").unwrap();
        assert_eq!(
            root.children(),
            &[
                Node::with_text("a", "1"),
                Node::with_integers("b", vec![1, 2, 3]),
                Node::with_children("c", vec![Node::with_text("d", "foo")]),
            ]
        );
    }

    #[test]
    fn test_parse_strips_comments() {
        let root = parse("# header\nx = \"Hello World\" # greeting\n", "test").unwrap();
        assert_eq!(root.children(), &[Node::with_text("x", "\"Hello World\"")]);
        assert_eq!(root.children()[0].value_unquoted(), "Hello World");
    }

    #[test]
    fn test_parse_empty_input() {
        let root = parse("", "test").unwrap();
        assert!(root.is_root());
        assert!(root.children().is_empty());

        let root = parse("  \n\t\n# only a comment\n", "test").unwrap();
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_parse_empty_composite() {
        let root = parse("e = { }\n", "test").unwrap();
        assert_eq!(root.children()[0].value(), &Value::Children(vec![]));
    }

    #[test]
    fn test_parse_crlf() {
        let root = parse("a = 1\r\nb = { 2 }\r\n", "test").unwrap();
        assert_eq!(
            root.children(),
            &[Node::with_text("a", "1"), Node::with_integers("b", vec![2])]
        );
    }

    #[test]
    fn test_carriage_return_alone_is_not_a_value() {
        let err = parse("a = \r \n", "test").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));

        let err = parse("a = \t\r", "test").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_carriage_return_is_trimmed_from_text() {
        let root = parse("a = x\r \nb = { 1\r2 }\n", "test").unwrap();
        assert_eq!(
            root.children(),
            &[Node::with_text("a", "x"), Node::with_integers("b", vec![1, 2])]
        );
    }

    #[test]
    fn test_unclosed_composite_is_error() {
        let err = parse("a = { b = 1", "test").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_stray_close_brace_position() {
        let err = parse("a = 1\n}\n", "common/test.txt").unwrap_err();
        assert_eq!(err.position, Position::new(1, 0));
        assert_eq!(err.offset, 6);
        match &err.kind {
            ParseErrorKind::UnexpectedToken { found, .. } => assert_eq!(found, "'}'"),
            other => panic!("unexpected error kind: {other:?}"),
        }
        assert!(err.to_string().starts_with("common/test.txt:2:1: "));
    }

    #[test]
    fn test_missing_equals() {
        let err = parse("a 1\n", "test").unwrap_err();
        assert_eq!(err.position, Position::new(0, 2));
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn test_mixed_composite_is_error() {
        assert!(parse("a = { 1 b = 2 }", "test").is_err());
        assert!(parse("a = { b = 2 1 }", "test").is_ok());
        assert!(parse("a = {\n  b = 2\n  1\n}", "test").is_err());
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = parse("a = { 1 99999999999 }", "test").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::IntegerOutOfRange("99999999999".to_string())
        );
        assert_eq!(err.offset, 8);
    }

    #[test]
    fn test_error_position_accounts_for_comment_lines() {
        let err = parse("# one\n# two\na = }\n", "test").unwrap_err();
        assert_eq!(err.position, Position::new(2, 4));
    }
}
