//! Comment stripping pre-pass
//!
//! A comment starts at `#` and runs to the end of the line. It is removed from the text
//! before tokenization; quotes do not protect a `#`.

use std::borrow::Cow;

/// Removes every comment, keeping the newline that terminates it.
///
/// A final comment without a trailing newline is removed up to the end of input.
/// Input without any `#` is returned borrowed.
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    if !source.contains('#') {
        return Cow::Borrowed(source);
    }

    let mut stripped = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find('#') {
        stripped.push_str(&rest[..start]);
        rest = match rest[start..].find('\n') {
            Some(end) => &rest[start + end..],
            None => "",
        };
    }
    stripped.push_str(rest);

    Cow::Owned(stripped)
}
