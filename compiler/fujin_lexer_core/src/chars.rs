//! Character classification over Unicode code points.
//!
//! These are the primitives the host tokenizer and the external scanner
//! agree on. `EOF` (`'\0'`) is never whitespace, alphabetic, a digit, or a
//! line terminator, so scanning loops driven by these predicates stop at
//! end-of-input without a separate check.

/// Lookahead value reported at end-of-input.
pub const EOF: char = '\0';

/// U+2028 LINE SEPARATOR.
pub const LINE_SEPARATOR: char = '\u{2028}';

/// U+2029 PARAGRAPH SEPARATOR.
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Returns `true` for `\n`, U+2028, and U+2029.
///
/// `\r` is not a line terminator on its own; it is plain whitespace.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

/// Unicode `White_Space`. Includes the line terminators.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Unicode `Alphabetic`.
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_alphabetic()
}

/// ASCII `0`-`9` only.
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}
