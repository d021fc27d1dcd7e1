//! Automatic semicolon decision.
//!
//! Called with the lookahead right after the last real token. The token end
//! is frozen before any lookahead, so an accepted semicolon is always
//! zero-width at that position no matter how much trivia was read to reach
//! the verdict.
//!
//! # Decision order
//!
//! 1. End-of-input accepts.
//! 2. A `/` is probed with [`TriviaMode::Probe`]. A malformed opener
//!    declines; a settled scan accepts unless `,` or `=` follows.
//! 3. `}` accepts.
//! 4. The start of an included range accepts.
//! 5. A line terminator ends the same-line search.
//! 6. Any other non-whitespace character declines; whitespace is skipped
//!    and the search repeats.
//! 7. After the line terminator, trivia is consumed with
//!    [`TriviaMode::Consume`].
//! 8. The next character is classified as a [`Continuation`] and the
//!    restricted-production table decides.
//!
//! The probe in step 2 and the consume in step 7 stay separate: a `/` that
//! survives step 7 can only be division.

use fujin_lexer_core::chars;
use tracing::trace;

use crate::trivia::{scan_trivia, TriviaMode, TriviaVerdict};
use crate::{Lexer, TokenType};

/// How the first character of the next line relates to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// `` ` , : ; * % > < = [ ( ? ^ | & / ``: only valid mid-expression.
    Operator,
    /// `.`: member access, or a leading-dot number like `.5`.
    Dot,
    /// `+`: binary plus, or prefix `++`.
    Plus,
    /// `-`: binary minus, or prefix `--`.
    Minus,
    /// `!`: unary not, or `!=`.
    Bang,
    /// `i`: an identifier, or the keywords `in` / `instanceof`.
    LetterI,
    /// Anything else starts a new statement.
    Other,
}

impl Continuation {
    pub fn classify(c: char) -> Self {
        match c {
            '`' | ',' | ':' | ';' | '*' | '%' | '>' | '<' | '=' | '[' | '(' | '?' | '^' | '|'
            | '&' | '/' => Continuation::Operator,
            '.' => Continuation::Dot,
            '+' => Continuation::Plus,
            '-' => Continuation::Minus,
            '!' => Continuation::Bang,
            'i' => Continuation::LetterI,
            _ => Continuation::Other,
        }
    }
}

/// Decide whether an automatic semicolon belongs at the lookahead.
///
/// Sets the result symbol and freezes the token end first. Returns `true`
/// to emit the zero-width semicolon. The cursor is left wherever lookahead
/// stopped; the host discards that on either outcome.
#[tracing::instrument(level = "trace", skip_all, ret)]
pub fn scan_automatic_semicolon<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    lexer.set_result_symbol(TokenType::AutomaticSemicolon);
    lexer.mark_end();
    let mut scanned_comment = false;

    loop {
        if lexer.lookahead() == chars::EOF {
            return true;
        }

        if lexer.lookahead() == '/' {
            let verdict = scan_trivia(lexer, &mut scanned_comment, TriviaMode::Probe);
            trace!(?verdict, scanned_comment, "probed comment");
            match verdict {
                TriviaVerdict::Reject => return false,
                TriviaVerdict::Accept if !matches!(lexer.lookahead(), ',' | '=') => {
                    return true;
                }
                TriviaVerdict::Accept | TriviaVerdict::NoNewline => {}
            }
        }

        let c = lexer.lookahead();
        if c == '}' || lexer.is_at_included_range_start() {
            return true;
        }
        if chars::is_line_terminator(c) {
            break;
        }
        if !chars::is_whitespace(c) {
            return false;
        }
        lexer.skip();
    }

    lexer.skip();
    if scan_trivia(lexer, &mut scanned_comment, TriviaMode::Consume) == TriviaVerdict::Reject {
        return false;
    }

    let continuation = Continuation::classify(lexer.lookahead());
    trace!(?continuation, scanned_comment, "next line");
    match continuation {
        Continuation::Operator => false,
        Continuation::Dot => {
            lexer.skip();
            chars::is_decimal_digit(lexer.lookahead())
        }
        Continuation::Plus => {
            lexer.skip();
            lexer.lookahead() == '+'
        }
        Continuation::Minus => {
            lexer.skip();
            lexer.lookahead() == '-'
        }
        Continuation::Bang => {
            lexer.skip();
            lexer.lookahead() != '='
        }
        Continuation::LetterI => starts_statement_after_i(lexer),
        Continuation::Other => true,
    }
}

/// Lookahead is `i`. Returns `false` only for the keywords `in` and
/// `instanceof`, which continue a binary expression.
fn starts_statement_after_i<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    lexer.skip();
    if lexer.lookahead() != 'n' {
        return true;
    }
    lexer.skip();

    if !chars::is_alpha(lexer.lookahead()) {
        return false;
    }

    for expected in "stanceof".chars() {
        if lexer.lookahead() != expected {
            return true;
        }
        lexer.skip();
    }

    // `instanceofx` is an identifier, not the keyword.
    chars::is_alpha(lexer.lookahead())
}
