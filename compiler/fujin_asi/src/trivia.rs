//! Whitespace and comment scanning.
//!
//! Both modes share one routine. [`TriviaMode::Consume`] skips the whole
//! run. [`TriviaMode::Probe`] stops right after a block comment that is not
//! immediately followed by another `/`, so the caller can look at the next
//! real character and learn whether the comment spanned a line.
//!
//! Everything is consumed with [`Lexer::skip`]; trivia never becomes part
//! of a token.

use fujin_lexer_core::chars;

use crate::Lexer;

/// How far [`scan_trivia`] goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriviaMode {
    /// Return early once a block comment settles the question.
    Probe,
    /// Skip every whitespace character and comment.
    Consume,
}

/// Outcome of [`scan_trivia`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriviaVerdict {
    /// A `/` that opens neither `//` nor `/*`. Semicolon is illegal here.
    Reject,
    /// A probe stopped after a single-line block comment. Undecided.
    NoNewline,
    /// The run ended cleanly, or a probe stopped after a block comment that
    /// crossed a line terminator.
    Accept,
}

/// Skip whitespace and comments starting at the lookahead.
///
/// Sets `scanned_comment` when at least one comment is traversed. An
/// unterminated block comment runs to end-of-input and the scan then
/// accepts.
///
/// The line-terminator flag used by probe-mode early exits covers every
/// block comment traversed in this call, not just the last one.
pub fn scan_trivia<L: Lexer + ?Sized>(
    lexer: &mut L,
    scanned_comment: &mut bool,
    mode: TriviaMode,
) -> TriviaVerdict {
    let mut saw_block_newline = false;

    loop {
        while chars::is_whitespace(lexer.lookahead()) {
            lexer.skip();
        }

        if lexer.lookahead() != '/' {
            return TriviaVerdict::Accept;
        }
        lexer.skip();

        match lexer.lookahead() {
            '/' => {
                lexer.skip();
                lexer.skip_line_comment_body();
                *scanned_comment = true;
            }
            '*' => {
                lexer.skip();
                if let Some(verdict) =
                    block_comment_body(lexer, scanned_comment, &mut saw_block_newline, mode)
                {
                    return verdict;
                }
            }
            _ => return TriviaVerdict::Reject,
        }
    }
}

/// Skip a block comment body after the opening `/*`.
///
/// Returns `Some` only for a probe-mode early exit.
fn block_comment_body<L: Lexer + ?Sized>(
    lexer: &mut L,
    scanned_comment: &mut bool,
    saw_block_newline: &mut bool,
    mode: TriviaMode,
) -> Option<TriviaVerdict> {
    loop {
        match lexer.lookahead() {
            chars::EOF => return None,
            '*' => {
                lexer.skip();
                if lexer.lookahead() == '/' {
                    lexer.skip();
                    *scanned_comment = true;
                    if mode == TriviaMode::Probe && lexer.lookahead() != '/' {
                        return Some(if *saw_block_newline {
                            TriviaVerdict::Accept
                        } else {
                            TriviaVerdict::NoNewline
                        });
                    }
                    return None;
                }
            }
            c if chars::is_line_terminator(c) => {
                *saw_block_newline = true;
                lexer.skip();
            }
            _ => lexer.skip(),
        }
    }
}

#[cfg(test)]
mod tests;
