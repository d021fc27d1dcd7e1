use super::*;
use crate::SourceLexer;
use fujin_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

/// Result of one scan: verdict, stop offset, lookahead, comment flag.
#[derive(Debug, PartialEq)]
struct Scan {
    verdict: TriviaVerdict,
    pos: u32,
    next: char,
    scanned_comment: bool,
}

fn scan(source: &str, mode: TriviaMode) -> Scan {
    let buf = SourceBuffer::new(source);
    let mut lexer = SourceLexer::new(&buf);
    let mut scanned_comment = false;
    let verdict = scan_trivia(&mut lexer, &mut scanned_comment, mode);
    Scan {
        verdict,
        pos: lexer.position(),
        next: lexer.lookahead(),
        scanned_comment,
    }
}

// === Whitespace only ===

#[test]
fn plain_whitespace_accepts_at_next_char() {
    let expected = Scan {
        verdict: TriviaVerdict::Accept,
        pos: 3,
        next: 'x',
        scanned_comment: false,
    };
    assert_eq!(scan(" \t\nx", TriviaMode::Consume), expected);
    assert_eq!(scan(" \t\nx", TriviaMode::Probe), expected);
}

#[test]
fn empty_input_accepts() {
    let result = scan("", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, '\0');
}

#[test]
fn unicode_whitespace_is_skipped() {
    let result = scan("\u{00A0}\u{2028}\u{3000}x", TriviaMode::Consume);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, 'x');
}

// === Line comments ===

#[test]
fn line_comment_then_code() {
    let expected = Scan {
        verdict: TriviaVerdict::Accept,
        pos: 7,
        next: 'x',
        scanned_comment: true,
    };
    assert_eq!(scan("// c\n  x", TriviaMode::Consume).verdict, expected.verdict);
    assert_eq!(scan("// c\n  x", TriviaMode::Probe), expected);
}

#[test]
fn line_comment_ends_at_unicode_separator() {
    let result = scan("// c\u{2029}x", TriviaMode::Consume);
    assert_eq!(result.next, 'x');
    assert!(result.scanned_comment);
}

#[test]
fn line_comment_to_eof() {
    let result = scan("// trailing", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, '\0');
    assert!(result.scanned_comment);
}

// === Block comments ===

#[test]
fn consume_skips_block_comment_and_following_newline() {
    let result = scan("/* x */ \n 5", TriviaMode::Consume);
    assert_eq!(
        result,
        Scan {
            verdict: TriviaVerdict::Accept,
            pos: 10,
            next: '5',
            scanned_comment: true,
        }
    );
}

#[test]
fn probe_stops_after_single_line_block_comment() {
    let result = scan("/* x */ \n 5", TriviaMode::Probe);
    assert_eq!(
        result,
        Scan {
            verdict: TriviaVerdict::NoNewline,
            pos: 7,
            next: ' ',
            scanned_comment: true,
        }
    );
}

#[test]
fn probe_accepts_after_multiline_block_comment() {
    let result = scan("/* a\n b */ x", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, ' ');
}

#[test]
fn probe_accepts_after_block_comment_with_unicode_separator() {
    let result = scan("/* a\u{2028}b */x", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, 'x');
}

#[test]
fn probe_continues_into_adjacent_comment() {
    let result = scan("/* a *//* b */ x", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::NoNewline);
    assert_eq!(result.pos, 14);
}

#[test]
fn probe_newline_flag_spans_adjacent_comments() {
    let result = scan("/*\n*//* b */ x", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
}

#[test]
fn probe_block_then_line_comment() {
    // The block comment is followed by `/`, so the probe keeps going and
    // finishes at the code after the line comment.
    let result = scan("/* a */// b\nx", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, 'x');
}

#[test]
fn probe_block_comment_at_eof_is_undecided() {
    let result = scan("/**/", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::NoNewline);
    assert_eq!(result.next, '\0');
}

#[test]
fn double_star_closer() {
    let result = scan("/* a **/x", TriviaMode::Consume);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, 'x');
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    let result = scan("/* never closed\n", TriviaMode::Probe);
    assert_eq!(
        result,
        Scan {
            verdict: TriviaVerdict::Accept,
            pos: 16,
            next: '\0',
            scanned_comment: false,
        }
    );
}

#[test]
fn consume_runs_through_mixed_trivia() {
    let result = scan("/* a */ // b\n /*\n*/\t x", TriviaMode::Consume);
    assert_eq!(result.verdict, TriviaVerdict::Accept);
    assert_eq!(result.next, 'x');
}

// === Malformed openers ===

#[test]
fn lone_slash_rejects() {
    let result = scan("/x", TriviaMode::Probe);
    assert_eq!(result.verdict, TriviaVerdict::Reject);
    assert_eq!(result.next, 'x');
    assert!(!result.scanned_comment);
}

#[test]
fn slash_after_comment_rejects_in_consume_mode() {
    let result = scan("// c\n / 2", TriviaMode::Consume);
    assert_eq!(result.verdict, TriviaVerdict::Reject);
    assert!(result.scanned_comment);
}

#[test]
fn slash_at_eof_rejects() {
    assert_eq!(scan("/", TriviaMode::Consume).verdict, TriviaVerdict::Reject);
}
