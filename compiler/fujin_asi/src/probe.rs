//! Host-side driver for the scanner.
//!
//! A real host calls the scanner from inside its own tokenizer. The probe
//! functions stand in for that host: each decision runs on a fresh
//! [`SourceLexer`] reset to the candidate offset, so lookahead never leaks
//! between decisions, and an accepted semicolon comes back as a zero-width
//! [`TerminatorToken`] at the frozen end.

use std::path::PathBuf;

use fujin_lexer_core::{chars, EncodingIssueKind, SourceBuffer};
use tracing::{debug, warn};

use crate::trivia::{scan_trivia, TriviaMode, TriviaVerdict};
use crate::{ExternalScanner, FujinScanner, Lexer, SourceLexer, Span, ValidSymbols};

/// Errors from driving the scanner outside a host.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("offset {offset} is past the end of the source ({len} bytes)")]
    OffsetOutOfRange { offset: u32, len: u32 },

    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: u32 },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source is larger than 4 GiB")]
    SourceTooLarge,

    #[error("{0}")]
    Usage(String),
}

/// A synthesized statement terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminatorToken {
    /// Always zero-width.
    pub span: Span,
}

/// Verdict at one candidate offset, with its 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineProbe {
    pub offset: u32,
    pub line: u32,
    /// Counted in code points.
    pub column: u32,
    pub terminator: Option<TerminatorToken>,
}

impl LineProbe {
    pub fn inserted(&self) -> bool {
        self.terminator.is_some()
    }
}

/// Ask the scanner whether a terminator belongs at `offset`.
///
/// `lexer` is reset to `offset` first; its included ranges are kept.
#[tracing::instrument(level = "debug", skip(lexer, buffer, valid))]
pub fn probe_terminator(
    lexer: &mut SourceLexer<'_>,
    buffer: &SourceBuffer,
    offset: u32,
    valid: ValidSymbols,
) -> Result<Option<TerminatorToken>, ProbeError> {
    if offset > buffer.len() {
        return Err(ProbeError::OffsetOutOfRange {
            offset,
            len: buffer.len(),
        });
    }
    if !buffer.is_char_boundary(offset) {
        return Err(ProbeError::NotCharBoundary { offset });
    }

    lexer.reset(offset);
    let mut scanner = FujinScanner::create();
    if !scanner.scan(lexer, valid) {
        return Ok(None);
    }
    let span = lexer.token_span();
    debug!(start = span.start, lookahead_end = lexer.position(), "terminator");
    Ok(Some(TerminatorToken { span }))
}

/// Probe each offset in `offsets`, in order.
pub fn probe_offsets(source: &str, offsets: &[u32]) -> Result<Vec<LineProbe>, ProbeError> {
    let buffer = load(source)?;
    probe_buffer(source, &buffer, offsets)
}

/// Probe the end of every line that ends with a token.
///
/// The candidate is the offset right after the last token on the line,
/// which is where a host sits when it asks for a terminator. Comments are
/// trivia: a trailing `// note` does not move the candidate, and lines
/// that hold only comment text are not probed. Lines are split at `\n`,
/// U+2028, and U+2029.
pub fn probe_lines(source: &str) -> Result<Vec<LineProbe>, ProbeError> {
    let buffer = load(source)?;
    let offsets = token_line_ends(source, &buffer);
    probe_buffer(source, &buffer, &offsets)
}

fn probe_buffer(
    source: &str,
    buffer: &SourceBuffer,
    offsets: &[u32],
) -> Result<Vec<LineProbe>, ProbeError> {
    let lines = LineOffsetTable::build(source);
    let mut lexer = SourceLexer::new(buffer);
    offsets
        .iter()
        .map(|&offset| {
            let terminator = probe_terminator(&mut lexer, buffer, offset, ValidSymbols::all())?;
            let (line, column) = lines.offset_to_line_col(source, offset);
            Ok(LineProbe {
                offset,
                line,
                column,
                terminator,
            })
        })
        .collect()
}

fn load(source: &str) -> Result<SourceBuffer, ProbeError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ProbeError::SourceTooLarge);
    }
    let buffer = SourceBuffer::new(source);
    for issue in buffer.encoding_issues() {
        match issue.kind {
            EncodingIssueKind::InteriorNull => {
                warn!(pos = issue.pos, "null byte reads as end of input");
            }
            EncodingIssueKind::Utf8Bom => debug!("source starts with a byte order mark"),
        }
    }
    Ok(buffer)
}

/// End offset of the last token on each line, in source order.
///
/// Trivia runs are skipped with the scanner's own comment handling; every
/// other character counts as token text. A lone `/` is division, so it is
/// token text too. Stops at end-of-input, including an interior null.
fn token_line_ends(source: &str, buffer: &SourceBuffer) -> Vec<u32> {
    let crosses_line = |from: u32, to: u32| {
        source
            .get(from as usize..to as usize)
            .is_some_and(|text| text.chars().any(chars::is_line_terminator))
    };

    let mut lexer = SourceLexer::new(buffer);
    let mut ends = Vec::new();
    let mut last_token_end = None;
    loop {
        let c = lexer.lookahead();
        if c == chars::EOF {
            break;
        }
        if !chars::is_whitespace(c) && c != '/' {
            lexer.advance();
            last_token_end = Some(lexer.position());
            continue;
        }

        let start = lexer.position();
        let mut scanned_comment = false;
        let verdict = scan_trivia(&mut lexer, &mut scanned_comment, TriviaMode::Consume);
        let end = lexer.position();
        if verdict == TriviaVerdict::Reject {
            // `end` is just past the `/`.
            if crosses_line(start, end - 1) {
                ends.extend(last_token_end.take());
            }
            last_token_end = Some(end);
        } else if crosses_line(start, end) {
            ends.extend(last_token_end.take());
        }
    }
    ends.extend(last_token_end);
    ends
}

/// Line start offsets for O(log L) line and column lookup.
struct LineOffsetTable {
    /// `offsets[0] == 0`; each later entry is the byte after a line
    /// terminator.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .char_indices()
                .filter(|&(_, c)| chars::is_line_terminator(c))
                .filter_map(|(i, c)| u32::try_from(i + c.len_utf8()).ok()),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line and column. Columns count code points.
    fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.offsets.get(line_idx).copied().unwrap_or(0) as usize;
        let column = source
            .get(line_start..offset as usize)
            .map_or(0, |text| text.chars().count());
        (
            u32::try_from(line_idx + 1).unwrap_or(u32::MAX),
            u32::try_from(column + 1).unwrap_or(u32::MAX),
        )
    }
}
