//! Host cursor protocol and a concrete host over a [`SourceBuffer`].
//!
//! The scanner sees the source only through [`Lexer`]: one code point of
//! lookahead, two ways to advance, an end-of-token freeze, and a query for
//! host-imposed range boundaries. [`SourceLexer`] implements the protocol
//! the way an incremental parsing host does, including included ranges for
//! embedded-language regions.

use std::ops::Range;

use fujin_lexer_core::{chars, Cursor, SourceBuffer};
use smallvec::SmallVec;

use crate::TokenType;

/// Cursor protocol consumed by the scanner.
///
/// Every character is consumed exactly once, by either [`advance`] or
/// [`skip`]. Neither moves past end-of-input.
///
/// [`advance`]: Lexer::advance
/// [`skip`]: Lexer::skip
pub trait Lexer {
    /// Current code point, or `'\0'` at end-of-input.
    fn lookahead(&self) -> char;

    /// Consume the lookahead as part of the token being recognized.
    fn advance(&mut self);

    /// Consume the lookahead as insignificant material.
    fn skip(&mut self);

    /// Freeze the token end at the current position.
    ///
    /// Later advances still move the lookahead but no longer extend the
    /// token.
    fn mark_end(&mut self);

    /// Returns `true` at the first byte of a host-supplied included range.
    fn is_at_included_range_start(&self) -> bool;

    /// Record which token kind a successful scan produces.
    fn set_result_symbol(&mut self, symbol: TokenType);

    /// Skip to the next line terminator or end-of-input, leaving the
    /// terminator as lookahead.
    fn skip_line_comment_body(&mut self) {
        loop {
            let c = self.lookahead();
            if c == chars::EOF || chars::is_line_terminator(c) {
                return;
            }
            self.skip();
        }
    }
}

/// Byte range of a recognized token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Span { start, end }
    }

    /// A zero-width span at `offset`.
    pub fn empty(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Zero for an inverted span.
    pub fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Host-side [`Lexer`] over a sentinel-terminated buffer.
///
/// Scanning is restricted to the included ranges. Reaching the end of one
/// range moves the cursor to the start of the next; past the last range the
/// lookahead is `'\0'`.
///
/// Token boundaries follow the host convention: `skip` moves the token start
/// to the current position, and if `mark_end` froze the end before the
/// start, the start is pulled back so the token is zero-width at the frozen
/// end.
pub struct SourceLexer<'a> {
    cursor: Cursor<'a>,
    /// Sorted, non-overlapping, non-empty byte ranges.
    ranges: SmallVec<[Range<u32>; 2]>,
    /// Index of the range containing the cursor; `ranges.len()` once past
    /// the last one.
    range_index: usize,
    token_start: u32,
    token_end: Option<u32>,
    result_symbol: Option<TokenType>,
}

impl<'a> SourceLexer<'a> {
    /// Lexer over the whole buffer.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self::with_included_ranges(buffer, [0..buffer.len()])
    }

    /// Lexer restricted to `ranges`.
    ///
    /// Ranges are clamped to the source, empty ranges are dropped, and the
    /// remainder is sorted by start. Overlapping ranges are merged.
    pub fn with_included_ranges(
        buffer: &'a SourceBuffer,
        ranges: impl IntoIterator<Item = Range<u32>>,
    ) -> Self {
        let len = buffer.len();
        let mut clamped: SmallVec<[Range<u32>; 2]> = ranges
            .into_iter()
            .map(|r| r.start.min(len)..r.end.min(len))
            .filter(|r| r.start < r.end)
            .collect();
        clamped.sort_by_key(|r| r.start);

        let mut merged: SmallVec<[Range<u32>; 2]> = SmallVec::new();
        for range in clamped {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
                _ => merged.push(range),
            }
        }

        let mut lexer = SourceLexer {
            cursor: buffer.cursor(),
            ranges: merged,
            range_index: 0,
            token_start: 0,
            token_end: None,
            result_symbol: None,
        };
        lexer.reset(0);
        lexer
    }

    /// Restart scanning at `offset`, discarding token state.
    ///
    /// An offset outside every included range moves to the start of the
    /// next range, or to end-of-input if there is none.
    pub fn reset(&mut self, offset: u32) {
        self.range_index = self
            .ranges
            .iter()
            .position(|r| offset < r.end)
            .unwrap_or(self.ranges.len());
        let pos = match self.ranges.get(self.range_index) {
            Some(range) => offset.max(range.start),
            None => offset,
        };
        self.cursor.set_pos(pos);
        self.token_start = self.cursor.pos();
        self.token_end = None;
        self.result_symbol = None;
    }

    /// Current byte offset of the lookahead.
    pub fn position(&self) -> u32 {
        self.cursor.pos()
    }

    /// Span of the token recognized so far.
    ///
    /// Without a `mark_end`, the token ends at the current position.
    pub fn token_span(&self) -> Span {
        let end = self.token_end.unwrap_or(self.cursor.pos());
        Span::new(self.token_start.min(end), end)
    }

    /// Token kind set by the last successful scan, if any.
    pub fn result_symbol(&self) -> Option<TokenType> {
        self.result_symbol
    }

    fn is_past_last_range(&self) -> bool {
        self.range_index >= self.ranges.len()
    }

    /// Move the cursor one character forward, hopping to the next included
    /// range when the current one is exhausted.
    fn step(&mut self) {
        if self.is_past_last_range() || self.cursor.is_eof() {
            return;
        }
        self.cursor.advance_char();
        self.enter_next_range_if_done();
    }

    fn enter_next_range_if_done(&mut self) {
        while let Some(range) = self.ranges.get(self.range_index) {
            if self.cursor.pos() < range.end {
                return;
            }
            self.range_index += 1;
            if let Some(next) = self.ranges.get(self.range_index) {
                self.cursor.set_pos(next.start);
            }
        }
    }
}

impl Lexer for SourceLexer<'_> {
    fn lookahead(&self) -> char {
        if self.is_past_last_range() {
            return chars::EOF;
        }
        self.cursor.current_char()
    }

    fn advance(&mut self) {
        self.step();
    }

    fn skip(&mut self) {
        self.step();
        self.token_start = self.cursor.pos();
    }

    fn mark_end(&mut self) {
        self.token_end = Some(self.cursor.pos());
    }

    fn is_at_included_range_start(&self) -> bool {
        self.ranges
            .get(self.range_index)
            .is_some_and(|range| self.cursor.pos() == range.start)
    }

    fn set_result_symbol(&mut self, symbol: TokenType) {
        self.result_symbol = Some(symbol);
    }

    /// Uses a byte search within each included range instead of decoding
    /// every character.
    fn skip_line_comment_body(&mut self) {
        while let Some(range) = self.ranges.get(self.range_index) {
            let stop = self.cursor.line_end_offset().min(range.end);
            if stop == self.cursor.pos() {
                break;
            }
            self.cursor.set_pos(stop);
            self.enter_next_range_if_done();
            self.token_start = self.cursor.pos();
        }
    }
}
