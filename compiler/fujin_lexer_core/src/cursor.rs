//! Forward code-point cursor over a sentinel-terminated buffer.
//!
//! The cursor walks the buffer one UTF-8 character at a time. End-of-input
//! reads as `'\0'`: the byte at `source_len` is the sentinel, and the
//! cache-line padding after it is zero as well.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` also reads as `'\0'`. Scanners treat it as
//! end-of-input, matching the host's lookahead convention; use
//! [`is_eof()`](Cursor::is_eof) to tell the two apart.

/// UTF-8 lead byte shared by U+2028 and U+2029 (`E2 80 A8`, `E2 80 A9`).
const SEPARATOR_LEAD: u8 = 0xE2;

/// Forward cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00`. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the code point starting at the current position.
    ///
    /// Returns `'\0'` at EOF and on interior null bytes. A position inside a
    /// multi-byte sequence decodes as U+FFFD.
    #[inline]
    pub fn current_char(&self) -> char {
        let lead = self.current();
        if lead.is_ascii() {
            return char::from(lead);
        }
        let start = self.pos as usize;
        let end = (start + Self::utf8_char_width(lead) as usize).min(self.source_len as usize);
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. Does nothing at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached the sentinel.
    ///
    /// Interior null bytes are not EOF (see module docs).
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Move to an absolute byte offset, clamped to the source length.
    ///
    /// Used by hosts to backtrack and to jump between included ranges. The
    /// offset should fall on a character boundary.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.source_len);
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Offset of the next line terminator or null byte at or after the
    /// current position, or `source_len` if there is none.
    ///
    /// Line terminators are `\n`, U+2028, and U+2029. The cursor does not
    /// move. Used to skip line-comment bodies without decoding every byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets within remaining are bounded by source_len, which fits in u32"
    )]
    pub fn line_end_offset(&self) -> u32 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let mut from = 0;
        while let Some(found) = memchr::memchr3(b'\n', 0, SEPARATOR_LEAD, &remaining[from..]) {
            let at = from + found;
            let is_stop = remaining[at] != SEPARATOR_LEAD
                || matches!(remaining.get(at + 1..at + 3), Some([0x80, 0xA8 | 0xA9]));
            if is_stop {
                return self.pos + at as u32;
            }
            from = at + 1;
        }
        self.source_len
    }
}
