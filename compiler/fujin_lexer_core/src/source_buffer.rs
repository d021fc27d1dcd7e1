//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so a [`Cursor`] reports end-of-input as lookahead `'\0'` without a
//! bounds check. The total size is rounded up to the next 64-byte boundary,
//! which also leaves room for decoding a multi-byte character that starts
//! right before the sentinel.
//!
//! # Encoding Detection
//!
//! Construction records encoding issues as [`EncodingIssue`] values:
//! - UTF-8 BOM (tolerated by the grammar as whitespace, reported for tooling)
//! - Interior null bytes (read as end-of-input by every cursor)

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// Null byte (U+0000) in source content. Scanners stop there.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; the
    /// remainder is unreachable through a [`Cursor`].
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        detect_bom(source_bytes, &mut encoding_issues);
        detect_interior_nulls(source_bytes, &mut encoding_issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }

    /// Returns `true` if `offset` is within the source (or at its end) and
    /// does not split a UTF-8 sequence.
    pub fn is_char_boundary(&self, offset: u32) -> bool {
        let offset = offset as usize;
        if offset > self.source_len as usize {
            return false;
        }
        // Continuation bytes are 0b10xx_xxxx; the sentinel is not one.
        self.buf[offset] & 0xC0 != 0x80
    }
}

/// Detect a UTF-8 byte order mark at the start of the source.
///
/// UTF-16 BOMs cannot occur: the input is already a `&str`.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(0, source) {
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}
