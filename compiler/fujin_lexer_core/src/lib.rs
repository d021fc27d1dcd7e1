//! Low-level source access for Fujin scanners.
//!
//! This crate has no `fujin_*` dependencies. It provides:
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source text
//! - [`Cursor`]: forward code-point cursor over a `SourceBuffer`
//! - [`chars`]: the character classes scanners dispatch on

pub mod chars;
mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
