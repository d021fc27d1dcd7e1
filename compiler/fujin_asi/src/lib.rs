//! Automatic semicolon insertion for Fujin.
//!
//! The Fujin grammar cannot decide on its own where an implicit statement
//! terminator belongs: that depends on unbounded lookahead past whitespace
//! and comments, on restricted productions (`++`, `--`, `.5`, `!`, `in`,
//! `instanceof`), and on end-of-input and block boundaries. This crate is
//! the external scanner that makes that decision for the host tokenizer.
//!
//! # Layers
//!
//! - [`Lexer`]: the cursor protocol the host provides
//! - [`trivia`]: whitespace and comment scanning (probe and consume modes)
//! - [`terminator`]: the insertion decision
//! - [`FujinScanner`]: the stateless plugin entry point
//! - [`probe`]: a host-side driver over [`SourceLexer`]
//!
//! The scanner never builds a tree and never reports diagnostics. Every
//! answer is a boolean: a zero-width terminator was recognized, or not.

mod lexer;
pub mod probe;
mod scanner;
mod symbols;
pub mod terminator;
pub mod trivia;

pub use lexer::{Lexer, SourceLexer, Span};
pub use probe::{probe_lines, probe_offsets, probe_terminator, LineProbe, ProbeError, TerminatorToken};
pub use scanner::{ExternalScanner, FujinScanner};
pub use symbols::{TokenType, ValidSymbols};
