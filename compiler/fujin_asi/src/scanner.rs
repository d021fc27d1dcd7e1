//! External scanner plugin surface.
//!
//! Hosts drive external scanners through a fixed lifecycle: create, scan
//! any number of times, serialize and restore around incremental reparses,
//! destroy. The Fujin scanner carries no state, so the persistence hooks
//! write and read nothing and destruction is an ordinary drop.

use tracing::trace;

use crate::terminator::scan_automatic_semicolon;
use crate::{Lexer, TokenType, ValidSymbols};

/// Lifecycle and entry point every external scanner provides.
pub trait ExternalScanner {
    /// Fresh scanner instance.
    fn create() -> Self
    where
        Self: Sized;

    /// Write persistent state into `buffer`, returning the bytes written.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore state previously written by [`serialize`](Self::serialize).
    /// An empty buffer resets to the initial state.
    fn deserialize(&mut self, buffer: &[u8]);

    /// Try to recognize one external token at the lookahead.
    ///
    /// Returns `true` if a token was recognized; its kind and span are
    /// recorded on `lexer`. On `false` the host discards any lookahead the
    /// scanner performed.
    fn scan(&mut self, lexer: &mut dyn Lexer, valid: ValidSymbols) -> bool;
}

/// The Fujin external scanner. Stateless.
///
/// Destroy is the ordinary [`Drop`]; there is nothing to release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FujinScanner;

impl ExternalScanner for FujinScanner {
    fn create() -> Self {
        FujinScanner
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _buffer: &[u8]) {}

    fn scan(&mut self, lexer: &mut dyn Lexer, valid: ValidSymbols) -> bool {
        if !valid.accepts(TokenType::AutomaticSemicolon) {
            trace!(?valid, "automatic semicolon not expected");
            return false;
        }
        scan_automatic_semicolon(lexer)
    }
}
