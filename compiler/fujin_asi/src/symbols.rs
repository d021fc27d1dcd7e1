//! External token kinds and the host's valid-symbol set.

use bitflags::bitflags;

/// Tokens this scanner can produce.
///
/// Discriminants index the host's valid-symbol array, in the order the
/// grammar declares its externals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    /// Zero-width statement terminator (`_automatic_semicolon`).
    AutomaticSemicolon = 0,
}

impl TokenType {
    /// All external tokens, in declaration order.
    pub const ALL: [TokenType; 1] = [TokenType::AutomaticSemicolon];

    /// Grammar-side name of the external.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::AutomaticSemicolon => "_automatic_semicolon",
        }
    }

    /// Bit for this token in a [`ValidSymbols`] set.
    pub fn flag(self) -> ValidSymbols {
        match self {
            TokenType::AutomaticSemicolon => ValidSymbols::AUTOMATIC_SEMICOLON,
        }
    }
}

bitflags! {
    /// Token kinds the grammar currently accepts at the cursor position.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ValidSymbols: u32 {
        const AUTOMATIC_SEMICOLON = 1 << 0;
    }
}

impl ValidSymbols {
    /// Build the set from a host array indexed by [`TokenType`].
    ///
    /// Entries beyond the known externals are ignored; missing entries
    /// count as not valid.
    pub fn from_host_array(valid: &[bool]) -> Self {
        TokenType::ALL
            .iter()
            .filter(|token| valid.get(**token as usize).copied().unwrap_or(false))
            .fold(Self::empty(), |set, token| set | token.flag())
    }

    /// Returns `true` if `token` is acceptable at the cursor position.
    #[inline]
    pub fn accepts(self, token: TokenType) -> bool {
        self.contains(token.flag())
    }
}
