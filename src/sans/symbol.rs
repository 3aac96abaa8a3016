//! The encoding alphabet.

use thiserror::Error;
use zerocopy::TryFromBytes;

/// An error reading a symbol from a byte.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SymbolError {
    /// The byte is not one of `L`, `R` or `=`.
    #[error("Invalid symbol ({0:#04x}).")]
    Invalid(u8),
}

/// A single symbol of an encoding.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
pub enum Symbol {
    /// `L`, handled by [`left_step`](super::step::left_step).
    Left = b'L',
    /// `R`, handled by [`right_step`](super::step::right_step).
    Right = b'R',
    /// `=`, handled by [`duplicate_step`](super::step::duplicate_step).
    Duplicate = b'=',
}

impl TryFrom<u8> for Symbol {
    type Error = SymbolError;

    fn try_from(r: u8) -> Result<Self, Self::Error> {
        zerocopy::try_transmute!(r).map_err(|_| SymbolError::Invalid(r))
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol as u8 as char
    }
}
