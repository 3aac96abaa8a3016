//! Slice-based decoder implementation.

use core::fmt;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    Decoder,
    decoder::AdvanceError,
    digits::Digits,
    step::Malformed,
    symbol::SymbolError,
};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Found a byte outside the encoding alphabet.
    #[error("Invalid symbol {} at position {position}.", Found(.found))]
    InvalidSymbol { position: usize, found: u8 },
    /// A symbol's rule overflowed a digit.
    #[error("Malformed encoding at position {position}: {source}")]
    Malformed { position: usize, source: Malformed },
}

impl Error {
    fn at(position: usize, err: AdvanceError) -> Self {
        match err {
            AdvanceError::InvalidSymbol(SymbolError::Invalid(r)) => Self::InvalidSymbol {
                position,
                found: r,
            },
            AdvanceError::Malformed(source) => Self::Malformed { position, source },
        }
    }

    /// Position of the symbol which stopped decoding.
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidSymbol { position, .. } | Self::Malformed { position, .. } => *position,
        }
    }

    /// Whether decoding stopped on a byte outside the alphabet.
    pub fn is_invalid_symbol(&self) -> bool {
        matches!(self, Self::InvalidSymbol { .. })
    }

    /// Whether decoding stopped on a digit overflow.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Printable ASCII is shown quoted, other bytes in hex.
struct Found<'a>(&'a u8);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = *self.0;

        if r.is_ascii_graphic() || r == b' ' {
            write!(f, "{:?}", r as char)
        } else {
            write!(f, "{r:#04x}")
        }
    }
}

/// Decode the digits of an encoding held in a slice.
///
/// Symbols are case-sensitive. Decoding stops at the first symbol which is
/// invalid or whose rule overflows a digit, and no digits are returned.
///
/// This method is also re-exported as `lreq::avec::decode_slice`.
pub fn decode(r: &[u8]) -> Result<Digits, Error> {
    let mut state = match Decoder::new(r.len()) {
        Left(state) => state,
        Right(digits) => return Ok(digits),
    };

    for (i, &b) in r.iter().enumerate() {
        state = match state.advance(b).map_err(|err| Error::at(i, err))? {
            Left(state) => state,
            Right(digits) => return Ok(digits),
        };
    }

    unreachable!("decoder finishes on the last symbol")
}
