//! State token folding an encoding into digits.

use either::Either::{self, Left, Right};
use thiserror::Error;
use tracing::{debug, trace};

use super::{
    digits::Digits,
    step::{Malformed, duplicate_step, left_step, right_step},
    symbol::{Symbol, SymbolError},
};

/// An error advancing over a symbol.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceError {
    /// The byte is not a symbol.
    #[error(transparent)]
    InvalidSymbol(#[from] SymbolError),
    /// The symbol's rule overflowed a digit.
    #[error(transparent)]
    Malformed(#[from] Malformed),
}

/// State token to decode the symbols of an encoding.
#[derive(Debug)]
pub struct Decoder {
    digits: Digits,
    symbols_remaining: usize,
    first: Option<Symbol>,
}

impl Decoder {
    /// Begin decoding an encoding of `symbols` symbols.
    ///
    /// Returns a state token, or the digits of an empty encoding.
    pub fn new(symbols: usize) -> Either<Self, Digits> {
        if symbols != 0 {
            Left(Self {
                digits: Digits::default(),
                symbols_remaining: symbols,
                first: None,
            })
        } else {
            Right(Digits::default())
        }
    }

    /// Transition to another state by decoding a single symbol.
    ///
    /// Returns a successor state token, or once the last symbol has been
    /// decoded, the finished digits.
    pub fn advance(self, r: u8) -> Result<Either<Self, Digits>, AdvanceError> {
        let symbol = Symbol::try_from(r).inspect_err(|err| debug!(%err, "Rejected symbol."))?;

        let Self {
            digits,
            symbols_remaining,
            first,
        } = self;

        let first = first.unwrap_or(symbol);

        let digits = match symbol {
            Symbol::Left => left_step(digits),
            Symbol::Right => right_step(digits),
            Symbol::Duplicate => Ok(duplicate_step(digits)),
        }
        .inspect_err(|err| debug!(%err, ?symbol, "Rejected step."))?;

        trace!(?symbol, %digits, "Advanced.");

        let symbols_remaining = symbols_remaining - 1;

        Ok(if symbols_remaining != 0 {
            Left(Self {
                digits,
                symbols_remaining,
                first: Some(first),
            })
        } else {
            Right(finish(digits, first))
        })
    }
}

/// Correct the first digit of an encoding beginning with `R`.
fn finish(mut digits: Digits, first: Symbol) -> Digits {
    if first == Symbol::Right && digits.first() != b'0' {
        digits.0[0] = b'0';
    }

    digits
}
