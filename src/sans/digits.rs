//! The digit string threaded through decoding.

use alloc::{string::String, vec, vec::Vec};
use core::fmt::{self, Write};

use thiserror::Error;

/// An error constructing a digit string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DigitsError {
    /// No digits were supplied.
    #[error("Digit string is empty.")]
    Empty,
    /// A character outside `0` to `9` was supplied.
    #[error("Found {found:?} at position {position}, expected a digit.")]
    NotADigit { position: usize, found: char },
}

/// A non-empty string of ASCII decimal digits.
///
/// Every decode starts from `"0"` (the [`Default`]) and grows this string by
/// exactly one digit per symbol. Digits are only ever rewritten in place by
/// carry propagation and the final correction of the first digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(pub(super) Vec<u8>);

impl Digits {
    /// Build a digit string from its decimal representation.
    pub fn new(s: &str) -> Result<Self, DigitsError> {
        if s.is_empty() {
            Err(DigitsError::Empty)?;
        }

        if let Some((position, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            Err(DigitsError::NotADigit { position, found })?;
        }

        Ok(Self(s.as_bytes().to_vec()))
    }

    /// The digits as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The number of digits, never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(super) fn first(&self) -> u8 {
        self.0[0]
    }

    pub(super) fn last(&self) -> u8 {
        self.0[self.0.len() - 1]
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self(vec![b'0'])
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&d| f.write_char(d as char))
    }
}

impl From<Digits> for String {
    fn from(digits: Digits) -> Self {
        digits.0.into_iter().map(char::from).collect()
    }
}

impl PartialEq<str> for Digits {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Digits {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}
