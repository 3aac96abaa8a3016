//! Per-symbol rewriting rules.
//!
//! Each rule consumes a digit string and returns it grown by exactly one
//! digit, or fails if growing it would overflow a digit past `9`. Since the
//! string is taken by value, a failed rule never hands back a partially
//! rewritten string.

use thiserror::Error;
use tracing::trace;

use super::digits::Digits;

/// A digit overflow while applying a rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A nine is present, so a left step cannot carry.
    #[error("Found a nine at position {0}, blocking a left step.")]
    BlockedLeft(usize),
    /// Carry propagation reached a nine.
    #[error("Carry propagation overflowed at position {0}.")]
    CarryOverflow(usize),
    /// The last digit is already a nine.
    #[error("Last digit is already a nine.")]
    RightOverflow,
}

/// Apply the rule for `L`.
///
/// Appends a `0` unless the string already ends in one, in which case the
/// string is grown by [`carry`]. Fails if the string contains a nine anywhere
/// and would need to carry.
pub fn left_step(mut digits: Digits) -> Result<Digits, Malformed> {
    if digits.last() != b'0' {
        digits.0.push(b'0');
        return Ok(digits);
    }

    if let Some(position) = digits.0.iter().position(|&d| d == b'9') {
        Err(Malformed::BlockedLeft(position))?;
    }

    carry(digits)
}

/// Increment digits right to left, then append a `0`.
///
/// Scanning from the last digit, each digit is incremented in place. The scan
/// stops at the first digit, or once an incremented digit is strictly less
/// than its left neighbour, which has not been incremented yet. Fails if the
/// scan reaches a nine.
pub fn carry(mut digits: Digits) -> Result<Digits, Malformed> {
    let d = &mut digits.0;

    for i in (0..d.len()).rev() {
        if d[i] == b'9' {
            Err(Malformed::CarryOverflow(i))?;
        }

        d[i] += 1;

        if i == 0 || d[i] < d[i - 1] {
            trace!(from = i, "Carry stopped.");
            break;
        }
    }

    d.push(b'0');

    Ok(digits)
}

/// Apply the rule for `R`, appending the successor of the last digit.
pub fn right_step(mut digits: Digits) -> Result<Digits, Malformed> {
    let last = digits.last();

    if last == b'9' {
        Err(Malformed::RightOverflow)?;
    }

    digits.0.push(last + 1);

    Ok(digits)
}

/// Apply the rule for `=`, appending a copy of the last digit.
pub fn duplicate_step(mut digits: Digits) -> Digits {
    let last = digits.last();
    digits.0.push(last);
    digits
}
