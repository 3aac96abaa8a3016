//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::BufRead, vec::Vec};

use thiserror::Error;
use tracing::debug;

use crate::sans::digits::Digits;

use super::slice;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An error decoding the line read.
    #[error(transparent)]
    Decode(#[from] slice::Error),
}

/// Decode the digits of an encoding read as a single line from a reader.
///
/// Reads up to and including the first newline, or to the end of the reader.
/// The line ending (`\n`, `\r\n`, or a `\r` at the end of the reader) is
/// dropped and the remaining symbols are upper-cased before decoding, so `l`,
/// `r` and `=` are accepted as well.
///
/// This method is also re-exported as `lreq::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl BufRead) -> Result<Digits, Error> {
    let mut line = Vec::new();
    let n = r.read_until(b'\n', &mut line)?;

    debug!(bytes = n, "Read encoding.");

    if line.last() == Some(&b'\n') {
        line.pop();
    }

    // A final line may end in a bare `\r`.
    if line.last() == Some(&b'\r') {
        line.pop();
    }

    line.make_ascii_uppercase();

    Ok(slice::decode(&line)?)
}
