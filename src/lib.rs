#![no_std]

//! A decoder for digit strings encoded over the `L`, `R` and `=` alphabet.
//!
//! An encoding is decoded by starting from the digit string `"0"` and growing
//! it by one digit per symbol. `L` appends a smaller digit, carrying into
//! earlier digits where needed, `R` appends a larger digit, and `=` repeats
//! the last digit. Decoding fails if a digit would need to grow past `9`.
//!
//! Most users should begin with [`decode`], or the functions in the [`avec`]
//! module. To drive decoding symbol by symbol, or to apply the individual
//! rewriting rules, see the [`sans`] module.
//!
//! ```
//! assert_eq!(lreq::decode("LLRR=").unwrap(), "210122");
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).
//! - `cli`: build the `lreq` command-line tool (default).

extern crate alloc;

pub mod avec;
pub mod sans;

pub use avec::slice::Error;
pub use sans::digits::Digits;

/// Decode the digits of an encoding.
///
/// Symbols are case-sensitive. An empty encoding decodes to `"0"`.
pub fn decode(encoding: &str) -> Result<Digits, Error> {
    avec::decode_slice(encoding.as_bytes())
}
