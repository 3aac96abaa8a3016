//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need to drive decoding
//! themselves, or apply the individual rewriting rules. See [`crate::avec`]
//! for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! Decoding threads a single piece of state, a [`Digits`](digits::Digits)
//! string starting at `"0"`, through one rule per symbol:
//!
//! - `L` appends a `0`, carrying into earlier digits when the string already
//! ends in one ([`step::left_step`], [`step::carry`]).
//!
//! - `R` appends the successor of the last digit ([`step::right_step`]).
//!
//! - `=` appends a copy of the last digit ([`step::duplicate_step`]).
//!
//! Once the last symbol has been decoded, an encoding beginning with `R` has
//! its first digit corrected to `0`.
//!
//! The fold is represented by a non-copy state token, re-exported for
//! convenience as [`Decoder`]. It is constructed with the number of symbols to
//! expect, and each call to its `advance` method consumes the token, returning
//! either a successor token or the finished digits. Rules and the decoder
//! report overflowing a digit past `9` as [`step::Malformed`], and bytes
//! outside the alphabet as [`symbol::SymbolError`].

pub mod decoder;
pub mod digits;
pub mod step;
pub mod symbol;

/// Entrypoint to the finite-state machine.
pub type Decoder = decoder::Decoder;
