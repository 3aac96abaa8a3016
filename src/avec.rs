//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode a whole encoding at once, from a slice
//! already in memory or a line read from a reader, reporting the position of
//! the symbol at which decoding failed.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;
