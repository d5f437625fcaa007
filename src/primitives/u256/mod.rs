//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer.
//!
//! Inside this crate, `U256` is the generator's stream counter: addition
//! wraps modulo 2²⁵⁶, which is exactly the counter's overflow behavior,
//! and the big-endian representation is what gets framed into the hash
//! input.
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 256-bit unsigned integer.
pub use core::U256;
