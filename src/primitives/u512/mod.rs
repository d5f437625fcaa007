//! 512-bit unsigned integer primitive
//!
//! This module defines the `U512` type, a fixed-size 512-bit unsigned
//! integer.
//!
//! `U512` is designed as a low-level value type rather than a full
//! big-integer abstraction. It provides only the minimal set of
//! functionality the generator requires, with explicit semantics and
//! predictable behavior.
//!
//! Inside this crate it carries:
//! - raw block values (one SHA3-512 digest, interpreted big-endian)
//! - keys, integer seeds, and integer entropy inputs
//! - the bounds and results of unbiased integer draws
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 512-bit unsigned integer.
///
/// This type is re-exported as the primary 512-bit integer primitive.
pub use core::U512;
