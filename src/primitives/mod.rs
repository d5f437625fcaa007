//! Primitive types
//!
//! This module defines the fixed-size integer primitives the generator
//! is built on.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks
//! with well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate a full
//! big-integer library: only the operations the generator and its tests
//! exercise are provided.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit unsigned integer (the stream counter)
//! - `U512`: a fixed-size 512-bit unsigned integer (the key, seed, and
//!   block value space)

mod u256;
mod u512;

/// Fixed-size unsigned integer primitives.
///
/// These types are re-exported as the primary primitive integers used
/// across the crate.
pub use u256::U256;
pub use u512::U512;
