//! Error types
//!
//! This module defines the crate-wide error type returned by every
//! fallible generator operation.
//!
//! Each failure kind is distinct and matchable, so callers can respond
//! differently to, say, a malformed seed and an oversized range. A
//! failed operation never mutates generator state and never falls back
//! to a default value.

use thiserror::Error;

/// Errors reported by generator operations.
///
/// All variants are validation failures surfaced before any hash
/// invocation; the generator's `(key, counter)` state is unchanged
/// whenever one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A byte-string seed did not have the exact key width.
    #[error("seed must be exactly {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    /// A byte-string entropy input did not have the exact key width.
    #[error("entropy must be exactly {expected} bytes, got {actual}")]
    InvalidEntropyLength { expected: usize, actual: usize },

    /// A requested output length was zero.
    #[error("requested byte length must be positive")]
    InvalidLength,

    /// The lower bound was not strictly less than the upper bound,
    /// or a float bound was not finite.
    #[error("lower bound must be strictly less than upper bound")]
    InvalidBounds,

    /// A requested draw count was zero.
    #[error("count must be positive")]
    InvalidCount,

    /// The requested range exceeds the value space of one block.
    #[error("requested range exceeds the block value space")]
    RangeTooLarge,

    /// A requested step count was zero.
    #[error("step count must be positive")]
    InvalidStepCount,

    /// A requested step count exceeded the maximum single advance.
    #[error("step count exceeds the maximum advance of 2^128")]
    StepCountTooLarge,
}
