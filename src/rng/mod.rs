//! Random number generation module
//!
//! This module provides the hash-based deterministic random number
//! generator the crate is built around.
//!
//! The generator expands a 512-bit key and a 256-bit counter into a
//! pseudorandom stream, one SHA3-512 invocation per block. Seeded
//! construction makes the stream fully reproducible; entropy injection
//! re-keys the generator one-way for forward secrecy; counter
//! repositioning (`advance`, `jumped`) moves through the stream in O(1).

/// Design goals:
/// - Deterministic expansion from an explicit seed
/// - Unbiased bounded draws via rejection sampling
/// - Forward secrecy through one-way entropy injection
/// - O(1) stream repositioning for disjoint sub-streams
/// - Minimal and explicit API surface
mod hash_stream;

/// Hash-based seedable pseudorandom number generator.
///
/// This type is the primary entry point for generating reproducible
/// randomness with this crate.
pub use hash_stream::HashStreamRng;

pub use hash_stream::{BLOCK_BYTES, KEY_BYTES};
