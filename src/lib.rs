//! Hash-based deterministic random number generation
//!
//! This crate provides a seedable pseudorandom number generator built on a
//! cryptographic hash function used as an expansion primitive.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! generator is a small, explicit state machine (a 512-bit key and a
//! 256-bit counter) whose every output is one hash invocation over a
//! fixed, domain-separated framing. Identical seeds produce identical
//! streams, and the stream position can be moved in O(1), which makes the
//! generator suitable for simulations, property-based testing, and
//! distributed workers that each own a disjoint sub-stream of a shared
//! seed.
//!
//! # Module overview
//!
//! - `error`
//!   The crate-wide error type. Every fallible operation reports a
//!   distinct, matchable failure kind, and a failed call never mutates
//!   generator state.
//!
//! - `primitives`
//!   Fixed-size, big-endian unsigned integers (`U256`, `U512`). These
//!   carry the counter and the block value space with explicit,
//!   predictable semantics and no heap allocation.
//!
//! - `rng`
//!   The generator itself. Deterministic expansion from a 512-bit seed,
//!   unbiased bounded integers via rejection sampling, float draws,
//!   one-way entropy injection for forward secrecy, and stream
//!   repositioning (`advance`, `jumped`, `duplicate`).
//!
//! # Design goals
//!
//! - Deterministic, reproducible output from explicit seeds
//! - Minimal and explicit API surface
//! - Stable, well-defined semantics
//! - No heap allocation on the block-generation path
//!
//! The hash primitive (SHA3-512) and the operating-system entropy source
//! are external collaborators; this crate only defines how they are
//! invoked and with what framing.

mod hash;
mod os;

pub mod error;
pub mod primitives;
pub mod rng;
