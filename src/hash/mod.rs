//! Hash primitive seam
//!
//! The generator treats its hash function as an external collaborator:
//! this module is the single point through which SHA3-512 is invoked,
//! and the rest of the crate only sees a fixed-width digest over an
//! arbitrary byte string.
//!
//! The implementation is provided by the RustCrypto `sha3` crate; this
//! crate deliberately does not implement the permutation itself.

use sha3::{Digest, Sha3_512};

/// Computes the SHA3-512 digest of the given input.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// The 512-bit digest as 64 bytes (`[u8; 64]`).
pub(crate) fn sha3_512(input: &[u8]) -> [u8; 64] {
    let mut hasher = Sha3_512::new();
    hasher.update(input);

    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());

    out
}
