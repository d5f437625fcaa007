//! Conversions between `U512` and native representations
//!
//! This module defines explicit conversions between the fixed-size
//! `U512` type and byte, integer, and floating-point forms.
//!
//! These conversions are fundamental for:
//! - interpreting hash digests as integers
//! - encoding integer seeds and entropy inputs
//! - extracting bounded draw results into native integer types
//!
//! All conversions preserve the internal big-endian representation and
//! avoid implicit truncation: widening conversions are infallible
//! (`From`), narrowing conversions are fallible (`TryFrom`).

use crate::primitives::U512;

/// Converts a `U512` into a 64-byte array.
///
/// The returned array represents the value in big-endian order.
impl From<U512> for [u8; 64] {
    fn from(value: U512) -> Self {
        value.0
    }
}

/// Converts a 64-byte array into a `U512`.
///
/// The input is interpreted as a big-endian 512-bit value.
impl From<[u8; 64]> for U512 {
    fn from(value: [u8; 64]) -> Self {
        U512(value)
    }
}

/// Borrows the underlying 64-byte array of a `U512`.
impl AsRef<[u8; 64]> for U512 {
    fn as_ref(&self) -> &[u8; 64] {
        &self.0
    }
}

/// Converts a `U512` into eight 64-bit words.
///
/// The resulting array is ordered from most significant to least
/// significant word, using big-endian interpretation.
impl From<U512> for [u64; 8] {
    fn from(value: U512) -> Self {
        let mut out = [0u64; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            *o = u64::from_be_bytes(chunk.try_into().unwrap());
        }

        out
    }
}

/// Converts eight 64-bit words into a `U512`.
///
/// The input array must be ordered from most significant to least
/// significant word.
impl From<[u64; 8]> for U512 {
    fn from(value: [u64; 8]) -> Self {
        let mut out = [0u8; 64];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U512(out)
    }
}

/// Converts a `u8` into a `U512`.
impl From<u8> for U512 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 64];
        out[63] = value;

        U512(out)
    }
}

/// Converts a `u64` into a `U512`.
impl From<u64> for U512 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 64];
        out[56..].copy_from_slice(&value.to_be_bytes());

        U512(out)
    }
}

/// Converts a `u128` into a `U512`.
///
/// The value is placed in the least significant 128 bits of the 512-bit
/// integer, with the upper bits set to zero.
impl From<u128> for U512 {
    fn from(value: u128) -> Self {
        let mut out = [0u8; 64];
        out[48..].copy_from_slice(&value.to_be_bytes());

        U512(out)
    }
}

/// Attempts to convert a `U512` into a `u64`.
///
/// The conversion succeeds only if the upper 448 bits of the value are
/// zero. Otherwise, an error is returned to signal that the value does
/// not fit into a 64-bit integer.
impl TryFrom<U512> for u64 {
    type Error = ();

    fn try_from(value: U512) -> Result<Self, Self::Error> {
        if value.0[..56].iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut buf = [0u8; 8];
        buf.copy_from_slice(&value.0[56..]);

        Ok(u64::from_be_bytes(buf))
    }
}

/// Attempts to convert a `U512` into a `u128`.
///
/// The conversion succeeds only if the upper 384 bits of the value are
/// zero. Otherwise, an error is returned to signal that the value does
/// not fit into a 128-bit integer.
impl TryFrom<U512> for u128 {
    type Error = ();

    fn try_from(value: U512) -> Result<Self, Self::Error> {
        if value.0[..48].iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut buf = [0u8; 16];
        buf.copy_from_slice(&value.0[48..]);

        Ok(u128::from_be_bytes(buf))
    }
}

/// Converts a `U512` into an `f64`.
///
/// The value is folded one 64-bit word at a time, most significant
/// first: `acc = acc · 2⁶⁴ + word`. Each step rounds to the nearest
/// representable double, so the result carries the usual floating-point
/// precision of roughly 53 significant bits.
///
/// This conversion defines the float-rescaling draw, so its rounding
/// behavior is part of the generator's reproducible output and must not
/// change.
impl From<U512> for f64 {
    fn from(value: U512) -> Self {
        const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

        let words: [u64; 8] = value.into();
        let mut acc = 0.0f64;

        for word in words {
            acc = acc * TWO_POW_64 + word as f64;
        }

        acc
    }
}
