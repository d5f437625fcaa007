//! Conversions between `U256` and native representations
//!
//! All conversions preserve the internal big-endian representation and
//! avoid implicit truncation: widening conversions are infallible
//! (`From`), narrowing conversions are fallible (`TryFrom`).

use crate::primitives::U256;

/// Converts a `U256` into a 32-byte array.
///
/// The returned array represents the value in big-endian order.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts a 32-byte array into a `U256`.
///
/// The input is interpreted as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Converts a `u8` into a `U256`.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 32];
        out[31] = value;

        U256(out)
    }
}

/// Converts a `u64` into a `U256`.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());

        U256(out)
    }
}

/// Converts a `u128` into a `U256`.
///
/// The value is placed in the least significant 128 bits of the 256-bit
/// integer, with the upper bits set to zero.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        let mut out = [0u8; 32];
        out[16..].copy_from_slice(&value.to_be_bytes());

        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the value are
/// zero.
impl TryFrom<U256> for u128 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..16].iter().any(|&b| b != 0) {
            return Err(());
        }

        let mut buf = [0u8; 16];
        buf.copy_from_slice(&value.0[16..]);

        Ok(u128::from_be_bytes(buf))
    }
}
