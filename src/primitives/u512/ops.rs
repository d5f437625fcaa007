//! Arithmetic operations for `U512`
//!
//! This module implements a minimal set of arithmetic operator traits
//! for the `U512` type.
//!
//! The goal is **not** to provide a full big-integer library, but to
//! supply only the operations the generator requires:
//! - wrapping addition and subtraction (offsetting draws into a range)
//! - division and remainder (the rejection-sampling modulus)
//! - a left shift, used internally by the division algorithm
//!
//! All operations are implemented explicitly on fixed-size arrays, with:
//! - no heap allocation
//! - predictable behavior
//! - wrapping semantics where appropriate
//!
//! The internal representation is big-endian.

use crate::primitives::u512::U512;
use std::ops::{Add, Div, Rem, Shl, Sub};

/// Logical left shift (`<<`) by a 512-bit value.
///
/// Only the lowest 16 bits of the shift value are considered.
/// Shifts greater than or equal to 512 bits yield zero.
impl Shl<U512> for U512 {
    type Output = U512;

    fn shl(self, rhs: U512) -> Self::Output {
        let shift = (((rhs.0[62] as u32) << 8) | rhs.0[63] as u32) as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 512 {
            return U512([0; 64]);
        }

        let byte_shift = shift / 8;
        let bit_shift = (shift % 8) as u8;

        let mut tmp = [0u8; 64];
        tmp[..(64 - byte_shift)].copy_from_slice(&self.0[byte_shift..]);

        if bit_shift == 0 {
            return U512(tmp);
        }

        let mut out = [0u8; 64];
        let mut carry = 0u8;

        for i in 0..64 {
            let val = tmp[i];
            out[i] = (val << bit_shift) | carry;
            carry = val >> (8 - bit_shift);
        }

        U512(out)
    }
}

/// Addition modulo 2⁵¹².
impl Add for U512 {
    type Output = U512;

    fn add(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        U512(out)
    }
}

/// Subtraction modulo 2⁵¹².
impl Sub for U512 {
    type Output = U512;

    fn sub(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];
        let mut borrow = 0i16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let lhs = a as i16;
            let sub = b as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        U512(out)
    }
}

/// Computes the quotient and remainder in one pass.
///
/// This is a classic shift-and-subtract division: bits of the dividend
/// are shifted into the remainder from the most significant end, and the
/// divisor is subtracted whenever the remainder grows at least as large.
fn div_rem(lhs: U512, rhs: U512) -> (U512, U512) {
    assert!(rhs != U512::ZERO, "division by zero");

    if lhs < rhs {
        return (U512::ZERO, lhs);
    }

    let mut quotient = [0u8; 64];
    let mut remainder = U512::ZERO;

    for bit in 0..512 {
        let byte_idx = bit >> 3;
        let bit_in_byte = 7 - (bit & 7);

        let incoming = (lhs.0[byte_idx] >> bit_in_byte) & 1;

        remainder = remainder << U512::from(1u8);

        let mut rem_bytes: [u8; 64] = remainder.into();
        rem_bytes[63] = (rem_bytes[63] & 0xFE) | incoming;
        remainder = U512(rem_bytes);

        if remainder >= rhs {
            remainder = remainder - rhs;
            quotient[byte_idx] |= 1 << bit_in_byte;
        }
    }

    (U512(quotient), remainder)
}

/// Integer division (`/`) producing the quotient.
impl Div<U512> for U512 {
    type Output = U512;

    fn div(self, rhs: U512) -> Self::Output {
        div_rem(self, rhs).0
    }
}

/// Integer remainder (`%`).
///
/// This is the modulus operation of rejection sampling: mapping a raw
/// block value onto a bounded range.
impl Rem<U512> for U512 {
    type Output = U512;

    fn rem(self, rhs: U512) -> Self::Output {
        div_rem(self, rhs).1
    }
}
