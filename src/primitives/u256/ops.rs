//! Arithmetic operations for `U256`
//!
//! Only the operations the crate exercises are implemented. Addition and
//! subtraction wrap modulo 2²⁵⁶; wrapping addition is the counter
//! arithmetic used by block generation and stream repositioning.

use crate::primitives::u256::U256;
use std::ops::{Add, Sub};

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        U256(out)
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];
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

        U256(out)
    }
}
