//! Finite field arithmetic over GF(256).
//!
//! This module implements the field every share lives in. Elements are
//! bytes, addition is XOR and multiplication is carry-less polynomial
//! multiplication reduced modulo [`REDUCTION_POLYNOMIAL`].
//!
//! ## Timing
//!
//! Every operation runs the same instruction sequence for every operand:
//!
//! - multiplication always performs eight masked shift-and-add rounds
//! - inversion is a fixed addition chain of multiplications
//! - there are no lookup tables, so no memory access depends on a value
//!
//! Share y-values and key bytes only ever pass through these operations.
//!
//! [`REDUCTION_POLYNOMIAL`]: crate::constants::REDUCTION_POLYNOMIAL

// Field addition is XOR and division is multiplication by the inverse.
#![allow(clippy::suspicious_arithmetic_impl)]

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use subtle::{Choice, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

use crate::constants::REDUCTION;

/// An element of GF(256).
///
/// Equality is deliberately not derived: comparisons go through
/// [`ConstantTimeEq`] so that no caller accidentally branches on a
/// secret-dependent `==`.
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Gf256(u8);

impl Gf256 {
    /// The additive identity.
    pub const ZERO: Self = Gf256(0);

    /// The multiplicative identity.
    pub const ONE: Self = Gf256(1);

    /// Wraps a raw byte. Every byte is a valid field element.
    #[inline]
    pub const fn new(n: u8) -> Self {
        Gf256(n)
    }

    /// Returns the byte representation of the element.
    #[inline]
    pub const fn into_u8(self) -> u8 {
        self.0
    }

    /// Computes the multiplicative inverse.
    ///
    /// Uses Fermat's little theorem, `a⁻¹ = a²⁵⁴`, evaluated through a
    /// fixed addition chain so the cost does not depend on `self`.
    ///
    /// Zero has no inverse. Since `0²⁵⁴ = 0`, this returns zero for zero
    /// instead of panicking: interpolation over malformed shares must still
    /// produce *some* output rather than abort.
    #[rustfmt::skip]
    pub fn inverse(self) -> Self {
        let x2 = self * self;            // a^2
        let x4 = x2 * x2;                // a^4
        let x8 = x4 * x4;                // a^8
        let x9 = x8 * self;              // a^9
        let x16 = x8 * x8;               // a^16
        let x25 = x16 * x9;              // a^25
        let x50 = x25 * x25;             // a^50
        let x100 = x50 * x50;            // a^100
        let x200 = x100 * x100;          // a^200
        x200 * x50 * x4                  // a^254
    }
}

impl DefaultIsZeroes for Gf256 {}

impl From<u8> for Gf256 {
    fn from(n: u8) -> Self {
        Gf256(n)
    }
}

impl From<Gf256> for u8 {
    fn from(e: Gf256) -> Self {
        e.0
    }
}

impl fmt::Debug for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf256({:#04x})", self.0)
    }
}

impl fmt::LowerHex for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl ConstantTimeEq for Gf256 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// Field addition, bitwise XOR.
impl Add for Gf256 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Gf256(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf256 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// Every element is its own additive inverse, so subtraction is addition.
impl Sub for Gf256 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Gf256(self.0 ^ rhs.0)
    }
}

/// Field multiplication.
///
/// Long multiplication of two degree-7 polynomials over GF(2). For each bit
/// of `rhs`, the current shifted copy of `self` is added to the product
/// under a mask instead of a branch. After each shift the overflowing x⁸
/// term is folded back with the low byte of the reduction polynomial, again
/// under a mask.
impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut a = self.0;
        let mut b = rhs.0;
        let mut product = 0u8;

        for _ in 0..8 {
            // 0xff when the low bit of b is set, 0x00 otherwise
            product ^= 0u8.wrapping_sub(b & 1) & a;
            b >>= 1;

            let carry = 0u8.wrapping_sub(a >> 7);
            a = (a << 1) ^ (carry & REDUCTION);
        }

        Gf256(product)
    }
}

impl MulAssign for Gf256 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Field division, multiplication by the inverse of `rhs`.
///
/// Dividing by zero yields zero, see [`Gf256::inverse`].
impl Div for Gf256 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}
