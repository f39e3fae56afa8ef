//! # wide.rs
//!
//! Defines the 128-bit extension of the `Bits` capability.
//!
//! Boards with more than 64 squares need a 128-bit bitboard. On top of the
//! operations every bitboard has, the 128-bit representations can be split
//! into and built from two 64-bit halves and multiplied modulo 2^128 (magic
//! indexing). The native `u128` implementation lives here; the portable ones
//! live in `limbs` and `packed`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 02/02/2026

use crate::Bits;

pub trait Wide: Bits {
    fn from_halves(hi: u64, lo: u64) -> Self;
    fn low(self) -> u64;
    fn high(self) -> u64;

    /// Product modulo 2^128.
    fn wrapping_mul(self, rhs: Self) -> Self;
}

impl Bits for u128 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const WIDTH: u32 = 128;

    #[inline(always)]
    fn trailing_zero_count(self) -> u32 {
        self.trailing_zeros()
    }

    #[inline(always)]
    fn leading_zero_count(self) -> u32 {
        self.leading_zeros()
    }

    #[inline(always)]
    fn one_count(self) -> u32 {
        self.count_ones()
    }

    #[inline(always)]
    fn without_lsb(self) -> Self {
        self & self.wrapping_sub(1)
    }
}

impl Wide for u128 {
    #[inline(always)]
    fn from_halves(hi: u64, lo: u64) -> Self {
        (hi as u128) << 64 | lo as u128
    }

    #[inline(always)]
    fn low(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn high(self) -> u64 {
        (self >> 64) as u64
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        u128::wrapping_mul(self, rhs)
    }
}
