//! # packed.rs
//!
//! Implements a 128-bit bitboard as a packed array of two 64-bit words.
//!
//! The representation is `bnum`'s `U128`, a `[u64; 2]` digit array behind
//! an integer interface. It is the fallback for targets that have neither a
//! native 128-bit type nor want the explicit limb arithmetic of `limbs`, and
//! it must agree bit for bit with both.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 03/02/2026

use bnum::types::U128;

use crate::{Bits, Wide};

pub type Packed128 = U128;

impl Bits for U128 {
    const ZERO: Self = U128::ZERO;
    const ONE: Self = U128::ONE;
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
        self & self.wrapping_sub(U128::ONE)
    }
}

impl Wide for U128 {
    #[inline(always)]
    fn from_halves(hi: u64, lo: u64) -> Self {
        U128::from_digits([lo, hi])
    }

    #[inline(always)]
    fn low(self) -> u64 {
        self.digits()[0]
    }

    #[inline(always)]
    fn high(self) -> u64 {
        self.digits()[1]
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        U128::wrapping_mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_little_endian() {
        let x = <U128 as Wide>::from_halves(7, 9);
        assert_eq!(x.low(), 9);
        assert_eq!(x.high(), 7);
        assert_eq!(x >> 64u32, U128::from(7u64));
    }

    #[test]
    fn lowest_bit_drops_across_words() {
        let x = <U128 as Wide>::from_halves(0b110, 0);
        assert_eq!(x.without_lsb(), <U128 as Wide>::from_halves(0b100, 0));
        assert_eq!(x.trailing_zero_count(), 65);
    }
}
