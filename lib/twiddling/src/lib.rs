//! # lib.rs
//!
//! Provides portable fixed-width bit operations for bitboards.
//!
//! This file contains the `Bits` capability shared by every bitboard
//! representation, plus the free functions the rest of the workspace calls:
//! bit scans (LSB, MSB), population count, single-bit tests and updates, and
//! an iterator over set squares. Boards of up to 64 squares may use `u64`;
//! larger boards use the 128-bit `Bitboard` chosen at build time, which is
//! one of the three interchangeable representations in `wide`, `limbs` and
//! `packed`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 02/02/2026

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl,
    Shr,
};

pub mod limbs;
pub mod packed;
pub mod wide;

pub use limbs::Limbs128;
pub use packed::Packed128;
pub use wide::Wide;

#[cfg(feature = "packed")]
pub type Bitboard = Packed128;

#[cfg(all(feature = "limbs", not(feature = "packed")))]
pub type Bitboard = Limbs128;

#[cfg(not(any(feature = "limbs", feature = "packed")))]
pub type Bitboard = u128;

/// A fixed-width unsigned integer used as a set of squares.
///
/// Bit `i` is set iff square `i` belongs to the set. Implementors only supply
/// the raw counting primitives; the checked operations live in the free
/// functions of this crate so every representation shares one precondition.
pub trait Bits:
    Copy
    + Eq
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const WIDTH: u32;

    fn trailing_zero_count(self) -> u32;
    fn leading_zero_count(self) -> u32;
    fn one_count(self) -> u32;

    /// `x & (x - 1)`
    fn without_lsb(self) -> Self;
}

impl Bits for u64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const WIDTH: u32 = 64;

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

/// Index of the lowest set bit. `x` must not be zero.
#[inline(always)]
pub fn lsb<B: Bits>(x: B) -> u32 {
    #[cfg(debug_assertions)]
    {
        assert!(x != B::ZERO, "Bit scan of an empty bitboard.");
    }

    x.trailing_zero_count()
}

/// Same as `lsb`; kept under the name move generators loop with.
#[inline(always)]
pub fn bitscan<B: Bits>(x: B) -> u32 {
    lsb(x)
}

/// Index of the highest set bit. `x` must not be zero.
#[inline(always)]
pub fn msb<B: Bits>(x: B) -> u32 {
    #[cfg(debug_assertions)]
    {
        assert!(x != B::ZERO, "Reverse bit scan of an empty bitboard.");
    }

    B::WIDTH - 1 - x.leading_zero_count()
}

#[inline(always)]
pub fn popcount<B: Bits>(x: B) -> u32 {
    x.one_count()
}

#[inline(always)]
pub fn onebit<B: Bits>(x: B) -> bool {
    x != B::ZERO && x.without_lsb() == B::ZERO
}

#[inline(always)]
pub fn is_zero<B: Bits>(x: B) -> bool {
    x == B::ZERO
}

#[inline(always)]
pub fn square_bit<B: Bits>(i: u32) -> B {
    #[cfg(debug_assertions)]
    {
        assert!(i < B::WIDTH, "Bit {i} out of range for width {}.", B::WIDTH);
    }

    B::ONE << i
}

#[inline(always)]
pub fn get_bit<B: Bits>(x: B, i: u32) -> bool {
    (x & square_bit::<B>(i)) != B::ZERO
}

#[inline(always)]
pub fn set_bit<B: Bits>(x: &mut B, i: u32) {
    *x |= square_bit::<B>(i);
}

#[inline(always)]
pub fn clear_bit<B: Bits>(x: &mut B, i: u32) {
    *x &= !square_bit::<B>(i);
}

/// Iterates over the indices of the set bits, lowest first.
pub fn squares<B: Bits>(x: B) -> Squares<B> {
    Squares(x)
}

#[derive(Debug, Clone, Copy)]
pub struct Squares<B: Bits>(B);

impl<B: Bits> Iterator for Squares<B> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == B::ZERO {
            return None;
        }

        let square = self.0.trailing_zero_count();
        self.0 = self.0.without_lsb();
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.one_count() as usize;
        (n, Some(n))
    }
}

impl<B: Bits> ExactSizeIterator for Squares<B> {}
