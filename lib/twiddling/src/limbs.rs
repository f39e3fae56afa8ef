//! # limbs.rs
//!
//! Implements a 128-bit bitboard as two explicit 64-bit limbs.
//!
//! This is the portable representation for targets without a usable native
//! 128-bit integer. Shifts propagate bits across the limb boundary by hand
//! and multiplication is built from 64-bit operations only: the low limb of
//! the product comes from a shift-and-add loop over the set bits of the
//! right operand's low limb, the high limb adds the two cross products and
//! the carry out of that loop. Every result is bit-identical to `u128`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 03/02/2026

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not,
    Shl, Shr,
};

use crate::{Bits, Wide};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Limbs128 {
    pub lo: u64,
    pub hi: u64,
}

impl Limbs128 {
    pub const fn new(hi: u64, lo: u64) -> Self {
        Limbs128 { lo, hi }
    }
}

macro_rules! impl_limbwise_ops {
    ($($trait:ident::$fn:ident),*) => {
        $(impl $trait for Limbs128 {
            type Output = Self;

            #[inline(always)]
            fn $fn(self, other: Self) -> Self::Output {
                Limbs128 {
                    lo: $trait::$fn(self.lo, other.lo),
                    hi: $trait::$fn(self.hi, other.hi),
                }
            }
        })*
    };
}

impl_limbwise_ops! {
    BitAnd::bitand,
    BitOr::bitor,
    BitXor::bitxor
}

macro_rules! impl_limbwise_assign_ops {
    ($($trait:ident::$fn:ident),*) => {
        $(impl $trait for Limbs128 {
            #[inline(always)]
            fn $fn(&mut self, other: Self) {
                $trait::$fn(&mut self.lo, other.lo);
                $trait::$fn(&mut self.hi, other.hi);
            }
        })*
    };
}

impl_limbwise_assign_ops! {
    BitAndAssign::bitand_assign,
    BitOrAssign::bitor_assign,
    BitXorAssign::bitxor_assign
}

impl Not for Limbs128 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Limbs128 { lo: !self.lo, hi: !self.hi }
    }
}

impl Shl<u32> for Limbs128 {
    type Output = Self;

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        #[cfg(debug_assertions)]
        {
            assert!(n < 128, "Shift left by {n} overflows 128 bits.");
        }

        match n {
            0 => self,
            1..=63 => Limbs128 {
                lo: self.lo << n,
                hi: self.hi << n | self.lo >> (64 - n),
            },
            _ => Limbs128 { lo: 0, hi: self.lo << (n & 63) },
        }
    }
}

impl Shr<u32> for Limbs128 {
    type Output = Self;

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        #[cfg(debug_assertions)]
        {
            assert!(n < 128, "Shift right by {n} overflows 128 bits.");
        }

        match n {
            0 => self,
            1..=63 => Limbs128 {
                lo: self.lo >> n | self.hi << (64 - n),
                hi: self.hi >> n,
            },
            _ => Limbs128 { lo: self.hi >> (n & 63), hi: 0 },
        }
    }
}

impl Mul for Limbs128 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut lo = 0u64;
        let mut hi = 0u64;
        let mut bits = rhs.lo;

        while bits != 0 {                                                       /* self.lo * rhs.lo, one term per bit */
            let i = bits.trailing_zeros();
            let (add_lo, add_hi) = if i == 0 {
                (self.lo, 0)
            } else {
                (self.lo << i, self.lo >> (64 - i))
            };

            let (sum, carry) = lo.overflowing_add(add_lo);
            lo = sum;
            hi = hi.wrapping_add(add_hi).wrapping_add(carry as u64);
            bits &= bits - 1;
        }

        hi = hi
            .wrapping_add(self.lo.wrapping_mul(rhs.hi))
            .wrapping_add(self.hi.wrapping_mul(rhs.lo));

        Limbs128 { lo, hi }
    }
}

impl Bits for Limbs128 {
    const ZERO: Self = Limbs128 { lo: 0, hi: 0 };
    const ONE: Self = Limbs128 { lo: 1, hi: 0 };
    const WIDTH: u32 = 128;

    #[inline(always)]
    fn trailing_zero_count(self) -> u32 {
        if self.lo != 0 {
            self.lo.trailing_zeros()
        } else {
            64 + self.hi.trailing_zeros()
        }
    }

    #[inline(always)]
    fn leading_zero_count(self) -> u32 {
        if self.hi != 0 {
            self.hi.leading_zeros()
        } else {
            64 + self.lo.leading_zeros()
        }
    }

    #[inline(always)]
    fn one_count(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    #[inline(always)]
    fn without_lsb(self) -> Self {
        if self.lo != 0 {
            Limbs128 { lo: self.lo & (self.lo - 1), hi: self.hi }
        } else {
            Limbs128 { lo: 0, hi: self.hi & self.hi.wrapping_sub(1) }
        }
    }
}

impl Wide for Limbs128 {
    #[inline(always)]
    fn from_halves(hi: u64, lo: u64) -> Self {
        Limbs128 { lo, hi }
    }

    #[inline(always)]
    fn low(self) -> u64 {
        self.lo
    }

    #[inline(always)]
    fn high(self) -> u64 {
        self.hi
    }

    #[inline(always)]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}
