//! # side.rs
//!
//! Defines the two sides of a game.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 04/02/2026

use std::fmt;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Side {
    White = 0,
    Black = 1,
}

pub const SIDES: [Side; 2] = [Side::White, Side::Black];

/// Opposite side, indexed by `Side::index`.
pub const NEXT_SIDE: [Side; 2] = [Side::Black, Side::White];

impl Side {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn flip(self) -> Side {
        NEXT_SIDE[self as usize]
    }

    /// Rank direction of "forward" for this side.
    #[inline(always)]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}
