//! # piece_flags.rs
//!
//! Defines the boolean properties of a piece type and sets of piece types.
//!
//! `PieceFlags` packs the per-piece rule properties into one 32-bit word,
//! one bit per property:
//!
//! - Bit 0: royal, losing all royals loses the game
//! - Bit 1: may castle
//! - Bit 2: sets the en-passant square on a double step
//! - Bit 3: may capture en passant
//! - Bit 4: may not be dropped to give check
//! - Bit 5: may not be dropped on a file already holding a friendly one
//! - Bit 6: may not be dropped where it has no further moves
//! - Bit 7: may not be dropped to give mate
//! - Bit 8: cannot deliver mate alone
//! - Bit 9: colour-bound
//! - Bit 10: earns a bonus when two are on the board
//! - Bit 11: may not return to a square it left
//! - Bit 12: may never deliver mate
//! - Bit 13: a mate only counts if this piece gave check first (shak)
//! - Bit 14: wins by reaching the capture-the-flag zone
//! - Bit 15: takes on the movement of the piece it captures
//! - Bit 16: may not be captured by a piece that was just captured upon
//! - Bit 17: loses its value when attacked and undefended
//! - Bit 18: iron, may never be captured
//! - Bit 19: promotes only when it is the last of its kind
//!
//! `PieceBit` is a 32-bit set over piece-type indices.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 06/02/2026

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::constants::MAX_PIECE_TYPES;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct PieceFlags(pub u32);

impl PieceFlags {
    pub const NONE: PieceFlags = PieceFlags(0);
    pub const ROYAL: PieceFlags = PieceFlags(1 << 0);
    pub const CASTLE: PieceFlags = PieceFlags(1 << 1);
    pub const SET_EP: PieceFlags = PieceFlags(1 << 2);
    pub const TAKE_EP: PieceFlags = PieceFlags(1 << 3);
    pub const DROP_NO_CHECK: PieceFlags = PieceFlags(1 << 4);
    pub const DROP_ONE_FILE: PieceFlags = PieceFlags(1 << 5);
    pub const DROP_DEAD: PieceFlags = PieceFlags(1 << 6);
    pub const DROP_NO_MATE: PieceFlags = PieceFlags(1 << 7);
    pub const CANNOT_MATE_ALONE: PieceFlags = PieceFlags(1 << 8);
    pub const COLOUR_BOUND: PieceFlags = PieceFlags(1 << 9);
    pub const PAIR_BONUS: PieceFlags = PieceFlags(1 << 10);
    pub const NO_RETURN: PieceFlags = PieceFlags(1 << 11);
    pub const NO_MATE: PieceFlags = PieceFlags(1 << 12);
    pub const MUST_CHECK_TO_MATE: PieceFlags = PieceFlags(1 << 13);
    pub const CAPTURE_THE_FLAG: PieceFlags = PieceFlags(1 << 14);
    pub const ASSIMILATE: PieceFlags = PieceFlags(1 << 15);
    pub const NO_RECAPTURE: PieceFlags = PieceFlags(1 << 16);
    pub const ENDANGERED: PieceFlags = PieceFlags(1 << 17);
    pub const IRON: PieceFlags = PieceFlags(1 << 18);
    pub const PROMOTE_IF_LAST: PieceFlags = PieceFlags(1 << 19);

    pub const DROP_RESTRICTIONS: PieceFlags = PieceFlags(0b1111 << 4);

    #[inline(always)]
    pub const fn contains(self, other: PieceFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub const fn intersects(self, other: PieceFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for PieceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        PieceFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PieceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct PieceBit(pub u32);

impl PieceBit {
    pub const EMPTY: PieceBit = PieceBit(0);

    #[inline(always)]
    pub fn of(piece: usize) -> PieceBit {
        #[cfg(debug_assertions)]
        {
            assert!(
                piece < MAX_PIECE_TYPES,
                "Piece index {piece} exceeds {MAX_PIECE_TYPES} types."
            );
        }

        PieceBit(1 << piece)
    }

    #[inline(always)]
    pub fn contains(self, piece: usize) -> bool {
        piece < MAX_PIECE_TYPES && self.0 & (1 << piece) != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, piece: usize) {
        *self |= PieceBit::of(piece);
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        twiddling::squares(self.0 as u64).map(|i| i as usize)
    }
}

impl BitOr for PieceBit {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        PieceBit(self.0 | rhs.0)
    }
}

impl BitOrAssign for PieceBit {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PieceBit {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        PieceBit(self.0 & rhs.0)
    }
}

impl FromIterator<usize> for PieceBit {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = PieceBit::EMPTY;
        for piece in iter {
            set.insert(piece);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_distinct_bits() {
        let all = [
            PieceFlags::ROYAL,
            PieceFlags::CASTLE,
            PieceFlags::SET_EP,
            PieceFlags::TAKE_EP,
            PieceFlags::DROP_NO_CHECK,
            PieceFlags::DROP_ONE_FILE,
            PieceFlags::DROP_DEAD,
            PieceFlags::DROP_NO_MATE,
            PieceFlags::CANNOT_MATE_ALONE,
            PieceFlags::COLOUR_BOUND,
            PieceFlags::PAIR_BONUS,
            PieceFlags::NO_RETURN,
            PieceFlags::NO_MATE,
            PieceFlags::MUST_CHECK_TO_MATE,
            PieceFlags::CAPTURE_THE_FLAG,
            PieceFlags::ASSIMILATE,
            PieceFlags::NO_RECAPTURE,
            PieceFlags::ENDANGERED,
            PieceFlags::IRON,
            PieceFlags::PROMOTE_IF_LAST,
        ];

        let union = all.iter().fold(PieceFlags::NONE, |acc, &f| acc | f);
        assert_eq!(union.0.count_ones(), all.len() as u32);
        assert!(PieceFlags::DROP_RESTRICTIONS.contains(PieceFlags::DROP_DEAD));
        assert!(!PieceFlags::DROP_RESTRICTIONS.intersects(PieceFlags::ROYAL));
    }

    #[test]
    fn piece_bit_behaves_as_a_set() {
        let set: PieceBit = [0, 3, 31].into_iter().collect();

        assert!(set.contains(0) && set.contains(3) && set.contains(31));
        assert!(!set.contains(1));
        assert!(!set.contains(40));
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 31]);
        assert_eq!((set & PieceBit::of(3)), PieceBit::of(3));
    }
}
