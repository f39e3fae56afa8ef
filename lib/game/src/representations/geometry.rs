//! # geometry.rs
//!
//! Defines the board geometry and square arithmetic.
//!
//! This file contains the `BoardGeometry` struct, which maps (file, rank)
//! coordinates to bit indices of a bitboard: square = rank * files + file,
//! with a1 at bit 0. It provides bounds-checked offsetting used when the
//! leaper tables and the empty-board move counts are built, and the mask of
//! all squares that exist on the board.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 18/02/2026

use twiddling::{set_bit, Bits};

use crate::constants::MAX_SQUARES;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct BoardGeometry {
    pub files: u8,
    pub ranks: u8,
}

impl BoardGeometry {
    pub fn new(files: u8, ranks: u8) -> BoardGeometry {
        #[cfg(debug_assertions)]
        {
            let size = files as usize * ranks as usize;
            assert!(
                size <= MAX_SQUARES,
                "Board of {files}x{ranks} exceeds {MAX_SQUARES} squares."
            );
        }

        BoardGeometry { files, ranks }
    }

    #[inline(always)]
    pub fn size(&self) -> u32 {
        self.files as u32 * self.ranks as u32
    }

    #[inline(always)]
    pub fn square(&self, file: u8, rank: u8) -> u32 {
        #[cfg(debug_assertions)]
        {
            assert!(
                file < self.files && rank < self.ranks,
                "Square ({file}, {rank}) is off the {}x{} board.",
                self.files,
                self.ranks
            );
        }

        rank as u32 * self.files as u32 + file as u32
    }

    #[inline(always)]
    pub fn file_of(&self, square: u32) -> u8 {
        (square % self.files as u32) as u8
    }

    #[inline(always)]
    pub fn rank_of(&self, square: u32) -> u8 {
        (square / self.files as u32) as u8
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    pub fn offset(&self, square: u32, df: i8, dr: i8) -> Option<u32> {
        let file = self.file_of(square) as i16 + df as i16;
        let rank = self.rank_of(square) as i16 + dr as i16;

        if file < 0
            || rank < 0
            || file >= self.files as i16
            || rank >= self.ranks as i16
        {
            return None;
        }

        Some(self.square(file as u8, rank as u8))
    }

    /// Squares reached from `square` stepping `(df, dr)` at most
    /// `limit` times (0 = until the edge).
    pub fn walk<B: Bits>(&self, square: u32, df: i8, dr: i8, limit: u8) -> B {
        let mut targets = B::ZERO;
        if (df, dr) == (0, 0) {
            return targets;
        }

        let mut current = square;
        let mut taken = 0u8;

        while let Some(next) = self.offset(current, df, dr) {
            set_bit(&mut targets, next);
            current = next;
            taken += 1;

            if limit != 0 && taken >= limit {
                break;
            }
        }

        targets
    }

    pub fn board_mask<B: Bits>(&self) -> B {
        let mut mask = B::ZERO;
        for square in 0..self.size() {
            set_bit(&mut mask, square);
        }
        mask
    }

    pub fn rank_mask<B: Bits>(&self, rank: u8) -> B {
        let mut mask = B::ZERO;
        for file in 0..self.files {
            set_bit(&mut mask, self.square(file, rank));
        }
        mask
    }

    pub fn file_mask<B: Bits>(&self, file: u8) -> B {
        let mut mask = B::ZERO;
        for rank in 0..self.ranks {
            set_bit(&mut mask, self.square(file, rank));
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twiddling::{get_bit, popcount};

    #[test]
    fn squares_are_rank_major() {
        let board = BoardGeometry::new(10, 12);
        assert_eq!(board.square(0, 0), 0);
        assert_eq!(board.square(9, 0), 9);
        assert_eq!(board.square(0, 1), 10);
        assert_eq!(board.file_of(37), 7);
        assert_eq!(board.rank_of(37), 3);
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        let board = BoardGeometry::new(8, 8);
        let a1 = board.square(0, 0);
        assert_eq!(board.offset(a1, -1, 0), None);
        assert_eq!(board.offset(a1, 1, 2), Some(board.square(1, 2)));
        assert_eq!(board.offset(board.square(7, 3), 1, 0), None);
    }

    #[test]
    fn walk_respects_limit() {
        let board = BoardGeometry::new(8, 8);
        let a1 = board.square(0, 0);

        let ray: u64 = board.walk(a1, 1, 1, 0);
        assert_eq!(popcount(ray), 7);

        let short: u64 = board.walk(a1, 0, 1, 2);
        assert_eq!(popcount(short), 2);
        assert!(get_bit(short, board.square(0, 2)));
    }

    #[test]
    fn null_step_walks_nowhere() {
        let board = BoardGeometry::new(8, 8);
        let ray: u64 = board.walk(board.square(3, 3), 0, 0, 0);
        assert_eq!(ray, 0);
    }

    #[test]
    fn masks_cover_the_board() {
        let board = BoardGeometry::new(12, 10);
        let all: u128 = board.board_mask();
        assert_eq!(popcount(all), 120);

        let rank: u128 = board.rank_mask(9);
        let file: u128 = board.file_mask(11);
        assert_eq!(popcount(rank), 12);
        assert_eq!(popcount(file), 10);
        assert_eq!(popcount(rank & file), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn oversized_board_is_rejected() {
        BoardGeometry::new(12, 12);
    }
}
