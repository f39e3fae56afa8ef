//! # rules.rs
//!
//! Defines the rules context of a loaded variant.
//!
//! `Rules` owns everything describing one variant: the board geometry, the
//! movement tables and the piece table. A session builds it once when the
//! variant is loaded, finalises it, and hands out shared references to move
//! generation and evaluation from then on. Replacing it mid-game is the
//! session's business; nothing here is mutated after `finalise`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 16/02/2026

use twiddling::{popcount, Bits};

use crate::{
    constants::*,
    errors::MovementError,
    moves::{movement_tables::MovementTables, notation::parse_movement},
    pieces::PieceTable,
    representations::{
        geometry::BoardGeometry,
        move_flag::MoveFlag,
        side::SIDES,
    },
};

#[derive(Clone, Debug)]
pub struct Rules<B: Bits> {
    pub geometry: BoardGeometry,
    pub movement: MovementTables<B>,
    pub pieces: PieceTable<B>,
}

impl<B: Bits> Rules<B> {
    pub fn new(files: u8, ranks: u8) -> Self {
        let geometry = BoardGeometry::new(files, ranks);

        #[cfg(debug_assertions)]
        {
            assert!(
                geometry.size() <= B::WIDTH,
                "{} squares do not fit in a {}-bit bitboard.",
                geometry.size(),
                B::WIDTH
            );
        }

        Rules {
            geometry,
            movement: MovementTables::new(geometry),
            pieces: PieceTable::new(),
        }
    }

    /// Parses a movement description against this variant's tables.
    pub fn parse_movement(&mut self, text: &str) -> Result<MoveFlag, MovementError> {
        parse_movement(text, &mut self.movement)
    }

    /// Fills the empty-board move counts of every piece from its quiet-move
    /// descriptor: per side and square, then minimum, maximum and average.
    pub fn compute_move_statistics(&mut self) {
        let size = self.geometry.size() as usize;

        for piece in 0..self.pieces.num_piece_types {
            let flag = self.pieces.move_flags[piece];
            let mut min = u8::MAX;
            let mut max = 0u8;
            let mut total = 0usize;

            for side in SIDES {
                for square in 0..size {
                    let targets = self
                        .movement
                        .empty_board_targets(flag, side, square as u32);
                    let count = popcount(targets) as u8;

                    self.pieces.mobility[piece][side.index()][square] = count;
                    min = min.min(count);
                    max = max.max(count);
                    total += count as usize;
                }
            }

            let samples = NUM_SIDES * size;
            self.pieces.min_moves[piece] = min;
            self.pieces.max_moves[piece] = max;
            self.pieces.avg_moves[piece] = (total / samples) as u8;
        }
    }

    pub fn finalise(&mut self) {
        self.compute_move_statistics();
        self.pieces.finalise();
    }
}
