//! # hash.rs
//!
//! Implements Zobrist keys for position signatures.
//!
//! This file contains the `HashKeys` table and the `Signature` value built
//! from it. The keys are drawn from a generator seeded with `HASH_SEED`, so
//! every run of the same build produces the same table; stored hash tables
//! and perft node counts depend on that. There is one key per piece type,
//! side and square, per en-passant square, eight per side for castling and
//! other rights, one for the side to move and one per piece type, side and
//! holding count for pieces in hand. Holding none of a piece has key zero.
//!
//! The table is built once, before any position is hashed, and is read-only
//! afterwards; building a new one invalidates every signature computed with
//! the old one.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 14/02/2026

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::{constants::*, representations::side::Side};

#[derive(Clone, PartialEq, Eq)]
pub struct HashKeys {
    piece: Vec<[[u64; MAX_SQUARES]; NUM_SIDES]>,
    en_passant: [u64; MAX_SQUARES],
    flags: [[u64; FLAG_KEYS]; NUM_SIDES],
    side_to_move: u64,
    hold: Vec<[[u64; MAX_HOLDINGS]; NUM_SIDES]>,
}

/// Builds the process-wide key table from the fixed seed.
pub fn initialise_hash_keys() -> HashKeys {
    let mut rng = StdRng::seed_from_u64(HASH_SEED);

    let mut piece = vec![[[0u64; MAX_SQUARES]; NUM_SIDES]; MAX_PIECE_TYPES];
    for sides in piece.iter_mut() {
        for squares in sides.iter_mut() {
            squares.iter_mut().for_each(|key| *key = rng.next_u64());
        }
    }

    let mut en_passant = [0u64; MAX_SQUARES];
    en_passant.iter_mut().for_each(|key| *key = rng.next_u64());

    let mut flags = [[0u64; FLAG_KEYS]; NUM_SIDES];
    for side in flags.iter_mut() {
        side.iter_mut().for_each(|key| *key = rng.next_u64());
    }

    let side_to_move = rng.next_u64();

    let mut hold = vec![[[0u64; MAX_HOLDINGS]; NUM_SIDES]; MAX_PIECE_TYPES];
    for sides in hold.iter_mut() {
        for counts in sides.iter_mut() {
            counts
                .iter_mut()
                .skip(1)                                                        /* Holding none adds nothing          */
                .for_each(|key| *key = rng.next_u64());
        }
    }

    HashKeys { piece, en_passant, flags, side_to_move, hold }
}

impl HashKeys {
    #[inline(always)]
    pub fn piece_key(&self, piece: usize, side: Side, square: u32) -> u64 {
        self.piece[piece][side.index()][square as usize]
    }

    #[inline(always)]
    pub fn hold_key(&self, piece: usize, side: Side, count: usize) -> u64 {
        self.hold[piece][side.index()][count]
    }

    #[inline(always)]
    pub fn en_passant_key(&self, square: u32) -> u64 {
        self.en_passant[square as usize]
    }

    #[inline(always)]
    pub fn flag_key(&self, side: Side, index: usize) -> u64 {
        self.flags[side.index()][index]
    }

    #[inline(always)]
    pub fn side_to_move_key(&self) -> u64 {
        self.side_to_move
    }
}

/// Zobrist signature of a position, updated incrementally.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default, Hash)]
pub struct Signature(pub u64);

impl Signature {
    /// Toggle when a piece appears on or leaves a square.
    pub fn toggle_piece(&mut self, keys: &HashKeys, piece: usize, side: Side, square: u32) {
        self.0 ^= keys.piece_key(piece, side, square);
    }

    pub fn move_piece(&mut self, keys: &HashKeys, piece: usize, side: Side, from: u32, to: u32) {
        self.0 ^= keys.piece_key(piece, side, from);
        self.0 ^= keys.piece_key(piece, side, to);
    }

    /// Swaps the holding key when the number of pieces in hand changes.
    pub fn change_holding(
        &mut self,
        keys: &HashKeys,
        piece: usize,
        side: Side,
        old_count: usize,
        new_count: usize,
    ) {
        self.0 ^= keys.hold_key(piece, side, old_count);
        self.0 ^= keys.hold_key(piece, side, new_count);
    }

    pub fn toggle_en_passant(&mut self, keys: &HashKeys, square: u32) {
        self.0 ^= keys.en_passant_key(square);
    }

    pub fn toggle_flag(&mut self, keys: &HashKeys, side: Side, index: usize) {
        self.0 ^= keys.flag_key(side, index);
    }

    pub fn toggle_side(&mut self, keys: &HashKeys) {
        self.0 ^= keys.side_to_move_key();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::side::SIDES;
    use std::collections::HashSet;

    #[test]
    fn generation_is_deterministic() {
        assert!(initialise_hash_keys() == initialise_hash_keys());
    }

    #[test]
    fn holding_nothing_has_no_key() {
        let keys = initialise_hash_keys();
        for piece in 0..MAX_PIECE_TYPES {
            for side in SIDES {
                assert_eq!(keys.hold_key(piece, side, 0), 0);
                assert_ne!(keys.hold_key(piece, side, 1), 0);
            }
        }
    }

    #[test]
    fn keys_are_distinct() {
        let keys = initialise_hash_keys();
        let mut seen = HashSet::new();

        for piece in 0..MAX_PIECE_TYPES {
            for side in SIDES {
                for square in 0..MAX_SQUARES as u32 {
                    assert!(seen.insert(keys.piece_key(piece, side, square)));
                }
            }
        }
        for square in 0..MAX_SQUARES as u32 {
            assert!(seen.insert(keys.en_passant_key(square)));
        }
        assert!(seen.insert(keys.side_to_move_key()));
    }

    #[test]
    fn signature_updates_are_reversible() {
        let keys = initialise_hash_keys();
        let mut signature = Signature::default();

        signature.toggle_piece(&keys, 3, Side::White, 10);
        signature.toggle_side(&keys);
        let start = signature;

        signature.move_piece(&keys, 3, Side::White, 10, 26);
        signature.toggle_en_passant(&keys, 18);
        signature.change_holding(&keys, 0, Side::Black, 0, 1);
        signature.toggle_flag(&keys, Side::Black, 2);
        assert_ne!(signature, start);

        signature.toggle_flag(&keys, Side::Black, 2);
        signature.change_holding(&keys, 0, Side::Black, 1, 0);
        signature.toggle_en_passant(&keys, 18);
        signature.move_piece(&keys, 3, Side::White, 26, 10);
        assert_eq!(signature, start);
    }

    #[test]
    fn moving_equals_removing_and_placing() {
        let keys = initialise_hash_keys();
        let mut moved = Signature::default();
        let mut rebuilt = Signature::default();

        moved.move_piece(&keys, 5, Side::Black, 0, 127);
        rebuilt.toggle_piece(&keys, 5, Side::Black, 0);
        rebuilt.toggle_piece(&keys, 5, Side::Black, 127);
        assert_eq!(moved, rebuilt);
    }
}
