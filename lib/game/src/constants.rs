//! # constants.rs
//!
//! Defines rules-wide constants and configuration values.
//!
//! This file contains the fixed table bounds every variant must fit in
//! (piece types, squares, promotion zones, holdings), the seed of the hash
//! key generator, sentinel values and the value bands used to classify
//! pieces. Array dimensions throughout the crate come from here, so a
//! variant exceeding them has to be rejected by the loader.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 04/02/2026

pub const MAX_PIECE_TYPES: usize = 32;
pub const MAX_SQUARES: usize = 128;
pub const NUM_SIDES: usize = 2;

pub const MAX_PROMOTION_ZONES: usize = 16;
pub const MAX_HOLDINGS: usize = 128;
pub const FLAG_KEYS: usize = 8;

pub const MAX_LEAPERS: usize = 16;
pub const MAX_STEPPERS: usize = 16;
pub const MAX_RIDERS: usize = 16;

pub const HASH_SEED: u64 = 0xDEADBEEFCAFEBABE;

pub const NO_PIECE: i32 = -1;
pub const PROMOTED_MARKER: char = '~';

pub const ROYAL_SORT_BONUS: i32 = 16000;
pub const MINOR_VALUE_LIMIT: i16 = 450;
pub const SUPER_VALUE_LIMIT: i16 = 1100;

pub const NORTH: usize = 0;
pub const NORTH_EAST: usize = 1;
pub const EAST: usize = 2;
pub const SOUTH_EAST: usize = 3;
pub const SOUTH: usize = 4;
pub const SOUTH_WEST: usize = 5;
pub const WEST: usize = 6;
pub const NORTH_WEST: usize = 7;

/// (file, rank) step of each compass direction, White's point of view.
pub const COMPASS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];
