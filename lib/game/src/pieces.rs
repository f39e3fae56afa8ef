//! # pieces.rs
//!
//! Implements the piece-description table of a loaded variant.
//!
//! This file contains the `PieceTable` struct, which holds every attribute
//! of every piece type in structure-of-arrays form: one fixed-size array per
//! attribute, indexed by piece type, so the move generator and evaluator
//! read only the columns they need. A loader fills the table once per
//! variant through `add_piece` and the public columns, then calls
//! `finalise` to derive the classification sets and the value ordering.
//! After that the table is read-only.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 12/02/2026

use twiddling::{get_bit, Bits};

use crate::{
    constants::*,
    representations::{
        move_flag::MoveFlag,
        piece_flags::{PieceBit, PieceFlags},
        side::Side,
    },
};

/// The kinds of per-piece, per-side zones a variant can declare.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Zone {
    Promotion = 0,
    OptionalPromotion = 1,
    Special = 2,
    Prison = 3,
    Block = 4,
    Drop = 5,
    Entry = 6,
}

pub const ZONE_KINDS: usize = 7;

/// Which of the four movement descriptors of a piece applies.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum MoveContext {
    Quiet,
    Capture,
    Special,
    Initial,
}

#[derive(Clone, Debug)]
pub struct PieceTable<B: Bits> {
    pub num_piece_types: usize,

    pub move_flags: [MoveFlag; MAX_PIECE_TYPES],
    pub capture_flags: [MoveFlag; MAX_PIECE_TYPES],
    pub special_move_flags: [MoveFlag; MAX_PIECE_TYPES],
    pub initial_move_flags: [MoveFlag; MAX_PIECE_TYPES],
    pub piece_flags: [PieceFlags; MAX_PIECE_TYPES],

    pub zones: [[[B; MAX_PIECE_TYPES]; NUM_SIDES]; ZONE_KINDS],

    pub promotion_zone_names: Vec<String>,
    pub promotion_zone_masks: Vec<[B; NUM_SIDES]>,
    pub promotion_choice: [[PieceBit; MAX_PROMOTION_ZONES]; MAX_PIECE_TYPES],
    pub allowed_victims: [PieceBit; MAX_PIECE_TYPES],
    pub demotion: [i32; MAX_PIECE_TYPES],

    pub value: [i16; MAX_PIECE_TYPES],
    pub see_value: [i16; MAX_PIECE_TYPES],
    pub promotion_value: [i16; MAX_PIECE_TYPES],
    pub king_safety_weight: [i8; MAX_PIECE_TYPES],
    pub phase_weight: [i16; MAX_PIECE_TYPES],

    pub min_moves: [u8; MAX_PIECE_TYPES],
    pub max_moves: [u8; MAX_PIECE_TYPES],
    pub avg_moves: [u8; MAX_PIECE_TYPES],
    pub mobility: [[[u8; MAX_SQUARES]; NUM_SIDES]; MAX_PIECE_TYPES],
    pub tropism: [[i8; MAX_SQUARES]; MAX_PIECE_TYPES],
    pub piece_square: [[[i16; MAX_SQUARES]; NUM_SIDES]; MAX_PIECE_TYPES],

    pub name: Vec<String>,
    pub abbreviation: Vec<[String; NUM_SIDES]>,
    pub notation: Vec<String>,

    pub val_perm: [usize; MAX_PIECE_TYPES],

    pub royal_pieces: PieceBit,
    pub defensive_pieces: PieceBit,
    pub pawn_pieces: PieceBit,
    pub minor_pieces: PieceBit,
    pub major_pieces: PieceBit,
    pub super_pieces: PieceBit,
    pub shak_pieces: PieceBit,
    pub deferral_allowed: PieceBit,
}

impl<B: Bits> Default for PieceTable<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bits> PieceTable<B> {
    pub fn new() -> Self {
        PieceTable {
            num_piece_types: 0,

            move_flags: [MoveFlag::NONE; MAX_PIECE_TYPES],
            capture_flags: [MoveFlag::NONE; MAX_PIECE_TYPES],
            special_move_flags: [MoveFlag::NONE; MAX_PIECE_TYPES],
            initial_move_flags: [MoveFlag::NONE; MAX_PIECE_TYPES],
            piece_flags: [PieceFlags::NONE; MAX_PIECE_TYPES],

            zones: [[[B::ZERO; MAX_PIECE_TYPES]; NUM_SIDES]; ZONE_KINDS],

            promotion_zone_names: Vec::with_capacity(MAX_PROMOTION_ZONES),
            promotion_zone_masks: Vec::with_capacity(MAX_PROMOTION_ZONES),
            promotion_choice: [[PieceBit::EMPTY; MAX_PROMOTION_ZONES]; MAX_PIECE_TYPES],
            allowed_victims: [PieceBit(u32::MAX); MAX_PIECE_TYPES],
            demotion: [NO_PIECE; MAX_PIECE_TYPES],

            value: [0; MAX_PIECE_TYPES],
            see_value: [0; MAX_PIECE_TYPES],
            promotion_value: [0; MAX_PIECE_TYPES],
            king_safety_weight: [0; MAX_PIECE_TYPES],
            phase_weight: [0; MAX_PIECE_TYPES],

            min_moves: [0; MAX_PIECE_TYPES],
            max_moves: [0; MAX_PIECE_TYPES],
            avg_moves: [0; MAX_PIECE_TYPES],
            mobility: [[[0; MAX_SQUARES]; NUM_SIDES]; MAX_PIECE_TYPES],
            tropism: [[0; MAX_SQUARES]; MAX_PIECE_TYPES],
            piece_square: [[[0; MAX_SQUARES]; NUM_SIDES]; MAX_PIECE_TYPES],

            name: Vec::with_capacity(MAX_PIECE_TYPES),
            abbreviation: Vec::with_capacity(MAX_PIECE_TYPES),
            notation: Vec::with_capacity(MAX_PIECE_TYPES),

            val_perm: std::array::from_fn(|i| i),

            royal_pieces: PieceBit::EMPTY,
            defensive_pieces: PieceBit::EMPTY,
            pawn_pieces: PieceBit::EMPTY,
            minor_pieces: PieceBit::EMPTY,
            major_pieces: PieceBit::EMPTY,
            super_pieces: PieceBit::EMPTY,
            shak_pieces: PieceBit::EMPTY,
            deferral_allowed: PieceBit::EMPTY,
        }
    }

    /// Appends a piece type and returns its index.
    ///
    /// # Arguments
    /// * `name` - Full name of the piece
    /// * `white` - Abbreviation used for the White piece
    /// * `black` - Abbreviation used for the Black piece
    /// * `notation` - Side-neutral symbol used in move notation
    pub fn add_piece(
        &mut self,
        name: &str,
        white: &str,
        black: &str,
        notation: &str,
    ) -> usize {
        let index = self.num_piece_types;

        #[cfg(debug_assertions)]
        {
            assert!(
                index < MAX_PIECE_TYPES,
                "Variant defines more than {MAX_PIECE_TYPES} piece types."
            );
        }

        self.name.push(name.to_string());
        self.abbreviation.push([white.to_string(), black.to_string()]);
        self.notation.push(notation.to_string());
        self.num_piece_types += 1;

        index
    }

    #[inline(always)]
    pub fn flags(&self, context: MoveContext, piece: usize) -> MoveFlag {
        match context {
            MoveContext::Quiet => self.move_flags[piece],
            MoveContext::Capture => self.capture_flags[piece],
            MoveContext::Special => self.special_move_flags[piece],
            MoveContext::Initial => self.initial_move_flags[piece],
        }
    }

    #[inline(always)]
    pub fn has_flag(&self, piece: usize, flag: PieceFlags) -> bool {
        self.piece_flags[piece].contains(flag)
    }

    #[inline(always)]
    pub fn is_royal(&self, piece: usize) -> bool {
        self.has_flag(piece, PieceFlags::ROYAL)
    }

    #[inline(always)]
    pub fn zone(&self, zone: Zone, side: Side, piece: usize) -> B {
        self.zones[zone as usize][side.index()][piece]
    }

    pub fn set_zone(&mut self, zone: Zone, side: Side, piece: usize, squares: B) {
        self.zones[zone as usize][side.index()][piece] = squares;
    }

    /// Declares (or redefines) a named promotion zone and returns its index.
    pub fn define_promotion_zone(&mut self, name: &str, masks: [B; NUM_SIDES]) -> usize {
        if let Some(index) = self.promotion_zone_names.iter().position(|n| n == name) {
            self.promotion_zone_masks[index] = masks;
            return index;
        }

        #[cfg(debug_assertions)]
        {
            assert!(
                self.promotion_zone_names.len() < MAX_PROMOTION_ZONES,
                "Variant defines more than {MAX_PROMOTION_ZONES} promotion zones."
            );
        }

        self.promotion_zone_names.push(name.to_string());
        self.promotion_zone_masks.push(masks);
        self.promotion_zone_names.len() - 1
    }

    /// Lets `piece` promote to any of `choices` inside promotion zone `zone`.
    pub fn allow_promotion(&mut self, piece: usize, zone: usize, choices: PieceBit) {
        self.promotion_choice[piece][zone] |= choices;

        for side in 0..NUM_SIDES {
            self.zones[Zone::Promotion as usize][side][piece] |=
                self.promotion_zone_masks[zone][side];
        }
    }

    /// Piece types `piece` may promote to when it reaches `square`.
    pub fn promotion_choices(&self, piece: usize, side: Side, square: u32) -> PieceBit {
        self.promotion_zone_masks
            .iter()
            .enumerate()
            .filter(|(_, masks)| get_bit(masks[side.index()], square))
            .fold(PieceBit::EMPTY, |acc, (zone, _)| {
                acc | self.promotion_choice[piece][zone]
            })
    }

    pub fn can_promote(&self, piece: usize) -> bool {
        self.promotion_choice[piece].iter().any(|choice| !choice.is_empty())
    }

    #[inline(always)]
    pub fn may_capture(&self, attacker: usize, victim: usize) -> bool {
        self.allowed_victims[attacker].contains(victim)
    }

    /// Piece type a captured `piece` reverts to, itself if it has none.
    #[inline(always)]
    pub fn demoted_piece(&self, piece: usize) -> usize {
        match self.demotion[piece] {
            NO_PIECE => piece,
            base => base as usize,
        }
    }

    /// Material value used for ordering, royals pushed past everything else.
    #[inline(always)]
    pub fn sort_value(&self, piece: usize) -> i32 {
        let bonus = if self.is_royal(piece) { ROYAL_SORT_BONUS } else { 0 };
        self.value[piece] as i32 + bonus
    }

    /// Orders piece types by ascending `sort_value` into `val_perm`.
    ///
    /// Equal values keep their index order.
    pub fn sort_piece_values(&mut self) {
        let n = self.num_piece_types;
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&piece| self.sort_value(piece));

        self.val_perm[..n].copy_from_slice(&order);
    }

    /// Index of the first piece whose White or Black abbreviation `symbol`
    /// starts with, or whose notation equals `symbol`. `NO_PIECE` otherwise.
    /// Empty abbreviations never match, they would prefix every symbol.
    pub fn piece_id_from_string(&self, symbol: &str) -> i32 {
        for piece in 0..self.num_piece_types {
            let [white, black] = &self.abbreviation[piece];

            if !white.is_empty() && symbol.starts_with(white.as_str()) {
                return piece as i32;
            }
            if !black.is_empty() && symbol.starts_with(black.as_str()) {
                return piece as i32;
            }
            if symbol == self.notation[piece] {
                return piece as i32;
            }
        }

        NO_PIECE
    }

    /// Looks `symbol` up as a promoted piece first, then as a plain one.
    pub fn promotion_piece_id_from_string(&self, symbol: &str) -> i32 {
        let promoted = format!("{symbol}{PROMOTED_MARKER}");

        for piece in 0..self.num_piece_types {
            if self.abbreviation[piece].iter().any(|abbr| *abbr == promoted) {
                return piece as i32;
            }
        }

        self.piece_id_from_string(symbol)
    }

    /// Derives the classification sets from flags, values and zones.
    pub fn classify(&mut self) {
        let mut royal = PieceBit::EMPTY;
        let mut defensive = PieceBit::EMPTY;
        let mut pawn = PieceBit::EMPTY;
        let mut minor = PieceBit::EMPTY;
        let mut major = PieceBit::EMPTY;
        let mut super_ = PieceBit::EMPTY;
        let mut shak = PieceBit::EMPTY;
        let mut deferral = PieceBit::EMPTY;

        for piece in 0..self.num_piece_types {
            if self.has_flag(piece, PieceFlags::MUST_CHECK_TO_MATE) {
                shak.insert(piece);
            }

            let optional = Zone::OptionalPromotion as usize;
            if (self.zones[optional][0][piece] | self.zones[optional][1][piece]) != B::ZERO {
                deferral.insert(piece);
            }

            if self.is_royal(piece) {
                royal.insert(piece);
                continue;
            }

            if self.can_promote(piece) {
                pawn.insert(piece);
                continue;
            }

            let reach = self.move_flags[piece] | self.capture_flags[piece];
            if !reach.is_slider() && !reach.is_hopper() && !reach.is_rider() {
                defensive.insert(piece);
            }

            match self.value[piece] {
                v if v < MINOR_VALUE_LIMIT => minor.insert(piece),
                v if v < SUPER_VALUE_LIMIT => major.insert(piece),
                _ => super_.insert(piece),
            }
        }

        self.royal_pieces = royal;
        self.defensive_pieces = defensive;
        self.pawn_pieces = pawn;
        self.minor_pieces = minor;
        self.major_pieces = major;
        self.super_pieces = super_;
        self.shak_pieces = shak;
        self.deferral_allowed = deferral;
    }

    pub fn finalise(&mut self) {
        self.classify();
        self.sort_piece_values();
    }
}
