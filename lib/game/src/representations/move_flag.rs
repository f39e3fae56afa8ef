//! # move_flag.rs
//!
//! Implements the packed 32-bit movement descriptor of a piece.
//!
//! Each piece type carries four descriptors (quiet move, capture, special
//! move, first move). A descriptor combines any number of independent motion
//! primitives, each in its own bit group:
//!
//! - Bits 0-3: slider directions (H, V, D, A)
//! - Bits 4-7: hopper directions (H, V, D, A)
//! - Bits 8-11: stepper table index (0 means no stepper)
//! - Bits 12-15: rider table index (0 means no rider)
//! - Bits 16-19: primary leaper shape index
//! - Bits 20-23: secondary leaper shape index
//! - Bits 24-27: leaper mask shape index
//! - Bit 28: is a leaper
//! - Bit 29: leaper has a secondary shape
//! - Bit 30: leaper has a mask
//! - Bit 31: primary leaper shape is asymmetric
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 04/02/2026

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of line directions, used by both sliders and hoppers.
///
/// - H: along the rank
/// - V: along the file
/// - D: along the a1-h8 diagonal
/// - A: along the a8-h1 anti-diagonal
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Directions(pub u8);

impl Directions {
    pub const NONE: Directions = Directions(0);
    pub const H: Directions = Directions(0b0001);
    pub const V: Directions = Directions(0b0010);
    pub const D: Directions = Directions(0b0100);
    pub const A: Directions = Directions(0b1000);
    pub const ALL: Directions = Directions(0b1111);

    #[inline(always)]
    pub const fn contains(self, other: Directions) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// (file, rank) unit steps, both senses of every line in the set.
    pub fn steps(self) -> Vec<(i8, i8)> {
        let mut steps = Vec::with_capacity(8);

        if self.contains(Directions::H) {
            steps.extend([(1, 0), (-1, 0)]);
        }
        if self.contains(Directions::V) {
            steps.extend([(0, 1), (0, -1)]);
        }
        if self.contains(Directions::D) {
            steps.extend([(1, 1), (-1, -1)]);
        }
        if self.contains(Directions::A) {
            steps.extend([(1, -1), (-1, 1)]);
        }

        steps
    }
}

impl BitOr for Directions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Directions(self.0 | rhs.0)
    }
}

const SLIDER_SHIFT: u32 = 0;
const HOPPER_SHIFT: u32 = 4;
const STEPPER_SHIFT: u32 = 8;
const RIDER_SHIFT: u32 = 12;
const LEAPER_SHIFT: u32 = 16;
const LEAPER2_SHIFT: u32 = 20;
const LEAPER_MASK_SHIFT: u32 = 24;

const NIBBLE: u32 = 0xF;

const IS_LEAPER: u32 = 1 << 28;
const LEAPER_HAS_SECOND: u32 = 1 << 29;
const LEAPER_HAS_MASK: u32 = 1 << 30;
const LEAPER_ASYMMETRIC: u32 = 1 << 31;

#[inline(always)]
fn encode_nibble(index: u8, shift: u32) -> u32 {
    #[cfg(debug_assertions)]
    {
        assert!(index < 16, "Index {index} does not fit in a 4-bit field.");
    }

    (index as u32 & NIBBLE) << shift
}

#[derive(PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct MoveFlag(pub u32);

impl MoveFlag {
    pub const NONE: MoveFlag = MoveFlag(0);

    #[inline(always)]
    pub fn with_slider(self, directions: Directions) -> Self {
        MoveFlag(self.0 | (directions.0 as u32 & NIBBLE) << SLIDER_SHIFT)
    }

    #[inline(always)]
    pub fn with_hopper(self, directions: Directions) -> Self {
        MoveFlag(self.0 | (directions.0 as u32 & NIBBLE) << HOPPER_SHIFT)
    }

    #[inline(always)]
    pub fn with_stepper(self, index: u8) -> Self {
        MoveFlag(self.0 | encode_nibble(index, STEPPER_SHIFT))
    }

    #[inline(always)]
    pub fn with_rider(self, index: u8) -> Self {
        MoveFlag(self.0 | encode_nibble(index, RIDER_SHIFT))
    }

    #[inline(always)]
    pub fn with_leaper(self, index: u8) -> Self {
        MoveFlag(self.0 | IS_LEAPER | encode_nibble(index, LEAPER_SHIFT))
    }

    /// Leaper whose primary shape differs between the two sides.
    #[inline(always)]
    pub fn with_aleaper(self, index: u8) -> Self {
        MoveFlag(self.with_leaper(index).0 | LEAPER_ASYMMETRIC)
    }

    #[inline(always)]
    pub fn with_second_leaper(self, index: u8) -> Self {
        MoveFlag(
            self.0 | LEAPER_HAS_SECOND | encode_nibble(index, LEAPER2_SHIFT)
        )
    }

    #[inline(always)]
    pub fn with_leaper_mask(self, index: u8) -> Self {
        MoveFlag(
            self.0 | LEAPER_HAS_MASK | encode_nibble(index, LEAPER_MASK_SHIFT)
        )
    }

    #[inline(always)]
    pub fn slider_directions(self) -> Directions {
        Directions(((self.0 >> SLIDER_SHIFT) & NIBBLE) as u8)
    }

    #[inline(always)]
    pub fn hopper_directions(self) -> Directions {
        Directions(((self.0 >> HOPPER_SHIFT) & NIBBLE) as u8)
    }

    #[inline(always)]
    pub fn stepper_index(self) -> u8 {
        ((self.0 >> STEPPER_SHIFT) & NIBBLE) as u8
    }

    #[inline(always)]
    pub fn rider_index(self) -> u8 {
        ((self.0 >> RIDER_SHIFT) & NIBBLE) as u8
    }

    #[inline(always)]
    pub fn leaper_index(self) -> u8 {
        ((self.0 >> LEAPER_SHIFT) & NIBBLE) as u8
    }

    #[inline(always)]
    pub fn second_leaper_index(self) -> u8 {
        ((self.0 >> LEAPER2_SHIFT) & NIBBLE) as u8
    }

    #[inline(always)]
    pub fn leaper_mask_index(self) -> u8 {
        ((self.0 >> LEAPER_MASK_SHIFT) & NIBBLE) as u8
    }

    #[inline(always)]
    pub fn is_slider(self) -> bool {
        !self.slider_directions().is_empty()
    }

    #[inline(always)]
    pub fn is_hopper(self) -> bool {
        !self.hopper_directions().is_empty()
    }

    #[inline(always)]
    pub fn is_stepper(self) -> bool {
        self.stepper_index() != 0
    }

    #[inline(always)]
    pub fn is_rider(self) -> bool {
        self.rider_index() != 0
    }

    #[inline(always)]
    pub fn is_leaper(self) -> bool {
        self.0 & IS_LEAPER != 0
    }

    #[inline(always)]
    pub fn is_simple_leaper(self) -> bool {
        self.is_leaper() && self.0 & (LEAPER_HAS_SECOND | LEAPER_HAS_MASK) == 0
    }

    #[inline(always)]
    pub fn is_double_leaper(self) -> bool {
        self.is_leaper() && self.0 & LEAPER_HAS_SECOND != 0
    }

    #[inline(always)]
    pub fn is_masked_leaper(self) -> bool {
        self.is_leaper() && self.0 & LEAPER_HAS_MASK != 0
    }

    #[inline(always)]
    pub fn is_aleaper(self) -> bool {
        self.is_leaper() && self.0 & LEAPER_ASYMMETRIC != 0
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for MoveFlag {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        MoveFlag(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveFlag {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for MoveFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveFlag({:#010x}", self.0)?;

        if self.is_slider() {
            write!(f, " slide={:04b}", self.slider_directions().0)?;
        }
        if self.is_hopper() {
            write!(f, " hop={:04b}", self.hopper_directions().0)?;
        }
        if self.is_stepper() {
            write!(f, " step={}", self.stepper_index())?;
        }
        if self.is_rider() {
            write!(f, " ride={}", self.rider_index())?;
        }
        if self.is_leaper() {
            write!(f, " leap={}", self.leaper_index())?;
            if self.is_double_leaper() {
                write!(f, "x{}", self.second_leaper_index())?;
            }
            if self.is_masked_leaper() {
                write!(f, "&{}", self.leaper_mask_index())?;
            }
            if self.is_aleaper() {
                write!(f, " asym")?;
            }
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nibble_field_round_trips() {
        for i in 0..16u8 {
            assert_eq!(MoveFlag::NONE.with_stepper(i).stepper_index(), i);
            assert_eq!(MoveFlag::NONE.with_rider(i).rider_index(), i);
            assert_eq!(MoveFlag::NONE.with_leaper(i).leaper_index(), i);
            assert_eq!(
                MoveFlag::NONE.with_second_leaper(i).second_leaper_index(),
                i
            );
            assert_eq!(
                MoveFlag::NONE.with_leaper_mask(i).leaper_mask_index(),
                i
            );
        }
    }

    #[test]
    fn fields_do_not_overlap() {
        let flag = MoveFlag::NONE
            .with_slider(Directions::ALL)
            .with_hopper(Directions::D)
            .with_stepper(15)
            .with_rider(9)
            .with_leaper(3)
            .with_second_leaper(12)
            .with_leaper_mask(7);

        assert_eq!(flag.slider_directions(), Directions::ALL);
        assert_eq!(flag.hopper_directions(), Directions::D);
        assert_eq!(flag.stepper_index(), 15);
        assert_eq!(flag.rider_index(), 9);
        assert_eq!(flag.leaper_index(), 3);
        assert_eq!(flag.second_leaper_index(), 12);
        assert_eq!(flag.leaper_mask_index(), 7);
        assert!(!flag.is_aleaper());
    }

    #[test]
    fn leaper_predicates_are_consistent() {
        let simple = MoveFlag::NONE.with_leaper(0);
        let double = simple.with_second_leaper(1);
        let masked = simple.with_leaper_mask(2);
        let asym = MoveFlag::NONE.with_aleaper(4);

        assert!(simple.is_simple_leaper() && !simple.is_double_leaper());
        assert!(double.is_double_leaper() && !double.is_simple_leaper());
        assert!(masked.is_masked_leaper() && !masked.is_simple_leaper());
        assert!(asym.is_aleaper() && asym.is_simple_leaper());
    }

    #[test]
    fn non_leaper_has_no_leaper_traits() {
        let stray = MoveFlag(LEAPER_HAS_SECOND | LEAPER_HAS_MASK | LEAPER_ASYMMETRIC);

        assert!(!stray.is_leaper());
        assert!(!stray.is_simple_leaper());
        assert!(!stray.is_double_leaper());
        assert!(!stray.is_masked_leaper());
        assert!(!stray.is_aleaper());
    }

    #[test]
    fn predicates_hold_over_every_flag_pattern() {
        for high in 0..16u32 {
            let flag = MoveFlag(high << 28 | 0x0FFF_FFFF);

            assert!(!(flag.is_simple_leaper() && flag.is_double_leaper()));
            if !flag.is_leaper() {
                assert!(!flag.is_simple_leaper());
                assert!(!flag.is_double_leaper());
                assert!(!flag.is_masked_leaper());
                assert!(!flag.is_aleaper());
            }
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn sixteen_does_not_fit() {
        MoveFlag::NONE.with_stepper(16);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn sixteen_does_not_fit_leaper_mask() {
        MoveFlag::NONE.with_leaper_mask(16);
    }
}
