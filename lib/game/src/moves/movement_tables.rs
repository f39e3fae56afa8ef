//! # movement_tables.rs
//!
//! Implements the per-variant tables that movement descriptors index into.
//!
//! A `MoveFlag` only carries 4-bit indices; the shapes behind them live
//! here. Leaper shapes are sets of (file, rank) offsets with a precomputed
//! target bitboard per side and square. Steppers hold a maximum step count
//! per compass direction and riders a leap shape plus a repeat bound. All
//! directions and offsets are given from White's point of view and mirrored
//! across the rank axis for Black. Registering a description that is already
//! present returns the existing slot.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 09/02/2026

use twiddling::{set_bit, square_bit, squares, Bits};

use crate::{
    constants::*,
    errors::MovementError,
    representations::{
        geometry::BoardGeometry,
        move_flag::MoveFlag,
        side::Side,
    },
};

#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct LeaperShape {
    pub offsets: Vec<(i8, i8)>,
    pub asymmetric: bool,
}

/// Maximum number of single steps per compass direction, see `COMPASS`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Stepper {
    pub steps: [u8; 8],
}

/// A leap repeated along its own line; `max_repeats` 0 means unbounded.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Rider {
    pub shape: (i8, i8),
    pub max_repeats: u8,
}

/// All eight reflections of a symmetric `(x, y)` leap.
pub fn symmetric_offsets(x: i8, y: i8) -> Vec<(i8, i8)> {
    let mut offsets = Vec::with_capacity(8);

    for (a, b) in [(x, y), (y, x)] {
        for (sa, sb) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            offsets.push((a * sa, b * sb));
        }
    }

    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

/// A usable offset moves somewhere and survives reflection.
fn check_offset((x, y): (i8, i8)) -> Result<(), MovementError> {
    if (x, y) == (0, 0) || x == i8::MIN || y == i8::MIN {
        return Err(MovementError::MalformedShape(format!("({x},{y})")));
    }

    Ok(())
}

#[inline(always)]
fn orient(side: Side, (df, dr): (i8, i8)) -> (i8, i8) {
    (df, dr * side.forward())
}

#[derive(Clone, Debug)]
pub struct MovementTables<B: Bits> {
    pub geometry: BoardGeometry,
    pub leapers: Vec<LeaperShape>,
    pub steppers: Vec<Stepper>,
    pub riders: Vec<Rider>,

    leap_table: Vec<[Vec<B>; NUM_SIDES]>,
}

impl<B: Bits> MovementTables<B> {
    pub fn new(geometry: BoardGeometry) -> Self {
        MovementTables {
            geometry,
            leapers: Vec::with_capacity(MAX_LEAPERS),
            steppers: vec![Stepper::default()],                                 /* Slot 0 means "no stepper"          */
            riders: vec![Rider::default()],                                     /* Slot 0 means "no rider"            */
            leap_table: Vec::with_capacity(MAX_LEAPERS),
        }
    }

    /// Registers a leaper shape and returns its index.
    ///
    /// With `asymmetric` unset, each offset is expanded to all eight
    /// reflections; otherwise the offsets are taken literally for White.
    pub fn add_leaper(
        &mut self,
        offsets: &[(i8, i8)],
        asymmetric: bool,
    ) -> Result<u8, MovementError> {
        if offsets.is_empty() {
            return Err(MovementError::Empty);
        }
        for &offset in offsets {
            check_offset(offset)?;
        }

        let mut expanded: Vec<(i8, i8)> = if asymmetric {
            offsets.to_vec()
        } else {
            offsets
                .iter()
                .flat_map(|&(x, y)| symmetric_offsets(x, y))
                .collect()
        };
        expanded.sort_unstable();
        expanded.dedup();

        let shape = LeaperShape { offsets: expanded, asymmetric };

        if let Some(index) = self.leapers.iter().position(|s| *s == shape) {
            return Ok(index as u8);
        }

        if self.leapers.len() >= MAX_LEAPERS {
            return Err(MovementError::TableFull {
                kind: "leaper",
                capacity: MAX_LEAPERS,
            });
        }

        let table = [
            self.build_leap_table(&shape, Side::White),
            self.build_leap_table(&shape, Side::Black),
        ];

        self.leapers.push(shape);
        self.leap_table.push(table);

        Ok((self.leapers.len() - 1) as u8)
    }

    pub fn add_stepper(&mut self, steps: [u8; 8]) -> Result<u8, MovementError> {
        if let Some(&bad) = steps.iter().find(|&&n| n > 15) {
            return Err(MovementError::StepCount(bad as u32));
        }

        let stepper = Stepper { steps };

        if let Some(index) = self.steppers.iter().skip(1).position(|s| *s == stepper) {
            return Ok((index + 1) as u8);
        }

        if self.steppers.len() >= MAX_STEPPERS {
            return Err(MovementError::TableFull {
                kind: "stepper",
                capacity: MAX_STEPPERS - 1,
            });
        }

        self.steppers.push(stepper);
        Ok((self.steppers.len() - 1) as u8)
    }

    pub fn add_rider(
        &mut self,
        shape: (i8, i8),
        max_repeats: u8,
    ) -> Result<u8, MovementError> {
        check_offset(shape)?;
        let rider = Rider { shape, max_repeats };

        if let Some(index) = self.riders.iter().skip(1).position(|r| *r == rider) {
            return Ok((index + 1) as u8);
        }

        if self.riders.len() >= MAX_RIDERS {
            return Err(MovementError::TableFull {
                kind: "rider",
                capacity: MAX_RIDERS - 1,
            });
        }

        self.riders.push(rider);
        Ok((self.riders.len() - 1) as u8)
    }

    fn build_leap_table(&self, shape: &LeaperShape, side: Side) -> Vec<B> {
        (0..self.geometry.size())
            .map(|square| {
                let mut targets = B::ZERO;
                for &offset in &shape.offsets {
                    let (df, dr) = orient(side, offset);
                    if let Some(target) = self.geometry.offset(square, df, dr) {
                        set_bit(&mut targets, target);
                    }
                }
                targets
            })
            .collect()
    }

    /// Targets of a single leaper shape.
    #[inline(always)]
    pub fn leap(&self, index: u8, side: Side, square: u32) -> B {
        #[cfg(debug_assertions)]
        {
            assert!(
                (index as usize) < self.leap_table.len(),
                "Leaper index {index} is not registered."
            );
        }

        self.leap_table[index as usize][side.index()][square as usize]
    }

    /// Leaper destinations of a descriptor, given the occupied squares.
    ///
    /// A double leaper makes its primary leap to an empty square and then its
    /// secondary leap from there. A mask restricts the result to the targets
    /// of the mask shape.
    pub fn leaper_targets(
        &self,
        flag: MoveFlag,
        side: Side,
        square: u32,
        occupied: B,
    ) -> B {
        if !flag.is_leaper() {
            return B::ZERO;
        }

        let primary = self.leap(flag.leaper_index(), side, square);

        let mut targets = if flag.is_double_leaper() {
            let second = flag.second_leaper_index();
            squares(primary & !occupied)
                .fold(B::ZERO, |acc, via| acc | self.leap(second, side, via))
        } else {
            primary
        };

        if flag.is_masked_leaper() {
            targets &= self.leap(flag.leaper_mask_index(), side, square);
        }

        targets & !square_bit::<B>(square)
    }

    /// Destinations of a descriptor on an otherwise empty board.
    ///
    /// Hoppers need something to jump over, so they contribute nothing.
    pub fn empty_board_targets(&self, flag: MoveFlag, side: Side, square: u32) -> B {
        let geometry = &self.geometry;
        let mut targets = self.leaper_targets(flag, side, square, B::ZERO);

        for (df, dr) in flag.slider_directions().steps() {
            targets |= geometry.walk::<B>(square, df, dr, 0);
        }

        if flag.is_stepper() {
            let stepper = &self.steppers[flag.stepper_index() as usize];
            for (direction, &count) in stepper.steps.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                let (df, dr) = orient(side, COMPASS[direction]);
                targets |= geometry.walk::<B>(square, df, dr, count);
            }
        }

        if flag.is_rider() {
            let rider = &self.riders[flag.rider_index() as usize];
            for (df, dr) in symmetric_offsets(rider.shape.0, rider.shape.1) {
                targets |= geometry.walk::<B>(square, df, dr, rider.max_repeats);
            }
        }

        targets
    }
}
