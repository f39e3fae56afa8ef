//! # movement.rs
//!
//! Defines the unpacked view of a movement descriptor.
//!
//! `Movement` holds each motion primitive as its own field, which is what the
//! notation parser and the statistics code work with. Conversion to and from
//! the packed `MoveFlag` is lossless for every descriptor the parser can
//! produce; the packed form is what the piece table stores and the move
//! generator reads.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 05/02/2026

use std::num::NonZeroU8;

use crate::representations::move_flag::{Directions, MoveFlag};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Leaper {
    pub primary: u8,
    pub secondary: Option<u8>,
    pub mask: Option<u8>,
    pub asymmetric: bool,
}

/// Stepper and rider table slot 0 is reserved for "none", hence `NonZeroU8`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Movement {
    pub slider: Directions,
    pub hopper: Directions,
    pub stepper: Option<NonZeroU8>,
    pub rider: Option<NonZeroU8>,
    pub leaper: Option<Leaper>,
}

impl Movement {
    pub fn is_empty(&self) -> bool {
        *self == Movement::default()
    }
}

impl From<Movement> for MoveFlag {
    fn from(movement: Movement) -> MoveFlag {
        let mut flag = MoveFlag::NONE
            .with_slider(movement.slider)
            .with_hopper(movement.hopper);

        if let Some(stepper) = movement.stepper {
            flag = flag.with_stepper(stepper.get());
        }

        if let Some(rider) = movement.rider {
            flag = flag.with_rider(rider.get());
        }

        if let Some(leaper) = movement.leaper {
            flag = if leaper.asymmetric {
                flag.with_aleaper(leaper.primary)
            } else {
                flag.with_leaper(leaper.primary)
            };

            if let Some(secondary) = leaper.secondary {
                flag = flag.with_second_leaper(secondary);
            }

            if let Some(mask) = leaper.mask {
                flag = flag.with_leaper_mask(mask);
            }
        }

        flag
    }
}

impl From<MoveFlag> for Movement {
    fn from(flag: MoveFlag) -> Movement {
        let leaper = flag.is_leaper().then(|| Leaper {
            primary: flag.leaper_index(),
            secondary: flag
                .is_double_leaper()
                .then(|| flag.second_leaper_index()),
            mask: flag.is_masked_leaper().then(|| flag.leaper_mask_index()),
            asymmetric: flag.is_aleaper(),
        });

        Movement {
            slider: flag.slider_directions(),
            hopper: flag.hopper_directions(),
            stepper: NonZeroU8::new(flag.stepper_index()),
            rider: NonZeroU8::new(flag.rider_index()),
            leaper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_unpacks_as_pure_slider() {
        let rook = MoveFlag::NONE.with_slider(Directions::H | Directions::V);
        let movement = Movement::from(rook);

        assert_eq!(movement.slider, Directions::H | Directions::V);
        assert!(movement.hopper.is_empty());
        assert_eq!(movement.stepper, None);
        assert_eq!(movement.rider, None);
        assert_eq!(movement.leaper, None);
    }

    #[test]
    fn compound_descriptor_survives_packing() {
        let movement = Movement {
            slider: Directions::D | Directions::A,
            hopper: Directions::H,
            stepper: NonZeroU8::new(2),
            rider: NonZeroU8::new(5),
            leaper: Some(Leaper {
                primary: 1,
                secondary: Some(2),
                mask: Some(0),
                asymmetric: true,
            }),
        };

        assert_eq!(Movement::from(MoveFlag::from(movement)), movement);
    }

    #[test]
    fn stray_leaper_bits_without_leaper_are_dropped() {
        let stray = MoveFlag(1 << 29 | 1 << 30);
        assert_eq!(Movement::from(stray).leaper, None);
    }

    #[test]
    fn empty_movement_packs_to_zero() {
        assert!(Movement::default().is_empty());
        assert_eq!(MoveFlag::from(Movement::default()), MoveFlag::NONE);
    }
}
