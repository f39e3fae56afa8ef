//! # notation.rs
//!
//! Parses textual movement descriptions into movement descriptors.
//!
//! A description is a `|`-separated list of components:
//!
//! - `slide (H,V)` / `hop (D,A)`: slider or hopper along the given lines
//! - `leap (2,1)`: symmetric leaper; `+` joins shapes, e.g. `(1,0)+(1,1)`
//! - `leap (1,0)x(1,1)&(1,2)`: double leaper (leg, then second leap) with an
//!   optional mask restricting the destinations
//! - `aleap (0,1),(1,1)`: asymmetric leaper, offsets as seen by White
//!
//! Shapes in a list may be joined with `+` or `,`. Offsets must move the
//! piece and lie within -127..=127.
//! - `step 2N,E,W`: stepper with per-direction step counts
//! - `ride (1,2)` / `ride (1,2)x3`: rider with an optional repeat bound
//!
//! Shapes, steppers and riders are registered in the variant's
//! `MovementTables`, whose indices end up in the returned `MoveFlag`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 10/02/2026

use lazy_static::lazy_static;
use regex::Regex;
use std::num::NonZeroU8;
use twiddling::Bits;

use crate::{
    constants::*,
    errors::MovementError,
    moves::movement_tables::MovementTables,
    representations::{
        move_flag::{Directions, MoveFlag},
        movement::{Leaper, Movement},
    },
};

lazy_static! {
    static ref COMPONENT_PATTERN: Regex = Regex::new(
        r"^\s*(slide|hop|aleap|leap|step|ride)\s*(.*?)\s*$"
    ).unwrap();
    static ref DIRECTIONS_PATTERN: Regex = Regex::new(
        r"^\(\s*([HVDA](?:\s*,\s*[HVDA])*)\s*\)$"
    ).unwrap();
    static ref PAIR_PATTERN: Regex = Regex::new(
        r"\(\s*(-?\d+)\s*,\s*(-?\d+)\s*\)"
    ).unwrap();
    static ref SHAPE_PATTERN: Regex = Regex::new(
        r"^\(\s*-?\d+\s*,\s*-?\d+\s*\)(?:\s*[+,]\s*\(\s*-?\d+\s*,\s*-?\d+\s*\))*$"
    ).unwrap();
    static ref LEAP_PATTERN: Regex = Regex::new(
        r"^(?P<primary>[^x&]+?)\s*(?:x\s*(?P<second>[^&]+?))?\s*(?:&\s*(?P<mask>.+))?$"
    ).unwrap();
    static ref STEP_PATTERN: Regex = Regex::new(
        r"^(\d*)(NE|NW|SE|SW|N|E|S|W)$"
    ).unwrap();
    static ref RIDE_PATTERN: Regex = Regex::new(
        r"^(?P<shape>\([^)]*\))\s*(?:x\s*(?P<count>\d+))?$"
    ).unwrap();
}

fn parse_directions(text: &str) -> Result<Directions, MovementError> {
    let captures = DIRECTIONS_PATTERN
        .captures(text)
        .ok_or_else(|| MovementError::UnknownDirection(text.to_string()))?;

    let mut directions = Directions::NONE;
    for letter in captures[1].split(',').map(str::trim) {
        directions = directions | match letter {
            "H" => Directions::H,
            "V" => Directions::V,
            "D" => Directions::D,
            _ => Directions::A,
        };
    }

    Ok(directions)
}

fn parse_shape(text: &str) -> Result<Vec<(i8, i8)>, MovementError> {
    let text = text.trim();
    if !SHAPE_PATTERN.is_match(text) {
        return Err(MovementError::MalformedShape(text.to_string()));
    }

    PAIR_PATTERN
        .captures_iter(text)
        .map(|pair| {
            let x = pair[1].parse::<i8>();
            let y = pair[2].parse::<i8>();
            match (x, y) {
                (Ok(x), Ok(y)) => Ok((x, y)),
                _ => Err(MovementError::MalformedShape(pair[0].to_string())),
            }
        })
        .collect()
}

fn parse_steps(text: &str, steps: &mut [u8; 8]) -> Result<(), MovementError> {
    for token in text.split(',').map(str::trim) {
        let captures = STEP_PATTERN
            .captures(token)
            .ok_or_else(|| MovementError::UnknownDirection(token.to_string()))?;

        let count: u32 = if captures[1].is_empty() {
            1
        } else {
            captures[1]
                .parse()
                .map_err(|_| MovementError::StepCount(u32::MAX))?
        };
        if count > 15 {
            return Err(MovementError::StepCount(count));
        }

        let direction = match &captures[2] {
            "N" => NORTH,
            "NE" => NORTH_EAST,
            "E" => EAST,
            "SE" => SOUTH_EAST,
            "S" => SOUTH,
            "SW" => SOUTH_WEST,
            "W" => WEST,
            _ => NORTH_WEST,
        };

        steps[direction] = steps[direction].max(count as u8);
    }

    Ok(())
}

fn parse_leap<B: Bits>(
    text: &str,
    asymmetric: bool,
    tables: &mut MovementTables<B>,
) -> Result<Leaper, MovementError> {
    if asymmetric {
        let primary = tables.add_leaper(&parse_shape(text)?, true)?;
        return Ok(Leaper { primary, asymmetric, ..Default::default() });
    }

    let captures = LEAP_PATTERN
        .captures(text)
        .ok_or_else(|| MovementError::MalformedShape(text.to_string()))?;

    let primary = tables.add_leaper(&parse_shape(&captures["primary"])?, false)?;

    let secondary = match captures.name("second") {
        Some(second) => Some(tables.add_leaper(&parse_shape(second.as_str())?, false)?),
        None => None,
    };

    let mask = match captures.name("mask") {
        Some(mask) => Some(tables.add_leaper(&parse_shape(mask.as_str())?, false)?),
        None => None,
    };

    Ok(Leaper { primary, secondary, mask, asymmetric })
}

/// Parses a movement description, registering any new shapes in `tables`.
///
/// # Examples
///
/// ```ignore
/// let rook = parse_movement("slide (H,V)", &mut tables)?;
/// let king = parse_movement("step N,NE,E,SE,S,SW,W,NW", &mut tables)?;
/// ```
pub fn parse_movement<B: Bits>(
    text: &str,
    tables: &mut MovementTables<B>,
) -> Result<MoveFlag, MovementError> {
    if text.trim().is_empty() {
        return Err(MovementError::Empty);
    }

    let mut movement = Movement::default();
    let mut steps = [0u8; 8];

    for component in text.split('|') {
        let captures = COMPONENT_PATTERN
            .captures(component)
            .ok_or_else(|| MovementError::UnknownComponent(component.trim().to_string()))?;
        let argument = captures.get(2).map_or("", |m| m.as_str());

        match &captures[1] {
            "slide" => {
                movement.slider = movement.slider | parse_directions(argument)?;
            }
            "hop" => {
                movement.hopper = movement.hopper | parse_directions(argument)?;
            }
            "step" => parse_steps(argument, &mut steps)?,
            "ride" => {
                if movement.rider.is_some() {
                    return Err(MovementError::UnknownComponent(component.trim().to_string()));
                }

                let ride = RIDE_PATTERN
                    .captures(argument)
                    .ok_or_else(|| MovementError::MalformedShape(argument.to_string()))?;
                let shape = parse_shape(&ride["shape"])?;
                let max_repeats = match ride.name("count") {
                    Some(count) => count
                        .as_str()
                        .parse::<u8>()
                        .map_err(|_| MovementError::MalformedShape(argument.to_string()))?,
                    None => 0,
                };

                let index = tables.add_rider(shape[0], max_repeats)?;
                movement.rider = NonZeroU8::new(index);
            }
            kind => {
                if movement.leaper.is_some() {                                  /* One leaper per descriptor, use '+' */
                    return Err(MovementError::UnknownComponent(component.trim().to_string()));
                }

                movement.leaper = Some(parse_leap(argument, kind == "aleap", tables)?);
            }
        }
    }

    if steps.iter().any(|&n| n != 0) {
        movement.stepper = NonZeroU8::new(tables.add_stepper(steps)?);
    }

    Ok(MoveFlag::from(movement))
}
