//! # errors.rs
//!
//! Defines the recoverable errors of the rules representation.
//!
//! Only data coming from outside the crate can fail in a recoverable way,
//! which in practice means movement descriptions handed over by a variant
//! loader. Misuse of the tables themselves (out-of-range indices, bit scans
//! of empty boards) is a programming error and is asserted instead.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/02/2026

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovementError {
    #[error("empty movement description")]
    Empty,

    #[error("unknown movement component: {0}")]
    UnknownComponent(String),

    #[error("malformed shape list: {0}")]
    MalformedShape(String),

    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    #[error("step count {0} does not fit in 4 bits")]
    StepCount(u32),

    #[error("{kind} table is full ({capacity} entries)")]
    TableFull {
        kind: &'static str,
        capacity: usize,
    },
}
