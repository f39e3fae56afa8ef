pub mod representations {
    pub mod geometry;
    pub mod move_flag;
    pub mod movement;
    pub mod piece_flags;
    pub mod side;
}

pub mod moves {
    pub mod movement_tables;
    pub mod notation;
}

pub mod constants;
pub mod errors;
pub mod hash;
pub mod pieces;
pub mod rules;
