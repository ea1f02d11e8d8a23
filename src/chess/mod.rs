//! Board model and piece rules for non-attacking placements on a bounded board.

pub mod board;
pub mod census;
pub mod geometry;
pub mod layout;
pub mod piece;
pub mod territory;
