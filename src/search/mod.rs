//! Search layer: the placement generator and the solver driving it.

pub mod permutations;
pub mod solver;
