//! Low-level geometry and set primitives.
//!
//! - [`coord`]: signed coordinates and the fixed king / knight step sets.
//! - [`bitset`]: a word-packed bit vector with one bit per board square.

pub mod bitset;
pub mod coord;
