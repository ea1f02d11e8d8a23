//! Piece movement rules and the squares each piece covers.
//!
//! A piece's *territory* is its own square plus every square it reaches in one move on an
//! otherwise empty board. Placement checks reduce to bit-vector intersections against it.

use rustc_hash::FxHashMap;

use crate::chess::geometry::Dimensions;
use crate::chess::piece::PieceKind;
use crate::core::bitset::Bitset;
use crate::core::coord::{Coord, KING_STEPS, KNIGHT_JUMPS};
use crate::error::BoundsError;

/// Relative shifts a piece standing on `at` may move by.
///
/// Leapers return their fixed step set, which may point off the board. Sliders return
/// every shift along their rays up to the board edge.
pub fn movements(kind: PieceKind, dims: Dimensions, at: Coord) -> Vec<Coord> {
    use PieceKind::*;
    match kind {
        King => KING_STEPS.to_vec(),
        Knight => KNIGHT_JUMPS.to_vec(),
        Queen | Rook | Bishop => {
            let mut out = Vec::new();
            for &dir in kind.slide_dirs() {
                let reach = ray_length(dir, dims, at);
                out.extend((1..=reach).map(|d| dir * d));
            }
            out
        }
    }
}

/// Number of squares between `at` and the edge, walking along `dir`.
///
/// Diagonals stop at whichever of the two relevant edges comes first.
fn ray_length(dir: Coord, dims: Dimensions, at: Coord) -> i32 {
    let to_edge = |step: i32, pos: i32, side: usize| match step {
        1 => side as i32 - 1 - pos,
        -1 => pos,
        _ => i32::MAX,
    };
    to_edge(dir.x, at.x, dims.length)
        .min(to_edge(dir.y, at.y, dims.height))
        .max(0)
}

/// Squares occupied or reachable by a `kind` piece on square `index`.
pub fn territory(kind: PieceKind, dims: Dimensions, index: usize) -> Result<Bitset, BoundsError> {
    let at = dims.index_to_coordinates(index)?;
    let mut out = Bitset::new(dims.size());
    out.set(index);

    for shift in movements(kind, dims, at) {
        // Off-board shifts are simply not part of the territory.
        if let Ok(target) = dims.coordinates_to_index(at.x, at.y, shift.x, shift.y) {
            out.set(target);
        }
    }
    Ok(out)
}

type TerritoryKey = (usize, usize, PieceKind, usize);

/// Memoized [`territory`] results keyed by `(length, height, kind, index)`.
///
/// Entries are pure functions of their key, so insertion is idempotent. A cache belongs to
/// one solver; concurrent solves use one cache each.
#[derive(Debug, Default, Clone)]
pub struct TerritoryCache {
    map: FxHashMap<TerritoryKey, Bitset>,
    hits: u64,
    misses: u64,
}

impl TerritoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        kind: PieceKind,
        dims: Dimensions,
        index: usize,
    ) -> Result<&Bitset, BoundsError> {
        use std::collections::hash_map::Entry;

        match self.map.entry((dims.length, dims.height, kind, index)) {
            Entry::Occupied(e) => {
                self.hits += 1;
                Ok(&*e.into_mut())
            }
            Entry::Vacant(e) => {
                let t = territory(kind, dims, index)?;
                self.misses += 1;
                Ok(&*e.insert(t))
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_returns_identical_vectors() {
        let dims = Dimensions::new(5, 4).unwrap();
        let mut cache = TerritoryCache::new();
        let first = cache.get_or_compute(PieceKind::Bishop, dims, 7).unwrap().clone();
        let second = cache.get_or_compute(PieceKind::Bishop, dims, 7).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first, territory(PieceKind::Bishop, dims, 7).unwrap());
        assert_eq!((cache.len(), cache.hits(), cache.misses()), (1, 1, 1));
    }

    #[test]
    fn cache_keys_include_board_shape() {
        let mut cache = TerritoryCache::new();
        let a = Dimensions::new(3, 3).unwrap();
        let b = Dimensions::new(9, 1).unwrap();
        cache.get_or_compute(PieceKind::Rook, a, 0).unwrap();
        cache.get_or_compute(PieceKind::Rook, b, 0).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn bad_index_is_not_cached() {
        let mut cache = TerritoryCache::new();
        let dims = Dimensions::new(2, 2).unwrap();
        assert!(cache.get_or_compute(PieceKind::King, dims, 4).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn slider_shifts_stop_at_the_edge() {
        let dims = Dimensions::new(4, 3).unwrap();
        let mut rook = movements(PieceKind::Rook, dims, Coord::new(1, 0));
        rook.sort();
        assert_eq!(
            rook,
            vec![
                Coord::new(-1, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(2, 0),
            ]
        );
        // Nothing above row 0; one step down-left before the left edge.
        let mut bishop = movements(PieceKind::Bishop, dims, Coord::new(1, 0));
        bishop.sort();
        assert_eq!(
            bishop,
            vec![Coord::new(-1, 1), Coord::new(1, 1), Coord::new(2, 2)]
        );
    }
}
