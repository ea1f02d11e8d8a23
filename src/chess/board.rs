use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::geometry::Dimensions;
use crate::chess::piece::PieceKind;
use crate::chess::territory::{territory, TerritoryCache};
use crate::core::bitset::Bitset;
use crate::core::coord::Coord;
use crate::error::{BoundsError, ConfigError, PlacementError, SnapshotError};

/// A piece standing on a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub kind: PieceKind,
    pub index: usize,
    pub x: i32,
    pub y: i32,
}

/// Board of arbitrary dimensions holding pieces that never threaten each other.
///
/// State is two bit vectors over the squares:
/// - `occupancy`: squares holding a piece
/// - `exposed`: squares occupied or reachable by at least one placed piece
///
/// Every occupied square is exposed, since a territory includes its own square.
/// The only mutators are [`Board::add`] (and its cached variant), which either place
/// a piece or leave the board untouched, and [`Board::reset`].
///
/// A serialized board is read back by replaying its pieces through [`Board::add`];
/// the stored bit vectors are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    dims: Dimensions,
    occupancy: Bitset,
    exposed: Bitset,
    pieces: Vec<PlacedPiece>,
}

impl Board {
    pub fn new(length: usize, height: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_dimensions(Dimensions::new(length, height)?))
    }

    pub fn with_dimensions(dims: Dimensions) -> Self {
        Self {
            dims,
            occupancy: Bitset::new(dims.size()),
            exposed: Bitset::new(dims.size()),
            pieces: Vec::new(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.dims.length
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dims.size()
    }

    pub fn index_to_coordinates(&self, index: usize) -> Result<Coord, BoundsError> {
        self.dims.index_to_coordinates(index)
    }

    pub fn coordinates_to_index(
        &self,
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
    ) -> Result<usize, BoundsError> {
        self.dims.coordinates_to_index(x, y, dx, dy)
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord> {
        self.dims.positions()
    }

    #[inline]
    pub fn occupancy(&self) -> &Bitset {
        &self.occupancy
    }

    #[inline]
    pub fn exposed_territory(&self) -> &Bitset {
        &self.exposed
    }

    #[inline]
    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    /// The piece standing on `(x, y)`, if any.
    pub fn get(&self, x: i32, y: i32) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|p| p.x == x && p.y == y)
    }

    /// Place a `kind` piece on square `index`.
    ///
    /// Checks, in order: the square is free, the square is not reachable by a placed
    /// piece, and the new piece's territory does not reach a placed piece.
    pub fn add(&mut self, kind: PieceKind, index: usize) -> Result<(), PlacementError> {
        self.check_square(index)?;
        let t = territory(kind, self.dims, index)?;
        self.commit(kind, index, &t)
    }

    /// Same as [`Board::add`], reusing territories from `cache`.
    pub fn add_cached(
        &mut self,
        kind: PieceKind,
        index: usize,
        cache: &mut TerritoryCache,
    ) -> Result<(), PlacementError> {
        self.check_square(index)?;
        let t = cache.get_or_compute(kind, self.dims, index)?;
        self.commit(kind, index, t)
    }

    /// Remove all pieces, keeping the allocated vectors.
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.occupancy.clear_all();
        self.exposed.clear_all();
    }

    fn check_square(&self, index: usize) -> Result<(), PlacementError> {
        self.dims.validate_index(index)?;
        if self.occupancy.get(index) {
            return Err(PlacementError::OccupiedPosition { index });
        }
        if self.exposed.get(index) {
            return Err(PlacementError::ExposedPosition { index });
        }
        Ok(())
    }

    fn commit(
        &mut self,
        kind: PieceKind,
        index: usize,
        territory: &Bitset,
    ) -> Result<(), PlacementError> {
        if territory.intersects(&self.occupancy) {
            return Err(PlacementError::AttackablePiece { index });
        }

        let at = self.dims.index_to_coordinates(index)?;
        self.pieces.push(PlacedPiece {
            kind,
            index,
            x: at.x,
            y: at.y,
        });
        self.occupancy.set(index);
        self.exposed.union_with(territory);
        Ok(())
    }
}

#[derive(Deserialize)]
struct SnapshotDimensions {
    length: usize,
    height: usize,
}

#[derive(Deserialize)]
struct BoardSnapshot {
    dims: SnapshotDimensions,
    pieces: Vec<PlacedPiece>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = SnapshotError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let mut board = Board::new(snapshot.dims.length, snapshot.dims.height)?;
        for p in snapshot.pieces {
            board.add(p.kind, p.index)?;
            let at = board
                .index_to_coordinates(p.index)
                .map_err(PlacementError::from)?;
            if (at.x, at.y) != (p.x, p.y) {
                return Err(SnapshotError::CoordinateMismatch {
                    index: p.index,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Unicode box-art, one cell per square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = |left: &str, mid: &str, right: &str| {
            format!("{left}{}{right}", vec!["───"; self.length()].join(mid))
        };

        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        for y in 0..self.height() as i32 {
            for x in 0..self.length() as i32 {
                let symbol = self.get(x, y).map_or(' ', |p| p.kind.symbol());
                write!(f, "│ {symbol} ")?;
            }
            writeln!(f, "│")?;
            if y + 1 < self.height() as i32 {
                writeln!(f, "{}", rule("├", "┼", "┤"))?;
            }
        }
        write!(f, "{}", rule("└", "┴", "┘"))
    }
}
