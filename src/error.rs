//! Error taxonomy.
//!
//! - [`ConfigError`]: malformed solver or board construction input. Fatal for that instance.
//! - [`BoundsError`]: an index or coordinate outside the board.
//! - [`SnapshotError`]: a serialized board that cannot be rebuilt by replaying its pieces.
//! - [`PlacementError`]: why [`crate::chess::board::Board::add`] refused a piece. The three
//!   conflict variants are expected during search and are recovered by skipping a branch.

use thiserror::Error;

use crate::chess::piece::PieceKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {length}x{height}")]
    InvalidDimensions { length: usize, height: usize },

    #[error("board {length}x{height} exceeds the maximum side of {max}")]
    BoardTooLarge {
        length: usize,
        height: usize,
        max: usize,
    },

    #[error("no piece provided")]
    EmptyCensus,

    #[error("unknown piece kind {0:?}")]
    UnknownPieceKind(String),

    #[error("negative quantity {quantity} for {kind:?}")]
    NegativeQuantity { kind: PieceKind, quantity: i64 },

    #[error("piece count overflows for {kind:?}")]
    CountOverflow { kind: PieceKind },

    #[error("{pieces} pieces cannot fit on a board of {squares} squares")]
    TooManyPieces { pieces: usize, squares: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundsError {
    #[error("linear index {index} not in a board of {size} squares")]
    ForbiddenIndex { index: usize, size: usize },

    #[error("x={x}, y={y} outside of {length}x{height} board")]
    ForbiddenCoordinates {
        x: i64,
        y: i64,
        length: usize,
        height: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("square {index} is already occupied")]
    OccupiedPosition { index: usize },

    #[error("square {index} is reachable by a placed piece")]
    ExposedPosition { index: usize },

    #[error("a piece on square {index} would attack a placed piece")]
    AttackablePiece { index: usize },

    #[error(transparent)]
    OutOfBounds(#[from] BoundsError),
}

impl PlacementError {
    /// True for the three placement conflicts, false for bounds violations.
    #[inline]
    pub fn is_conflict(&self) -> bool {
        !matches!(self, PlacementError::OutOfBounds(_))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("piece on square {index} recorded at ({x}, {y})")]
    CoordinateMismatch { index: usize, x: i32, y: i32 },
}
