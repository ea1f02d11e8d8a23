use serde::Serialize;

use crate::core::coord::Coord;
use crate::error::{BoundsError, ConfigError};

/// Largest supported board side.
///
/// Keeps every coordinate and shifted probe inside `i32`, and every square
/// index (and therefore every permutation counter) inside `usize`.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Shape of a rectangular board and the linear indexing of its squares.
///
/// Squares are numbered row-major: `index = y * length + x`, with `(0, 0)`
/// top-left and `x` the fast-varying axis.
///
/// ```text
///       0 1 2 3 …   x
///     0 . . . .
///     1 . . . .
///     2 . . . .
///     …
///     y
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    pub length: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(length: usize, height: usize) -> Result<Self, ConfigError> {
        if length == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { length, height });
        }
        if length > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ConfigError::BoardTooLarge {
                length,
                height,
                max: MAX_DIMENSION,
            });
        }
        Ok(Self { length, height })
    }

    /// Number of squares on the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.length * self.height
    }

    pub fn validate_index(&self, index: usize) -> Result<(), BoundsError> {
        if index >= self.size() {
            return Err(BoundsError::ForbiddenIndex {
                index,
                size: self.size(),
            });
        }
        Ok(())
    }

    pub fn validate_coordinates(&self, x: i64, y: i64) -> Result<(), BoundsError> {
        if x < 0 || y < 0 || x >= self.length as i64 || y >= self.height as i64 {
            return Err(BoundsError::ForbiddenCoordinates {
                x,
                y,
                length: self.length,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn index_to_coordinates(&self, index: usize) -> Result<Coord, BoundsError> {
        self.validate_index(index)?;
        let x = index % self.length;
        let y = index / self.length;
        Ok(Coord::new(x as i32, y as i32))
    }

    /// Linear index of `(x + dx, y + dy)`.
    ///
    /// Only the shifted target is validated, so callers can probe offsets from
    /// an on-board origin without a separate bounds check.
    pub fn coordinates_to_index(
        &self,
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
    ) -> Result<usize, BoundsError> {
        let tx = x as i64 + dx as i64;
        let ty = y as i64 + dy as i64;
        self.validate_coordinates(tx, ty)?;
        Ok(ty as usize * self.length + tx as usize)
    }

    /// All `(x, y)` positions in linear index order.
    pub fn positions(&self) -> impl Iterator<Item = Coord> {
        let (length, height) = (self.length as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..length).map(move |x| Coord::new(x, y)))
    }
}
