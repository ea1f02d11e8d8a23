use serde::{Deserialize, Serialize};

use crate::chess::piece::PieceKind;
use crate::error::ConfigError;

/// How many pieces of each kind to place in one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PieceCensus {
    pub king: usize,
    pub queen: usize,
    pub rook: usize,
    pub bishop: usize,
    pub knight: usize,
}

impl PieceCensus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: PieceKind, n: usize) -> Self {
        self.set(kind, n);
        self
    }

    pub fn with_kings(self, n: usize) -> Self {
        self.with(PieceKind::King, n)
    }

    pub fn with_queens(self, n: usize) -> Self {
        self.with(PieceKind::Queen, n)
    }

    pub fn with_rooks(self, n: usize) -> Self {
        self.with(PieceKind::Rook, n)
    }

    pub fn with_bishops(self, n: usize) -> Self {
        self.with(PieceKind::Bishop, n)
    }

    pub fn with_knights(self, n: usize) -> Self {
        self.with(PieceKind::Knight, n)
    }

    /// Build from loosely typed `(label, quantity)` pairs, e.g. parsed command-line flags.
    ///
    /// Repeated labels accumulate.
    pub fn from_labels<I, S>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut census = Self::new();
        for (label, quantity) in pairs {
            let kind: PieceKind = label.as_ref().parse()?;
            if quantity < 0 {
                return Err(ConfigError::NegativeQuantity { kind, quantity });
            }
            let n = usize::try_from(quantity)
                .ok()
                .and_then(|q| census.count(kind).checked_add(q))
                .ok_or(ConfigError::CountOverflow { kind })?;
            census.set(kind, n);
        }
        Ok(census)
    }

    pub fn count(&self, kind: PieceKind) -> usize {
        use PieceKind::*;
        match kind {
            King => self.king,
            Queen => self.queen,
            Rook => self.rook,
            Bishop => self.bishop,
            Knight => self.knight,
        }
    }

    pub fn set(&mut self, kind: PieceKind, n: usize) {
        use PieceKind::*;
        let slot = match kind {
            King => &mut self.king,
            Queen => &mut self.queen,
            Rook => &mut self.rook,
            Bishop => &mut self.bishop,
            Knight => &mut self.knight,
        };
        *slot = n;
    }

    /// Number of pieces of every kind, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.checked_total().unwrap_or(usize::MAX)
    }

    fn checked_total(&self) -> Option<usize> {
        PieceKind::ALL
            .iter()
            .try_fold(0usize, |acc, &k| acc.checked_add(self.count(k)))
    }

    /// Fails when there is nothing to place, or when the pieces cannot all fit on
    /// `squares` distinct squares.
    pub fn validate(&self, squares: usize) -> Result<(), ConfigError> {
        let pieces = self.checked_total().unwrap_or(usize::MAX);
        if pieces == 0 {
            return Err(ConfigError::EmptyCensus);
        }
        if pieces > squares {
            return Err(ConfigError::TooManyPieces { pieces, squares });
        }
        Ok(())
    }

    /// Kinds with a non-zero count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, usize)> + '_ {
        PieceKind::ALL
            .into_iter()
            .map(|k| (k, self.count(k)))
            .filter(|&(_, n)| n > 0)
    }

    pub fn summary(&self) -> String {
        // compact, deterministic order
        self.iter()
            .map(|(k, c)| format!("{:?}x{}", k, c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
