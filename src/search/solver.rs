//! Exhaustive search for non-attacking placements.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::chess::board::Board;
use crate::chess::census::PieceCensus;
use crate::chess::geometry::Dimensions;
use crate::chess::layout::PieceLayout;
use crate::chess::piece::PieceKind;
use crate::chess::territory::TerritoryCache;
use crate::error::{ConfigError, PlacementError};
use crate::search::permutations::Permutations;

/// Counters describing a solve run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Boards yielded so far.
    pub solutions: usize,
    /// Permutations drawn from the generator.
    pub permutations: u64,
    pub skipped_branches: u64,
    pub occupied_conflicts: u64,
    pub exposed_conflicts: u64,
    pub attack_conflicts: u64,
    /// Wall time spent inside the solution stream.
    pub elapsed: Duration,
}

impl SolverStats {
    fn record_conflict(&mut self, err: &PlacementError) {
        match err {
            PlacementError::OccupiedPosition { .. } => self.occupied_conflicts += 1,
            PlacementError::ExposedPosition { .. } => self.exposed_conflicts += 1,
            PlacementError::AttackablePiece { .. } => self.attack_conflicts += 1,
            PlacementError::OutOfBounds(_) => {}
        }
    }
}

/// A board shape and a piece census to enumerate placements for.
#[derive(Debug, Clone)]
pub struct Solver {
    dims: Dimensions,
    census: PieceCensus,
    layout: PieceLayout,
    cache: TerritoryCache,
    stats: SolverStats,
}

impl Solver {
    pub fn new(length: usize, height: usize, census: PieceCensus) -> Result<Self, ConfigError> {
        let dims = Dimensions::new(length, height)?;
        census.validate(dims.size())?;
        let layout = PieceLayout::from_census(&census);
        Ok(Self {
            dims,
            census,
            layout,
            cache: TerritoryCache::new(),
            stats: SolverStats::default(),
        })
    }

    /// Build from `(label, quantity)` pairs, e.g. `[("king", 2), ("rook", 1)]`.
    pub fn from_labels<I, S>(length: usize, height: usize, pieces: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        Self::new(length, height, PieceCensus::from_labels(pieces)?)
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
    pub fn census(&self) -> &PieceCensus {
        &self.census
    }

    #[inline]
    pub fn layout(&self) -> &PieceLayout {
        &self.layout
    }

    /// Number of solutions yielded by the last (or current) [`Solver::solve`] stream.
    #[inline]
    pub fn result_counter(&self) -> usize {
        self.stats.solutions
    }

    #[inline]
    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    #[inline]
    pub fn cache(&self) -> &TerritoryCache {
        &self.cache
    }

    /// Lazily enumerate every valid placement, depth-first.
    ///
    /// Each item is an owned snapshot. Dropping the stream early abandons the rest of the
    /// search. Starting a new stream resets the counters; the territory cache is kept.
    pub fn solve(&mut self) -> Solutions<'_> {
        self.stats = SolverStats::default();
        debug!(
            length = self.dims.length,
            height = self.dims.height,
            pieces = %self.census.summary(),
            "solve started"
        );
        Solutions {
            permutations: Permutations::new(&self.layout, self.dims.size()),
            kinds: self.layout.kinds().to_vec(),
            board: Board::with_dimensions(self.dims),
            started: Instant::now(),
            solver: self,
        }
    }

    /// Run the search to completion and return the number of solutions.
    pub fn count(&mut self) -> usize {
        self.solve().count()
    }
}

/// Stream of solution boards produced by [`Solver::solve`].
#[derive(Debug)]
pub struct Solutions<'a> {
    solver: &'a mut Solver,
    permutations: Permutations,
    kinds: Vec<PieceKind>,
    board: Board,
    started: Instant,
}

impl Solutions<'_> {
    /// Counters so far, including the time spent in this stream.
    pub fn stats(&self) -> SolverStats {
        SolverStats {
            elapsed: self.started.elapsed(),
            ..self.solver.stats
        }
    }

    fn finish(&mut self) {
        self.solver.stats.elapsed = self.started.elapsed();
        info!(
            solutions = self.solver.stats.solutions,
            permutations = self.solver.stats.permutations,
            skipped_branches = self.solver.stats.skipped_branches,
            elapsed_ms = self.solver.stats.elapsed.as_millis() as u64,
            "solve finished"
        );
    }
}

impl Iterator for Solutions<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        if self.permutations.is_exhausted() {
            return None;
        }

        loop {
            let Some(positions) = self.permutations.try_next() else {
                self.finish();
                return None;
            };
            self.solver.stats.permutations += 1;

            self.board.reset();
            let mut failed = None;
            for (level, (&kind, &index)) in self.kinds.iter().zip(positions).enumerate() {
                if let Err(err) = self.board.add_cached(kind, index, &mut self.solver.cache) {
                    debug_assert!(err.is_conflict(), "generator produced {err}");
                    self.solver.stats.record_conflict(&err);
                    failed = Some(level);
                    break;
                }
            }

            match failed {
                Some(level) => {
                    trace!(level, "skipping branch");
                    self.solver.stats.skipped_branches += 1;
                    self.permutations.skip_branch(level);
                }
                None => {
                    self.solver.stats.solutions += 1;
                    self.solver.stats.elapsed = self.started.elapsed();
                    return Some(self.board.clone());
                }
            }
        }
    }
}
