//! Enumerate every placement of a set of chess pieces on a rectangular board such that no
//! piece occupies or threatens another's square.
//!
//! - [`chess`]: board model, piece movement rules, territories
//! - [`search`]: the pruning permutation generator and the [`Solver`]
//! - [`scenarios`]: built-in benchmark runs and the JSON scenario format
//!
//! ```
//! use chessboard::{PieceCensus, Solver};
//!
//! let mut solver = Solver::new(3, 3, PieceCensus::new().with_kings(2).with_rooks(1)).unwrap();
//! assert_eq!(solver.solve().count(), 4);
//! assert_eq!(solver.result_counter(), 4);
//! ```

pub mod chess;
pub mod core;
pub mod error;
pub mod scenarios;
pub mod search;

pub use chess::board::{Board, PlacedPiece};
pub use chess::census::PieceCensus;
pub use chess::piece::PieceKind;
pub use error::{BoundsError, ConfigError, PlacementError, SnapshotError};
pub use search::solver::{Solutions, Solver, SolverStats};
