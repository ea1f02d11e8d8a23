//! Built-in benchmark scenarios and the on-disk scenario format.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chess::census::PieceCensus;
use crate::error::ConfigError;
use crate::search::solver::Solver;

/// One solve run: a board shape and the pieces to place on it.
///
/// Scenario files are JSON arrays of these, e.g.
/// `[{"name": "tiny", "length": 3, "height": 3, "pieces": {"king": 2, "rook": 1}}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub length: usize,
    pub height: usize,
    pub pieces: PieceCensus,
}

impl ScenarioSpec {
    pub fn new(name: impl Into<String>, length: usize, height: usize, pieces: PieceCensus) -> Self {
        Self {
            name: name.into(),
            length,
            height,
            pieces,
        }
    }

    pub fn solver(&self) -> Result<Solver, ConfigError> {
        Solver::new(self.length, self.height, self.pieces)
    }

    /// Solve to completion, timing the run.
    pub fn run(&self) -> Result<ScenarioReport, ConfigError> {
        let mut solver = self.solver()?;
        let solutions = solver.count();
        Ok(ScenarioReport {
            scenario: self.clone(),
            solutions,
            execution_time: solver.stats().elapsed,
        })
    }
}

/// Outcome of [`ScenarioSpec::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    #[serde(flatten)]
    pub scenario: ScenarioSpec,
    pub solutions: usize,
    pub execution_time: Duration,
}

fn n_queens(n: usize) -> ScenarioSpec {
    ScenarioSpec::new(
        format!("queens_{n}x{n}"),
        n,
        n,
        PieceCensus::new().with_queens(n),
    )
}

fn big_family(n: usize) -> ScenarioSpec {
    ScenarioSpec::new(
        format!("family_{n}x{n}"),
        n,
        n,
        PieceCensus::new()
            .with_kings(2)
            .with_queens(2)
            .with_bishops(2)
            .with_knights(1),
    )
}

/// The benchmark set: tiny boards, the N-queens problems up to 8x8, and the big family.
pub fn builtin() -> Vec<ScenarioSpec> {
    let mut out = vec![
        ScenarioSpec::new(
            "kings_rook_3x3",
            3,
            3,
            PieceCensus::new().with_kings(2).with_rooks(1),
        ),
        ScenarioSpec::new(
            "rooks_knights_4x4",
            4,
            4,
            PieceCensus::new().with_rooks(2).with_knights(4),
        ),
    ];
    out.extend((1..=8).map(n_queens));
    out.extend([5, 6].map(big_family));
    out
}

/// Return a built-in scenario by name.
pub fn by_name(name: &str) -> Option<ScenarioSpec> {
    builtin().into_iter().find(|s| s.name == name)
}

/// Names of all built-in scenarios.
pub fn available_names() -> Vec<String> {
    builtin().into_iter().map(|s| s.name).collect()
}

/// Parse a JSON scenario list.
pub fn from_json(text: &str) -> Result<Vec<ScenarioSpec>, serde_json::Error> {
    serde_json::from_str(text)
}
