//! Puzzle solving command
//!
//! Solves one board and returns the full analysis for display.

use crate::error::SolveError;
use crate::solver::{Analysis, SolveRequest, Solver};

/// Configuration for solving a board
pub struct SolveConfig {
    pub request: SolveRequest,
    /// How many candidates to keep for display
    pub max_candidates: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(request: SolveRequest) -> Self {
        Self {
            request,
            max_candidates: 10,
        }
    }

    /// Build a config from command-line parts; a missing clue means no clue
    ///
    /// # Errors
    ///
    /// Returns `SolveError::MissingArgument` if no puzzle was given.
    pub fn from_args(puzzle: Option<&str>, clue: Option<&str>) -> Result<Self, SolveError> {
        SolveRequest::from_parts(puzzle, Some(clue.unwrap_or_default())).map(Self::new)
    }
}

/// Solve a board with the given solver
///
/// The candidate list in the returned analysis is cut to
/// `config.max_candidates`; confidence is computed over the full list.
#[must_use]
pub fn solve_puzzle<'d>(config: &SolveConfig, solver: &Solver<'d>) -> Analysis<'d> {
    let mut analysis = solver.analyze(&config.request.puzzle, &config.request.clue);
    analysis.candidates.truncate(config.max_candidates);
    analysis
}
