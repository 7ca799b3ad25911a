//! Puzzle solving
//!
//! Candidate search, letter suggestions and confidence, composed by
//! [`Solver`] into a single request/response operation.

mod confidence;
mod engine;
pub mod matcher;
pub mod suggest;

pub use confidence::{Confidence, candidate_score, fit_score, reveal_ratio, reveal_score};
pub use engine::{Analysis, SolveRequest, SolveResult, Solver, solve};
pub use matcher::{Candidates, MatchPass};
pub use suggest::{
    BONUS_ROUND_LETTERS, LetterScore, MAX_SUGGESTIONS, score_letters, suggest_by_frequency,
    suggest_from_solution,
};
