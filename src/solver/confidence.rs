//! Confidence in a chosen solution
//!
//! Three factors, weighted 0.4 / 0.3 / 0.3:
//! - A: how many candidates were found (fewer is better, none is zero)
//! - B: how much of the board is already revealed
//! - C: how well the solution lines up with the board

use crate::core::{BLANK, PuzzleText, SEPARATOR};

const CANDIDATE_WEIGHT: f64 = 0.4;
const REVEAL_WEIGHT: f64 = 0.3;
const FIT_WEIGHT: f64 = 0.3;

/// Per-factor confidence breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confidence {
    /// Factor A
    pub candidates: f64,
    /// Factor B
    pub reveal: f64,
    /// Factor C
    pub fit: f64,
}

impl Confidence {
    /// Score `solution` for `puzzle`, given how many candidates the search found
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::core::PuzzleText;
    /// use fortune_solver::solver::Confidence;
    ///
    /// let puzzle = PuzzleText::normalize("ZZZZZ");
    /// let confidence = Confidence::estimate(0, &puzzle, "ZZZZZ");
    /// assert_eq!(confidence.candidates, 0.0);
    /// assert_eq!(confidence.fit, 1.0);
    /// ```
    #[must_use]
    pub fn estimate(candidate_count: usize, puzzle: &PuzzleText, solution: &str) -> Self {
        Self {
            candidates: candidate_score(candidate_count),
            reveal: reveal_score(puzzle),
            fit: fit_score(puzzle, solution),
        }
    }

    /// Weighted total in `[0, 1]`
    #[must_use]
    pub fn value(&self) -> f64 {
        (CANDIDATE_WEIGHT * self.candidates + REVEAL_WEIGHT * self.reveal + FIT_WEIGHT * self.fit)
            .clamp(0.0, 1.0)
    }
}

/// Factor A: score by number of candidates
#[must_use]
pub const fn candidate_score(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 1.0,
        2..=3 => 0.8,
        4..=10 => 0.6,
        _ => 0.4,
    }
}

/// Revealed letters over letter-or-blank positions; 0 for an empty board
#[must_use]
pub fn reveal_ratio(puzzle: &PuzzleText) -> f64 {
    let revealed = puzzle.revealed_count();
    let total = revealed + puzzle.blank_count();
    if total == 0 {
        0.0
    } else {
        revealed as f64 / total as f64
    }
}

/// Factor B: score by reveal ratio
#[must_use]
pub fn reveal_score(puzzle: &PuzzleText) -> f64 {
    match reveal_ratio(puzzle) {
        r if r >= 0.7 => 1.0,
        r if r >= 0.5 => 0.8,
        r if r >= 0.3 => 0.6,
        r if r >= 0.1 => 0.4,
        _ => 0.2,
    }
}

/// Factor C: share of board positions consistent with `solution`
///
/// Positions past the end of `solution` count as misses; blanks and
/// separators count as hits wherever the solution reaches.
#[must_use]
pub fn fit_score(puzzle: &PuzzleText, solution: &str) -> f64 {
    if puzzle.as_str() == solution {
        return 1.0;
    }

    let hits = puzzle
        .as_str()
        .chars()
        .zip(solution.chars())
        .filter(|&(p, s)| p == s || p == BLANK || p == SEPARATOR)
        .count();

    hits as f64 / puzzle.len().max(1) as f64
}
