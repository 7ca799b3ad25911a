//! Main puzzle solver interface

use super::confidence::Confidence;
use super::matcher::{MatchPass, find_candidates};
use super::suggest::suggest_from_solution;
use crate::core::{Category, Pattern, PuzzleText};
use crate::dictionary::Dictionary;
use crate::error::SolveError;
use log::debug;

/// One unit of work: raw board text and a raw clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub puzzle: String,
    pub clue: String,
}

impl SolveRequest {
    pub fn new(puzzle: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            puzzle: puzzle.into(),
            clue: clue.into(),
        }
    }

    /// Build a request from optional parts
    ///
    /// Empty strings are valid; only a missing value is rejected.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::MissingArgument` naming the first absent field.
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::error::SolveError;
    /// use fortune_solver::solver::SolveRequest;
    ///
    /// assert!(SolveRequest::from_parts(Some(""), Some("")).is_ok());
    /// assert_eq!(
    ///     SolveRequest::from_parts(Some("W_EEL"), None),
    ///     Err(SolveError::MissingArgument("clue"))
    /// );
    /// ```
    pub fn from_parts(puzzle: Option<&str>, clue: Option<&str>) -> Result<Self, SolveError> {
        let puzzle = puzzle.ok_or(SolveError::MissingArgument("puzzle"))?;
        let clue = clue.ok_or(SolveError::MissingArgument("clue"))?;
        Ok(Self::new(puzzle, clue))
    }
}

/// What the solver hands back for a request
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Best candidate, or the normalized board when nothing matched
    pub solution: String,
    /// Up to five distinct letters, none already on the board
    pub suggested_letters: Vec<char>,
    /// In `[0, 1]`
    pub confidence: f64,
}

/// Everything the solver worked out on the way to a [`SolveResult`]
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<'d> {
    pub puzzle: PuzzleText,
    pub category: Category,
    pub pass: MatchPass,
    pub candidates: Vec<&'d str>,
    pub confidence: Confidence,
    pub result: SolveResult,
}

impl Analysis<'_> {
    /// True if a dictionary entry was chosen rather than the board echoed back
    #[must_use]
    pub fn matched(&self) -> bool {
        !self.candidates.is_empty()
    }
}

/// Puzzle solver over a read-only dictionary
///
/// Holds no mutable state, so one solver can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Solver<'d> {
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Solve a board given a clue
    ///
    /// Never fails: with no match the solution is the normalized board.
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::solver::Solver;
    ///
    /// let result = Solver::embedded().solve("g__d _s n_w", "phrase");
    /// assert_eq!(result.solution, "GOOD AS NEW");
    /// assert_eq!(result.suggested_letters, ['O', 'A', 'E', 'T', 'I']);
    /// ```
    #[must_use]
    pub fn solve(&self, puzzle: &str, clue: &str) -> SolveResult {
        self.analyze(puzzle, clue).result
    }

    /// Solve a prepared request
    #[must_use]
    pub fn handle(&self, request: &SolveRequest) -> SolveResult {
        self.solve(&request.puzzle, &request.clue)
    }

    /// Solve and keep every intermediate step
    #[must_use]
    pub fn analyze(&self, puzzle: &str, clue: &str) -> Analysis<'d> {
        let puzzle = PuzzleText::normalize(puzzle);
        let category = Category::classify(clue);
        debug!("normalized {puzzle:?}, category {category:?}");

        let pattern = Pattern::from_puzzle(&puzzle);
        let candidates = find_candidates(self.dictionary, &pattern, category);

        let solution = candidates
            .best()
            .map_or_else(|| puzzle.as_str().to_string(), str::to_string);
        debug!(
            "{} candidates via {} pass, chose {solution:?}",
            candidates.len(),
            candidates.pass
        );

        let suggested_letters = suggest_from_solution(&puzzle, &solution);
        let confidence = Confidence::estimate(candidates.len(), &puzzle, &solution);

        let result = SolveResult {
            solution,
            suggested_letters,
            confidence: confidence.value(),
        };

        Analysis {
            puzzle,
            category,
            pass: candidates.pass,
            candidates: candidates.entries,
            confidence,
            result,
        }
    }
}

impl Solver<'static> {
    /// Solver over the embedded seed dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Dictionary::embedded())
    }
}

/// Solve against the embedded dictionary
///
/// # Examples
/// ```
/// let result = fortune_solver::solver::solve("ZZZZZ", "");
/// assert_eq!(result.solution, "ZZZZZ");
/// ```
#[must_use]
pub fn solve(puzzle: &str, clue: &str) -> SolveResult {
    Solver::embedded().solve(puzzle, clue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn exact_single_candidate() {
        let analysis = Solver::embedded().analyze("____ __ ___", "PHRASE");
        assert_eq!(analysis.category, Category::Phrase);
        assert_eq!(analysis.pass, MatchPass::Category);
        assert_eq!(analysis.candidates, ["GOOD AS NEW"]);
        assert_eq!(analysis.result.solution, "GOOD AS NEW");
        // A = 1.0, nothing revealed so B = 0.2, C = 1.0
        assert!(approx(analysis.confidence.candidates, 1.0));
        assert!(approx(analysis.confidence.reveal, 0.2));
        assert!(approx(analysis.confidence.fit, 1.0));
        assert!(approx(analysis.result.confidence, 0.76));
    }

    #[test]
    fn fully_revealed_single_candidate_is_certain() {
        let result = solve("GOOD AS NEW", "PHRASE");
        assert_eq!(result.solution, "GOOD AS NEW");
        assert!(approx(result.confidence, 1.0));
    }

    #[test]
    fn no_match_echoes_normalized_board() {
        let analysis = Solver::embedded().analyze("zz zzz", "");
        assert_eq!(analysis.pass, MatchPass::None);
        assert!(!analysis.matched());
        assert_eq!(analysis.result.solution, "ZZ ZZZ");

        let result = solve("ZZZZZ", "");
        assert_eq!(result.solution, "ZZZZZ");
        assert_eq!(result.suggested_letters, ['E', 'T', 'A', 'O', 'I']);
        // A = 0.0, B = 1.0, C = 1.0
        assert!(approx(result.confidence, 0.6));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let analysis = Solver::embedded().analyze("", "");
        assert_eq!(analysis.category, Category::Unknown);
        assert_eq!(analysis.result.solution, "");
        assert_eq!(analysis.result.suggested_letters, ['E', 'T', 'A', 'O', 'I']);
        // A = 0.0, B = 0.2, C = 1.0
        assert!(approx(analysis.result.confidence, 0.36));
    }

    #[test]
    fn person_clue_prefers_person_entry() {
        // HELEN KELLER and DEATH VALLEY share the same shape
        let person = solve("_____ ______", "PERSON");
        assert_eq!(person.solution, "HELEN KELLER");

        let place = solve("_____ ______", "PLACE");
        assert_eq!(place.solution, "DEATH VALLEY");
    }

    #[test]
    fn clue_keywords_pick_category() {
        let analysis = Solver::embedded().analyze("_____ ______", "famous actress");
        assert_eq!(analysis.category, Category::Person);
        assert_eq!(analysis.result.solution, "HELEN KELLER");
    }

    #[test]
    fn round_trip_keeps_solution_with_full_fit() {
        let solver = Solver::embedded();
        for (puzzle, clue) in [
            ("_____ ______", "PERSON"),
            ("G__D _S N_W", "PHRASE"),
            ("_HEEL", ""),
            ("ZZZZZ", ""),
            ("R___ _____", "PLACE"),
        ] {
            let first = solver.solve(puzzle, clue);
            let again = solver.analyze(&first.solution, clue);
            assert_eq!(again.result.solution, first.solution, "for {puzzle}");
            assert!(approx(again.confidence.fit, 1.0), "for {puzzle}");
        }
    }

    #[test]
    fn results_respect_bounds() {
        let solver = Solver::embedded();
        for (puzzle, clue) in [
            ("", ""),
            ("123 !!!", "anything"),
            ("_____ __ _______", "PHRASE"),
            ("G__D AS ____", ""),
            ("ñ-ñ-ñ", "place"),
            ("_ _ _ _ _   _ _   _ _ _ _ _ _", "PHRASE"),
            ("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "THING"),
        ] {
            let analysis = solver.analyze(puzzle, clue);
            let result = &analysis.result;
            assert!((0.0..=1.0).contains(&result.confidence));
            assert!(result.suggested_letters.len() <= 5);
            let revealed = analysis.puzzle.revealed_letters();
            let distinct: LetterSet = result.suggested_letters.iter().copied().collect();
            assert_eq!(distinct.len(), result.suggested_letters.len());
            for &c in &result.suggested_letters {
                assert!(c.is_ascii_uppercase());
                assert!(!revealed.contains(c));
            }
        }
    }

    #[test]
    fn handle_matches_solve() {
        let request = SolveRequest::new("W_EEL", "");
        let solver = Solver::embedded();
        assert_eq!(solver.handle(&request), solver.solve("W_EEL", ""));
    }

    #[test]
    fn from_parts_requires_both_fields() {
        assert_eq!(
            SolveRequest::from_parts(None, Some("PHRASE")),
            Err(SolveError::MissingArgument("puzzle"))
        );
        assert_eq!(
            SolveRequest::from_parts(None, None),
            Err(SolveError::MissingArgument("puzzle"))
        );
        assert_eq!(
            SolveRequest::from_parts(Some("A"), Some("B")),
            Ok(SolveRequest::new("A", "B"))
        );
    }

    #[test]
    fn custom_dictionary() {
        let dictionary = Dictionary::from_sections([(
            Category::FoodAndDrink,
            vec!["APPLE PIE".to_string()],
        )]);
        let solver = Solver::new(&dictionary);
        let analysis = solver.analyze("A___E P_E", "Food & Drink");
        assert_eq!(analysis.category, Category::FoodAndDrink);
        assert_eq!(analysis.pass, MatchPass::Category);
        assert_eq!(analysis.result.solution, "APPLE PIE");
    }
}
