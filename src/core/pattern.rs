//! Board patterns for candidate matching
//!
//! A pattern is the board read cell by cell:
//! - blank `_` = any single letter
//! - a letter = that letter (case-insensitive)
//! - separator = exactly one whitespace character
//!
//! Matching is anchored at both ends, so a candidate must have the same shape
//! as the board to match.

use super::puzzle::{BLANK, SEPARATOR};
use super::PuzzleText;

/// One position of a board pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unrevealed position, matches any ASCII letter
    Any,
    /// Revealed letter, stored uppercase
    Letter(char),
    /// Word boundary, matches one whitespace character
    Gap,
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Any => c.is_ascii_alphabetic(),
            Self::Letter(letter) => c.eq_ignore_ascii_case(&letter),
            Self::Gap => c.is_whitespace(),
        }
    }
}

/// Anchored, case-insensitive pattern built from a puzzle board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    /// Build the pattern for a normalized board
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::core::{Pattern, PuzzleText};
    ///
    /// let pattern = Pattern::from_puzzle(&PuzzleText::normalize("G__D _S N_W"));
    /// assert!(pattern.matches("GOOD AS NEW"));
    /// assert!(pattern.matches("good as new"));
    /// assert!(!pattern.matches("GOOD AS NEWS"));
    /// ```
    #[must_use]
    pub fn from_puzzle(puzzle: &PuzzleText) -> Self {
        let cells = puzzle
            .as_str()
            .chars()
            .map(|c| match c {
                BLANK => Cell::Any,
                SEPARATOR => Cell::Gap,
                letter => Cell::Letter(letter),
            })
            .collect();
        Self { cells }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Test a whole candidate against the pattern
    ///
    /// The candidate must have exactly one character per cell.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let mut chars = candidate.chars();
        self.cells
            .iter()
            .all(|cell| chars.next().is_some_and(|c| cell.matches(c)))
            && chars.next().is_none()
    }

    /// Split into one sub-pattern per word
    ///
    /// An empty pattern yields a single empty sub-pattern, which only matches
    /// the empty string.
    #[must_use]
    pub fn words(&self) -> Vec<Self> {
        self.cells
            .split(|&cell| cell == Cell::Gap)
            .map(|cells| Self {
                cells: cells.to_vec(),
            })
            .collect()
    }

    /// Number of words on the board
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Gap).count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(board: &str) -> Pattern {
        Pattern::from_puzzle(&PuzzleText::normalize(board))
    }

    #[test]
    fn blanks_match_any_letter() {
        let p = pattern("____");
        assert!(p.matches("GOOD"));
        assert!(p.matches("abcd"));
        assert!(!p.matches("AB D"));
        assert!(!p.matches("AB1D"));
    }

    #[test]
    fn letters_match_case_insensitively() {
        let p = pattern("G__D");
        assert!(p.matches("GOOD"));
        assert!(p.matches("gOoD"));
        assert!(!p.matches("FOOD"));
    }

    #[test]
    fn gap_matches_single_whitespace() {
        let p = pattern("__ __");
        assert!(p.matches("AS IS"));
        assert!(p.matches("AS\tIS"));
        assert!(!p.matches("ASXIS"));
        assert!(!p.matches("AS  IS"));
    }

    #[test]
    fn anchored_at_both_ends() {
        let p = pattern("___");
        assert!(p.matches("NEW"));
        assert!(!p.matches("NE"));
        assert!(!p.matches("NEWS"));
        assert!(!p.matches(" NEW"));
    }

    #[test]
    fn empty_pattern_matches_only_empty() {
        let p = pattern("");
        assert!(p.is_empty());
        assert!(p.matches(""));
        assert!(!p.matches("A"));
    }

    #[test]
    fn fully_revealed_board_matches_itself() {
        let p = pattern("WHEEL OF FORTUNE");
        assert!(p.matches("WHEEL OF FORTUNE"));
        assert!(!p.matches("WHEEL OF FORTUNA"));
    }

    #[test]
    fn non_ascii_candidates_never_match_blanks() {
        let p = pattern("____");
        assert!(!p.matches("ÉCLA"));
    }

    #[test]
    fn words_split_on_gaps() {
        let p = pattern("G__D _S N_W");
        let words = p.words();
        assert_eq!(words.len(), 3);
        assert_eq!(p.word_count(), 3);
        assert!(words[0].matches("GOOD"));
        assert!(words[1].matches("AS"));
        assert!(words[2].matches("NOW"));
        assert!(!words[2].matches("NEW "));
    }

    #[test]
    fn single_word_pattern() {
        let p = pattern("ZZZZZ");
        assert_eq!(p.word_count(), 1);
        assert_eq!(p.words(), vec![p.clone()]);
    }
}
