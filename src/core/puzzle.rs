//! Puzzle board text
//!
//! A `PuzzleText` is the canonical form of what is on the board: uppercase
//! letters, the blank marker `_`, and single spaces between words.

use super::LetterSet;
use std::fmt;

/// Marker for an unrevealed letter position
pub const BLANK: char = '_';

/// Word separator on the board
pub const SEPARATOR: char = ' ';

/// Normalized puzzle board text
///
/// Only `A`-`Z`, `_` and single inner spaces survive normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PuzzleText(String);

impl PuzzleText {
    /// Clean raw OCR or user text into a puzzle board
    ///
    /// Uppercases, drops everything that is not a letter, space, underscore or
    /// hyphen, turns hyphens into blanks, collapses runs of spaces and trims.
    /// Never fails; the result may be empty.
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::core::PuzzleText;
    ///
    /// let puzzle = PuzzleText::normalize("  g--d 4s  n_w!\n");
    /// assert_eq!(puzzle.as_str(), "G__D S N_W");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        let mut text = String::with_capacity(upper.len());
        let mut pending_space = false;

        for c in upper.chars() {
            let c = match c {
                'A'..='Z' | BLANK => c,
                '-' => BLANK,
                SEPARATOR => {
                    pending_space = !text.is_empty();
                    continue;
                }
                _ => continue,
            };
            if pending_space {
                text.push(SEPARATOR);
                pending_space = false;
            }
            text.push(c);
        }

        Self(text)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters on the board, separators included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letters already showing on the board
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        LetterSet::from_text(&self.0)
    }

    /// Count of revealed letter positions (repeats counted)
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.chars().filter(char::is_ascii_uppercase).count()
    }

    /// Count of blank positions
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.0.chars().filter(|&c| c == BLANK).count()
    }

    /// True if no blank remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.blank_count() == 0
    }

    /// Words of the board, split on the separator
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|w| !w.is_empty())
    }

    /// Board a contestant would see for `answer` once `revealed` letters are called
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::core::{LetterSet, PuzzleText};
    ///
    /// let board = PuzzleText::masked("GOOD AS NEW", LetterSet::from_text("RSTLNE"));
    /// assert_eq!(board.as_str(), "____ _S NE_");
    /// ```
    #[must_use]
    pub fn masked(answer: &str, revealed: LetterSet) -> Self {
        let answer = Self::normalize(answer);
        Self(
            answer
                .0
                .chars()
                .map(|c| {
                    if c == SEPARATOR || revealed.contains(c) {
                        c
                    } else {
                        BLANK
                    }
                })
                .collect(),
        )
    }
}

impl fmt::Display for PuzzleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PuzzleText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
