//! Letter advice command
//!
//! Ranks letters to call by English frequency, without needing a solution.

use crate::core::{Category, LetterSet};
use crate::solver::{BONUS_ROUND_LETTERS, LetterScore, MAX_SUGGESTIONS, score_letters};

/// Result of frequency-based letter advice
pub struct AdviceResult {
    pub revealed: LetterSet,
    pub category: Category,
    /// Every unrevealed letter, best first
    pub scores: Vec<LetterScore>,
}

impl AdviceResult {
    /// The top letters to call
    #[must_use]
    pub fn suggestions(&self) -> Vec<char> {
        self.scores
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|s| s.letter)
            .collect()
    }
}

/// Advise which letters to call given the letters already revealed
///
/// `revealed` may be any text; only its letters count. `clue` is
/// classified like a solve clue.
///
/// # Examples
/// ```
/// use fortune_solver::commands::letter_advice;
///
/// let advice = letter_advice("rstlne", "");
/// assert_eq!(advice.suggestions(), ['A', 'O', 'I', 'H', 'D']);
/// ```
#[must_use]
pub fn letter_advice(revealed: &str, clue: &str) -> AdviceResult {
    let revealed = LetterSet::from_text(&revealed.to_uppercase());
    let category = Category::classify(clue);
    AdviceResult {
        revealed,
        category,
        scores: score_letters(revealed, category),
    }
}

/// Letters handed out for free in the bonus round
#[must_use]
pub const fn free_letters() -> [char; 6] {
    BONUS_ROUND_LETTERS
}
