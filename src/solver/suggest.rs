//! Letter suggestions
//!
//! Two ranking modes:
//! - solution-based: letters of the chosen solution not yet on the board,
//!   most frequent first, padded from a fixed common-letter list
//! - frequency-based: every unrevealed letter scored by English frequency
//!   with vowel, consonant and category boosts

use crate::core::{COMMON_CONSONANTS, Category, ENGLISH_FREQUENCY, LetterSet, PuzzleText, VOWELS};
use log::{debug, trace};

/// Maximum number of letters suggested at once
pub const MAX_SUGGESTIONS: usize = 5;

/// Padding order when the solution runs out of letters
pub const COMMON_LETTERS: [char; 12] = ['E', 'T', 'A', 'O', 'I', 'N', 'S', 'H', 'R', 'D', 'L', 'U'];

/// Letters given for free in the bonus round
pub const BONUS_ROUND_LETTERS: [char; 6] = ['R', 'S', 'T', 'L', 'N', 'E'];

const VOWEL_BOOST: f64 = 1.5;
const CONSONANT_BOOST: f64 = 1.3;
const CATEGORY_BOOST: f64 = 1.2;

/// A letter with its frequency-mode score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScore {
    pub letter: char,
    pub score: f64,
}

/// Suggest up to five letters to call, given the board and its likely solution
///
/// Letters of `solution` that are not on the board come first, ordered by how
/// often they occur in the solution (ties keep first-seen order). If fewer
/// than five remain, the list is padded from [`COMMON_LETTERS`].
///
/// # Examples
/// ```
/// use fortune_solver::core::PuzzleText;
/// use fortune_solver::solver::suggest_from_solution;
///
/// let puzzle = PuzzleText::normalize("G__D _S N_W");
/// assert_eq!(suggest_from_solution(&puzzle, "GOOD AS NEW"), ['O', 'A', 'E', 'T', 'I']);
/// ```
#[must_use]
pub fn suggest_from_solution(puzzle: &PuzzleText, solution: &str) -> Vec<char> {
    let revealed = puzzle.revealed_letters();

    let mut seen = revealed;
    let mut missing: Vec<(char, usize)> = Vec::new();
    for c in solution.chars() {
        if seen.insert(c) {
            missing.push((c, solution.chars().filter(|&s| s == c).count()));
        }
    }
    // Stable: equal counts keep first-seen order
    missing.sort_by(|a, b| b.1.cmp(&a.1));

    let mut letters: Vec<char> = missing.into_iter().map(|(c, _)| c).collect();
    if letters.len() < MAX_SUGGESTIONS {
        let padding: Vec<char> = COMMON_LETTERS
            .iter()
            .copied()
            .filter(|&c| !seen.contains(c))
            .take(MAX_SUGGESTIONS - letters.len())
            .collect();
        letters.extend(padding);
    }
    letters.truncate(MAX_SUGGESTIONS);

    debug!("suggested {letters:?} for {puzzle} from {solution}");
    letters
}

/// Score every unrevealed letter by frequency, highest first
///
/// Base score is the English frequency; vowels get x1.5 while no vowel is
/// revealed, R/S/T/L/N get x1.3, and the category's boost list x1.2.
/// Ties keep English frequency order.
#[must_use]
pub fn score_letters(revealed: LetterSet, category: Category) -> Vec<LetterScore> {
    let boosted = category.boosted_letters();
    let vowel_revealed = revealed.has_vowel();

    let mut scores: Vec<LetterScore> = ENGLISH_FREQUENCY
        .iter()
        .filter(|&&(letter, _)| !revealed.contains(letter))
        .map(|&(letter, base)| {
            let mut score = base;
            if VOWELS.contains(&letter) {
                if !vowel_revealed {
                    score *= VOWEL_BOOST;
                }
            } else if COMMON_CONSONANTS.contains(&letter) {
                score *= CONSONANT_BOOST;
            }
            if boosted.contains(&letter) {
                score *= CATEGORY_BOOST;
            }
            trace!("{letter}: {base:.2} -> {score:.2}");
            LetterScore { letter, score }
        })
        .collect();

    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

/// Top five letters by frequency score
///
/// # Examples
/// ```
/// use fortune_solver::core::{Category, LetterSet};
/// use fortune_solver::solver::suggest_by_frequency;
///
/// let letters = suggest_by_frequency(LetterSet::EMPTY, Category::Unknown);
/// assert_eq!(letters, ['E', 'A', 'T', 'O', 'I']);
/// ```
#[must_use]
pub fn suggest_by_frequency(revealed: LetterSet, category: Category) -> Vec<char> {
    let letters: Vec<char> = score_letters(revealed, category)
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| s.letter)
        .collect();
    debug!("frequency suggestions {letters:?} (category {category:?}, revealed {revealed})");
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> PuzzleText {
        PuzzleText::normalize(text)
    }

    #[test]
    fn solution_letters_ranked_by_count() {
        // E x3, then O and F x2, then first-seen order
        let letters = suggest_from_solution(&board("_____ __ _______"), "WHEEL OF FORTUNE");
        assert_eq!(letters, ['E', 'O', 'F', 'W', 'H']);
    }

    #[test]
    fn revealed_letters_are_never_suggested() {
        let puzzle = board("_HEEL OF _ORTUNE");
        let letters = suggest_from_solution(&puzzle, "WHEEL OF FORTUNE");
        assert_eq!(letters, ['W', 'A', 'I', 'S', 'D']);
        let revealed = puzzle.revealed_letters();
        assert!(letters.iter().all(|&c| !revealed.contains(c)));
    }

    #[test]
    fn padding_skips_revealed_and_suggested() {
        // N, E and W are missing; padding skips E and the revealed O and A
        let letters = suggest_from_solution(&board("GOOD AS ___"), "GOOD AS NEW");
        assert_eq!(letters, ['N', 'E', 'W', 'T', 'I']);
    }

    #[test]
    fn padding_reaches_five_for_solved_board() {
        let letters = suggest_from_solution(&board("ZZZZZ"), "ZZZZZ");
        assert_eq!(letters, ['E', 'T', 'A', 'O', 'I']);
    }

    #[test]
    fn padding_can_run_out() {
        // Every common letter is revealed; nothing left to suggest
        let puzzle = board("ETAOINSHRDLU");
        let letters = suggest_from_solution(&puzzle, puzzle.as_str());
        assert!(letters.is_empty());

        let puzzle = board("ETAOINSHRDL _");
        let letters = suggest_from_solution(&puzzle, "ETAOINSHRDL U");
        assert_eq!(letters, ['U']);
    }

    #[test]
    fn suggestions_are_distinct_uppercase_and_bounded() {
        for (puzzle, solution) in [
            ("_____ __ _______", "WHEEL OF FORTUNE"),
            ("", ""),
            ("J_ST WH_T TH_ D_CT_R _RD_R_D", "JUST WHAT THE DOCTOR ORDERED"),
            ("QQQ", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        ] {
            let letters = suggest_from_solution(&board(puzzle), solution);
            assert!(letters.len() <= MAX_SUGGESTIONS);
            assert!(letters.iter().all(char::is_ascii_uppercase));
            let distinct: LetterSet = letters.iter().copied().collect();
            assert_eq!(distinct.len(), letters.len());
        }
    }

    #[test]
    fn frequency_mode_no_vowels_revealed() {
        let scores = score_letters(LetterSet::EMPTY, Category::Unknown);
        assert_eq!(scores.len(), 26);
        // E = 12.02 * 1.5, A = 8.12 * 1.5
        assert_eq!(scores[0].letter, 'E');
        assert!((scores[0].score - 18.03).abs() < 1e-9);
        assert_eq!(scores[1].letter, 'A');
        // T = 9.10 * 1.3 = 11.83 edges out O = 7.68 * 1.5 = 11.52
        assert_eq!(scores[2].letter, 'T');
        assert_eq!(scores[3].letter, 'O');
        assert_eq!(scores[4].letter, 'I');
    }

    #[test]
    fn frequency_mode_vowel_boost_stops_once_vowel_revealed() {
        let letters = suggest_by_frequency(LetterSet::from_text("E"), Category::Unknown);
        // T 11.83, N 9.035, S 8.164, A 8.12, R 7.826
        assert_eq!(letters, ['T', 'N', 'S', 'A', 'R']);
    }

    #[test]
    fn frequency_mode_category_boost() {
        let scores = score_letters(LetterSet::from_text("RSTLNE"), Category::Person);
        let m = scores.iter().find(|s| s.letter == 'M').unwrap();
        assert!((m.score - 2.61 * 1.2).abs() < 1e-9);
        let c = scores.iter().find(|s| s.letter == 'C').unwrap();
        assert!((c.score - 2.71).abs() < 1e-9);
        // C and M swap places under the PERSON boost
        let c_pos = scores.iter().position(|s| s.letter == 'C').unwrap();
        let m_pos = scores.iter().position(|s| s.letter == 'M').unwrap();
        assert!(m_pos < c_pos);
    }

    #[test]
    fn frequency_mode_skips_revealed() {
        let revealed = LetterSet::from_text("ETAOIN");
        let scores = score_letters(revealed, Category::Phrase);
        assert_eq!(scores.len(), 20);
        assert!(scores.iter().all(|s| !revealed.contains(s.letter)));
    }

    #[test]
    fn frequency_mode_is_sorted_descending() {
        for category in Category::ALL {
            let scores = score_letters(LetterSet::from_text("RST"), category);
            for pair in scores.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    #[test]
    fn frequency_mode_all_revealed() {
        let all: LetterSet = ('A'..='Z').collect();
        assert!(suggest_by_frequency(all, Category::Unknown).is_empty());
    }

    #[test]
    fn bonus_round_letters() {
        assert_eq!(BONUS_ROUND_LETTERS, ['R', 'S', 'T', 'L', 'N', 'E']);
    }
}
