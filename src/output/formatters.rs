//! Formatting utilities for terminal output

use crate::core::{BLANK, PuzzleText, SEPARATOR};

/// Render a board as tiles, e.g. `[G][ ][ ][D]  [ ][S]`
///
/// Blanks become empty tiles; words are separated by two spaces.
#[must_use]
pub fn board_tiles(puzzle: &PuzzleText) -> String {
    let mut result = String::with_capacity(puzzle.len() * 3);
    for c in puzzle.as_str().chars() {
        match c {
            SEPARATOR => result.push_str("  "),
            BLANK => result.push_str("[ ]"),
            letter => {
                result.push('[');
                result.push(letter);
                result.push(']');
            }
        }
    }
    result
}

/// Letters joined with single spaces, e.g. `E T A`
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, &letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(letter);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format confidence in `[0, 1]` as a bar
#[must_use]
pub fn confidence_bar(confidence: f64, width: usize) -> String {
    create_progress_bar(confidence, 1.0, width)
}

/// Coarse label for a confidence value
#[must_use]
pub fn confidence_label(confidence: f64) -> &'static str {
    match confidence {
        c if c >= 0.8 => "high",
        c if c >= 0.5 => "medium",
        _ => "low",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_tiles_blanks_and_words() {
        let puzzle = PuzzleText::normalize("G__D _S");
        assert_eq!(board_tiles(&puzzle), "[G][ ][ ][D]  [ ][S]");
    }

    #[test]
    fn board_tiles_empty() {
        assert_eq!(board_tiles(&PuzzleText::default()), "");
    }

    #[test]
    fn letter_list_spacing() {
        assert_eq!(letter_list(&['E', 'T', 'A']), "E T A");
        assert_eq!(letter_list(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn confidence_bar_clamps() {
        assert_eq!(confidence_bar(0.76, 10), "███████░░░");
        assert_eq!(confidence_bar(2.0, 4), "████");
        assert_eq!(confidence_bar(-1.0, 4), "░░░░");
    }

    #[test]
    fn confidence_labels() {
        assert_eq!(confidence_label(1.0), "high");
        assert_eq!(confidence_label(0.76), "medium");
        assert_eq!(confidence_label(0.36), "low");
    }
}
