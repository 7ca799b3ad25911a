//! Core domain types for puzzle boards
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and cheap to construct per request.

mod category;
mod letters;
mod pattern;
pub(crate) mod puzzle;

pub use category::{Category, UnknownCategory};
pub use letters::{
    COMMON_CONSONANTS, ENGLISH_FREQUENCY, LetterSet, VOWELS, english_frequency,
};
pub use pattern::{Cell, Pattern};
pub use puzzle::{BLANK, PuzzleText, SEPARATOR};
