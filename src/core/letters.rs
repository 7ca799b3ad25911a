//! Letter sets and English letter statistics
//!
//! A `LetterSet` is a 26-bit mask over `A`-`Z`. The frequency table is kept in
//! descending frequency order so that stable sorts keep that order on ties.

use std::fmt;

/// Relative frequency of each letter in English text, most common first
pub const ENGLISH_FREQUENCY: [(char, f64); 26] = [
    ('E', 12.02),
    ('T', 9.10),
    ('A', 8.12),
    ('O', 7.68),
    ('I', 7.31),
    ('N', 6.95),
    ('S', 6.28),
    ('R', 6.02),
    ('H', 5.92),
    ('D', 4.32),
    ('L', 3.98),
    ('U', 2.88),
    ('C', 2.71),
    ('M', 2.61),
    ('F', 2.30),
    ('Y', 2.11),
    ('W', 2.09),
    ('G', 2.03),
    ('P', 1.82),
    ('B', 1.49),
    ('V', 1.11),
    ('K', 0.69),
    ('X', 0.17),
    ('Q', 0.11),
    ('J', 0.10),
    ('Z', 0.07),
];

/// The five vowels
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Consonants that come up most often on the board
pub const COMMON_CONSONANTS: [char; 5] = ['R', 'S', 'T', 'L', 'N'];

/// Look up the English frequency weight of a letter
///
/// Returns 0.0 for anything outside `A`-`Z`.
#[must_use]
pub fn english_frequency(letter: char) -> f64 {
    ENGLISH_FREQUENCY
        .iter()
        .find(|&&(l, _)| l == letter)
        .map_or(0.0, |&(_, weight)| weight)
}

/// A set of uppercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: char) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(1 << (letter as u32 - 'A' as u32))
        } else {
            None
        }
    }

    /// Collect every `A`-`Z` character of `text`
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::core::LetterSet;
    ///
    /// let set = LetterSet::from_text("G__D _S");
    /// assert!(set.contains('G'));
    /// assert!(set.contains('S'));
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Insert a letter; characters outside `A`-`Z` are ignored
    ///
    /// Returns true if the letter was newly added.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any vowel is in the set
    #[must_use]
    pub fn has_vowel(self) -> bool {
        VOWELS.iter().any(|&v| self.contains(v))
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('A'..='Z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_table_covers_alphabet() {
        let set: LetterSet = ENGLISH_FREQUENCY.iter().map(|&(c, _)| c).collect();
        assert_eq!(set.len(), 26);
    }

    #[test]
    fn frequency_table_is_descending() {
        for pair in ENGLISH_FREQUENCY.windows(2) {
            assert!(pair[0].1 > pair[1].1, "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn english_frequency_lookup() {
        assert!((english_frequency('E') - 12.02).abs() < f64::EPSILON);
        assert!((english_frequency('Z') - 0.07).abs() < f64::EPSILON);
        assert!(english_frequency('_').abs() < f64::EPSILON);
    }

    #[test]
    fn insert_ignores_non_letters() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert('A'));
        assert!(!set.insert('A'));
        assert!(!set.insert('_'));
        assert!(!set.insert(' '));
        assert!(!set.insert('a'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iter_is_alphabetical() {
        let set = LetterSet::from_text("ZEBRA");
        assert_eq!(set.iter().collect::<String>(), "ABERZ");
        assert_eq!(set.to_string(), "ABERZ");
    }

    #[test]
    fn vowel_detection() {
        assert!(!LetterSet::from_text("RSTLN").has_vowel());
        assert!(LetterSet::from_text("RSTLNE").has_vowel());
        assert!(!LetterSet::EMPTY.has_vowel());
    }
}
