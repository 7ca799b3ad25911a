//! Dictionary of known puzzle answers
//!
//! Entries are grouped by category, and also pooled into one flat list
//! together with the individual words of every PHRASE entry. A dictionary is
//! immutable once built; the embedded one is built on first use and shared.

mod embedded;
pub mod loader;

pub use embedded::{PEOPLE, PEOPLE_COUNT, PHRASES, PHRASES_COUNT, PLACES, PLACES_COUNT};

use crate::core::{Category, SEPARATOR};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Shortest phrase word that is pooled as a standalone entry, exclusive
const MIN_POOLED_WORD_LEN: usize = 2;

static EMBEDDED: LazyLock<Dictionary> = LazyLock::new(|| {
    Dictionary::from_sections([
        (Category::Phrase, loader::entries_from_slice(PHRASES)),
        (Category::Person, loader::entries_from_slice(PEOPLE)),
        (Category::Place, loader::entries_from_slice(PLACES)),
    ])
});

/// Read-only answer dictionary
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_category: FxHashMap<Category, Vec<String>>,
    /// Categories in the order they were first added
    sections: Vec<Category>,
    words: Vec<String>,
    common: Vec<String>,
}

impl Dictionary {
    /// The dictionary built from the embedded seed lists
    ///
    /// # Examples
    /// ```
    /// use fortune_solver::core::Category;
    /// use fortune_solver::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.entries(Category::Phrase).iter().any(|e| e == "GOOD AS NEW"));
    /// ```
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// Build a dictionary from category sections
    ///
    /// Sections for the same category are concatenated. The flat pool holds
    /// every entry in section order, followed by the words longer than two
    /// letters taken from PHRASE entries.
    pub fn from_sections<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<String>)>,
    {
        let mut dictionary = Self::default();

        for (category, entries) in sections {
            if !dictionary.by_category.contains_key(&category) {
                dictionary.sections.push(category);
            }
            dictionary.common.extend(entries.iter().cloned());
            dictionary
                .by_category
                .entry(category)
                .or_default()
                .extend(entries);
        }

        dictionary.words = dictionary
            .entries(Category::Phrase)
            .iter()
            .flat_map(|phrase| phrase.split(SEPARATOR))
            .filter(|word| word.len() > MIN_POOLED_WORD_LEN)
            .map(str::to_string)
            .collect();
        dictionary.common.extend(dictionary.words.iter().cloned());

        dictionary
    }

    /// Entries of one category, in insertion order
    ///
    /// Returns an empty slice for a category with no entries.
    #[must_use]
    pub fn entries(&self, category: Category) -> &[String] {
        self.by_category
            .get(&category)
            .map_or(&[], Vec::as_slice)
    }

    /// The flat pool: every entry, then the pooled phrase words
    #[inline]
    #[must_use]
    pub fn common(&self) -> &[String] {
        &self.common
    }

    /// Individual words pooled from PHRASE entries
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Categories that have entries, in the order they were added
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.sections
    }

    /// Every `(category, entry)` pair, section by section
    pub fn categorized(&self) -> impl Iterator<Item = (Category, &str)> {
        self.sections.iter().flat_map(|&category| {
            self.entries(category)
                .iter()
                .map(move |entry| (category, entry.as_str()))
        })
    }

    /// Total number of category entries, pooled words excluded
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
