//! Candidate search over the dictionary
//!
//! Three passes, each tried only if the previous found nothing:
//! 1. entries of the clue's category
//! 2. the flat common pool
//! 3. word-by-word partial matching of multi-word phrases

use crate::core::{Category, Pattern, SEPARATOR};
use crate::dictionary::Dictionary;
use log::debug;
use std::fmt;

/// Which search pass produced the candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPass {
    /// Full-pattern match within the clue's category
    Category,
    /// Full-pattern match over the common pool
    Common,
    /// Word-level partial match
    Partial,
    /// Nothing matched
    None,
}

impl fmt::Display for MatchPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::Common => "common pool",
            Self::Partial => "partial",
            Self::None => "none",
        })
    }
}

/// Result of a candidate search, in dictionary order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<'d> {
    pub pass: MatchPass,
    pub entries: Vec<&'d str>,
}

impl<'d> Candidates<'d> {
    /// The best candidate is simply the first one found
    #[must_use]
    pub fn best(&self) -> Option<&'d str> {
        self.entries.first().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Search the dictionary for entries shaped like `pattern`
pub fn find_candidates<'d>(
    dictionary: &'d Dictionary,
    pattern: &Pattern,
    category: Category,
) -> Candidates<'d> {
    if category.is_known() {
        let entries = exact_matches(dictionary.entries(category), pattern);
        if !entries.is_empty() {
            debug!("{} {category} entries match", entries.len());
            return Candidates {
                pass: MatchPass::Category,
                entries,
            };
        }
    }

    let entries = exact_matches(dictionary.common(), pattern);
    if !entries.is_empty() {
        debug!("{} common entries match", entries.len());
        return Candidates {
            pass: MatchPass::Common,
            entries,
        };
    }

    let entries = partial_matches(dictionary.common(), pattern);
    let pass = if entries.is_empty() {
        MatchPass::None
    } else {
        MatchPass::Partial
    };
    debug!("{} partial matches", entries.len());
    Candidates { pass, entries }
}

/// Entries matching the whole pattern, in list order
#[must_use]
pub fn exact_matches<'d>(entries: &'d [String], pattern: &Pattern) -> Vec<&'d str> {
    entries
        .iter()
        .map(String::as_str)
        .filter(|entry| pattern.matches(entry))
        .collect()
}

/// Multi-word phrases where at least half the words fit their word pattern
///
/// A phrase qualifies only if it has as many words as the pattern; the
/// threshold is `words / 2` rounded down, so two-word phrases need one hit.
#[must_use]
pub fn partial_matches<'d>(entries: &'d [String], pattern: &Pattern) -> Vec<&'d str> {
    let word_patterns = pattern.words();
    if word_patterns.len() < 2 {
        return Vec::new();
    }

    entries
        .iter()
        .map(String::as_str)
        .filter(|phrase| {
            let words: Vec<&str> = phrase.split(SEPARATOR).collect();
            if words.len() != word_patterns.len() {
                return false;
            }
            let hits = words
                .iter()
                .zip(&word_patterns)
                .filter(|(word, word_pattern)| word_pattern.matches(word))
                .count();
            hits >= words.len() / 2
        })
        .collect()
}
