//! Dictionary loading utilities
//!
//! Custom dictionaries are plain text files made of category sections:
//!
//! ```text
//! # comment
//! [PHRASE]
//! GOOD AS NEW
//! [FOOD & DRINK]
//! APPLE PIE
//! ```

use super::Dictionary;
use crate::core::{Category, SEPARATOR};
use crate::error::DictionaryError;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load a sectioned dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read, names an unknown
/// category, has entries before the first section, or holds no entries.
///
/// # Examples
/// ```no_run
/// use fortune_solver::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/custom.txt").unwrap();
/// println!("Loaded {} entries", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse(&content)?;
    debug!(
        "loaded {} entries in {} categories from {}",
        dictionary.len(),
        dictionary.categories().len(),
        path.display()
    );
    Ok(dictionary)
}

/// Parse sectioned dictionary text
///
/// # Errors
///
/// See [`load_from_file`].
pub fn parse(content: &str) -> Result<Dictionary, DictionaryError> {
    let mut sections: Vec<(Category, Vec<String>)> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(name) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let category =
                name.parse::<Category>()
                    .map_err(|_| DictionaryError::UnknownCategory {
                        line: line_no,
                        name: name.to_string(),
                    })?;
            sections.push((category, Vec::new()));
            continue;
        }

        let Some((_, entries)) = sections.last_mut() else {
            return Err(DictionaryError::EntryOutsideSection { line: line_no });
        };

        match normalize_entry(trimmed) {
            Some(entry) => entries.push(entry),
            None => warn!("line {line_no}: skipping entry {trimmed:?} with no letters"),
        }
    }

    let dictionary = Dictionary::from_sections(sections);
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty);
    }
    Ok(dictionary)
}

/// Normalize a raw entry to uppercase letters and single spaces
///
/// Returns `None` if nothing is left.
///
/// # Examples
/// ```
/// use fortune_solver::dictionary::loader::normalize_entry;
///
/// assert_eq!(normalize_entry("  Good as  new! ").as_deref(), Some("GOOD AS NEW"));
/// assert_eq!(normalize_entry("42"), None);
/// ```
#[must_use]
pub fn normalize_entry(raw: &str) -> Option<String> {
    let upper = raw.to_uppercase();
    let entry = upper
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_uppercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string());

    (!entry.is_empty()).then_some(entry)
}

/// Convert an embedded string slice to normalized entries
///
/// # Examples
/// ```
/// use fortune_solver::dictionary::loader::entries_from_slice;
/// use fortune_solver::dictionary::PHRASES;
///
/// let entries = entries_from_slice(PHRASES);
/// assert_eq!(entries.len(), PHRASES.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_entry(s)).collect()
}
