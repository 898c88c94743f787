//! The stopword set shared by every keyword extraction made through a
//! [`Registry`](crate::Registry).
//!
//! Words only ever get added. Entries are stored trimmed and lowercased,
//! in the order they were first seen.

use std::collections::HashSet;

/// Words excluded from automatic tag extraction.
#[derive(Debug, Clone, Default)]
pub struct NonWordSet {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl NonWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single word. Returns `false` if it was empty or already
    /// present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() || self.lookup.contains(&word) {
            return false;
        }
        self.lookup.insert(word.clone());
        self.ordered.push(word);
        true
    }

    /// Merge every word of `words`, returning how many were new.
    pub fn extend(&mut self, words: impl Into<WordList>) -> usize {
        let mut added = 0;
        for word in words.into().0 {
            if self.insert(&word) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// A batch of words handed to [`NonWordSet::extend`].
///
/// Strings are split on commas and spaces; lists are taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for WordList {
    fn from(words: &str) -> Self {
        Self(
            words
                .split([',', ' '])
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl From<String> for WordList {
    fn from(words: String) -> Self {
        Self::from(words.as_str())
    }
}

impl From<&String> for WordList {
    fn from(words: &String) -> Self {
        Self::from(words.as_str())
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self(words)
    }
}

impl From<Vec<&str>> for WordList {
    fn from(words: Vec<&str>) -> Self {
        Self::from(words.as_slice())
    }
}

impl From<&[&str]> for WordList {
    fn from(words: &[&str]) -> Self {
        Self(words.iter().map(|w| w.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for WordList {
    fn from(words: [&str; N]) -> Self {
        Self::from(words.as_slice())
    }
}
