//! Keyword extraction used to auto-tag documents.
//!
//! Text is lowercased and scanned for runs of at least three ASCII word
//! characters that start and end on a letter or digit. Underscores may
//! appear inside a keyword but never at its edges, so `"foo_bar"` is one
//! keyword while `"_a_"` yields nothing.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::non_words::NonWordSet;

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z0-9][a-z0-9_]+[a-z0-9]").expect("valid keyword regex")
});

/// Words the caller wants kept out of an extraction result.
///
/// Built from a list of words or from a comma-separated tag string such
/// as a document's caller-supplied `tags`. Entries are compared trimmed
/// and lowercased, the same normalization extracted keywords go through.
#[derive(Debug, Clone, Default)]
pub struct ExcludeList {
    words: HashSet<String>,
}

impl ExcludeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a comma-separated tag string into an exclusion list.
    pub fn from_comma_separated(tags: &str) -> Self {
        tags.split(',').collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExcludeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

impl From<&str> for ExcludeList {
    fn from(tags: &str) -> Self {
        Self::from_comma_separated(tags)
    }
}

impl From<&[&str]> for ExcludeList {
    fn from(words: &[&str]) -> Self {
        words.iter().collect()
    }
}

impl From<&[String]> for ExcludeList {
    fn from(words: &[String]) -> Self {
        words.iter().collect()
    }
}

impl From<Vec<String>> for ExcludeList {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

/// Extract the ordered, deduplicated keywords of `text`.
///
/// A keyword is dropped if it was already emitted, if it is one of
/// `non_words`, or if it appears in `exclude`. Returns an empty list when
/// nothing matches.
///
/// # Examples
///
/// ```
/// use doctags::{ExcludeList, NonWordSet, extract_keywords};
///
/// let mut non_words = NonWordSet::new();
/// non_words.extend("the");
///
/// let exclude = ExcludeList::from("rust");
/// let words =
///     extract_keywords("The Rust book, the RUST way", &exclude, &non_words);
/// assert_eq!(words, ["book", "way"]);
/// ```
pub fn extract_keywords(
    text: &str,
    exclude: &ExcludeList,
    non_words: &NonWordSet,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut result: Vec<String> = Vec::new();

    for m in KEYWORD_RE.find_iter(&lowered) {
        let word = m.as_str();
        if result.iter().any(|seen| seen == word)
            || non_words.contains(word)
            || exclude.contains(word)
        {
            continue;
        }
        result.push(word.to_string());
    }

    result
}
