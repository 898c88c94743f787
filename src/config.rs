use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the catalog file when none is given.
pub const CATALOG_ENV: &str = "DOCTAGS_CATALOG";

/// Environment variable holding extra non-words (comma or space separated).
pub const NON_WORDS_ENV: &str = "DOCTAGS_NON_WORDS";

/// Settings resolved from command-line flags and the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    catalog: Option<PathBuf>,
    non_words: Option<String>,
}

impl Settings {
    /// Resolve settings, in order of priority:
    /// 1. Explicit values (from the command line)
    /// 2. The `DOCTAGS_CATALOG` / `DOCTAGS_NON_WORDS` environment variables
    pub fn resolve(
        catalog: Option<&Path>,
        non_words: Option<&str>,
    ) -> Self {
        Self::resolve_with(catalog, non_words, |key| std::env::var(key).ok())
    }

    /// Same as [`resolve`](Self::resolve) with a custom environment lookup.
    pub fn resolve_with(
        catalog: Option<&Path>,
        non_words: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let catalog = catalog
            .map(Path::to_path_buf)
            .or_else(|| env(CATALOG_ENV).map(PathBuf::from));
        let non_words = non_words
            .map(str::to_string)
            .or_else(|| env(NON_WORDS_ENV))
            .filter(|w| !w.trim().is_empty());

        Self { catalog, non_words }
    }

    pub fn catalog(&self) -> Result<&Path> {
        self.catalog.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "no catalog given; pass a path or set {CATALOG_ENV}"
            ))
        })
    }

    pub fn non_words(&self) -> Option<&str> {
        self.non_words.as_deref()
    }
}
