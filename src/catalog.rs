//! Declarative catalog manifests.
//!
//! A catalog is a JSON description of non-words and projects that gets
//! replayed through [`Registry::add`] and the builder, so it is subject to
//! exactly the same validation as hand-written calls:
//!
//! ```
//! use doctags::{Registry, catalog::Catalog};
//!
//! let catalog = Catalog::from_json(
//!     r#"{
//!         "nonWords": "the,a",
//!         "projects": [{
//!             "projectId": "p1",
//!             "projectName": "Proj One",
//!             "categories": [{"name": "cat1", "display": "Cat One"}],
//!             "docs": [{"docId": "doc1", "docName": "The Hello World"}]
//!         }]
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut registry = Registry::new();
//! let rejected = catalog.load_into(&mut registry);
//! assert!(rejected.is_empty());
//!
//! let doc = registry.project("p1").unwrap().doc("doc1").unwrap();
//! assert_eq!(doc.tags(), "hello,world");
//! ```

use std::path::Path;

use serde::{Deserialize, de::IgnoredAny};

use crate::{
    error::{Error, RegistrationError, Result},
    non_words::WordList,
    project::{Category, DocOptions, DocSpec},
    registry::Registry,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub non_words: NonWordsEntry,
    pub projects: Vec<ProjectEntry>,
}

/// Non-words as either a comma/space separated string or a list. Any
/// other JSON value is accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NonWordsEntry {
    Text(String),
    List(Vec<String>),
    Other(IgnoredAny),
}

impl Default for NonWordsEntry {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub project_id: String,
    pub project_name: String,
    pub categories: Vec<Category>,
    pub docs: Vec<DocEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocEntry {
    pub doc_id: String,
    pub doc_name: String,
    pub category: Option<String>,
    #[serde(flatten)]
    pub options: DocOptions,
}

impl DocEntry {
    fn spec(&self) -> DocSpec {
        DocSpec {
            category: self.category.clone().unwrap_or_default(),
            options: self.options.clone(),
        }
    }
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| Error::Catalog {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&contents)
    }

    /// Register everything in the catalog, non-words first so they apply
    /// to every document. Returns the rejected entries in the order they
    /// were encountered.
    pub fn load_into(&self, registry: &mut Registry) -> Vec<RegistrationError> {
        match &self.non_words {
            NonWordsEntry::Text(words) => registry.add_non_words(words),
            NonWordsEntry::List(words) => {
                registry.add_non_words(WordList::from(words.clone()))
            }
            NonWordsEntry::Other(_) => {
                tracing::debug!("ignoring non-words that are not a string or list")
            }
        }

        let mut rejected = Vec::new();
        for entry in &self.projects {
            let mut builder =
                registry.add(&entry.project_id, &entry.project_name);
            for category in &entry.categories {
                builder =
                    builder.add_category(&category.name, &category.display);
            }
            for doc in &entry.docs {
                builder =
                    builder.add_doc(&doc.doc_id, &doc.doc_name, doc.spec());
            }
            rejected.extend(builder.into_diagnostics());
        }

        tracing::info!(
            projects = registry.projects().len(),
            rejected = rejected.len(),
            "loaded catalog"
        );
        rejected
    }
}
