//! doctags - an in-memory registry of projects, categories and documents
//! that builds the tag corpus for a client-side document search.
//!
//! Each document is tagged with the keywords of its name: lowercased
//! alphanumeric runs of three or more characters, minus the caller's own
//! tags and the registry's non-words. Registration enforces unique project
//! ids, and unique category names and document ids within a project.
//! Rejected additions are reported without breaking the builder chain.
//!
//! # Quick start
//!
//! ```
//! use doctags::{DocOptions, Registry};
//!
//! let mut registry = Registry::new();
//! registry.add_non_words("the,a,of");
//!
//! registry
//!     .add("manual", "User Manual")
//!     .add_category("setup", "Getting Started")
//!     .add_doc("install", "Installation of the CLI", "setup")
//!     .add_doc(
//!         "faq",
//!         "Frequently asked questions",
//!         DocOptions::default().with_tags("help"),
//!     );
//!
//! let project = registry.project("manual").unwrap();
//! let names: Vec<_> =
//!     project.categories().iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["", "setup"]);
//! assert_eq!(project.doc("install").unwrap().tags(), "installation,cli");
//! assert_eq!(
//!     project.doc("faq").unwrap().tags(),
//!     "help,frequently,asked,questions"
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod keywords;
pub mod non_words;
pub mod project;
pub mod registry;
pub mod report;

pub use builder::ProjectBuilder;
pub use error::{Error, RegistrationError, Result};
pub use keywords::{ExcludeList, extract_keywords};
pub use non_words::{NonWordSet, WordList};
pub use project::{Category, DocOptions, DocSpec, Document, Project};
pub use registry::Registry;
