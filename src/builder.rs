//! The chainable handle returned by [`Registry::add`].
//!
//! A builder is either bound to a registered project or permanently
//! failed. Rejected additions are logged, recorded in
//! [`ProjectBuilder::diagnostics`] and skipped, so a chain always runs to
//! the end:
//!
//! ```
//! use doctags::{DocOptions, RegistrationError, Registry};
//!
//! let mut registry = Registry::new();
//! let builder = registry
//!     .add("p1", "Proj One")
//!     .add_category("cat1", "Cat One")
//!     .add_category("cat1", "Again")
//!     .add_doc("doc1", "Hello World", DocOptions::default());
//!
//! assert_eq!(builder.diagnostics(), [RegistrationError::DuplicateCategory {
//!     name: "cat1".to_string(),
//! }]);
//! assert_eq!(builder.project().unwrap().docs().len(), 1);
//! ```

use crate::{
    error::RegistrationError,
    project::{DocSpec, Project},
    registry::Registry,
};

#[derive(Debug)]
enum BuilderState {
    /// Index of the project within the registry.
    Valid(usize),
    Failed(RegistrationError),
}

#[derive(Debug)]
pub struct ProjectBuilder<'r> {
    registry: &'r mut Registry,
    state: BuilderState,
    diagnostics: Vec<RegistrationError>,
}

impl<'r> ProjectBuilder<'r> {
    pub(crate) fn new(
        registry: &'r mut Registry,
        registered: Result<usize, RegistrationError>,
    ) -> Self {
        match registered {
            Ok(index) => Self {
                registry,
                state: BuilderState::Valid(index),
                diagnostics: Vec::new(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "project rejected");
                Self {
                    registry,
                    state: BuilderState::Failed(err.clone()),
                    diagnostics: vec![err],
                }
            }
        }
    }

    /// Append a category. A duplicate name is reported and skipped.
    pub fn add_category(mut self, name: &str, display: &str) -> Self {
        if self.is_valid() {
            let result = self.try_add_category(name, display);
            self.record(result);
        }
        self
    }

    /// Append a document, tagging it from its name.
    ///
    /// `spec` is a category name, a [`DocOptions`](crate::DocOptions), a
    /// `(category, options)` pair or `()`.
    pub fn add_doc(
        mut self,
        doc_id: &str,
        doc_name: &str,
        spec: impl Into<DocSpec>,
    ) -> Self {
        if self.is_valid() {
            let result = self.try_add_doc(doc_id, doc_name, spec);
            self.record(result);
        }
        self
    }

    /// Like [`add_category`](Self::add_category) but hands the outcome
    /// back instead of recording it. On a failed builder this returns the
    /// registration failure and changes nothing.
    pub fn try_add_category(
        &mut self,
        name: &str,
        display: &str,
    ) -> Result<(), RegistrationError> {
        let index = self.index()?;
        let (project, _) = self.registry.project_entry(index);
        project.add_category(name, display)?;
        tracing::debug!(
            project_id = project.project_id(),
            name,
            "added category"
        );
        Ok(())
    }

    /// Like [`add_doc`](Self::add_doc) but hands the outcome back instead
    /// of recording it.
    pub fn try_add_doc(
        &mut self,
        doc_id: &str,
        doc_name: &str,
        spec: impl Into<DocSpec>,
    ) -> Result<(), RegistrationError> {
        let index = self.index()?;
        let (project, non_words) = self.registry.project_entry(index);
        let project_id = project.project_id().to_string();
        let doc = project.add_doc(doc_id, doc_name, spec.into(), non_words)?;
        tracing::debug!(
            project_id = project_id.as_str(),
            doc_id,
            tags = doc.tags(),
            "added document"
        );
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.state, BuilderState::Valid(_))
    }

    /// Why the project could not be registered, if it could not.
    pub fn failure(&self) -> Option<&RegistrationError> {
        match &self.state {
            BuilderState::Valid(_) => None,
            BuilderState::Failed(err) => Some(err),
        }
    }

    /// The project this builder adds to, if registration succeeded.
    pub fn project(&self) -> Option<&Project> {
        match self.state {
            BuilderState::Valid(index) => self.registry.projects().get(index),
            BuilderState::Failed(_) => None,
        }
    }

    /// Every rejection seen by this builder, in order.
    pub fn diagnostics(&self) -> &[RegistrationError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<RegistrationError> {
        self.diagnostics
    }

    fn index(&self) -> Result<usize, RegistrationError> {
        match &self.state {
            BuilderState::Valid(index) => Ok(*index),
            BuilderState::Failed(err) => Err(err.clone()),
        }
    }

    fn record(&mut self, result: Result<(), RegistrationError>) {
        if let Err(err) = result {
            tracing::warn!(
                project_id = self.project().map(Project::project_id),
                error = %err,
                "addition rejected"
            );
            self.diagnostics.push(err);
        }
    }
}
