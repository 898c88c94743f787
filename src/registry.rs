use crate::{
    builder::ProjectBuilder,
    error::RegistrationError,
    keywords::{ExcludeList, extract_keywords},
    non_words::{NonWordSet, WordList},
    project::Project,
};

/// Every registered project plus the non-word set shared by all of them.
///
/// Callers own the registry and pass it where it is needed; there is no
/// global instance.
#[derive(Debug, Default)]
pub struct Registry {
    projects: Vec<Project>,
    non_words: NonWordSet,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project and return a chainable builder for it.
    ///
    /// The builder is returned even when registration fails; in that case
    /// every further call on it is a no-op.
    ///
    /// ```
    /// use doctags::{DocOptions, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry
    ///     .add("p1", "Proj One")
    ///     .add_category("cat1", "Cat One")
    ///     .add_doc("doc1", "Hello World", DocOptions::default());
    ///
    /// let doc = registry.project("p1").unwrap().doc("doc1").unwrap();
    /// assert_eq!(doc.tags(), "hello,world");
    /// ```
    pub fn add(
        &mut self,
        project_id: &str,
        project_name: &str,
    ) -> ProjectBuilder<'_> {
        let state = self.register(project_id, project_name);
        ProjectBuilder::new(self, state)
    }

    fn register(
        &mut self,
        project_id: &str,
        project_name: &str,
    ) -> Result<usize, RegistrationError> {
        let project = Project::new(project_id, project_name)?;
        if self.project(project_id).is_some() {
            return Err(RegistrationError::DuplicateProjectId {
                project_id: project_id.to_string(),
            });
        }

        self.projects.push(project);
        tracing::debug!(project_id, project_name, "registered project");
        Ok(self.projects.len() - 1)
    }

    /// Extend the shared non-word set. Strings are split on commas and
    /// spaces.
    pub fn add_non_words(&mut self, words: impl Into<WordList>) {
        let added = self.non_words.extend(words);
        tracing::debug!(
            added,
            total = self.non_words.len(),
            "extended non-words"
        );
    }

    /// All registered projects, in registration order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.project_id() == project_id)
    }

    pub fn non_words(&self) -> &NonWordSet {
        &self.non_words
    }

    /// Extract keywords from `text` with this registry's non-words applied.
    pub fn keywords(&self, text: &str, exclude: &ExcludeList) -> Vec<String> {
        extract_keywords(text, exclude, &self.non_words)
    }

    /// Split borrow used by builders: the project being edited alongside
    /// the non-words its documents are tagged against.
    pub(crate) fn project_entry(
        &mut self,
        index: usize,
    ) -> (&mut Project, &NonWordSet) {
        (&mut self.projects[index], &self.non_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::DocOptions;

    #[test]
    fn starts_empty() {
        let registry = Registry::new();
        assert!(registry.projects().is_empty());
        assert!(registry.non_words().is_empty());
    }

    #[test]
    fn duplicate_project_is_rejected_and_original_kept() {
        let mut registry = Registry::new();
        registry.add("p1", "A");
        let second = registry.add("p1", "B");
        assert_eq!(
            second.failure(),
            Some(&RegistrationError::DuplicateProjectId {
                project_id: "p1".to_string()
            })
        );

        assert_eq!(registry.projects().len(), 1);
        assert_eq!(registry.projects()[0].project_name(), "A");
    }

    #[test]
    fn project_ids_are_case_sensitive() {
        let mut registry = Registry::new();
        registry.add("p1", "lower");
        registry.add("P1", "upper");
        assert_eq!(registry.projects().len(), 2);
    }

    #[test]
    fn empty_identity_registers_nothing() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.add("", "Name").failure(),
            Some(&RegistrationError::EmptyProjectId)
        );
        assert_eq!(
            registry.add("p1", "").failure(),
            Some(&RegistrationError::EmptyProjectName)
        );
        assert!(registry.projects().is_empty());
    }

    #[test]
    fn projects_keep_registration_order() {
        let mut registry = Registry::new();
        for id in ["z", "a", "m"] {
            registry.add(id, "Project");
        }
        let ids: Vec<_> =
            registry.projects().iter().map(Project::project_id).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn non_words_apply_to_later_documents_only() {
        let mut registry = Registry::new();
        registry
            .add("p1", "Proj")
            .add_doc("early", "the cat", DocOptions::default());
        registry.add_non_words("the");
        registry
            .add("p2", "Proj")
            .add_doc("late", "the cat", DocOptions::default());

        let early = registry.project("p1").unwrap().doc("early").unwrap();
        let late = registry.project("p2").unwrap().doc("late").unwrap();
        assert_eq!(early.tags(), "the,cat");
        assert_eq!(late.tags(), "cat");
    }

    #[test]
    fn keywords_use_registry_non_words() {
        let mut registry = Registry::new();
        registry.add_non_words(vec!["the".to_string(), "a".to_string()]);

        let words = registry.keywords("the cat sat", &ExcludeList::new());
        assert_eq!(words, ["cat", "sat"]);
    }
}
