use serde::{Deserialize, Serialize};

use crate::{
    error::RegistrationError,
    keywords::{ExcludeList, extract_keywords},
    non_words::NonWordSet,
};

/// A named grouping label within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub display: String,
}

impl Category {
    pub fn new(name: &str, display: &str) -> Self {
        Self {
            name: name.to_string(),
            display: display.to_string(),
        }
    }
}

/// A single indexed item. Immutable once added to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    doc_id: String,
    doc_name: String,
    category: String,
    file_name: String,
    tags: String,
    no_doc: bool,
    no_list: bool,
}

impl Document {
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }

    /// Name of the category this document was filed under. Not checked
    /// against the project's categories.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Comma-separated tags: caller tags first, extracted keywords after.
    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags.split(',').filter(|t| !t.is_empty())
    }

    pub fn no_doc(&self) -> bool {
        self.no_doc
    }

    pub fn no_list(&self) -> bool {
        self.no_list
    }
}

/// Optional document settings. Unknown keys are ignored when
/// deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocOptions {
    pub file_name: Option<String>,
    pub tags: String,
    pub no_doc: bool,
    pub no_list: bool,
}

impl DocOptions {
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = Some(file_name.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &str) -> Self {
        self.tags = tags.to_string();
        self
    }

    pub fn with_no_doc(mut self, no_doc: bool) -> Self {
        self.no_doc = no_doc;
        self
    }

    pub fn with_no_list(mut self, no_list: bool) -> Self {
        self.no_list = no_list;
        self
    }
}

/// Everything `add_doc` accepts after the id and name.
///
/// Passing options where a category would go files the document under
/// the empty category, so `add_doc("d1", "Doc One", opts)` and
/// `add_doc("d1", "Doc One", ("", opts))` are the same call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocSpec {
    pub category: String,
    pub options: DocOptions,
}

impl From<()> for DocSpec {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<&str> for DocSpec {
    fn from(category: &str) -> Self {
        Self {
            category: category.to_string(),
            options: DocOptions::default(),
        }
    }
}

impl From<String> for DocSpec {
    fn from(category: String) -> Self {
        Self {
            category,
            options: DocOptions::default(),
        }
    }
}

impl From<DocOptions> for DocSpec {
    fn from(options: DocOptions) -> Self {
        Self {
            category: String::new(),
            options,
        }
    }
}

impl From<(&str, DocOptions)> for DocSpec {
    fn from((category, options): (&str, DocOptions)) -> Self {
        Self {
            category: category.to_string(),
            options,
        }
    }
}

impl From<(String, DocOptions)> for DocSpec {
    fn from((category, options): (String, DocOptions)) -> Self {
        Self { category, options }
    }
}

/// A named collection of categories and documents.
///
/// Projects only grow: categories and documents are appended and never
/// removed or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    project_id: String,
    project_name: String,
    categories: Vec<Category>,
    docs: Vec<Document>,
}

impl Project {
    /// Validate the identity fields and seed the empty sentinel category.
    ///
    /// Registry-wide uniqueness is checked by the caller.
    pub(crate) fn new(
        project_id: &str,
        project_name: &str,
    ) -> Result<Self, RegistrationError> {
        if project_id.is_empty() {
            return Err(RegistrationError::EmptyProjectId);
        }
        if project_name.is_empty() {
            return Err(RegistrationError::EmptyProjectName);
        }

        Ok(Self {
            project_id: project_id.to_string(),
            project_name: project_name.to_string(),
            categories: vec![Category::new("", "")],
            docs: Vec::new(),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn doc(&self, doc_id: &str) -> Option<&Document> {
        self.docs.iter().find(|d| d.doc_id == doc_id)
    }

    pub fn docs_in_category<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Document> {
        self.docs.iter().filter(move |d| d.category == name)
    }

    pub(crate) fn add_category(
        &mut self,
        name: &str,
        display: &str,
    ) -> Result<&Category, RegistrationError> {
        if self.category(name).is_some() {
            return Err(RegistrationError::DuplicateCategory {
                name: name.to_string(),
            });
        }

        self.categories.push(Category::new(name, display));
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Validate, tag and append a document.
    ///
    /// Keywords are pulled from `doc_name`, skipping anything already in
    /// the caller's tags or in `non_words`, and appended to the tags.
    pub(crate) fn add_doc(
        &mut self,
        doc_id: &str,
        doc_name: &str,
        spec: DocSpec,
        non_words: &NonWordSet,
    ) -> Result<&Document, RegistrationError> {
        if doc_id.is_empty() {
            return Err(RegistrationError::EmptyDocId);
        }
        if doc_name.is_empty() {
            return Err(RegistrationError::EmptyDocName);
        }
        if self.doc(doc_id).is_some() {
            return Err(RegistrationError::DuplicateDocId {
                doc_id: doc_id.to_string(),
            });
        }

        let DocSpec { category, options } = spec;
        let file_name = options
            .file_name
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| doc_id.to_string());

        let mut tags = options.tags;
        let extracted = extract_keywords(
            doc_name,
            &ExcludeList::from_comma_separated(&tags),
            non_words,
        );
        if !extracted.is_empty() {
            if !tags.is_empty() {
                tags.push(',');
            }
            tags.push_str(&extracted.join(","));
        }

        self.docs.push(Document {
            doc_id: doc_id.to_string(),
            doc_name: doc_name.to_string(),
            category,
            file_name,
            tags,
            no_doc: options.no_doc,
            no_list: options.no_list,
        });
        Ok(&self.docs[self.docs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new("p1", "Proj One").unwrap()
    }

    fn category_names(project: &Project) -> Vec<&str> {
        project.categories().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn new_rejects_empty_identity() {
        assert_eq!(
            Project::new("", "Name").unwrap_err(),
            RegistrationError::EmptyProjectId
        );
        assert_eq!(
            Project::new("p1", "").unwrap_err(),
            RegistrationError::EmptyProjectName
        );
        // Id is checked before name.
        assert_eq!(
            Project::new("", "").unwrap_err(),
            RegistrationError::EmptyProjectId
        );
    }

    #[test]
    fn new_seeds_sentinel_category() {
        let p = project();
        assert_eq!(p.categories(), [Category::new("", "")]);
        assert!(p.docs().is_empty());
    }

    #[test]
    fn duplicate_category_keeps_original_display() {
        let mut p = project();
        p.add_category("cat1", "Cat One").unwrap();

        let err = p.add_category("cat1", "Other").unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateCategory {
            name: "cat1".to_string()
        });
        assert_eq!(p.category("cat1").unwrap().display, "Cat One");
        assert_eq!(category_names(&p), ["", "cat1"]);
    }

    #[test]
    fn sentinel_name_cannot_be_reused() {
        let mut p = project();
        assert!(p.add_category("", "Anything").is_err());
    }

    #[test]
    fn category_names_are_case_sensitive() {
        let mut p = project();
        p.add_category("cat", "lower").unwrap();
        p.add_category("Cat", "upper").unwrap();
        assert_eq!(category_names(&p), ["", "cat", "Cat"]);
    }

    #[test]
    fn add_doc_validation_order() {
        let mut p = project();
        let nw = NonWordSet::new();

        assert_eq!(
            p.add_doc("", "", ().into(), &nw).unwrap_err(),
            RegistrationError::EmptyDocId
        );
        assert_eq!(
            p.add_doc("d1", "", ().into(), &nw).unwrap_err(),
            RegistrationError::EmptyDocName
        );

        p.add_doc("d1", "First", ().into(), &nw).unwrap();
        assert_eq!(
            p.add_doc("d1", "Second", ().into(), &nw).unwrap_err(),
            RegistrationError::DuplicateDocId {
                doc_id: "d1".to_string()
            }
        );
        assert_eq!(p.docs().len(), 1);
        assert_eq!(p.doc("d1").unwrap().doc_name(), "First");
    }

    #[test]
    fn caller_tags_come_first() {
        let mut p = project();
        let doc = p
            .add_doc(
                "mydoc1",
                "information",
                ("Category1", DocOptions::default().with_tags("category"))
                    .into(),
                &NonWordSet::new(),
            )
            .unwrap();
        assert_eq!(doc.tags(), "category,information");
        assert_eq!(doc.category(), "Category1");
    }

    #[test]
    fn no_comma_when_caller_tags_empty() {
        let mut p = project();
        let doc = p
            .add_doc("doc1", "Hello World", ().into(), &NonWordSet::new())
            .unwrap();
        assert_eq!(doc.tags(), "hello,world");
    }

    #[test]
    fn caller_tags_kept_when_nothing_extracted() {
        let mut p = project();
        let doc = p
            .add_doc(
                "doc1",
                "Hello",
                DocOptions::default().with_tags("hello,greeting").into(),
                &NonWordSet::new(),
            )
            .unwrap();
        assert_eq!(doc.tags(), "hello,greeting");
    }

    #[test]
    fn padded_caller_tags_block_extraction_and_stay_verbatim() {
        let mut p = project();
        let doc = p
            .add_doc(
                "doc1",
                "foo",
                DocOptions::default().with_tags("Foo , x").into(),
                &NonWordSet::new(),
            )
            .unwrap();
        assert_eq!(doc.tags(), "Foo , x");
    }

    #[test]
    fn extracted_tags_skip_non_words() {
        let mut nw = NonWordSet::new();
        nw.extend("the,and");

        let mut p = project();
        let doc = p
            .add_doc("d", "The Cat and the Hat", ().into(), &nw)
            .unwrap();
        assert_eq!(doc.tag_list().collect::<Vec<_>>(), ["cat", "hat"]);
    }

    #[test]
    fn defaults_are_applied() {
        let mut p = project();
        let doc = p
            .add_doc("doc1", "Readme", ().into(), &NonWordSet::new())
            .unwrap();
        assert_eq!(doc.category(), "");
        assert_eq!(doc.file_name(), "doc1");
        assert!(!doc.no_doc());
        assert!(!doc.no_list());
    }

    #[test]
    fn options_are_carried_over() {
        let mut p = project();
        let opts = DocOptions::default()
            .with_file_name("guide.html")
            .with_no_doc(true)
            .with_no_list(true);
        let doc = p
            .add_doc("doc1", "Guide", ("cat", opts).into(), &NonWordSet::new())
            .unwrap();
        assert_eq!(doc.file_name(), "guide.html");
        assert!(doc.no_doc());
        assert!(doc.no_list());
    }

    #[test]
    fn options_in_category_position_shift() {
        let opts = DocOptions::default().with_file_name("f1");

        let mut shifted = project();
        shifted
            .add_doc("d1", "Doc One", opts.clone().into(), &NonWordSet::new())
            .unwrap();

        let mut explicit = project();
        explicit
            .add_doc("d1", "Doc One", ("", opts).into(), &NonWordSet::new())
            .unwrap();

        assert_eq!(shifted.docs(), explicit.docs());
        assert_eq!(shifted.docs()[0].category(), "");
        assert_eq!(shifted.docs()[0].file_name(), "f1");
    }

    #[test]
    fn category_reference_is_not_validated() {
        let mut p = project();
        p.add_doc("d1", "Orphan", "missing".into(), &NonWordSet::new())
            .unwrap();
        assert_eq!(p.docs_in_category("missing").count(), 1);
        assert!(p.category("missing").is_none());
    }

    #[test]
    fn docs_keep_insertion_order() {
        let mut p = project();
        let nw = NonWordSet::new();
        for id in ["c", "a", "b"] {
            p.add_doc(id, "Name", ().into(), &nw).unwrap();
        }
        let ids: Vec<_> = p.docs().iter().map(Document::doc_id).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn options_ignore_unknown_keys() {
        let opts: DocOptions = serde_json::from_str(
            r#"{"fileName":"f1","tags":"x","color":"red"}"#,
        )
        .unwrap();
        assert_eq!(opts, DocOptions::default().with_file_name("f1").with_tags("x"));
    }

    #[test]
    fn serializes_with_client_keys() {
        let mut p = project();
        p.add_doc("doc1", "Hello", ().into(), &NonWordSet::new())
            .unwrap();

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["projectId"], "p1");
        assert_eq!(json["projectName"], "Proj One");
        assert_eq!(json["categories"][0]["name"], "");
        assert_eq!(json["docs"][0]["docId"], "doc1");
        assert_eq!(json["docs"][0]["fileName"], "doc1");
        assert_eq!(json["docs"][0]["noDoc"], false);
        assert_eq!(json["docs"][0]["tags"], "hello");
    }
}
