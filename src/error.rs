use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// A rejected registration. The offending project, category or document
/// is skipped; nothing else about the registry changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Empty ProjectId not allowed")]
    EmptyProjectId,

    #[error("Empty Project Name not allowed")]
    EmptyProjectName,

    #[error("Duplicate Project ID not allowed \"{project_id}\"")]
    DuplicateProjectId { project_id: String },

    #[error("Duplicate category not allowed \"{name}\"")]
    DuplicateCategory { name: String },

    #[error("Empty Document Id not allowed")]
    EmptyDocId,

    #[error("Empty Document Name not allowed")]
    EmptyDocName,

    #[error("Duplicate Document ID not allowed \"{doc_id}\"")]
    DuplicateDocId { doc_id: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read catalog at {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{count} catalog entries rejected")]
    Rejected { count: usize },
}

impl Error {
    /// True when the error is a rejected project, category or document
    /// rather than an I/O, parsing or configuration failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Registration(_) | Self::Rejected { .. })
    }
}
