use thiserror::Error;

/// Why the embedded site content could not be used
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("media source for \"{title}\" is empty")]
    EmptySource { title: String },

    #[error("feature grid needs {expected} cards, found {found}")]
    GridSize { expected: usize, found: usize },
}
