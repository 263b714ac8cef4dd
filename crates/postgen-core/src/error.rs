use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostgenError {
    #[error("rotation '{0}' is empty: modulo indexing needs at least one entry")]
    EmptyRotation(&'static str),

    #[error("collection has no top-level item named '{0}'")]
    PlaceholderNotFound(String),

    #[error("collection file not found: {0}")]
    CollectionNotFound(std::path::PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PostgenError>;
