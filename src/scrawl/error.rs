use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrawlError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item already exists: {0}")]
    ItemExists(String),

    #[error("Invalid item id: {0:?}")]
    InvalidId(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Upload too large: {0}")]
    UploadTooLarge(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Task error: {0}")]
    Task(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrawlError>;
