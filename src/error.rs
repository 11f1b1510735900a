use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to load books: {0}")]
    Load(#[source] Box<StoreError>),

    #[error("Failed to save books: {0}")]
    Save(#[source] Box<StoreError>),

    #[error("Storage quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file format: expected a JSON array of books")]
    InvalidImportFormat,

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    pub(crate) fn load(err: StoreError) -> Self {
        StoreError::Load(Box::new(err))
    }

    pub(crate) fn save(err: StoreError) -> Self {
        StoreError::Save(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
