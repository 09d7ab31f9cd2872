use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObraError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Gallery directory not found: {0}")]
    GalleryDir(String),

    #[error("Unknown gallery category: {0}")]
    UnknownCategory(String),

    #[error("Invalid contact message: {0}")]
    InvalidContact(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ObraError>;
