use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid hand record data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
