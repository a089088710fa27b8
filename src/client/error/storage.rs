use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("Browser storage is not available")]
    Unavailable,
    #[error("Failed to write to browser storage: {0}")]
    Write(String),
    #[error("Failed to remove from browser storage: {0}")]
    Remove(String),
}
