use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreceptError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Catalog construction error: {0}")]
    Construction(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
