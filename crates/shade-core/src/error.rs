use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShadeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Malformed design file: {0}")]
    MalformedDesignFile(String),

    #[error("Export to {path:?} failed: {source}")]
    ExportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Generation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, ShadeError>;
