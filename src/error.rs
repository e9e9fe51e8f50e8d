use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the feed before anything is printed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of operations, got {0}")]
    NotAnArray(&'static str),
}
