use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or a missing `persona.role` / `job_to_be_done.task` / `documents`.
    #[error("invalid collection input {path:?}: {source}")]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write result {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read PDF {path:?}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("no valid collections found under {root:?}")]
    NoCollections { root: PathBuf },
}

impl DigestError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
