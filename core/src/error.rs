use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a corpus or loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("cannot enumerate documents: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("corpus is empty: average document length is undefined")]
    EmptyCorpus,

    #[error("duplicate document name: {0}")]
    DuplicateDocument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
