//! Diagram loaders
//!
//! Reads saved roof diagrams from JSON files and directories of JSON files.

pub mod files;

pub use files::{load_diagram, load_diagrams, save_diagram};

use thiserror::Error;

/// Loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Diagram loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(String),
}
