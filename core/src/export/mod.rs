//! Fact file export
//!
//! Turns one or many diagrams into the `pos`/`neg`/`facts` text files read
//! by the relational learner:
//! - **corpus**: merges diagrams into one fact base with non-overlapping ids
//! - **writer**: reads and writes the three fact files
//! - **folds**: k-fold splits of a diagram collection

pub mod corpus;
pub mod folds;
pub mod writer;

pub use corpus::Corpus;
pub use folds::{kfold, write_folds, Fold};
pub use writer::{background_modes, read_fact_base, DatasetWriter, FileNames};

use crate::error::NetworkError;
use crate::loader::LoadError;
use thiserror::Error;

/// Errors that can occur while exporting facts
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{context}: {source}")]
    Network {
        context: String,
        #[source]
        source: NetworkError,
    },

    #[error("cannot split {items} items into {folds} folds")]
    InvalidFolds { items: usize, folds: usize },
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
