//! Export configuration
//!
//! Settings can come from a JSON file; every field has a default so a file
//! only needs the keys it changes.

use crate::export::FileNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// How fact files are produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving the fact files
    pub out_dir: PathBuf,
    /// Id of the first point of the first diagram
    pub start: u32,
    /// Append to existing fact files instead of replacing them
    pub append: bool,
    /// Prefix for `pos.txt`, `neg.txt` and `facts.txt`
    pub prefix: String,
    /// Also write `background.txt` with the mode declarations
    pub background: bool,
    /// Number of cross-validation folds
    pub folds: usize,
    /// Shuffle seed for fold assignment; `None` keeps file order
    pub seed: Option<u64>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            start: 0,
            append: false,
            prefix: String::new(),
            background: false,
            folds: 5,
            seed: None,
        }
    }
}

impl ExportConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn file_names(&self) -> FileNames {
        FileNames::with_prefix(&self.prefix)
    }
}
