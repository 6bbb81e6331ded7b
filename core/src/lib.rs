//! Roofworld Core
//!
//! Converts 2D roof diagrams into relational fact bases for high point prediction

pub mod ir;       // Intermediate representation (points, ids, facts)
pub mod geometry; // Angle measurement and discretization
pub mod network;  // Adjacency structure and fact generation
pub mod diagram;  // Saved diagrams and the editable sketch
pub mod loader;   // Diagram file loading
pub mod export;   // Fact files, corpora and folds
pub mod config;   // Export settings
pub mod error;

pub use ir::*;
pub use geometry::{classify, discretize_angle};
pub use network::Network;
pub use diagram::{Diagram, Operation, Sketch, Snapshot};
pub use loader::{LoadError, LoadResult};
pub use export::{Corpus, DatasetWriter, ExportError, ExportResult};
pub use config::{ConfigError, ExportConfig};
pub use error::{NetworkError, NetworkResult};
