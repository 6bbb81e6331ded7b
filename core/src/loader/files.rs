//! JSON diagram files

use super::{LoadError, LoadResult};
use crate::diagram::Diagram;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load a single diagram from a JSON file
pub fn load_diagram<P: AsRef<Path>>(path: P) -> LoadResult<Diagram> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| LoadError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;

    Diagram::from_json(&contents).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load every `.json` diagram in a directory, ordered by file name
///
/// Files that fail to load are logged and skipped.
pub fn load_diagrams<P: AsRef<Path>>(dir: P) -> LoadResult<Vec<(PathBuf, Diagram)>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.display().to_string()));
    }

    let read_err = |source| LoadError::FileNotFound {
        path: dir.display().to_string(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut diagrams = Vec::with_capacity(paths.len());
    for path in paths {
        match load_diagram(&path) {
            Ok(diagram) => diagrams.push((path, diagram)),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }

    debug!(dir = %dir.display(), count = diagrams.len(), "loaded diagrams");
    Ok(diagrams)
}

/// Write a diagram as pretty-printed JSON
pub fn save_diagram<P: AsRef<Path>>(diagram: &Diagram, path: P) -> LoadResult<()> {
    let path = path.as_ref();

    let json = diagram.to_json().map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    fs::write(path, json).map_err(|source| LoadError::Write {
        path: path.display().to_string(),
        source,
    })
}
