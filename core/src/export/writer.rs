//! Reading and writing fact files

use super::{ExportError, ExportResult};
use crate::ir::{Fact, FactBase};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mode declarations for learning the `highpoint` target
const MODES: [&str; 7] = [
    "highpoint(+node).",
    "connected(+node,-node).",
    "connected(-node,+node).",
    "nneighbors(+node,#neighborcount).",
    "angledegrees(+node,+node,-node,#angletype).",
    "angledegrees(+node,-node,+node,#angletype).",
    "angledegrees(+node,-node,-node,#angletype).",
];

/// Background mode declarations describing the emitted predicates
pub fn background_modes() -> &'static [&'static str] {
    &MODES
}

/// File names for the three parts of a fact base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNames {
    pub pos: String,
    pub neg: String,
    pub facts: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

impl FileNames {
    /// `{prefix}pos.txt`, `{prefix}neg.txt`, `{prefix}facts.txt`
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            pos: format!("{}pos.txt", prefix),
            neg: format!("{}neg.txt", prefix),
            facts: format!("{}facts.txt", prefix),
        }
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Writes fact bases as one-fact-per-line text files
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    dir: PathBuf,
    names: FileNames,
    append: bool,
}

impl DatasetWriter {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            names: FileNames::default(),
            append: false,
        }
    }

    pub fn with_names(mut self, names: FileNames) -> Self {
        self.names = names;
        self
    }

    /// Append to existing files instead of replacing them
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the three fact files, creating the directory if needed
    pub fn write(&self, base: &FactBase) -> ExportResult<()> {
        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        self.write_lines(&self.names.pos, &base.pos)?;
        self.write_lines(&self.names.neg, &base.neg)?;
        self.write_lines(&self.names.facts, &base.facts)?;

        debug!(
            dir = %self.dir.display(),
            pos = base.pos.len(),
            neg = base.neg.len(),
            facts = base.facts.len(),
            append = self.append,
            "wrote fact files"
        );
        Ok(())
    }

    /// Write the mode declarations to `background.txt`
    pub fn write_background(&self) -> ExportResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;
        let path = self.dir.join("background.txt");

        let mut contents = String::new();
        for mode in background_modes() {
            contents.push_str("mode: ");
            contents.push_str(mode);
            contents.push('\n');
        }
        fs::write(&path, contents).map_err(io_err(&path))?;
        Ok(path)
    }

    fn write_lines(&self, name: &str, facts: &[Fact]) -> ExportResult<()> {
        let path = self.dir.join(name);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(self.append)
            .truncate(!self.append)
            .open(&path)
            .map_err(io_err(&path))?;

        let mut out = BufWriter::new(file);
        for fact in facts {
            writeln!(out, "{}", fact).map_err(io_err(&path))?;
        }
        out.flush().map_err(io_err(&path))
    }
}

fn read_facts(path: &Path) -> ExportResult<Vec<Fact>> {
    let contents = fs::read_to_string(path).map_err(io_err(path))?;

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            line.parse::<Fact>().map_err(|source| ExportError::Network {
                context: format!("{}:{}", path.display(), n + 1),
                source,
            })
        })
        .collect()
}

/// Read the three fact files of a directory back into a fact base
pub fn read_fact_base<P: AsRef<Path>>(dir: P, names: &FileNames) -> ExportResult<FactBase> {
    let dir = dir.as_ref();

    Ok(FactBase {
        pos: read_facts(&dir.join(&names.pos))?,
        neg: read_facts(&dir.join(&names.neg))?,
        facts: read_facts(&dir.join(&names.facts))?,
    })
}
