//! Roofworld CLI
//!
//! Turns saved roof diagrams into fact files for the relational learner.
//!
//! ```bash
//! # print the facts of one diagram
//! roofworld describe saved/house.json
//!
//! # merge a directory of diagrams into pos/neg/facts files
//! roofworld export saved/ --out data --background
//!
//! # cross-validation splits
//! roofworld folds saved/ --k 5 --seed 1 --out folds
//!
//! # more logging
//! RUST_LOG=debug roofworld export saved/
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use roofworld_core::export::{write_folds, Corpus, DatasetWriter};
use roofworld_core::loader::{load_diagram, load_diagrams};
use roofworld_core::{Diagram, ExportConfig};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roofworld")]
#[command(about = "Convert roof diagrams into relational facts")]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the facts of a single diagram
    Describe {
        /// Diagram file (JSON)
        diagram: PathBuf,

        /// Id of the first point
        #[arg(long, default_value_t = 0)]
        start: u32,
    },

    /// Merge diagrams into one set of fact files
    Export {
        /// Diagram files or directories of diagram files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        opts: ExportOpts,
    },

    /// Write k-fold train/test fact files
    Folds {
        /// Directory of diagram files
        dir: PathBuf,

        /// Number of folds
        #[arg(long)]
        k: Option<usize>,

        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        opts: FoldOpts,
    },
}

#[derive(Args)]
struct ExportOpts {
    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Id of the first point
    #[arg(long)]
    start: Option<u32>,

    /// Append to existing fact files
    #[arg(long)]
    append: bool,

    /// Prefix for the fact file names
    #[arg(long)]
    prefix: Option<String>,

    /// Also write background.txt
    #[arg(long)]
    background: bool,
}

impl ExportOpts {
    fn resolve(&self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::from_json_file(path)?,
            None => ExportConfig::default(),
        };

        if let Some(out) = &self.out {
            config.out_dir = out.clone();
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        config.append |= self.append;
        config.background |= self.background;

        Ok(config)
    }
}

/// Options for `folds`; fold files always use the `train_`/`test_` prefixes
#[derive(Args)]
struct FoldOpts {
    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Id of the first training point in every fold
    #[arg(long)]
    start: Option<u32>,

    /// Also write background.txt into every fold
    #[arg(long)]
    background: bool,
}

impl FoldOpts {
    fn resolve(&self, k: Option<usize>, seed: Option<u64>) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::from_json_file(path)?,
            None => ExportConfig::default(),
        };

        if !config.prefix.is_empty() {
            bail!("`prefix` is not supported by folds (got `{}`)", config.prefix);
        }
        if config.append {
            bail!("`append` is not supported by folds");
        }

        if let Some(out) = &self.out {
            config.out_dir = out.clone();
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(k) = k {
            config.folds = k;
        }
        if seed.is_some() {
            config.seed = seed;
        }
        config.background |= self.background;

        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand directories into their diagram files, keeping argument order
fn collect_diagrams(inputs: &[PathBuf]) -> Result<Vec<(String, Diagram)>> {
    let mut diagrams = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for (path, diagram) in load_diagrams(input)? {
                diagrams.push((path.display().to_string(), diagram));
            }
        } else {
            let diagram = load_diagram(input)?;
            diagrams.push((input.display().to_string(), diagram));
        }
    }
    Ok(diagrams)
}

fn describe(path: &Path, start: u32) -> Result<()> {
    let diagram = load_diagram(path)?;
    let base = diagram
        .describe(start)
        .with_context(|| format!("describing {}", path.display()))?;

    for line in base.pos_lines().chain(base.neg_lines()) {
        println!("{}", line);
    }
    println!();
    for line in base.fact_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn export(inputs: &[PathBuf], config: &ExportConfig) -> Result<()> {
    let diagrams = collect_diagrams(inputs)?;

    let mut corpus = Corpus::starting_at(config.start);
    for (name, diagram) in &diagrams {
        corpus.add(name, diagram)?;
    }

    let writer = DatasetWriter::new(&config.out_dir)
        .with_names(config.file_names())
        .append(config.append);
    writer.write(corpus.facts())?;
    if config.background {
        writer.write_background()?;
    }

    info!(
        diagrams = corpus.num_diagrams(),
        examples = corpus.facts().num_examples(),
        facts = corpus.facts().facts.len(),
        next_start = corpus.next_start(),
        "exported to {}",
        writer.dir().display()
    );
    Ok(())
}

fn folds(dir: &Path, config: &ExportConfig) -> Result<()> {
    let diagrams = collect_diagrams(&[dir.to_path_buf()])?;
    let dirs = write_folds(
        &diagrams,
        config.folds,
        config.seed,
        config.start,
        &config.out_dir,
    )?;

    if config.background {
        for fold_dir in &dirs {
            DatasetWriter::new(fold_dir).write_background()?;
        }
    }
    info!(
        folds = dirs.len(),
        start = config.start,
        "wrote folds to {}",
        config.out_dir.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Describe { diagram, start } => describe(&diagram, start),
        Command::Export { inputs, opts } => export(&inputs, &opts.resolve()?),
        Command::Folds { dir, k, seed, opts } => folds(&dir, &opts.resolve(k, seed)?),
    }
}
