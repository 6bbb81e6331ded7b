//! K-fold splits over a diagram collection

use super::{Corpus, DatasetWriter, ExportError, ExportResult, FileNames};
use crate::diagram::Diagram;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::info;

/// Indices of the items used for training and testing in one fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Split `items` indices into `k` folds
///
/// Without a seed the indices keep their natural order; with one they are
/// shuffled first. The first `items % k` test sets get one extra item.
pub fn kfold(items: usize, k: usize, seed: Option<u64>) -> ExportResult<Vec<Fold>> {
    if k < 2 || k > items {
        return Err(ExportError::InvalidFolds { items, folds: k });
    }

    let mut order: Vec<usize> = (0..items).collect();
    if let Some(seed) = seed {
        order.shuffle(&mut StdRng::seed_from_u64(seed));
    }

    let mut folds = Vec::with_capacity(k);
    let mut begin = 0;
    for i in 0..k {
        let size = items / k + usize::from(i < items % k);
        let end = begin + size;

        let mut test = order[begin..end].to_vec();
        let mut train: Vec<usize> = order[..begin]
            .iter()
            .chain(&order[end..])
            .copied()
            .collect();
        test.sort_unstable();
        train.sort_unstable();

        folds.push(Fold { train, test });
        begin = end;
    }
    Ok(folds)
}

/// Write `fold_{i}/train_*.txt` and `fold_{i}/test_*.txt` for every fold
///
/// Training ids start at `start`; within a fold the test ids continue after
/// the training ids.
pub fn write_folds<P: AsRef<Path>>(
    diagrams: &[(String, Diagram)],
    k: usize,
    seed: Option<u64>,
    start: u32,
    out: P,
) -> ExportResult<Vec<PathBuf>> {
    let folds = kfold(diagrams.len(), k, seed)?;
    let mut dirs = Vec::with_capacity(folds.len());

    for (i, fold) in folds.iter().enumerate() {
        let dir = out.as_ref().join(format!("fold_{}", i));

        let mut train = Corpus::starting_at(start);
        for &idx in &fold.train {
            let (name, diagram) = &diagrams[idx];
            train.add(name, diagram)?;
        }

        let mut test = Corpus::starting_at(train.next_start());
        for &idx in &fold.test {
            let (name, diagram) = &diagrams[idx];
            test.add(name, diagram)?;
        }

        DatasetWriter::new(&dir)
            .with_names(FileNames::with_prefix("train_"))
            .write(train.facts())?;
        DatasetWriter::new(&dir)
            .with_names(FileNames::with_prefix("test_"))
            .write(test.facts())?;

        info!(
            fold = i,
            train = fold.train.len(),
            test = fold.test.len(),
            dir = %dir.display(),
            "wrote fold"
        );
        dirs.push(dir);
    }
    Ok(dirs)
}
