//! Merging several diagrams into one fact base

use super::{ExportError, ExportResult};
use crate::diagram::Diagram;
use crate::ir::FactBase;
use crate::network::Network;
use tracing::debug;

/// Fact base accumulated over many diagrams
///
/// Each diagram's ids start where the previous diagram's ended, so ids stay
/// unique across the whole corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    base: FactBase,
    next_start: u32,
    diagrams: usize,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin numbering at `start` instead of zero
    pub fn starting_at(start: u32) -> Self {
        Self {
            next_start: start,
            ..Self::default()
        }
    }

    /// Describe a diagram and append its facts
    ///
    /// `name` only labels errors. On failure the corpus is left unchanged.
    pub fn add(&mut self, name: &str, diagram: &Diagram) -> ExportResult<()> {
        let network = Network::from_diagram(diagram, self.next_start).map_err(|source| {
            ExportError::Network {
                context: name.to_string(),
                source,
            }
        })?;
        let facts = network.describe().map_err(|source| ExportError::Network {
            context: name.to_string(),
            source,
        })?;

        debug!(
            diagram = name,
            start = self.next_start,
            points = network.size(),
            "added diagram to corpus"
        );

        self.next_start = network.ids().next_start();
        self.base.extend(facts);
        self.diagrams += 1;
        Ok(())
    }

    /// First id the next diagram will receive
    pub fn next_start(&self) -> u32 {
        self.next_start
    }

    pub fn num_diagrams(&self) -> usize {
        self.diagrams
    }

    pub fn facts(&self) -> &FactBase {
        &self.base
    }

    pub fn into_facts(self) -> FactBase {
        self.base
    }
}
