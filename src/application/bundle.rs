//! Bundle building use case
//!
//! One concatenation spec, optionally preceded by dead-module pruning.

use crate::domain::entities::{Bundle, ConcatSpec, Tree};
use crate::domain::ports::{BuildEventSink, ModuleScanner, Transform};
use crate::domain::services::{ConcatenationAssembler, DependencyGraphPruner};
use crate::error::AssetlineResult;
use crate::infrastructure::scanner::ImportScanner;

/// Builds one bundle from a tree snapshot
pub struct BundleStrategy<S: ModuleScanner = ImportScanner> {
    assembler: ConcatenationAssembler,
    pruner: Option<DependencyGraphPruner<S>>,
}

impl BundleStrategy<ImportScanner> {
    pub fn new(spec: ConcatSpec) -> AssetlineResult<Self> {
        Ok(Self {
            assembler: ConcatenationAssembler::new(spec)?,
            pruner: None,
        })
    }

    /// Prune with the default scanner before assembling.
    ///
    /// `name` scopes the graph: every module in that namespace is live, as
    /// are `include` and the bundle's own header and footer files.
    pub fn with_tree_shaking(self, name: &str, include: Vec<String>) -> Self {
        self.with_pruner(DependencyGraphPruner::new(
            name,
            include,
            ImportScanner::new(name),
        ))
    }
}

impl<S: ModuleScanner> BundleStrategy<S> {
    /// Route the tree through `pruner` first
    pub fn with_pruner<T: ModuleScanner>(self, pruner: DependencyGraphPruner<T>) -> BundleStrategy<T> {
        let spec = self.assembler.spec();
        let framing: Vec<_> = spec.headers.iter().chain(&spec.footers).cloned().collect();
        BundleStrategy {
            assembler: self.assembler,
            pruner: Some(pruner.with_pinned(framing)),
        }
    }

    pub fn spec(&self) -> &ConcatSpec {
        self.assembler.spec()
    }

    pub fn tree_shaking(&self) -> bool {
        self.pruner.is_some()
    }

    /// Assemble the bundle; nothing is written here.
    pub fn build(&self, tree: &Tree, events: &dyn BuildEventSink) -> AssetlineResult<Bundle> {
        match &self.pruner {
            Some(pruner) => {
                let pruned = pruner.transform(tree, events)?;
                self.assembler.assemble(&pruned)
            }
            None => self.assembler.assemble(tree),
        }
    }
}
