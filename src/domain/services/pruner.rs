//! Dependency-graph pruner
//!
//! Drops whole files whose module is unreachable from the entry points.
//! The analysis is a pure function of the tree; the `Transform` wrapper only
//! applies it and reports the result, so operators can audit every removal.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::domain::entities::Tree;
use crate::domain::ports::{BuildEvent, BuildEventSink, ModuleInfo, ModuleScanner, Transform};
use crate::domain::services::dependency_graph::DependencyGraph;
use crate::domain::value_objects::GlobScope;
use crate::error::AssetlineResult;

/// Result of one pruning analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Modules in the graph
    pub total: usize,
    /// Identifiers of unreachable modules, sorted
    pub dead_modules: Vec<String>,
    /// Files declaring an unreachable module
    pub dead_paths: BTreeSet<PathBuf>,
    /// Files with no discoverable name; kept untouched
    pub unanalyzable: Vec<PathBuf>,
    /// Configured entry points that name no module
    pub missing_entry_points: Vec<String>,
}

/// Removes modules unreachable from the configured entry points
pub struct DependencyGraphPruner<S: ModuleScanner> {
    namespace: String,
    entry_points: Vec<String>,
    scanner: S,
    scope: GlobScope,
    pinned: BTreeSet<PathBuf>,
}

impl<S: ModuleScanner> DependencyGraphPruner<S> {
    /// `namespace` is the package name; every module inside it is a root.
    pub fn new(namespace: impl Into<String>, entry_points: Vec<String>, scanner: S) -> Self {
        Self {
            namespace: namespace.into(),
            entry_points,
            scanner,
            scope: GlobScope::all_js(),
            pinned: BTreeSet::new(),
        }
    }

    /// Files that must survive; the modules they declare become roots.
    pub fn with_pinned(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.pinned.extend(paths);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn is_in_namespace(&self, name: &str) -> bool {
        !self.namespace.is_empty()
            && (name == self.namespace
                || name
                    .strip_prefix(self.namespace.as_str())
                    .is_some_and(|rest| rest.starts_with('/')))
    }

    /// Build the graph from current content and compute the dead set.
    pub fn analyze(&self, input: &Tree) -> PruneOutcome {
        let mut outcome = PruneOutcome::default();
        let mut modules: Vec<ModuleInfo> = Vec::new();
        let mut files_by_module: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        let mut pinned_modules: BTreeSet<String> = BTreeSet::new();

        for entry in input.iter().filter(|e| self.scope.is_match(e.path())) {
            match self.scanner.scan(entry.path(), &entry.text()) {
                Some(info) => {
                    if self.pinned.contains(entry.path()) {
                        pinned_modules.insert(info.name.clone());
                    }
                    files_by_module
                        .entry(info.name.clone())
                        .or_default()
                        .push(entry.path().to_path_buf());
                    modules.push(info);
                }
                None => outcome.unanalyzable.push(entry.path().to_path_buf()),
            }
        }

        let graph = DependencyGraph::from_modules(&modules);
        outcome.total = graph.len();

        let mut roots: BTreeSet<&str> = BTreeSet::new();
        for entry_point in &self.entry_points {
            if graph.contains(entry_point) {
                roots.insert(entry_point.as_str());
            } else {
                outcome.missing_entry_points.push(entry_point.clone());
            }
        }
        roots.extend(
            files_by_module
                .keys()
                .map(String::as_str)
                .filter(|name| self.is_in_namespace(name)),
        );
        roots.extend(pinned_modules.iter().map(String::as_str));

        let dead = graph.dead(roots);
        for name in &dead {
            if let Some(paths) = files_by_module.get(name) {
                outcome.dead_paths.extend(paths.iter().cloned());
            }
        }
        outcome.dead_modules = dead.into_iter().collect();

        outcome
    }
}

impl<S: ModuleScanner> Transform for DependencyGraphPruner<S> {
    fn transform(&self, input: &Tree, events: &dyn BuildEventSink) -> AssetlineResult<Tree> {
        let outcome = self.analyze(input);

        for path in &outcome.unanalyzable {
            events.on_event(BuildEvent::ModuleUnanalyzable { path: path.clone() });
        }
        for identifier in &outcome.missing_entry_points {
            events.on_event(BuildEvent::EntryPointMissing {
                identifier: identifier.clone(),
            });
        }
        events.on_event(BuildEvent::ModulesPruned {
            total: outcome.total,
            pruned: outcome.dead_modules.clone(),
        });

        Ok(input.without(&outcome.dead_paths))
    }
}
