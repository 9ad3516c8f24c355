//! Module dependency graph
//!
//! Nodes are module identifiers, edges point from a module to the modules
//! it requires. Reachability is the transitive closure from the roots;
//! everything outside it is dead.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use crate::domain::ports::ModuleInfo;

/// Directed graph of module identifiers
#[derive(Debug, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from scanned modules.
    ///
    /// Every module becomes a node first; dependencies naming identifiers
    /// that no module declares (globals, externals) add no edge.
    pub fn from_modules<'a>(modules: impl IntoIterator<Item = &'a ModuleInfo>) -> Self {
        let modules: Vec<&ModuleInfo> = modules.into_iter().collect();
        let mut graph = Self::new();

        for module in &modules {
            graph.add_module(&module.name);
        }
        for module in &modules {
            for dep in &module.dependencies {
                graph.add_dependency(&module.name, dep);
            }
        }

        graph
    }

    /// Add a node; returns the existing one for a known identifier
    pub fn add_module(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(name) {
            return *idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Add `from -> to` if both are known modules. Returns whether an edge exists afterwards.
    pub fn add_dependency(&mut self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) if a != b => {
                self.graph.update_edge(a, b, ());
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of modules
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Transitive closure of `roots` over forward edges.
    ///
    /// Roots that are not in the graph are skipped.
    pub fn reachable<'a>(&self, roots: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        let mut reached = BTreeSet::new();
        let mut dfs = Dfs::empty(&self.graph);

        for root in roots {
            let Some(&start) = self.index.get(root) else {
                continue;
            };
            dfs.move_to(start);
            while let Some(node) = dfs.next(&self.graph) {
                reached.insert(self.graph[node].clone());
            }
        }

        reached
    }

    /// Every module not reachable from `roots`
    pub fn dead<'a>(&self, roots: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        let live = self.reachable(roots);
        self.graph
            .node_weights()
            .filter(|name| !live.contains(*name))
            .cloned()
            .collect()
    }
}
