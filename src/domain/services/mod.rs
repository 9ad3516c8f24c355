//! Domain Services
//!
//! Stateless logic of the pipeline stages. Nothing here touches the disk.

pub mod assembler;
pub mod classifier;
pub mod dependency_graph;
pub mod inclusion_filter;
pub mod mirror_planner;
pub mod pruner;
pub mod source_map;

pub use assembler::ConcatenationAssembler;
pub use classifier::{classify, classify_bytes, WRAPPER_PREFIX};
pub use dependency_graph::DependencyGraph;
pub use inclusion_filter::InclusionFilter;
pub use mirror_planner::{DesiredEntry, MirrorAction, MirrorPlan, MirrorPlanner, HOISTED_DIR};
pub use pruner::{DependencyGraphPruner, PruneOutcome};
pub use source_map::SourceMapBuilder;
