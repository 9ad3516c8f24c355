//! assetline - incremental asset bundling pipeline
//!
//! Turns a directory of individually authored JavaScript modules into
//! concatenated bundles, in four stages:
//!
//! - `SyncTarget` mirrors a directory into a long-lived output directory
//!   (symlinks when the host allows, copies otherwise) and reconciles it on
//!   every build
//! - `InclusionFilter` keeps or drops pre-wrapped modules, decided from
//!   their first bytes
//! - `DependencyGraphPruner` removes modules unreachable from the entry
//!   points
//! - `ConcatenationAssembler` lays out headers, body and footers into one
//!   file, with an optional source map

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildPipeline, BuildReport, BundleStrategy, SyncState, SyncTarget};
pub use config::Config;
pub use domain::entities::{Bundle, ConcatSpec, FileEntry, Tree};
pub use domain::ports::{BuildEvent, BuildEventSink, NoopEventSink, Transform};
pub use domain::services::{
    classify, ConcatenationAssembler, DependencyGraph, DependencyGraphPruner, InclusionFilter,
};
pub use domain::value_objects::{FilterMode, LinkPreference, LinkStrategy, ModuleKind};
pub use error::{AssetlineError, AssetlineResult};
pub use infrastructure::{read_tree, write_tree, ImportScanner, LocalFs};
