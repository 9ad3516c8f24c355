//! Build Event Port
//!
//! Provides an observable interface for pipeline stages.
//! Stages report what they did here instead of printing; the host decides
//! whether to log, stream as JSON, or drop the events.

use std::path::PathBuf;

use crate::domain::value_objects::{FilterMode, LinkStrategy};

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Mirroring of one sync target started
    SyncStarted {
        input: PathBuf,
        output: PathBuf,
        strategy: LinkStrategy,
        first_build: bool,
    },

    /// An output entry was (re)created from its input
    EntryLinked {
        name: String,
        strategy: LinkStrategy,
    },

    /// An output entry was already a correct link and left alone
    EntryKept { name: String },

    /// An output entry no longer present in the input was removed
    EntryRemoved { name: String },

    /// Mirroring of one sync target finished
    SyncCompleted {
        output: PathBuf,
        linked: usize,
        kept: usize,
        removed: usize,
    },

    /// Inclusion filter partitioned a tree
    Filtered {
        mode: FilterMode,
        kept: usize,
        dropped: usize,
    },

    /// A module without a discoverable name was left out of the graph
    ModuleUnanalyzable { path: PathBuf },

    /// A configured entry point does not name any module in the graph
    EntryPointMissing { identifier: String },

    /// Dependency pruning finished
    ModulesPruned {
        total: usize,
        pruned: Vec<String>,
    },

    /// A bundle (or its source map) was written
    BundleWritten { path: PathBuf, bytes: usize },

    /// A bundle's content matched what was already on disk
    BundleUnchanged { path: PathBuf },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - TracingEventSink: structured log lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-entry events
    ///
    /// Summary sinks skip the per-entry sync events.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
