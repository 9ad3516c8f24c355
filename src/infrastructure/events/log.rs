//! Tracing Event Sink
//!
//! Turns build events into structured log records. What is printed is up to
//! the subscriber installed by the binary.

use tracing::{debug, info, warn};

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that forwards every event to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink {
    detailed: bool,
}

impl TracingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log per-entry sync events (at debug level)
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }
}

impl BuildEventSink for TracingEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::SyncStarted {
                input,
                output,
                strategy,
                first_build,
            } => debug!(
                input = %input.display(),
                output = %output.display(),
                %strategy,
                first_build,
                "sync started"
            ),
            BuildEvent::EntryLinked { name, strategy } => debug!(%name, %strategy, "entry linked"),
            BuildEvent::EntryKept { name } => debug!(%name, "entry kept"),
            BuildEvent::EntryRemoved { name } => debug!(%name, "entry removed"),
            BuildEvent::SyncCompleted {
                output,
                linked,
                kept,
                removed,
            } => info!(output = %output.display(), linked, kept, removed, "sync complete"),
            BuildEvent::Filtered {
                mode,
                kept,
                dropped,
            } => info!(%mode, kept, dropped, "filtered wrapped modules"),
            BuildEvent::ModuleUnanalyzable { path } => {
                debug!(path = %path.display(), "module has no discoverable name, keeping it")
            }
            BuildEvent::EntryPointMissing { identifier } => {
                warn!(%identifier, "entry point not found in dependency graph")
            }
            BuildEvent::ModulesPruned { total, pruned } => {
                info!(total, pruned = pruned.len(), "tree shaking complete");
                for module in &pruned {
                    info!(%module, "pruned unreachable module");
                }
            }
            BuildEvent::BundleWritten { path, bytes } => {
                info!(path = %path.display(), bytes, "bundle written")
            }
            BuildEvent::BundleUnchanged { path } => {
                debug!(path = %path.display(), "bundle unchanged")
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
