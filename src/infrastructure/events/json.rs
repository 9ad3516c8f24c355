//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of one event
pub(crate) fn event_json(event: &BuildEvent) -> serde_json::Value {
    match event {
        BuildEvent::SyncStarted {
            input,
            output,
            strategy,
            first_build,
        } => serde_json::json!({
            "event": "sync_start",
            "input": input.display().to_string(),
            "output": output.display().to_string(),
            "strategy": strategy,
            "first_build": first_build,
        }),

        BuildEvent::EntryLinked { name, strategy } => serde_json::json!({
            "event": "entry_linked",
            "name": name,
            "strategy": strategy,
        }),

        BuildEvent::EntryKept { name } => serde_json::json!({
            "event": "entry_kept",
            "name": name,
        }),

        BuildEvent::EntryRemoved { name } => serde_json::json!({
            "event": "entry_removed",
            "name": name,
        }),

        BuildEvent::SyncCompleted {
            output,
            linked,
            kept,
            removed,
        } => serde_json::json!({
            "event": "sync_complete",
            "output": output.display().to_string(),
            "linked": linked,
            "kept": kept,
            "removed": removed,
        }),

        BuildEvent::Filtered {
            mode,
            kept,
            dropped,
        } => serde_json::json!({
            "event": "filtered",
            "mode": mode,
            "kept": kept,
            "dropped": dropped,
        }),

        BuildEvent::ModuleUnanalyzable { path } => serde_json::json!({
            "event": "module_unanalyzable",
            "path": path.display().to_string(),
        }),

        BuildEvent::EntryPointMissing { identifier } => serde_json::json!({
            "event": "entry_point_missing",
            "identifier": identifier,
        }),

        BuildEvent::ModulesPruned { total, pruned } => serde_json::json!({
            "event": "modules_pruned",
            "total": total,
            "pruned_count": pruned.len(),
            "pruned": pruned,
        }),

        BuildEvent::BundleWritten { path, bytes } => serde_json::json!({
            "event": "bundle_written",
            "path": path.display().to_string(),
            "bytes": bytes,
        }),

        BuildEvent::BundleUnchanged { path } => serde_json::json!({
            "event": "bundle_unchanged",
            "path": path.display().to_string(),
        }),
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.write_event(event_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
