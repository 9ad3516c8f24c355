//! Inclusion filter
//!
//! Partitions a tree by module shape. Files outside the glob scope are
//! never classified and always pass through.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::entities::Tree;
use crate::domain::ports::{BuildEvent, BuildEventSink, Transform};
use crate::domain::services::classifier::classify_bytes;
use crate::domain::value_objects::{FilterMode, GlobScope};
use crate::error::AssetlineResult;

/// Keeps either the wrapped or the non-wrapped partition of a tree
#[derive(Debug)]
pub struct InclusionFilter {
    mode: FilterMode,
    scope: GlobScope,
}

impl InclusionFilter {
    /// Filter over every `.js` file
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            scope: GlobScope::all_js(),
        }
    }

    pub fn with_scope(mut self, scope: GlobScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Paths dropped from `input`.
    ///
    /// Recomputed from content on every call.
    pub fn dropped_paths(&self, input: &Tree) -> BTreeSet<PathBuf> {
        input
            .iter()
            .filter(|entry| self.scope.is_match(entry.path()))
            .filter(|entry| !self.mode.keeps(classify_bytes(entry.content())))
            .map(|entry| entry.path().to_path_buf())
            .collect()
    }
}

impl Transform for InclusionFilter {
    fn transform(&self, input: &Tree, events: &dyn BuildEventSink) -> AssetlineResult<Tree> {
        let dropped = self.dropped_paths(input);
        let output = input.without(&dropped);

        events.on_event(BuildEvent::Filtered {
            mode: self.mode,
            kept: output.len(),
            dropped: dropped.len(),
        });

        Ok(output)
    }
}
