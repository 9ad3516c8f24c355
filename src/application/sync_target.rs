//! SyncTarget use case
//!
//! Keeps a long-lived output directory mirroring an input directory, one
//! symlink (or copy) per top-level entry. Every build observes the output
//! as it actually is and reconciles it, so a directory left half-updated
//! by an aborted build is repaired by the next one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem};
use crate::domain::services::{MirrorAction, MirrorPlan, MirrorPlanner, HOISTED_DIR};
use crate::domain::value_objects::{LinkPreference, LinkStrategy};
use crate::error::AssetlineResult;

/// Per-instance build state, threaded through every `build` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncState {
    has_run: bool,
    strategy: Option<LinkStrategy>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a build of this instance has completed
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Strategy chosen by the first build, reused afterwards
    pub fn strategy(&self) -> Option<LinkStrategy> {
        self.strategy
    }
}

/// Outcome of one mirror build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub output: PathBuf,
    pub strategy: LinkStrategy,
    pub first_build: bool,
    pub linked: usize,
    pub kept: usize,
    pub removed: usize,
}

/// Mirrors `input` into `output`
pub struct SyncTarget<FS: FileSystem> {
    input: PathBuf,
    output: PathBuf,
    fs: FS,
    preference: LinkPreference,
}

impl<FS: FileSystem> SyncTarget<FS> {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            fs,
            preference: LinkPreference::Auto,
        }
    }

    pub fn with_preference(mut self, preference: LinkPreference) -> Self {
        self.preference = preference;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Bring the output directory in line with the input.
    ///
    /// Afterwards the output holds exactly the input's top-level entries
    /// (with `modules/` children hoisted), each a link to or copy of its
    /// source. Filesystem errors propagate; `state` is only advanced when
    /// the build succeeds.
    pub fn build(
        &self,
        state: &mut SyncState,
        events: &dyn BuildEventSink,
    ) -> AssetlineResult<SyncReport> {
        let input = self.fs.canonicalize(&self.input)?;
        let strategy = self.resolve_strategy(state);
        let first_build = !state.has_run;

        events.on_event(BuildEvent::SyncStarted {
            input: input.clone(),
            output: self.output.clone(),
            strategy,
            first_build,
        });

        self.fs.create_dir_all(&self.output)?;
        let plan = self.plan(&input, strategy, state.has_run)?;
        self.execute(&plan, strategy, events)?;

        state.has_run = true;
        state.strategy = Some(strategy);

        let report = SyncReport {
            output: self.output.clone(),
            strategy,
            first_build,
            linked: plan.link_count(),
            kept: plan.keep_count(),
            removed: plan.remove_count(),
        };
        events.on_event(BuildEvent::SyncCompleted {
            output: report.output.clone(),
            linked: report.linked,
            kept: report.kept,
            removed: report.removed,
        });
        Ok(report)
    }

    /// Remove every mirrored entry and the output directory itself, and
    /// forget the previous builds.
    pub fn teardown(&self, state: &mut SyncState) -> AssetlineResult<()> {
        if self.fs.entry_kind(&self.output)?.is_some() {
            for name in self.fs.list_dir(&self.output)? {
                self.fs.remove_entry(&self.output.join(name))?;
            }
            self.fs.remove_entry(&self.output)?;
        }
        *state = SyncState::default();
        Ok(())
    }

    fn resolve_strategy(&self, state: &SyncState) -> LinkStrategy {
        if let Some(strategy) = state.strategy {
            return strategy;
        }
        self.preference.forced().unwrap_or_else(|| {
            let probe_dir = match self.output.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            if self.fs.can_symlink(probe_dir) {
                LinkStrategy::Symlink
            } else {
                LinkStrategy::Copy
            }
        })
    }

    fn plan(&self, input: &Path, strategy: LinkStrategy, has_run: bool) -> AssetlineResult<MirrorPlan> {
        let top_level = self.fs.list_dir(input)?;
        let modules_dir = input.join(HOISTED_DIR);
        // a linked `modules` (the output of another mirror) is hoisted too
        let hoisted = if self.fs.is_dir(&modules_dir) {
            Some(self.fs.list_dir(&modules_dir)?)
        } else {
            None
        };
        let desired = MirrorPlanner::desired_entries(input, &top_level, hoisted.as_deref());

        let mut existing = BTreeMap::new();
        for name in self.fs.list_dir(&self.output)? {
            if let Some(kind) = self.fs.entry_kind(&self.output.join(&name))? {
                existing.insert(name, kind);
            }
        }

        Ok(MirrorPlanner::plan(&desired, &existing, strategy, has_run))
    }

    fn execute(
        &self,
        plan: &MirrorPlan,
        strategy: LinkStrategy,
        events: &dyn BuildEventSink,
    ) -> AssetlineResult<()> {
        let detailed = events.wants_detailed_events();

        for action in &plan.actions {
            let dest = self.output.join(action.name());
            match action {
                MirrorAction::Remove { name } => {
                    self.fs.remove_entry(&dest)?;
                    if detailed {
                        events.on_event(BuildEvent::EntryRemoved { name: name.clone() });
                    }
                }
                MirrorAction::Keep { name } => {
                    if detailed {
                        events.on_event(BuildEvent::EntryKept { name: name.clone() });
                    }
                }
                MirrorAction::Create { name, source } | MirrorAction::Replace { name, source } => {
                    if matches!(action, MirrorAction::Replace { .. }) {
                        self.fs.remove_entry(&dest)?;
                    }
                    match strategy {
                        LinkStrategy::Symlink => self.fs.symlink(source, &dest)?,
                        LinkStrategy::Copy => self.fs.copy_recursive(source, &dest)?,
                    }
                    if detailed {
                        events.on_event(BuildEvent::EntryLinked {
                            name: name.clone(),
                            strategy,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
