//! Mirror planning service
//!
//! Pure reconciliation logic for a mirrored output directory. Given what the
//! input offers and what the output currently holds, decide per entry
//! whether to create, replace, keep or remove it. No filesystem operations;
//! the caller observes state and executes the plan.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::EntryKind;
use crate::domain::value_objects::LinkStrategy;

/// Input entry whose children are hoisted to the top of the output
pub const HOISTED_DIR: &str = "modules";

/// One top-level entry the output directory should contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredEntry {
    /// Name inside the output directory
    pub name: String,
    /// Absolute path of the input entry it mirrors
    pub source: PathBuf,
}

/// The action to take for one output entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorAction {
    /// Nothing there yet: link or copy
    Create { name: String, source: PathBuf },
    /// Something stale there: unlink, then link or copy
    Replace { name: String, source: PathBuf },
    /// Already a correct link created by this mirror
    Keep { name: String },
    /// Not in the input any more
    Remove { name: String },
}

impl MirrorAction {
    pub fn name(&self) -> &str {
        match self {
            MirrorAction::Create { name, .. }
            | MirrorAction::Replace { name, .. }
            | MirrorAction::Keep { name }
            | MirrorAction::Remove { name } => name,
        }
    }
}

/// Result of planning one mirror build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorPlan {
    pub actions: Vec<MirrorAction>,
}

impl MirrorPlan {
    /// Entries that will be (re)linked or copied
    pub fn link_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, MirrorAction::Create { .. } | MirrorAction::Replace { .. }))
            .count()
    }

    pub fn keep_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, MirrorAction::Keep { .. }))
            .count()
    }

    pub fn remove_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, MirrorAction::Remove { .. }))
            .count()
    }
}

/// Pure planning service
pub struct MirrorPlanner;

impl MirrorPlanner {
    /// Entries the output should hold, sorted by name.
    ///
    /// `hoisted` lists the children of `input_root/modules` when that entry
    /// is a directory. Hoisted children become top-level entries; a real
    /// top-level entry of the same name shadows them.
    pub fn desired_entries(
        input_root: &Path,
        top_level: &[String],
        hoisted: Option<&[String]>,
    ) -> Vec<DesiredEntry> {
        let mut desired: BTreeMap<String, PathBuf> = BTreeMap::new();

        if let Some(children) = hoisted {
            let modules = input_root.join(HOISTED_DIR);
            for child in children {
                desired.insert(child.clone(), modules.join(child));
            }
        }

        for name in top_level {
            if hoisted.is_some() && name == HOISTED_DIR {
                continue;
            }
            desired.insert(name.clone(), input_root.join(name));
        }

        desired
            .into_iter()
            .map(|(name, source)| DesiredEntry { name, source })
            .collect()
    }

    /// Reconcile desired entries against what the output holds now.
    ///
    /// A symlink is only kept when this mirror created it (`has_run`) and it
    /// still points at the right source; on a first build every existing
    /// entry is treated as foreign and replaced. Copies are always refreshed
    /// because their source content may have changed.
    pub fn plan(
        desired: &[DesiredEntry],
        existing: &BTreeMap<String, EntryKind>,
        strategy: LinkStrategy,
        has_run: bool,
    ) -> MirrorPlan {
        let wanted: BTreeSet<&str> = desired.iter().map(|d| d.name.as_str()).collect();
        let mut plan = MirrorPlan::default();

        for name in existing.keys() {
            if !wanted.contains(name.as_str()) {
                plan.actions.push(MirrorAction::Remove { name: name.clone() });
            }
        }

        for entry in desired {
            let action = match existing.get(&entry.name) {
                None => MirrorAction::Create {
                    name: entry.name.clone(),
                    source: entry.source.clone(),
                },
                Some(EntryKind::Symlink { target })
                    if has_run && strategy == LinkStrategy::Symlink && *target == entry.source =>
                {
                    MirrorAction::Keep {
                        name: entry.name.clone(),
                    }
                }
                Some(_) => MirrorAction::Replace {
                    name: entry.name.clone(),
                    source: entry.source.clone(),
                },
            };
            plan.actions.push(action);
        }

        plan
    }
}
