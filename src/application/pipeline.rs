//! Build pipeline
//!
//! Runs one configured build end to end.
//!
//! ## Flow
//!
//! 1. Reconcile every `[[sync]]` mirror (state kept across builds)
//! 2. Snapshot the input tree
//! 3. Apply the inclusion filter, when configured
//! 4. Build every bundle (pruning first where tree shaking applies)
//! 5. Write bundles whose bytes changed

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::application::bundle::BundleStrategy;
use crate::application::sync_target::{SyncReport, SyncState, SyncTarget};
use crate::config::Config;
use crate::domain::entities::{Bundle, Tree};
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, Transform};
use crate::domain::services::InclusionFilter;
use crate::domain::value_objects::{ContentHash, GlobScope};
use crate::error::AssetlineResult;
use crate::infrastructure::fs::read_tree;

/// What one `build()` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub syncs: Vec<SyncReport>,
    /// Files rewritten, relative to the output directory
    pub written: Vec<PathBuf>,
    /// Files whose bytes already matched
    pub unchanged: Vec<PathBuf>,
}

/// Configured pipeline; reuse it across builds so mirrors stay incremental
pub struct BuildPipeline<FS: FileSystem + Clone> {
    config: Config,
    fs: FS,
    filter: Option<InclusionFilter>,
    bundles: Vec<BundleStrategy>,
    syncs: Vec<(SyncTarget<FS>, SyncState)>,
}

impl<FS: FileSystem + Clone> BuildPipeline<FS> {
    /// Validate the config and compile every glob up front.
    pub fn new(config: Config, fs: FS) -> AssetlineResult<Self> {
        config.validate()?;

        let filter = match &config.filter {
            Some(filter) => Some(
                InclusionFilter::new(filter.mode).with_scope(GlobScope::new(&filter.scope)?),
            ),
            None => None,
        };

        let mut bundles = Vec::new();
        for (bundle, spec) in config.bundles.iter().zip(config.concat_specs()) {
            let strategy = BundleStrategy::new(spec)?;
            bundles.push(if config.tree_shaking.enabled && bundle.prunable() {
                strategy.with_tree_shaking(&config.name, config.tree_shaking.include.clone())
            } else {
                strategy
            });
        }

        let syncs = config
            .syncs
            .iter()
            .map(|sync| {
                let target = SyncTarget::new(&sync.input, &sync.output, fs.clone())
                    .with_preference(sync.strategy);
                (target, SyncState::new())
            })
            .collect();

        Ok(Self {
            config,
            fs,
            filter,
            bundles,
            syncs,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every stage once
    pub fn build(&mut self, events: &dyn BuildEventSink) -> AssetlineResult<BuildReport> {
        let mut report = BuildReport::default();

        for (target, state) in &mut self.syncs {
            report.syncs.push(target.build(state, events)?);
        }

        let mut tree = self.snapshot()?;
        if let Some(filter) = &self.filter {
            tree = filter.transform(&tree, events)?;
        }

        for strategy in &self.bundles {
            let bundle = strategy.build(&tree, events)?;
            self.write_bundle(&bundle, events, &mut report)?;
        }

        Ok(report)
    }

    /// Remove every sync mirror
    pub fn teardown(&mut self) -> AssetlineResult<()> {
        for (target, state) in &mut self.syncs {
            target.teardown(state)?;
        }
        Ok(())
    }

    /// Input tree without anything under the output directory
    fn snapshot(&self) -> AssetlineResult<Tree> {
        let tree = read_tree(&self.config.input)?;
        let output = without_cur_dir(&self.config.output);
        let Ok(inside) = output.strip_prefix(without_cur_dir(&self.config.input)) else {
            return Ok(tree);
        };
        if inside.as_os_str().is_empty() {
            return Ok(tree);
        }

        let excluded: BTreeSet<PathBuf> = tree
            .paths()
            .filter(|path| path.starts_with(inside))
            .map(Path::to_path_buf)
            .collect();
        Ok(tree.without(&excluded))
    }

    fn write_bundle(
        &self,
        bundle: &Bundle,
        events: &dyn BuildEventSink,
        report: &mut BuildReport,
    ) -> AssetlineResult<()> {
        for (relative, content) in bundle.files() {
            let dest = self.config.output.join(relative);
            let unchanged = self.fs.exists(&dest)
                && self.fs.hash(&dest)? == ContentHash::from_bytes(content);

            if unchanged {
                events.on_event(BuildEvent::BundleUnchanged { path: dest });
                report.unchanged.push(relative.to_path_buf());
            } else {
                self.fs.write_atomic(&dest, content)?;
                events.on_event(BuildEvent::BundleWritten {
                    path: dest,
                    bytes: content.len(),
                });
                report.written.push(relative.to_path_buf());
            }
        }
        Ok(())
    }
}

/// `./dist` and `dist` name the same directory
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
