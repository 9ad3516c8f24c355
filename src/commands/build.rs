use std::path::Path;

use anyhow::{Context, Result};
use assetline::application::BuildPipeline;
use assetline::config::Config;
use assetline::infrastructure::LocalFs;
use tracing::warn;

pub fn cmd_build(
    config_path: &Path,
    no_tree_shaking: bool,
    source_maps: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let (config, warnings) = Config::load_with_warnings(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    for warning in &warnings {
        warn!("{warning}");
    }

    let mut config = config.with_env_overrides();
    if no_tree_shaking {
        config.tree_shaking.enabled = false;
    }
    if source_maps {
        config.source_map.enabled = true;
    }

    let output = config.output.clone();
    let events = super::event_sink(json, verbose);
    let mut pipeline = BuildPipeline::new(config, LocalFs::new())?;
    let report = pipeline.build(events.as_ref())?;

    if !json {
        for sync in &report.syncs {
            println!(
                "Mirrored {} ({}): {} linked, {} kept, {} removed",
                sync.output.display(),
                sync.strategy,
                sync.linked,
                sync.kept,
                sync.removed
            );
        }
        for path in &report.written {
            println!("Wrote {}", output.join(path).display());
        }
        println!(
            "Build complete: {} written, {} unchanged",
            report.written.len(),
            report.unchanged.len()
        );
    }

    Ok(())
}
