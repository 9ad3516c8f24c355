use std::path::Path;

use anyhow::Result;
use assetline::domain::ports::Transform;
use assetline::domain::services::DependencyGraphPruner;
use assetline::infrastructure::{read_tree, ImportScanner, JsonEventSink};
use tracing::{debug, warn};

pub fn cmd_prune(input: &Path, name: &str, entries: Vec<String>, json: bool) -> Result<()> {
    let tree = read_tree(input)?;
    let pruner = DependencyGraphPruner::new(name, entries, ImportScanner::new(name));

    if json {
        // same event stream as a pruning build; the pruned tree is discarded
        pruner.transform(&tree, &JsonEventSink::stdout())?;
        return Ok(());
    }

    let outcome = pruner.analyze(&tree);

    for path in &outcome.unanalyzable {
        debug!(path = %path.display(), "module has no discoverable name");
    }
    for identifier in &outcome.missing_entry_points {
        warn!(%identifier, "entry point not found in dependency graph");
    }
    for module in &outcome.dead_modules {
        println!("{module}");
    }
    println!(
        "{} of {} modules unreachable",
        outcome.dead_modules.len(),
        outcome.total
    );
    Ok(())
}
