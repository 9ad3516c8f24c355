use std::path::Path;

use anyhow::Result;
use assetline::domain::ports::Transform;
use assetline::domain::services::InclusionFilter;
use assetline::domain::value_objects::{FilterMode, GlobScope};
use assetline::infrastructure::{read_tree, write_tree, LocalFs};

pub fn cmd_filter(
    input: &Path,
    output: &Path,
    include: bool,
    scope: &[String],
    json: bool,
    verbose: u8,
) -> Result<()> {
    let mode = if include {
        FilterMode::Include
    } else {
        FilterMode::Exclude
    };
    let scope = if scope.is_empty() {
        GlobScope::all_js()
    } else {
        GlobScope::new(scope)?
    };

    let events = super::event_sink(json, verbose);
    let tree = read_tree(input)?;
    let filtered = InclusionFilter::new(mode)
        .with_scope(scope)
        .transform(&tree, events.as_ref())?;
    write_tree(&LocalFs::new(), &filtered, output)?;

    if !json {
        println!(
            "Kept {} of {} files ({} mode) in {}",
            filtered.len(),
            tree.len(),
            mode,
            output.display()
        );
    }
    Ok(())
}
