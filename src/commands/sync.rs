use std::path::Path;

use anyhow::Result;
use assetline::application::{SyncState, SyncTarget};
use assetline::domain::value_objects::LinkPreference;
use assetline::infrastructure::LocalFs;

pub fn cmd_sync(
    input: &Path,
    output: &Path,
    strategy: LinkPreference,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let events = super::event_sink(json, verbose);
    let target = SyncTarget::new(input, output, LocalFs::new()).with_preference(strategy);
    let report = target.build(&mut SyncState::new(), events.as_ref())?;

    if !json {
        println!(
            "Mirrored {} -> {} ({}): {} linked, {} removed",
            input.display(),
            output.display(),
            report.strategy,
            report.linked,
            report.removed
        );
    }
    Ok(())
}
