use std::path::PathBuf;

use anyhow::{Context, Result};
use assetline::domain::services::classify_bytes;

pub fn cmd_classify(files: &[PathBuf], json: bool) -> Result<()> {
    for path in files {
        let content =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let kind = classify_bytes(&content);

        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "classified",
                    "path": path.display().to_string(),
                    "kind": kind.as_str(),
                })
            );
        } else {
            println!("{kind}\t{}", path.display());
        }
    }
    Ok(())
}
