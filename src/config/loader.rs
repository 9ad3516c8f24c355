//! Configuration loading

use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{AssetlineError, AssetlineResult};

use super::types::Config;

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths in the file are resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> AssetlineResult<(Config, Vec<ConfigWarning>)> {
    let content = std::fs::read_to_string(path)
        .map_err(crate::domain::ports::FsError::with_path(path))?;

    let (config, warnings) = parse_with_warnings(&content, path)?;
    let base = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Ok((config.rooted_at(base), warnings))
}

/// Parse TOML text; `origin` only labels errors and warnings.
pub fn parse_with_warnings(
    content: &str,
    origin: &Path,
) -> AssetlineResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetlineError::ConfigParse {
        file: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key: path_str,
                file: origin.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (ASSETLINE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Overrides from an arbitrary variable lookup
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // ASSETLINE_OUTPUT
    if let Some(output) = lookup("ASSETLINE_OUTPUT").filter(|v| !v.trim().is_empty()) {
        config.output = output.into();
    }

    // ASSETLINE_TREE_SHAKING
    if let Some(val) = lookup("ASSETLINE_TREE_SHAKING") {
        config.tree_shaking.enabled = is_truthy(&val);
    }

    // ASSETLINE_SOURCE_MAPS
    if let Some(val) = lookup("ASSETLINE_SOURCE_MAPS") {
        config.source_map.enabled = is_truthy(&val);
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "off" && !val.is_empty()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "name",
        "input",
        "output",
        "separator",
        "filter",
        "mode",
        "scope",
        "tree_shaking",
        "enabled",
        "include",
        "source_map",
        "sources_content",
        "source_root",
        "bundle",
        "kind",
        "output_file",
        "annotation",
        "files",
        "main_vendor",
        "headers",
        "inputs",
        "footers",
        "sync",
        "strategy",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
