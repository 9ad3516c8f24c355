//! Regex-based module scanner
//!
//! Recovers module names and dependencies without a JavaScript parser.
//! Wrapped modules carry both in their `define(...)` call; plain modules
//! inside the package namespace are named after their path and depend on
//! whatever they import.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ports::{ModuleInfo, ModuleScanner};
use crate::domain::services::classifier::WRAPPER_PREFIX;

static DEFINE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^define\(\s*["']([^"']+)["']\s*,\s*(?:\[([^\]]*)\])?"#)
        .expect("define header pattern is valid")
});

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("quoted pattern is valid"));

static IMPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+(?:[\w$*{}\s,]+?\s+from\s+)?["']([^"']+)["']"#)
        .expect("import pattern is valid")
});

static EXPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bexport\s+(?:\*(?:\s+as\s+[\w$]+)?|\{[^}]*\})\s+from\s+["']([^"']+)["']"#)
        .expect("export pattern is valid")
});

static REQUIRE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\brequire\s*\(\s*["']([^"']+)["']\s*\)"#).expect("require pattern is valid")
});

/// Names the loader injects into every `define` call
const PSEUDO_DEPENDENCIES: [&str; 3] = ["exports", "require", "module"];

/// Default [`ModuleScanner`]
#[derive(Debug, Clone)]
pub struct ImportScanner {
    namespace: String,
}

impl ImportScanner {
    /// `namespace` is the package name plain modules live under
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    fn scan_wrapped(&self, source: &str) -> Option<ModuleInfo> {
        let caps = DEFINE_HEADER.captures(source)?;
        let name = caps.get(1)?.as_str().to_string();
        let dependencies = caps
            .get(2)
            .map(|list| {
                QUOTED
                    .captures_iter(list.as_str())
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str())
                    .filter(|dep| !PSEUDO_DEPENDENCIES.contains(dep))
                    .map(|dep| resolve(&name, dep))
                    .collect()
            })
            .unwrap_or_default();
        Some(ModuleInfo::new(name, dedup(dependencies)))
    }

    fn scan_plain(&self, path: &Path, source: &str) -> Option<ModuleInfo> {
        if self.namespace.is_empty() {
            return None;
        }
        let path = path.to_str()?.replace('\\', "/");
        let rest = path.strip_prefix(self.namespace.as_str())?;
        if !rest.starts_with('/') {
            return None;
        }
        let name = path.strip_suffix(".js").unwrap_or(&path).to_string();

        let dependencies = [&*IMPORT_FROM, &*EXPORT_FROM, &*REQUIRE_CALL]
            .into_iter()
            .flat_map(|re| re.captures_iter(source))
            .filter_map(|c| c.get(1))
            .map(|m| resolve(&name, m.as_str()))
            .collect();
        Some(ModuleInfo::new(name, dedup(dependencies)))
    }
}

impl ModuleScanner for ImportScanner {
    fn scan(&self, path: &Path, source: &str) -> Option<ModuleInfo> {
        if source.starts_with(WRAPPER_PREFIX) {
            self.scan_wrapped(source)
        } else {
            self.scan_plain(path, source)
        }
    }
}

/// Resolve `./` and `../` specifiers against the importing module's id.
/// Bare specifiers are returned unchanged, minus any `.js` suffix.
pub fn resolve(importer: &str, specifier: &str) -> String {
    let specifier = specifier.strip_suffix(".js").unwrap_or(specifier);
    if !specifier.starts_with("./") && !specifier.starts_with("../") {
        return specifier.to_string();
    }

    let mut segments: Vec<&str> = importer.split('/').collect();
    segments.pop();
    for part in specifier.split('/') {
        match part {
            "." | "" => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn dedup(mut deps: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    deps.retain(|d| seen.insert(d.clone()));
    deps
}
