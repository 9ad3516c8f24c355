//! Configuration type definitions

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ConcatSpec, SourceMapOptions, DEFAULT_SEPARATOR};
use crate::domain::value_objects::{FilterMode, LinkPreference, ALL_JS};
use crate::error::{AssetlineError, AssetlineResult};

use super::loader;
use crate::domain::value_objects::ConfigWarning;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "assetline.toml";

/// Inclusion filter configuration; absent means no filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub mode: FilterMode,

    #[serde(default = "default_scope")]
    pub scope: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::default(),
            scope: default_scope(),
        }
    }
}

fn default_scope() -> Vec<String> {
    vec![ALL_JS.to_string()]
}

/// Dead-module pruning before concatenation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeShakingConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Entry points besides the package's own namespace
    #[serde(default)]
    pub include: Vec<String>,
}

/// Source map generation for every bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub sources_content: bool,

    #[serde(default)]
    pub source_root: Option<String>,
}

impl SourceMapConfig {
    /// Options handed to the assembler, `None` when disabled
    pub fn options(&self) -> Option<SourceMapOptions> {
        self.enabled.then(|| SourceMapOptions {
            sources_content: self.sources_content,
            source_root: self.source_root.clone(),
        })
    }
}

/// Named bundle layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    Vendor,
    Application,
    Custom,
}

/// One `[[bundle]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    pub kind: BundleKind,

    pub output_file: PathBuf,

    #[serde(default)]
    pub annotation: Option<String>,

    /// Vendor: header files in execution order
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Vendor: whether this file also carries addon output and the suffix
    #[serde(default = "default_true")]
    pub main_vendor: bool,

    /// Custom layout
    #[serde(default)]
    pub headers: Vec<PathBuf>,

    #[serde(default)]
    pub inputs: Vec<String>,

    #[serde(default)]
    pub footers: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl BundleConfig {
    /// Concatenation layout for this bundle
    pub fn to_spec(&self, name: &str) -> ConcatSpec {
        let spec = match self.kind {
            BundleKind::Vendor => {
                ConcatSpec::vendor(&self.output_file, self.files.clone(), self.main_vendor)
            }
            BundleKind::Application => ConcatSpec::application(&self.output_file, name),
            BundleKind::Custom => ConcatSpec::new(&self.output_file)
                .with_headers(self.headers.clone())
                .with_inputs(self.inputs.clone())
                .with_footers(self.footers.clone()),
        };
        spec.with_annotation(self.annotation.clone())
    }

    /// Tree shaking never touches the application bundle; its modules are
    /// all roots anyway.
    pub fn prunable(&self) -> bool {
        self.kind != BundleKind::Application
    }
}

/// One `[[sync]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    pub input: PathBuf,

    pub output: PathBuf,

    #[serde(default)]
    pub strategy: LinkPreference,
}

/// Root configuration (`assetline.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Package name; names the application bundle and scopes pruning
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub filter: Option<FilterConfig>,

    #[serde(default)]
    pub tree_shaking: TreeShakingConfig,

    #[serde(default)]
    pub source_map: SourceMapConfig,

    #[serde(default, rename = "bundle")]
    pub bundles: Vec<BundleConfig>,

    #[serde(default, rename = "sync")]
    pub syncs: Vec<SyncConfig>,
}

fn default_input() -> PathBuf {
    PathBuf::from(".")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::new(),
            input: default_input(),
            output: default_output(),
            separator: default_separator(),
            filter: None,
            tree_shaking: TreeShakingConfig::default(),
            source_map: SourceMapConfig::default(),
            bundles: Vec::new(),
            syncs: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetlineResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AssetlineResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ASSETLINE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolve relative paths against `base` (the config file's directory)
    pub fn rooted_at(mut self, base: &Path) -> Self {
        let root = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        root(&mut self.input);
        root(&mut self.output);
        for sync in &mut self.syncs {
            root(&mut sync.input);
            root(&mut sync.output);
        }
        self
    }

    /// Every bundle's concatenation layout, with the global separator and
    /// source map settings applied
    pub fn concat_specs(&self) -> Vec<ConcatSpec> {
        self.bundles
            .iter()
            .map(|bundle| {
                bundle
                    .to_spec(&self.name)
                    .with_separator(self.separator.clone())
                    .with_source_map(self.source_map.options())
            })
            .collect()
    }

    /// Reject configurations that cannot produce a build
    pub fn validate(&self) -> AssetlineResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("'name' must not be empty"));
        }

        let mut seen = BTreeSet::new();
        for bundle in &self.bundles {
            if !seen.insert(bundle.output_file.as_path()) {
                return Err(invalid(format!(
                    "two bundles write '{}'",
                    bundle.output_file.display()
                )));
            }
            if bundle.kind == BundleKind::Custom
                && bundle.headers.is_empty()
                && bundle.inputs.is_empty()
                && bundle.footers.is_empty()
            {
                return Err(invalid(format!(
                    "custom bundle '{}' needs at least one header, input or footer",
                    bundle.output_file.display()
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AssetlineError {
    AssetlineError::InvalidConfig {
        message: message.into(),
    }
}
