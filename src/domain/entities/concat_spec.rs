//! Concatenation spec entity
//!
//! Describes the exact byte layout of one output bundle: header files in
//! order, then body files selected by globs, then footer files in order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Body glob of the main vendor bundle
pub const ADDON_OUTPUT_GLOB: &str = "addon-tree-output/**/*.js";
/// Footer of the main vendor bundle
pub const VENDOR_SUFFIX: &str = "vendor/ember-cli/vendor-suffix.js";
/// Header of the application bundle
pub const APP_PREFIX: &str = "vendor/ember-cli/app-prefix.js";
/// Footers of the application bundle; boot must run last
pub const APP_FOOTERS: [&str; 3] = [
    "vendor/ember-cli/app-suffix.js",
    "vendor/ember-cli/app-config.js",
    "vendor/ember-cli/app-boot.js",
];

/// Separator placed between concatenated parts
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Source map settings handed through to the encoder untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapOptions {
    /// Embed every source's text in `sourcesContent`
    #[serde(default)]
    pub sources_content: bool,
    /// Value of the map's `sourceRoot`
    #[serde(default)]
    pub source_root: Option<String>,
}

/// Layout of one concatenated output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatSpec {
    /// Output path, relative to the build output directory
    pub output_file: PathBuf,
    pub headers: Vec<PathBuf>,
    /// Body globs; matches are sorted per glob and deduplicated
    pub inputs: Vec<String>,
    pub footers: Vec<PathBuf>,
    /// Diagnostic label, no functional effect
    pub annotation: Option<String>,
    pub separator: String,
    /// `Some` when a `.map` file should accompany the bundle
    pub source_map: Option<SourceMapOptions>,
}

impl ConcatSpec {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
            headers: Vec::new(),
            inputs: Vec::new(),
            footers: Vec::new(),
            annotation: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            source_map: None,
        }
    }

    /// Vendor layout: caller-ordered headers (shims, loader, framework).
    ///
    /// Only the main vendor file gets the addon body and the vendor suffix.
    pub fn vendor(
        output_file: impl Into<PathBuf>,
        files: Vec<PathBuf>,
        is_main_vendor_file: bool,
    ) -> Self {
        let mut spec = Self::new(output_file).with_headers(files);
        if is_main_vendor_file {
            spec = spec
                .with_inputs(vec![ADDON_OUTPUT_GLOB.to_string()])
                .with_footers(vec![PathBuf::from(VENDOR_SUFFIX)]);
        }
        spec
    }

    /// Application layout: app prefix, the app's own namespace, then
    /// suffix, generated config and boot.
    pub fn application(output_file: impl Into<PathBuf>, name: &str) -> Self {
        Self::new(output_file)
            .with_headers(vec![PathBuf::from(APP_PREFIX)])
            .with_inputs(vec![format!("{name}/**/*.js")])
            .with_footers(APP_FOOTERS.iter().map(PathBuf::from).collect())
    }

    pub fn with_headers(mut self, headers: Vec<PathBuf>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<String>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_footers(mut self, footers: Vec<PathBuf>) -> Self {
        self.footers = footers;
        self
    }

    pub fn with_annotation(mut self, annotation: Option<String>) -> Self {
        self.annotation = annotation;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_source_map(mut self, source_map: Option<SourceMapOptions>) -> Self {
        self.source_map = source_map;
        self
    }

    /// Path of the source map written next to the bundle
    pub fn map_file(&self) -> PathBuf {
        self.output_file.with_extension("map")
    }

    /// Annotation, or the output path when none was given
    pub fn label(&self) -> String {
        self.annotation
            .clone()
            .unwrap_or_else(|| self.output_file.display().to_string())
    }

    /// Whether `path` is one of the explicitly listed header/footer files
    pub fn is_framing_file(&self, path: &Path) -> bool {
        self.headers.iter().chain(&self.footers).any(|p| p == path)
    }
}
