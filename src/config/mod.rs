//! Configuration module for assetline
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETLINE_*)
//! 3. Project config (`assetline.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::parse_with_warnings;
pub use types::{
    BundleConfig, BundleKind, Config, FilterConfig, SourceMapConfig, SyncConfig,
    TreeShakingConfig, CONFIG_FILE_NAME,
};
