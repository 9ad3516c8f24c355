//! Error types for assetline
//!
//! Library code returns `AssetlineResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for assetline operations
pub type AssetlineResult<T> = Result<T, AssetlineError>;

/// Main error type for assetline operations
#[derive(Error, Debug)]
pub enum AssetlineError {
    /// Filesystem operation failed (missing file, permission denied, ...)
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Walking an input tree failed
    #[error("failed to walk {root}: {message}")]
    Walk { root: PathBuf, message: String },

    /// A glob pattern could not be compiled
    #[error("invalid glob '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A header or footer file named by a concatenation spec is not in the tree
    #[error("required file '{path}' not found in input tree (bundle {bundle})")]
    MissingFile { path: PathBuf, bundle: String },

    /// Configuration is structurally valid TOML but semantically wrong
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration file could not be parsed
    #[error("failed to parse {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Source map serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
