//! FileSystem port - abstraction over file I/O operations
//!
//! Stages never touch `std::fs` directly; they go through this trait so a
//! symlink-incapable host can be simulated in tests.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
///
/// Every variant records the path that failed.
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Permission denied
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O error
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` that happened while operating on `path`.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Closure form of [`FsError::at`] for `map_err`.
    pub fn with_path(path: &Path) -> impl FnOnce(std::io::Error) -> FsError + '_ {
        move |err| FsError::at(path, err)
    }
}

/// What occupies a path, observed without following symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A symbolic link and the target it points at
    Symlink { target: PathBuf },
    /// A regular file
    File,
    /// A real directory
    Dir,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles that refuse symlinks
pub trait FileSystem {
    /// Read file content as bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content atomically, creating parent directories
    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if anything (including a dangling symlink) occupies the path
    fn exists(&self, path: &Path) -> bool;

    /// Compute content hash (SHA256)
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Names of the direct children of a directory, sorted
    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Observe what occupies `path` without following symlinks
    fn entry_kind(&self, path: &Path) -> FsResult<Option<EntryKind>>;

    /// Whether `path` is a directory, following symlinks
    fn is_dir(&self, path: &Path) -> bool;

    /// Unlink a symlink or file, or remove a directory recursively
    fn remove_entry(&self, path: &Path) -> FsResult<()>;

    /// Create a symbolic link at `link` pointing at `source`
    fn symlink(&self, source: &Path, link: &Path) -> FsResult<()>;

    /// Copy a file, or a directory recursively
    fn copy_recursive(&self, source: &Path, dest: &Path) -> FsResult<()>;

    /// Whether symlinks can be created inside `probe_dir`
    fn can_symlink(&self, probe_dir: &Path) -> bool;

    /// Absolute, symlink-free form of a path
    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf>;
}
