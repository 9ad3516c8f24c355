//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Provides atomic writes (tempfile + rename), symlink-or-copy helpers and
/// standard file operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(FsError::with_path(path))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(FsError::with_path(parent))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(FsError::with_path(parent))?;
        tmp.write_all(content).map_err(FsError::with_path(path))?;
        tmp.flush().map_err(FsError::with_path(path))?;
        tmp.persist(path)
            .map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        Ok(ContentHash::from_bytes(&self.read(path)?))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(FsError::with_path(path))
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path).map_err(FsError::with_path(path))? {
            let entry = entry.map_err(FsError::with_path(path))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn entry_kind(&self, path: &Path) -> FsResult<Option<EntryKind>> {
        let meta = match path.symlink_metadata() {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FsError::at(path, e)),
        };

        let kind = if meta.file_type().is_symlink() {
            let target = std::fs::read_link(path).map_err(FsError::with_path(path))?;
            EntryKind::Symlink { target }
        } else if meta.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        Ok(Some(kind))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_entry(&self, path: &Path) -> FsResult<()> {
        match self.entry_kind(path)? {
            None => Ok(()),
            Some(EntryKind::Dir) => std::fs::remove_dir_all(path).map_err(FsError::with_path(path)),
            Some(EntryKind::Symlink { .. }) => remove_link(path),
            Some(EntryKind::File) => std::fs::remove_file(path).map_err(FsError::with_path(path)),
        }
    }

    fn symlink(&self, source: &Path, link: &Path) -> FsResult<()> {
        create_symlink(source, link).map_err(FsError::with_path(link))
    }

    fn copy_recursive(&self, source: &Path, dest: &Path) -> FsResult<()> {
        let meta = std::fs::metadata(source).map_err(FsError::with_path(source))?;
        if !meta.is_dir() {
            std::fs::copy(source, dest).map_err(FsError::with_path(dest))?;
            return Ok(());
        }

        self.create_dir_all(dest)?;
        for name in self.list_dir(source)? {
            self.copy_recursive(&source.join(&name), &dest.join(&name))?;
        }
        Ok(())
    }

    fn can_symlink(&self, probe_dir: &Path) -> bool {
        if std::fs::create_dir_all(probe_dir).is_err() {
            return false;
        }
        let Ok(scratch) = tempfile::Builder::new()
            .prefix(".assetline-probe")
            .tempdir_in(probe_dir)
        else {
            return false;
        };

        let target = scratch.path().join("target");
        let link = scratch.path().join("link");
        std::fs::write(&target, b"").is_ok() && create_symlink(&target, &link).is_ok()
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        std::fs::canonicalize(path).map_err(FsError::with_path(path))
    }
}

#[cfg(unix)]
fn create_symlink(source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, link)
}

#[cfg(windows)]
fn create_symlink(source: &Path, link: &Path) -> std::io::Result<()> {
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(source, link)
    } else {
        std::os::windows::fs::symlink_file(source, link)
    }
}

#[cfg(unix)]
fn remove_link(path: &Path) -> FsResult<()> {
    std::fs::remove_file(path).map_err(FsError::with_path(path))
}

#[cfg(windows)]
fn remove_link(path: &Path) -> FsResult<()> {
    // directory symlinks are removed with remove_dir on Windows
    std::fs::remove_file(path)
        .or_else(|_| std::fs::remove_dir(path))
        .map_err(FsError::with_path(path))
}
