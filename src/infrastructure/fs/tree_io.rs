//! Reading a directory into a [`Tree`] snapshot and writing one back.

use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::{FileEntry, Tree};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::error::{AssetlineError, AssetlineResult};

/// Snapshot every regular file below `root`.
///
/// Symlinks are followed, so a mirrored directory reads the same as the
/// directory it mirrors. Dotfiles and ignore files get no special treatment.
pub fn read_tree(root: &Path) -> AssetlineResult<Tree> {
    if !root.is_dir() {
        return Err(FsError::NotFound {
            path: root.to_path_buf(),
        }
        .into());
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut tree = Tree::new();
    for entry in walker {
        let entry = entry.map_err(|e| AssetlineError::Walk {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = match path.strip_prefix(root) {
            Ok(rel) => normalize(rel),
            Err(_) => continue,
        };
        let content = std::fs::read(path).map_err(FsError::with_path(path))?;
        tree.insert(FileEntry::new(relative, content));
    }

    Ok(tree)
}

/// Make `dir` hold exactly the entries of `tree`.
///
/// Files below `dir` that are not in the tree are removed first, along with
/// any directories they leave empty, so rerunning a stage never leaves
/// output from the previous run behind.
pub fn write_tree<FS: FileSystem + ?Sized>(fs: &FS, tree: &Tree, dir: &Path) -> AssetlineResult<()> {
    if fs.is_dir(dir) {
        remove_stale(fs, tree, dir)?;
    }
    for entry in tree.iter() {
        fs.write_atomic(&dir.join(entry.path()), entry.content())?;
    }
    Ok(())
}

fn remove_stale<FS: FileSystem + ?Sized>(fs: &FS, tree: &Tree, dir: &Path) -> AssetlineResult<()> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut subdirs = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| AssetlineError::Walk {
            root: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            subdirs.push((entry.depth(), path.to_path_buf()));
            continue;
        }
        let Ok(rel) = path.strip_prefix(dir) else {
            continue;
        };
        if !tree.contains(&normalize(rel)) {
            fs.remove_entry(path)?;
        }
    }

    // deepest first, so a parent is only checked once its children are gone
    subdirs.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, subdir) in subdirs {
        if fs.list_dir(&subdir)?.is_empty() {
            fs.remove_entry(&subdir)?;
        }
    }
    Ok(())
}

/// `/`-separated relative path, so globs and module ids look the same on
/// every platform.
fn normalize(rel: &Path) -> PathBuf {
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    PathBuf::from(parts.join("/"))
}
