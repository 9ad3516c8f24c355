//! Tree snapshot entity
//!
//! A `Tree` is the unit passed between stages: an ordered map from
//! tree-relative path to file bytes. Snapshots are rebuilt every build;
//! nothing about a previous build's tree is trusted.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// One file of a tree: relative path plus byte content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    content: Vec<u8>,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as text. Invalid UTF-8 is replaced, never rejected.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Immutable-by-convention snapshot of a directory tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<PathBuf, FileEntry>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = FileEntry>) -> Self {
        let mut tree = Self::new();
        for entry in entries {
            tree.insert(entry);
        }
        tree
    }

    /// Insert or replace the entry at its path
    pub fn insert(&mut self, entry: FileEntry) {
        self.entries.insert(entry.path.clone(), entry);
    }

    pub fn get(&self, path: &Path) -> Option<&FileEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Entries in path order
    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A new tree with the given paths removed. Unknown paths are ignored.
    pub fn without(&self, excluded: &BTreeSet<PathBuf>) -> Tree {
        Tree {
            entries: self
                .entries
                .iter()
                .filter(|(path, _)| !excluded.contains(*path))
                .map(|(path, entry)| (path.clone(), entry.clone()))
                .collect(),
        }
    }
}

impl FromIterator<FileEntry> for Tree {
    fn from_iter<T: IntoIterator<Item = FileEntry>>(iter: T) -> Self {
        Tree::from_entries(iter)
    }
}
