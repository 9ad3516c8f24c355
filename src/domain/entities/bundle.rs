//! Bundle entity: the assembled bytes of one concatenation spec

use std::path::{Path, PathBuf};

/// One assembled output file and, optionally, its source map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    output_file: PathBuf,
    content: Vec<u8>,
    source_map: Option<(PathBuf, Vec<u8>)>,
}

impl Bundle {
    pub fn new(output_file: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        Self {
            output_file: output_file.into(),
            content,
            source_map: None,
        }
    }

    pub fn with_source_map(mut self, map_file: PathBuf, map: Vec<u8>) -> Self {
        self.source_map = Some((map_file, map));
        self
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Map path and JSON bytes, when maps are enabled
    pub fn source_map(&self) -> Option<(&Path, &[u8])> {
        self.source_map
            .as_ref()
            .map(|(path, bytes)| (path.as_path(), bytes.as_slice()))
    }

    /// Every file this bundle writes, bundle first
    pub fn files(&self) -> Vec<(&Path, &[u8])> {
        let mut files = vec![(self.output_file(), self.content())];
        files.extend(self.source_map());
        files
    }
}
