//! Concatenation assembler
//!
//! Lays out one bundle as headers ++ body ++ footers. Body files are taken
//! glob by glob, each glob's matches in path order, skipping files already
//! placed. The same tree always yields the same bytes.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::{Bundle, ConcatSpec, FileEntry, Tree};
use crate::domain::services::source_map::SourceMapBuilder;
use crate::domain::value_objects::GlobScope;
use crate::error::{AssetlineError, AssetlineResult};

/// Assembles a [`ConcatSpec`] against tree snapshots
#[derive(Debug)]
pub struct ConcatenationAssembler {
    spec: ConcatSpec,
    body: GlobScope,
}

impl ConcatenationAssembler {
    pub fn new(spec: ConcatSpec) -> AssetlineResult<Self> {
        let body = GlobScope::new(&spec.inputs)?;
        Ok(Self { spec, body })
    }

    pub fn spec(&self) -> &ConcatSpec {
        &self.spec
    }

    /// Body files in output order
    pub fn body_files<'t>(&self, tree: &'t Tree) -> Vec<&'t FileEntry> {
        let mut seen: HashSet<&Path> = HashSet::new();
        let mut files = Vec::new();

        for glob in 0..self.body.len() {
            for entry in tree.iter() {
                if self.body.first_match(entry.path()) != Some(glob)
                    || self.spec.is_framing_file(entry.path())
                {
                    continue;
                }
                if seen.insert(entry.path()) {
                    files.push(entry);
                }
            }
        }

        files
    }

    fn framing_file<'t>(&self, tree: &'t Tree, path: &Path) -> AssetlineResult<&'t FileEntry> {
        tree.get(path).ok_or_else(|| AssetlineError::MissingFile {
            path: path.to_path_buf(),
            bundle: self.spec.label(),
        })
    }

    /// Every part of the bundle in order
    pub fn parts<'t>(&self, tree: &'t Tree) -> AssetlineResult<Vec<&'t FileEntry>> {
        let mut parts = Vec::new();
        for header in &self.spec.headers {
            parts.push(self.framing_file(tree, header)?);
        }
        parts.extend(self.body_files(tree));
        for footer in &self.spec.footers {
            parts.push(self.framing_file(tree, footer)?);
        }
        Ok(parts)
    }

    /// Concatenate the tree into a bundle (plus map when configured)
    pub fn assemble(&self, tree: &Tree) -> AssetlineResult<Bundle> {
        let parts = self.parts(tree)?;
        let separator = self.spec.separator.as_str();
        let mut map = self.spec.source_map.clone().map(SourceMapBuilder::new);
        let mut content: Vec<u8> = Vec::new();

        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                content.extend_from_slice(separator.as_bytes());
                if let Some(map) = map.as_mut() {
                    map.add_unmapped(separator);
                }
            }
            content.extend_from_slice(part.content());
            if let Some(map) = map.as_mut() {
                map.add_mapped(&path_to_source(part.path()), &part.text());
            }
        }

        let Some(map) = map.as_mut() else {
            return Ok(Bundle::new(&self.spec.output_file, content));
        };

        let map_file = self.spec.map_file();
        let mut trailer = String::new();
        if !content.is_empty() && !content.ends_with(b"\n") {
            trailer.push('\n');
        }
        trailer.push_str(&format!(
            "//# sourceMappingURL={}\n",
            file_name(&map_file)
        ));
        content.extend_from_slice(trailer.as_bytes());
        map.add_unmapped(&trailer);

        let map_bytes = map.finish(&file_name(&self.spec.output_file))?;
        Ok(Bundle::new(&self.spec.output_file, content).with_source_map(map_file, map_bytes))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn path_to_source(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
