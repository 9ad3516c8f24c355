//! Glob scope value object
//!
//! An ordered list of file globs with gitignore semantics, matched against
//! tree-relative paths. Order matters: concatenation takes body files in
//! first-matching-glob order.

use std::fmt;
use std::path::Path;

use ignore::overrides::{Override, OverrideBuilder};

use crate::error::{AssetlineError, AssetlineResult};

/// Default scope: every JavaScript file at any depth
pub const ALL_JS: &str = "**/*.js";

/// Ordered set of compiled globs.
pub struct GlobScope {
    patterns: Vec<String>,
    matchers: Vec<Override>,
}

impl GlobScope {
    /// Compile a list of globs.
    ///
    /// Each glob gets its own matcher so callers can ask which pattern
    /// matched first.
    pub fn new<I, S>(patterns: I) -> AssetlineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        let mut matchers = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let invalid = |e: ignore::Error| AssetlineError::InvalidGlob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            };

            let mut builder = OverrideBuilder::new("");
            builder.add(pattern).map_err(invalid)?;
            matchers.push(builder.build().map_err(invalid)?);
            compiled.push(pattern.to_string());
        }

        Ok(Self {
            patterns: compiled,
            matchers,
        })
    }

    /// Scope covering every `.js` file.
    pub fn all_js() -> Self {
        // ALL_JS is a constant, valid glob
        Self::new([ALL_JS]).unwrap_or_else(|_| Self::empty())
    }

    /// Scope matching nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            matchers: Vec::new(),
        }
    }

    /// Index of the first glob matching `rel_path`, if any.
    pub fn first_match(&self, rel_path: &Path) -> Option<usize> {
        self.matchers
            .iter()
            .position(|m| m.matched(rel_path, false).is_whitelist())
    }

    /// Whether any glob matches `rel_path`.
    pub fn is_match(&self, rel_path: &Path) -> bool {
        self.first_match(rel_path).is_some()
    }

    /// Number of globs.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the scope has no globs.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The source patterns, in order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl fmt::Debug for GlobScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobScope")
            .field("patterns", &self.patterns)
            .finish()
    }
}
