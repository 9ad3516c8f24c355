//! How a mirrored directory reproduces its input entries

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strategy actually used for an output entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStrategy {
    /// Symbolic link to the input entry
    Symlink,
    /// Full recursive copy of the input entry
    Copy,
}

impl LinkStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStrategy::Symlink => "symlink",
            LinkStrategy::Copy => "copy",
        }
    }
}

impl fmt::Display for LinkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured preference; `Auto` probes the host filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPreference {
    #[default]
    Auto,
    Symlink,
    Copy,
}

impl LinkPreference {
    /// The strategy this preference pins, if any
    pub fn forced(&self) -> Option<LinkStrategy> {
        match self {
            LinkPreference::Auto => None,
            LinkPreference::Symlink => Some(LinkStrategy::Symlink),
            LinkPreference::Copy => Some(LinkStrategy::Copy),
        }
    }
}

impl std::str::FromStr for LinkPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(LinkPreference::Auto),
            "symlink" | "link" => Ok(LinkPreference::Symlink),
            "copy" => Ok(LinkPreference::Copy),
            other => Err(format!(
                "unknown strategy '{other}' (expected auto, symlink or copy)"
            )),
        }
    }
}
