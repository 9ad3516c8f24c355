//! Module classification value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of a JavaScript file, decided from its first bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Produced by a module-registration code generator (`define(` at byte 0)
    Wrapped,
    /// Anything else
    Plain,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Wrapped => "wrapped",
            ModuleKind::Plain => "plain",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which partition an inclusion filter emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Only wrapped files pass through
    Include,
    /// Wrapped files are dropped; everything else passes through
    #[default]
    Exclude,
}

impl FilterMode {
    /// Whether a file of `kind` survives this mode
    pub fn keeps(&self, kind: ModuleKind) -> bool {
        match self {
            FilterMode::Include => kind == ModuleKind::Wrapped,
            FilterMode::Exclude => kind != ModuleKind::Wrapped,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Include => "include",
            FilterMode::Exclude => "exclude",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
