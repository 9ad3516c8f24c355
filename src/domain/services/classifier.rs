//! Content classifier
//!
//! Wrapped modules are machine-generated and always open with the
//! registration call at byte 0, so only that position is checked. A file
//! mentioning `define(` anywhere else is plain.

use crate::domain::value_objects::ModuleKind;

/// Declaration-call prefix of the module-wrapper format
pub const WRAPPER_PREFIX: &str = "define(";

/// Classify source text by its first characters.
pub fn classify(source: &str) -> ModuleKind {
    classify_bytes(source.as_bytes())
}

/// Byte form of [`classify`]; does not require valid UTF-8.
pub fn classify_bytes(source: &[u8]) -> ModuleKind {
    if source.starts_with(WRAPPER_PREFIX.as_bytes()) {
        ModuleKind::Wrapped
    } else {
        ModuleKind::Plain
    }
}
