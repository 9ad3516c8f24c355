//! Value Objects
//!
//! Immutable types with no identity.

mod config_warning;
mod glob_scope;
mod hash;
mod link_strategy;
mod module_kind;

pub use config_warning::ConfigWarning;
pub use glob_scope::{GlobScope, ALL_JS};
pub use hash::ContentHash;
pub use link_strategy::{LinkPreference, LinkStrategy};
pub use module_kind::{FilterMode, ModuleKind};
