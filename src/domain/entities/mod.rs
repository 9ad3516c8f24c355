//! Domain Entities
//!
//! - `Tree` / `FileEntry` - snapshot passed between stages
//! - `ConcatSpec` - byte layout of one bundle
//! - `Bundle` - assembled output of a `ConcatSpec`

mod bundle;
mod concat_spec;
mod tree;

pub use bundle::Bundle;
pub use concat_spec::{
    ConcatSpec, SourceMapOptions, ADDON_OUTPUT_GLOB, APP_FOOTERS, APP_PREFIX, DEFAULT_SEPARATOR,
    VENDOR_SUFFIX,
};
pub use tree::{FileEntry, Tree};
