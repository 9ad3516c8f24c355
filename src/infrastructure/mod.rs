//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and tree snapshot I/O
//! - `events/` - Build event sinks (JSON, tracing)
//! - `scanner/` - Module scanners for dependency analysis

pub mod events;
pub mod fs;
pub mod scanner;

// Re-export for convenience
pub use events::{JsonEventSink, TracingEventSink};
pub use fs::{read_tree, write_tree, LocalFs};
pub use scanner::ImportScanner;
