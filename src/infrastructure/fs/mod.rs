//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus tree snapshot I/O.

mod local;
mod tree_io;

pub use local::LocalFs;
pub use tree_io::{read_tree, write_tree};
