//! Module scanner implementations

mod import_scanner;

pub use import_scanner::{resolve, ImportScanner};
