//! Domain Layer
//!
//! Pure pipeline logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Tree snapshots, concatenation specs, bundles
//! - `value_objects/` - Module kinds, link strategies, globs, hashes
//! - `services/` - Classifier, filter, graph, pruner, assembler, mirror planner
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
