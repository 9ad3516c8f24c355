//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncTarget` - Keeps a mirrored output directory in sync across builds
//! - `BundleStrategy` - Prune (optionally) and assemble one bundle
//! - `BuildPipeline` - Runs the configured syncs, filter and bundles

pub mod bundle;
pub mod pipeline;
pub mod sync_target;

pub use bundle::BundleStrategy;
pub use pipeline::{BuildPipeline, BuildReport};
pub use sync_target::{SyncReport, SyncState, SyncTarget};
