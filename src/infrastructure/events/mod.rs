//! Event Sink Implementations
//!
//! Provides concrete implementations of BuildEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: structured log records

mod json;
mod log;

pub use self::json::JsonEventSink;
pub use self::log::TracingEventSink;
