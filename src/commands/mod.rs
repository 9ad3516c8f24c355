pub mod build;
pub mod classify;
pub mod filter;
pub mod prune;
pub mod sync;

use assetline::domain::ports::BuildEventSink;
use assetline::infrastructure::{JsonEventSink, TracingEventSink};

/// NDJSON on stdout with `--json`, log records otherwise
pub fn event_sink(json: bool, verbose: u8) -> Box<dyn BuildEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(TracingEventSink::new().detailed(verbose >= 2))
    }
}
