//! Transform port - one pipeline stage
//!
//! Each stage maps an input tree snapshot to a fresh output snapshot and
//! reports what it did through the event sink.

use crate::domain::entities::Tree;
use crate::error::AssetlineResult;

use super::BuildEventSink;

pub trait Transform {
    fn transform(&self, input: &Tree, events: &dyn BuildEventSink) -> AssetlineResult<Tree>;
}
