//! Queue-depth domain model.
//!
//! This module hosts the types a collection round flows through:
//! - `QueueRef`: a discovered queue (URL + derived name).
//! - attribute parsing: raw string attributes into non-negative gauges.
//! - `Snapshot`: the per-round aggregation, built after the fan-out joins.
//!
//! All parsers are panic-free: malformed attribute values are reported as
//! `DepthError` instead of panicking, keeping the exporter resilient to
//! whatever the queue service returns.

pub mod parse;
pub mod queue;
pub mod snapshot;

pub use parse::{parse_attributes, RawAttributes, ATTR_DELAYED, ATTR_IN_FLIGHT, ATTR_VISIBLE};
pub use queue::QueueRef;
pub use snapshot::{QueueDepth, Snapshot};
