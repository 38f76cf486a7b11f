//! Per-round snapshot of queue depths.

use std::collections::HashMap;

/// Parsed depth gauges for one queue.
///
/// A field is `Some` only when its attribute parsed to a finite value
/// >= 0. A depth is *complete* when all three fields are present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QueueDepth {
    /// Messages available for retrieval.
    pub visible: Option<f64>,
    /// Messages whose delivery delay has not yet elapsed.
    pub delayed: Option<f64>,
    /// Messages received by a consumer but not yet deleted.
    pub in_flight: Option<f64>,
}

impl QueueDepth {
    /// All three gauges parsed.
    pub fn is_complete(&self) -> bool {
        self.visible.is_some() && self.delayed.is_some() && self.in_flight.is_some()
    }

    /// No gauge parsed; nothing to publish for this queue.
    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.delayed.is_none() && self.in_flight.is_none()
    }
}

/// The result of one collection round: queue name -> parsed depths.
///
/// Built fresh every round in a single-threaded pass after the fan-out
/// has joined, then handed to the publisher and discarded. It has no
/// identity beyond one round.
#[derive(Debug, Default)]
pub struct Snapshot {
    entries: HashMap<String, QueueDepth>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one queue's depths. Last write wins on duplicate names
    /// (two URLs with the same trailing segment); the displaced entry is
    /// returned so the caller can log the collision.
    pub fn insert(&mut self, name: String, depth: QueueDepth) -> Option<QueueDepth> {
        self.entries.insert(name, depth)
    }

    pub fn get(&self, name: &str) -> Option<&QueueDepth> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &QueueDepth)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
