//! Queue service seams.
//!
//! The collection pipeline consumes the managed queue service through two
//! object-safe traits so rounds can run against the real SQS client or a
//! scripted fake in tests.

use std::collections::HashMap;

use async_trait::async_trait;

use qdepth_core::depth::{QueueRef, RawAttributes};
use qdepth_core::Result;

pub mod sqs;

pub use sqs::SqsQueueService;

/// Lists every queue known to the service.
#[async_trait]
pub trait QueueDirectory: Send + Sync {
    /// All queues visible to the account.
    ///
    /// An empty result is an error, not a valid empty state: an exporter
    /// pointed at a queue-less account is misconfigured and should say so
    /// once per interval rather than publish nothing silently.
    async fn list(&self) -> Result<Vec<QueueRef>>;
}

/// Fetches one queue's depth attributes.
#[async_trait]
pub trait AttributeFetcher: Send + Sync {
    /// The queue's raw attribute map, keyed by attribute name.
    async fn fetch(&self, queue: &QueueRef) -> Result<RawAttributes>;

    /// The queue's tags. Informational only; no metric consumes them and
    /// a failure here must not affect the queue's depths.
    async fn tags(&self, queue: &QueueRef) -> Result<HashMap<String, String>>;
}
