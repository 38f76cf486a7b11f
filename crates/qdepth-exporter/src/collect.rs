//! Collection rounds: discovery, bounded fan-out, barrier join, aggregation.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use qdepth_core::depth::{parse_attributes, QueueRef, RawAttributes, Snapshot};
use qdepth_core::Result;

use crate::service::{AttributeFetcher, QueueDirectory};

/// One collection pass over every queue in the account.
///
/// A round moves through discovery, fetching, and aggregation; the fetch
/// fan-out holds at most `concurrency` calls in flight and aggregation
/// never starts until every launched task has settled. A failed fetch
/// costs that queue only. Rounds keep no state; retry is run-again-next-
/// interval, owned by the scheduler.
pub struct CollectionRound {
    directory: Arc<dyn QueueDirectory>,
    fetcher: Arc<dyn AttributeFetcher>,
    concurrency: usize,
}

/// What a finished round looked like, for logs and self-metrics.
#[derive(Debug, Default)]
pub struct RoundReport {
    /// Per-queue depths to publish.
    pub snapshot: Snapshot,
    /// Queues returned by discovery.
    pub discovered: usize,
    /// Queues whose attribute fetch failed.
    pub fetch_failures: u64,
    /// Individual attribute values that failed to parse.
    pub parse_failures: u64,
}

impl CollectionRound {
    pub fn new(
        directory: Arc<dyn QueueDirectory>,
        fetcher: Arc<dyn AttributeFetcher>,
        concurrency: usize,
    ) -> Self {
        Self {
            directory,
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    /// Run the round to completion.
    ///
    /// `Err` means discovery failed and nothing was fetched. Fetch and
    /// parse failures never fail the round; they are folded into the
    /// report and the affected queue or metric is omitted.
    pub async fn run(&self) -> Result<RoundReport> {
        let queues = self.directory.list().await?;
        let discovered = queues.len();
        tracing::debug!(queues = discovered, "discovery complete");

        let outcomes = self.fetch_all(queues).await;

        let mut report = RoundReport {
            discovered,
            ..RoundReport::default()
        };

        for (queue, outcome) in outcomes {
            match outcome {
                Ok(raw) => {
                    let (depth, errors) = parse_attributes(&raw);
                    for e in &errors {
                        report.parse_failures += 1;
                        tracing::warn!(
                            queue = %queue.name,
                            scope = e.scope().as_str(),
                            error = %e,
                            "attribute parse failed"
                        );
                    }
                    if !depth.is_empty()
                        && report.snapshot.insert(queue.name.clone(), depth).is_some()
                    {
                        tracing::warn!(
                            queue = %queue.name,
                            url = %queue.url,
                            "duplicate queue name, previous entry replaced"
                        );
                    }
                }
                Err(e) => {
                    report.fetch_failures += 1;
                    tracing::warn!(
                        queue = %queue.name,
                        scope = e.scope().as_str(),
                        error = %e,
                        "attribute fetch failed"
                    );
                }
            }
        }

        Ok(report)
    }

    /// Fan out one fetch task per queue and join on all of them.
    ///
    /// Each task returns its own `(queue, outcome)` pair; the snapshot is
    /// assembled by the caller in a single-threaded pass after the join.
    async fn fetch_all(&self, queues: Vec<QueueRef>) -> Vec<(QueueRef, Result<RawAttributes>)> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for queue in queues {
            let fetcher = Arc::clone(&self.fetcher);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                // The semaphore lives as long as the round and is never
                // closed, so acquisition only fails if the round is gone.
                let _permit = semaphore.acquire_owned().await.ok();

                let attrs = fetcher.fetch(&queue).await;

                match fetcher.tags(&queue).await {
                    Ok(tags) if !tags.is_empty() => {
                        tracing::debug!(queue = %queue.name, ?tags, "queue tags");
                    }
                    Ok(_) => {}
                    Err(e) => tracing::debug!(queue = %queue.name, error = %e, "tag fetch failed"),
                }

                (queue, attrs)
            });
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                // A panicked task loses its queue for this round only.
                Err(e) => tracing::error!(error = %e, "fetch task aborted"),
            }
        }
        outcomes
    }
}
