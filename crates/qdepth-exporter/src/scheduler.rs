//! Fixed-interval collection loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::app_state::AppState;
use crate::collect::CollectionRound;
use crate::publish::publish;
use crate::service::{AttributeFetcher, QueueDirectory};

/// Run collection rounds forever, one per poll interval.
///
/// A failed round is logged and counted; the next interval retries from
/// scratch. The loop never terminates the process and never touches the
/// gauges on failure, so `/metrics` keeps serving the last published
/// state throughout.
pub async fn run(
    state: AppState,
    directory: Arc<dyn QueueDirectory>,
    fetcher: Arc<dyn AttributeFetcher>,
) {
    let interval = Duration::from_millis(state.cfg().exporter.poll_interval_ms);
    let concurrency = state.cfg().exporter.fetch_concurrency;

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let round = CollectionRound::new(
            Arc::clone(&directory),
            Arc::clone(&fetcher),
            concurrency,
        );
        let metrics = state.metrics();
        metrics.rounds_total.inc();

        match round.run().await {
            Ok(report) => {
                publish(&report.snapshot, metrics);
                metrics.fetch_failures.add(report.fetch_failures);
                metrics.parse_failures.add(report.parse_failures);
                tracing::info!(
                    discovered = report.discovered,
                    published = report.snapshot.len(),
                    fetch_failures = report.fetch_failures,
                    parse_failures = report.parse_failures,
                    "collection round published"
                );
            }
            Err(e) => {
                metrics.rounds_failed.inc();
                tracing::error!(scope = e.scope().as_str(), error = %e, "collection round failed");
            }
        }

        metrics.set_ready();
    }
}
