//! Snapshot publication into the gauge registry.

use qdepth_core::depth::Snapshot;

use crate::obs::metrics::ExporterMetrics;

/// Write every parsed field of the snapshot into the registry.
///
/// Pure value assignment: cannot fail, last write wins. Queues absent
/// from the snapshot are left untouched, so their previously published
/// values keep serving; labels are never removed.
pub fn publish(snapshot: &Snapshot, metrics: &ExporterMetrics) {
    for (name, depth) in snapshot.iter() {
        if let Some(v) = depth.visible {
            metrics.messages_visible.set(name, v);
        }
        if let Some(v) = depth.delayed {
            metrics.messages_delayed.set(name, v);
        }
        if let Some(v) = depth.in_flight {
            metrics.messages_invisible.set(name, v);
        }
    }
}
