//! Minimal metrics registry for the exporter.
//!
//! No external metrics crate is used; this module provides gauge and
//! counter types backed by `DashMap` and atomics, rendered in Prometheus
//! text exposition format. Gauge values are `f64` bit patterns inside an
//! `AtomicU64` so writes stay plain last-write-wins stores.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// A gauge family carrying a single `queue_name` label.
///
/// Series are created on first write and never removed: a queue that
/// stops appearing in rounds keeps serving its last published value
/// (stale retention), and a deleted queue leaves its label behind.
#[derive(Default)]
pub struct GaugeVec {
    map: DashMap<String, AtomicU64>,
}

impl GaugeVec {
    /// Set the gauge for one queue. Pure value assignment.
    pub fn set(&self, queue: &str, v: f64) {
        let cell = self
            .map
            .entry(queue.to_string())
            .or_insert_with(|| AtomicU64::new(0));
        cell.store(v.to_bits(), Ordering::Relaxed);
    }

    /// Current value for one queue, if it was ever written.
    pub fn get(&self, queue: &str) -> Option<f64> {
        self.map
            .get(queue)
            .map(|c| f64::from_bits(c.value().load(Ordering::Relaxed)))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Render in Prometheus text exposition format, series sorted by
    /// queue name.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} gauge", name);
        let mut series: Vec<(String, f64)> = self
            .map
            .iter()
            .map(|r| {
                (
                    r.key().clone(),
                    f64::from_bits(r.value().load(Ordering::Relaxed)),
                )
            })
            .collect();
        series.sort_by(|a, b| a.0.cmp(&b.0));
        for (queue, val) in series {
            let _ = writeln!(
                out,
                "{}{{queue_name=\"{}\"}} {}",
                name,
                escape_label(&queue),
                val
            );
        }
    }
}

/// Unlabeled monotonic counter.
#[derive(Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

/// Process-wide gauge registry.
///
/// Constructed once at startup, shared by reference, never torn down.
/// The publisher is the only writer of the depth gauges; the exposition
/// handler only reads.
#[derive(Default)]
pub struct ExporterMetrics {
    pub messages_visible: GaugeVec,
    pub messages_delayed: GaugeVec,
    pub messages_invisible: GaugeVec,
    pub rounds_total: Counter,
    pub rounds_failed: Counter,
    pub fetch_failures: Counter,
    pub parse_failures: Counter,
    ready: AtomicBool,
}

impl ExporterMetrics {
    /// Mark that at least one round has been attempted.
    pub fn set_ready(&self) {
        self.ready.store(true, Ordering::Relaxed);
    }
    /// Whether a round has been attempted since startup.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.messages_visible.render(
            "sqs_messages_visible",
            "The number of available messages in queue(s).",
            &mut out,
        );
        self.messages_delayed.render(
            "sqs_messages_delayed",
            "The number of messages waiting to be added into queue(s).",
            &mut out,
        );
        self.messages_invisible.render(
            "sqs_messages_invisible",
            "The number of messages in flight in queue(s).",
            &mut out,
        );
        self.rounds_total
            .render("qdepth_rounds_total", "Collection rounds attempted.", &mut out);
        self.rounds_failed.render(
            "qdepth_rounds_failed_total",
            "Collection rounds that failed at discovery.",
            &mut out,
        );
        self.fetch_failures.render(
            "qdepth_fetch_failures_total",
            "Per-queue attribute fetches that failed.",
            &mut out,
        );
        self.parse_failures.render(
            "qdepth_parse_failures_total",
            "Attribute values that failed to parse.",
            &mut out,
        );
        out
    }
}
