//! Lightweight in-process metrics.
//!
//! Gauge state lives in atomics behind `DashMap` and is rendered by the
//! `/metrics` handler; no metrics client library is involved.

pub mod metrics;
