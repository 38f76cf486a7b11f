//! qdepth core: queue-depth domain types, attribute parsing, and error surface.
//!
//! This crate defines the data model shared by the collection pipeline and
//! the exporter binary: queue references, raw attribute parsing, per-round
//! snapshots, and the unified error type. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `DepthError`/`Result` so a garbled
//! attribute value from the service degrades one metric, never the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod depth;
pub mod error;

/// Shared result type.
pub use error::{DepthError, Result};
