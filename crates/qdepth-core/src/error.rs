//! Shared error type across qdepth crates.

use thiserror::Error;

/// Blast radius of an error (stable taxonomy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// The whole collection round is abandoned; nothing is published.
    Round,
    /// One queue's metrics are omitted this round.
    Queue,
    /// One metric of one queue is omitted this round.
    Metric,
    /// Startup-time rejection; no round ever runs.
    Startup,
}

impl ErrorScope {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorScope::Round => "ROUND",
            ErrorScope::Queue => "QUEUE",
            ErrorScope::Metric => "METRIC",
            ErrorScope::Startup => "STARTUP",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DepthError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum DepthError {
    /// Queue discovery failed (service error or empty queue list).
    #[error("discovery failed: {0}")]
    Discovery(String),
    /// Attribute fetch failed for a single queue.
    #[error("fetch failed for queue {queue}: {reason}")]
    Fetch { queue: String, reason: String },
    /// A single attribute value could not be parsed into a gauge.
    #[error("attribute {attribute} unparsable: {reason}")]
    Parse {
        attribute: &'static str,
        reason: String,
    },
    /// Invalid configuration.
    #[error("invalid config: {0}")]
    Config(String),
}

impl DepthError {
    /// Map an error to the scope it invalidates.
    pub fn scope(&self) -> ErrorScope {
        match self {
            DepthError::Discovery(_) => ErrorScope::Round,
            DepthError::Fetch { .. } => ErrorScope::Queue,
            DepthError::Parse { .. } => ErrorScope::Metric,
            DepthError::Config(_) => ErrorScope::Startup,
        }
    }
}
