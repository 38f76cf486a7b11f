//! Queue references.

/// A discovered queue: the service URL plus the derived display name.
///
/// The name is the final `/`-separated segment of the URL, which is what
/// the `queue_name` label carries. URLs are unique per account; if two
/// URLs share a trailing segment the later one wins in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRef {
    /// Full queue URL, used for attribute fetches.
    pub url: String,
    /// Trailing URL segment, used as the `queue_name` label.
    pub name: String,
}

impl QueueRef {
    /// Build a reference from a queue URL, deriving the name.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let name = url.rsplit('/').next().unwrap_or_default().to_string();
        Self { url, name }
    }
}
