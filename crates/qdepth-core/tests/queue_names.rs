//! Queue name derivation and snapshot semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use qdepth_core::depth::{QueueDepth, QueueRef, Snapshot};

#[test]
fn name_is_trailing_url_segment() {
    let q = QueueRef::from_url("https://sqs.eu-west-1.amazonaws.com/123456789012/orders");
    assert_eq!(q.name, "orders");
    assert_eq!(q.url, "https://sqs.eu-west-1.amazonaws.com/123456789012/orders");

    let q = QueueRef::from_url("https://q/a");
    assert_eq!(q.name, "a");

    // Degenerate but service-shaped inputs.
    let q = QueueRef::from_url("orders");
    assert_eq!(q.name, "orders");
    let q = QueueRef::from_url("https://q/a/");
    assert_eq!(q.name, "");
}

#[test]
fn snapshot_duplicate_names_last_write_wins() {
    let mut snap = Snapshot::new();
    let first = QueueDepth {
        visible: Some(1.0),
        ..QueueDepth::default()
    };
    let second = QueueDepth {
        visible: Some(9.0),
        ..QueueDepth::default()
    };

    assert!(snap.insert("orders".to_string(), first).is_none());
    let displaced = snap.insert("orders".to_string(), second);
    assert_eq!(displaced, Some(first));
    assert_eq!(snap.len(), 1);
    assert_eq!(snap.get("orders").unwrap().visible, Some(9.0));
}
