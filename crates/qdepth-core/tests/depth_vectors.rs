//! Attribute parse vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use qdepth_core::depth::{parse_attributes, RawAttributes, ATTR_DELAYED, ATTR_VISIBLE};
use qdepth_core::error::{DepthError, ErrorScope};

fn load(name: &str) -> RawAttributes {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn parse_complete() {
    let raw = load("attrs_complete.json");
    let (depth, errors) = parse_attributes(&raw);
    assert!(errors.is_empty());
    assert!(depth.is_complete());
    assert_eq!(depth.visible, Some(5.0));
    assert_eq!(depth.delayed, Some(0.0));
    assert_eq!(depth.in_flight, Some(2.0));
}

#[test]
fn garbled_visible_keeps_siblings() {
    let raw = load("attrs_garbled_visible.json");
    let (depth, errors) = parse_attributes(&raw);

    assert_eq!(depth.visible, None);
    assert_eq!(depth.delayed, Some(7.0));
    assert_eq!(depth.in_flight, Some(1.0));
    assert!(!depth.is_complete());
    assert!(!depth.is_empty());

    assert_eq!(errors.len(), 1);
    match &errors[0] {
        DepthError::Parse { attribute, .. } => assert_eq!(*attribute, ATTR_VISIBLE),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(errors[0].scope(), ErrorScope::Metric);
}

#[test]
fn missing_fields_are_metric_scoped() {
    let raw = load("attrs_missing_fields.json");
    let (depth, errors) = parse_attributes(&raw);

    assert_eq!(depth.visible, Some(12.0));
    assert_eq!(depth.delayed, None);
    assert_eq!(depth.in_flight, None);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.scope() == ErrorScope::Metric));
}

#[test]
fn out_of_range_values_rejected() {
    // "-4" is negative, "NaN" and "inf" parse as floats but are not
    // publishable gauge values.
    let raw = load("attrs_out_of_range.json");
    let (depth, errors) = parse_attributes(&raw);

    assert!(depth.is_empty());
    assert_eq!(errors.len(), 3);
    match &errors[1] {
        DepthError::Parse { attribute, reason } => {
            assert_eq!(*attribute, ATTR_DELAYED);
            assert!(reason.contains("out of range"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn whitespace_is_tolerated() {
    let mut raw = load("attrs_complete.json");
    raw.insert("ApproximateNumberOfMessages".to_string(), " 5 ".to_string());
    let (depth, errors) = parse_attributes(&raw);
    assert!(errors.is_empty());
    assert_eq!(depth.visible, Some(5.0));
}
