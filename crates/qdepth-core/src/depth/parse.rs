//! Attribute parsing (string attributes -> numeric gauges).
//!
//! Parsing rules:
//! - Exactly three attributes are extracted, by fixed key name.
//! - Each value must parse to a finite float >= 0.
//! - Attributes are parsed independently: one garbled value costs that
//!   metric only, the siblings still publish (per-metric policy).

use std::collections::HashMap;

use crate::depth::snapshot::QueueDepth;
use crate::error::DepthError;

/// Approximate number of messages available for retrieval.
pub const ATTR_VISIBLE: &str = "ApproximateNumberOfMessages";
/// Approximate number of messages whose delay has not yet elapsed.
pub const ATTR_DELAYED: &str = "ApproximateNumberOfMessagesDelayed";
/// Approximate number of messages in flight (received, not yet deleted).
pub const ATTR_IN_FLIGHT: &str = "ApproximateNumberOfMessagesNotVisible";

/// Attribute map as returned verbatim by the service.
pub type RawAttributes = HashMap<String, String>;

/// Parse one attribute into a non-negative gauge value.
fn parse_field(raw: &RawAttributes, attribute: &'static str) -> Result<f64, DepthError> {
    let s = raw.get(attribute).ok_or_else(|| DepthError::Parse {
        attribute,
        reason: "attribute missing from response".to_string(),
    })?;
    let v: f64 = s.trim().parse().map_err(|_| DepthError::Parse {
        attribute,
        reason: format!("not a number: {s:?}"),
    })?;
    if !v.is_finite() || v < 0.0 {
        return Err(DepthError::Parse {
            attribute,
            reason: format!("out of range: {s:?}"),
        });
    }
    Ok(v)
}

/// Parse the three depth attributes of one queue.
///
/// Returns the per-field results plus every parse error encountered, so
/// the caller can surface them through its diagnostics. The returned
/// `QueueDepth` is empty (no fields) only if all three parses failed.
pub fn parse_attributes(raw: &RawAttributes) -> (QueueDepth, Vec<DepthError>) {
    let mut depth = QueueDepth::default();
    let mut errors = Vec::new();

    match parse_field(raw, ATTR_VISIBLE) {
        Ok(v) => depth.visible = Some(v),
        Err(e) => errors.push(e),
    }
    match parse_field(raw, ATTR_DELAYED) {
        Ok(v) => depth.delayed = Some(v),
        Err(e) => errors.push(e),
    }
    match parse_field(raw, ATTR_IN_FLIGHT) {
        Ok(v) => depth.in_flight = Some(v),
        Err(e) => errors.push(e),
    }

    (depth, errors)
}
