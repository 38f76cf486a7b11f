#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use qdepth_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listen: "0.0.0.0:9434"
  fetch_concurency: 4 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.scope().as_str(), "STARTUP");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.exporter.listen, "0.0.0.0:9434");
    assert_eq!(cfg.exporter.poll_interval_ms, 10_000);
    assert_eq!(cfg.exporter.fetch_concurrency, 16);
    assert!(cfg.sqs.region.is_none());
    assert!(cfg.sqs.endpoint_url.is_none());
}

#[test]
fn unsupported_version_rejected() {
    let bad = r#"
version: 2
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn out_of_range_values_rejected() {
    let bad = r#"
version: 1
exporter:
  poll_interval_ms: 10
"#;
    config::load_from_str(bad).expect_err("must fail");

    let bad = r#"
version: 1
exporter:
  fetch_concurrency: 0
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn sqs_overrides_parsed() {
    let ok = r#"
version: 1
sqs:
  region: "eu-west-1"
  endpoint_url: "http://localhost:4566"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.sqs.region.as_deref(), Some("eu-west-1"));
    assert_eq!(cfg.sqs.endpoint_url.as_deref(), Some("http://localhost:4566"));
}
