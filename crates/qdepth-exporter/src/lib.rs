//! qdepth exporter library entry.
//!
//! This crate wires the config loader, the SQS-backed queue service,
//! collection rounds, the gauge registry, and the HTTP exposition into a
//! cohesive exporter stack. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod collect;
pub mod config;
pub mod obs;
pub mod ops;
pub mod publish;
pub mod router;
pub mod scheduler;
pub mod service;
