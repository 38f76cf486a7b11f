//! Top-level facade crate for qdepth.
//!
//! Re-exports the core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use qdepth_core::*;
}

pub mod exporter {
    pub use qdepth_exporter::*;
}
