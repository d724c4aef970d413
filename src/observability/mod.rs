//! Observability subsystem.
//!
//! Merge decisions are reported as structured `tracing` events; this module
//! only installs the subscriber for binaries.

pub mod logging;
