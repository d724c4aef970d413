//! Dynamic configuration aggregation for the gateway control plane.

pub mod aggregator;
pub mod config;
pub mod observability;

pub use aggregator::{merge, merge_configurations, MergeError, MergeOutcome};
pub use config::schema::{Configuration, Configurations};
