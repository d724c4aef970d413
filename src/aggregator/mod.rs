//! Configuration aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! provider configurations (name → Configuration)
//!     → merger.rs (fold every provider, every resource kind)
//!         → qualifier.rs (name@provider keys)
//!         → base_router.rs (single-level router inheritance)
//!             → fill.rs (fill unset fields from the base)
//!     → default_tls.rs (exactly one `default` TLS options)
//!     → MergeOutcome (merged Configuration + recoverable errors)
//! ```
//!
//! # Design Decisions
//! - Pure function of its input; nothing survives between merges
//! - Inputs are never mutated, routers are copied before merging
//! - Bad input from one provider never aborts the merge
//! - Providers are folded in lexicographic order

pub mod base_router;
pub mod default_tls;
pub mod error;
pub mod fill;
pub mod merger;
pub mod qualifier;

pub use error::MergeError;
pub use merger::{merge, merge_configurations, MergeOutcome};
pub use qualifier::{qualify, split_reference};
