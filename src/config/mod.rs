//! Dynamic configuration subsystem.
//!
//! # Data Flow
//! ```text
//! provider file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → Configuration (one per provider)
//!     → Configurations (provider name → Configuration)
//!     → aggregator
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so partial configurations deserialize
//! - Sections a provider does not use are `None`
//! - Sorted maps everywhere for reproducible output

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::Configuration;
pub use schema::Configurations;
pub use schema::Router;
pub use schema::TlsOptions;
