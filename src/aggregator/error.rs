//! Recoverable merge problems.

use thiserror::Error;

/// Problems detected while merging provider configurations.
///
/// None of these abort a merge: the offending resource is kept as its provider
/// defined it (or, for default TLS options, left out) and merging carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// The resolved base router itself declares a base.
    #[error("The router {router}@{provider} is not allowed to use {base} as a base")]
    BaseNotAllowed {
        router: String,
        provider: String,
        base: String,
    },

    /// The base reference does not match any router.
    #[error("The router {router}@{provider} refers to an unknown base router {base}")]
    UnresolvedBase {
        router: String,
        provider: String,
        base: String,
    },

    /// More than one provider defines the `default` TLS options.
    #[error("Default TLS Options defined multiple times in {providers:?}")]
    ConflictingDefaultTlsOptions { providers: Vec<String> },
}
