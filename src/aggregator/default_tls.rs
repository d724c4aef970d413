//! Enforcement of the single default TLS options entry.

use std::collections::BTreeMap;

use crate::aggregator::error::MergeError;
use crate::config::schema::{TlsOptions, DEFAULT_TLS_OPTIONS, DEFAULT_TLS_OPTIONS_NAME};

/// Settle the `default` entry of the merged TLS options.
///
/// `providers` lists every provider that defined `default`:
/// - none: the built-in options are inserted
/// - one: its definition is kept
/// - several: the entry is removed so anything depending on it fails to start
pub fn resolve_default_tls_options(
    options: &mut BTreeMap<String, TlsOptions>,
    providers: &[String],
) -> Option<MergeError> {
    match providers {
        [] => {
            options.insert(DEFAULT_TLS_OPTIONS_NAME.to_string(), DEFAULT_TLS_OPTIONS);
            None
        }
        [provider] => {
            tracing::debug!(provider = %provider, "Using provider defined default TLS options");
            None
        }
        _ => {
            options.remove(DEFAULT_TLS_OPTIONS_NAME);
            let err = MergeError::ConflictingDefaultTlsOptions {
                providers: providers.to_vec(),
            };
            tracing::error!(providers = ?providers, "{}", err);
            Some(err)
        }
    }
}
