//! Folding of every provider configuration into one.

use crate::aggregator::base_router::resolve_router;
use crate::aggregator::default_tls::resolve_default_tls_options;
use crate::aggregator::error::MergeError;
use crate::aggregator::qualifier::qualify;
use crate::config::schema::{
    Configuration, Configurations, HttpConfiguration, TcpConfiguration, TlsConfiguration,
    DEFAULT_TLS_OPTIONS_NAME,
};

/// Merged configuration plus every problem met while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub configuration: Configuration,
    pub errors: Vec<MergeError>,
}

impl MergeOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Merge all provider configurations.
///
/// Every HTTP and TCP resource is published under `name@provider`. TLS stores
/// keep their local name (a later provider replaces an earlier one), and TLS
/// options named `default` stay unqualified and must be defined at most once.
///
/// Never fails; see [`MergeOutcome::errors`] for what was skipped.
pub fn merge(configurations: &Configurations) -> MergeOutcome {
    let mut http = HttpConfiguration::default();
    let mut tcp = TcpConfiguration::default();
    let mut tls = TlsConfiguration::default();
    let mut errors = Vec::new();
    let mut default_tls_providers = Vec::new();

    for (provider, configuration) in configurations {
        tracing::debug!(provider = %provider, "Merging provider configuration");

        if let Some(provider_http) = &configuration.http {
            for (name, router) in &provider_http.routers {
                let router = resolve_router(name, provider, router, configurations, &mut errors);
                http.routers.insert(qualify(provider, name), router);
            }
            for (name, middleware) in &provider_http.middlewares {
                http.middlewares.insert(qualify(provider, name), middleware.clone());
            }
            for (name, service) in &provider_http.services {
                http.services.insert(qualify(provider, name), service.clone());
            }
        }

        if let Some(provider_tcp) = &configuration.tcp {
            for (name, router) in &provider_tcp.routers {
                tcp.routers.insert(qualify(provider, name), router.clone());
            }
            for (name, service) in &provider_tcp.services {
                tcp.services.insert(qualify(provider, name), service.clone());
            }
        }

        if let Some(provider_tls) = &configuration.tls {
            tls.certificates.extend(provider_tls.certificates.iter().cloned());

            for (name, store) in &provider_tls.stores {
                if tls.stores.insert(name.clone(), store.clone()).is_some() {
                    tracing::debug!(provider = %provider, store = %name, "TLS store replaced");
                }
            }

            for (name, options) in &provider_tls.options {
                let key = if name == DEFAULT_TLS_OPTIONS_NAME {
                    default_tls_providers.push(provider.clone());
                    name.clone()
                } else {
                    qualify(provider, name)
                };
                tls.options.insert(key, options.clone());
            }
        }
    }

    errors.extend(resolve_default_tls_options(&mut tls.options, &default_tls_providers));

    tracing::info!(
        providers = configurations.len(),
        http_routers = http.routers.len(),
        http_middlewares = http.middlewares.len(),
        http_services = http.services.len(),
        tcp_routers = tcp.routers.len(),
        tcp_services = tcp.services.len(),
        tls_certificates = tls.certificates.len(),
        errors = errors.len(),
        "Configurations merged"
    );

    MergeOutcome {
        configuration: Configuration {
            http: Some(http),
            tcp: Some(tcp),
            tls: Some(tls),
        },
        errors,
    }
}

/// Merge all provider configurations, keeping only the configuration.
///
/// Problems are still logged as they are found.
pub fn merge_configurations(configurations: &Configurations) -> Configuration {
    merge(configurations).configuration
}
