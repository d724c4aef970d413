//! Shared fixtures for aggregation tests.

use dynconf_aggregator::config::schema::{
    CertAndStores, Configuration, Configurations, HttpConfiguration, Router, Service, Store,
    TcpConfiguration, TcpRouter, TlsConfiguration, TlsOptions,
};

/// Builder for one provider's partial configuration.
#[derive(Default)]
pub struct ProviderBuilder {
    config: Configuration,
}

#[allow(dead_code)]
impl ProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn http(&mut self) -> &mut HttpConfiguration {
        self.config.http.get_or_insert_with(Default::default)
    }

    fn tcp(&mut self) -> &mut TcpConfiguration {
        self.config.tcp.get_or_insert_with(Default::default)
    }

    fn tls(&mut self) -> &mut TlsConfiguration {
        self.config.tls.get_or_insert_with(Default::default)
    }

    pub fn router(mut self, name: &str, router: Router) -> Self {
        self.http().routers.insert(name.into(), router);
        self
    }

    pub fn service(mut self, name: &str, url: &str) -> Self {
        let service: Service = serde_json::from_value(serde_json::json!({
            "loadBalancer": { "servers": [{ "url": url }] }
        }))
        .unwrap();
        self.http().services.insert(name.into(), service);
        self
    }

    pub fn tcp_router(mut self, name: &str, rule: &str) -> Self {
        let router = TcpRouter {
            rule: rule.into(),
            ..Default::default()
        };
        self.tcp().routers.insert(name.into(), router);
        self
    }

    pub fn certificate(mut self, cert_file: &str) -> Self {
        self.tls().certificates.push(CertAndStores {
            cert_file: cert_file.into(),
            key_file: format!("{}.key", cert_file),
            stores: Vec::new(),
        });
        self
    }

    pub fn store(mut self, name: &str, store: Store) -> Self {
        self.tls().stores.insert(name.into(), store);
        self
    }

    pub fn tls_options(mut self, name: &str, options: TlsOptions) -> Self {
        self.tls().options.insert(name.into(), options);
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

/// Router with only a rule set.
pub fn router_with_rule(rule: &str) -> Router {
    Router {
        rule: rule.into(),
        ..Default::default()
    }
}

/// Router inheriting from `base`.
pub fn router_with_base(base: &str) -> Router {
    Router {
        base: base.into(),
        ..Default::default()
    }
}

/// Collect `(provider, configuration)` pairs, in the given order.
pub fn configurations<I>(providers: I) -> Configurations
where
    I: IntoIterator<Item = (&'static str, Configuration)>,
{
    providers
        .into_iter()
        .map(|(name, config)| (name.to_string(), config))
        .collect()
}
