//! Dynamic configuration schema definitions.
//!
//! This module defines the configuration tree every provider emits and the
//! aggregator produces. All types derive Serde traits so provider files can be
//! deserialized directly, using the same camelCase keys as the gateway's
//! dynamic configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name under which the default TLS options are stored.
pub const DEFAULT_TLS_OPTIONS_NAME: &str = "default";

/// Built-in TLS options used when no provider defines a default.
pub const DEFAULT_TLS_OPTIONS: TlsOptions = TlsOptions {
    min_version: Some(TlsVersion::Tls12),
    max_version: None,
    cipher_suites: Vec::new(),
    curve_preferences: Vec::new(),
    client_auth: None,
    sni_strict: false,
};

/// Per-provider configurations keyed by provider name.
///
/// A sorted map: providers are always folded in lexicographic order.
pub type Configurations = BTreeMap<String, Configuration>;

/// Root of a (partial or merged) dynamic configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp: Option<TcpConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfiguration>,
}

/// HTTP section: routers, middlewares and services.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpConfiguration {
    pub routers: BTreeMap<String, Router>,
    pub middlewares: BTreeMap<String, Middleware>,
    pub services: BTreeMap<String, Service>,
}

/// HTTP router definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Router {
    /// Reference to another router supplying defaults (`name` or `name@provider`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entry_points: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub middlewares: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub service: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub rule: String,

    /// Route priority (higher = checked first, 0 = computed from rule length).
    #[serde(skip_serializing_if = "is_zero")]
    pub priority: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<RouterTls>,
}

/// TLS settings of an HTTP router.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterTls {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub options: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub cert_resolver: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<Domain>,
}

/// Domain a certificate should be resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Domain {
    pub main: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sans: Vec<String>,
}

/// HTTP middleware. Any number of kinds may be set on one middleware.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Middleware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_prefix: Option<AddPrefix>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<StripPrefix>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_scheme: Option<RedirectScheme>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddPrefix {
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StripPrefix {
    pub prefixes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RedirectScheme {
    pub scheme: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub port: String,

    pub permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicAuth {
    /// Entries in `user:hashed-password` form.
    pub users: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub realm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Headers {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_request_headers: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_response_headers: BTreeMap<String, String>,
}

/// HTTP service definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<ServersLoadBalancer>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServersLoadBalancer {
    pub servers: Vec<Server>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_host_header: Option<bool>,
}

/// Upstream HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Server {
    pub url: String,
}

/// TCP section: routers and services.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TcpConfiguration {
    pub routers: BTreeMap<String, TcpRouter>,
    pub services: BTreeMap<String, TcpService>,
}

/// TCP router definition. TCP routers have no inheritance.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TcpRouter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entry_points: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub service: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub rule: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<RouterTcpTls>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterTcpTls {
    pub passthrough: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub options: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub cert_resolver: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<Domain>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TcpService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<TcpServersLoadBalancer>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TcpServersLoadBalancer {
    pub servers: Vec<TcpServer>,

    /// Delay in milliseconds before closing the server side after the client closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_delay: Option<i32>,
}

/// Upstream TCP server (`host:port`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TcpServer {
    pub address: String,
}

/// TLS section: certificates, stores and options.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TlsConfiguration {
    pub certificates: Vec<CertAndStores>,
    pub stores: BTreeMap<String, Store>,
    pub options: BTreeMap<String, TlsOptions>,
}

/// Certificate plus the stores it should be added to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertAndStores {
    pub cert_file: String,

    pub key_file: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stores: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    pub cert_file: String,
    pub key_file: String,
}

/// Certificate store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Store {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_certificate: Option<Certificate>,
}

/// TLS versions accepted in TLS options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum TlsVersion {
    #[serde(rename = "VersionTLS10")]
    Tls10,
    #[serde(rename = "VersionTLS11")]
    Tls11,
    #[serde(rename = "VersionTLS12")]
    Tls12,
    #[serde(rename = "VersionTLS13")]
    Tls13,
}

/// Named TLS policy that routers refer to through `tls.options`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TlsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<TlsVersion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_version: Option<TlsVersion>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cipher_suites: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub curve_preferences: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_auth: Option<ClientAuth>,

    pub sni_strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientAuth {
    pub ca_files: Vec<String>,

    /// e.g. `RequireAndVerifyClientCert`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_auth_type: String,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}
