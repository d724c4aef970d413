//! Router inheritance.
//!
//! A router may name another router in its `base` field; unset fields are then
//! taken from that router. Only one level is allowed: a router that itself
//! has a base cannot be used as one.

use crate::aggregator::error::MergeError;
use crate::aggregator::fill::FillUnset;
use crate::aggregator::qualifier::split_reference;
use crate::config::schema::{Configurations, Router};

/// Look up the router `reference` points at.
///
/// A bare reference is resolved within `provider`; `name@other` within `other`.
pub fn resolve_base<'a>(
    reference: &str,
    provider: &str,
    configurations: &'a Configurations,
) -> Option<&'a Router> {
    if reference.is_empty() {
        return None;
    }

    let (name, explicit_provider) = split_reference(reference);
    configurations
        .get(explicit_provider.unwrap_or(provider))?
        .http
        .as_ref()?
        .routers
        .get(name)
}

/// Merge `router` with its resolved `base` into a new router.
///
/// `router` itself is never modified.
pub fn merge_with_base(
    name: &str,
    provider: &str,
    router: &Router,
    base: &Router,
) -> Result<Router, MergeError> {
    if !base.base.is_empty() {
        return Err(MergeError::BaseNotAllowed {
            router: name.to_string(),
            provider: provider.to_string(),
            base: router.base.clone(),
        });
    }

    let mut merged = router.clone();
    merged.fill_unset(base);
    Ok(merged)
}

/// Produce the router to publish for `name` in `provider`.
///
/// On any inheritance problem the router is returned as defined and the
/// problem is logged and pushed to `errors`.
pub fn resolve_router(
    name: &str,
    provider: &str,
    router: &Router,
    configurations: &Configurations,
    errors: &mut Vec<MergeError>,
) -> Router {
    if router.base.is_empty() {
        return router.clone();
    }

    let result = match resolve_base(&router.base, provider, configurations) {
        Some(base) => merge_with_base(name, provider, router, base),
        None => Err(MergeError::UnresolvedBase {
            router: name.to_string(),
            provider: provider.to_string(),
            base: router.base.clone(),
        }),
    };

    match result {
        Ok(merged) => {
            tracing::debug!(
                provider,
                router = name,
                base = %router.base,
                "Merged router with base"
            );
            merged
        }
        Err(err) => {
            tracing::error!(provider, router = name, base = %router.base, "{}", err);
            errors.push(err);
            router.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Configuration, HttpConfiguration};

    fn provider_with(routers: &[(&str, Router)]) -> Configuration {
        Configuration {
            http: Some(HttpConfiguration {
                routers: routers
                    .iter()
                    .map(|(name, router)| (name.to_string(), router.clone()))
                    .collect(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn rule(rule: &str) -> Router {
        Router {
            rule: rule.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_base_same_provider() {
        let mut configs = Configurations::new();
        configs.insert("file".into(), provider_with(&[("b", rule("Host(`x`)"))]));

        let base = resolve_base("b", "file", &configs).unwrap();
        assert_eq!(base.rule, "Host(`x`)");
    }

    #[test]
    fn test_resolve_base_other_provider() {
        let mut configs = Configurations::new();
        configs.insert("file".into(), provider_with(&[]));
        configs.insert("docker".into(), provider_with(&[("b", rule("Host(`y`)"))]));

        assert!(resolve_base("b", "file", &configs).is_none());
        assert_eq!(resolve_base("b@docker", "file", &configs).unwrap().rule, "Host(`y`)");
    }

    #[test]
    fn test_resolve_base_missing() {
        let mut configs = Configurations::new();
        configs.insert("file".into(), Configuration::default());

        assert!(resolve_base("", "file", &configs).is_none());
        assert!(resolve_base("b", "file", &configs).is_none());
        assert!(resolve_base("b@nowhere", "file", &configs).is_none());
    }

    #[test]
    fn test_resolve_base_provider_with_separator() {
        let mut configs = Configurations::new();
        configs.insert("b".into(), provider_with(&[("a", rule("Host(`b`)"))]));
        configs.insert("b@c".into(), provider_with(&[("a", rule("Host(`b@c`)"))]));

        let base = resolve_base("a@b@c", "file", &configs).unwrap();
        assert_eq!(base.rule, "Host(`b@c`)");
    }

    #[test]
    fn test_merge_with_base_keeps_original() {
        let router = Router {
            base: "b".into(),
            ..Default::default()
        };
        let merged = merge_with_base("a", "file", &router, &rule("Host(`x`)")).unwrap();

        assert_eq!(merged.rule, "Host(`x`)");
        assert_eq!(merged.base, "b");
        assert!(router.rule.is_empty());
    }

    #[test]
    fn test_merge_with_chained_base_rejected() {
        let router = Router {
            base: "b@docker".into(),
            ..Default::default()
        };
        let base = Router {
            base: "c@docker".into(),
            ..rule("Host(`x`)")
        };

        let err = merge_with_base("a", "file", &router, &base).unwrap_err();
        assert_eq!(
            err,
            MergeError::BaseNotAllowed {
                router: "a".into(),
                provider: "file".into(),
                base: "b@docker".into(),
            }
        );
    }

    #[test]
    fn test_resolve_router_reports_unknown_base() {
        let router = Router {
            base: "ghost".into(),
            ..rule("Host(`own`)")
        };
        let mut configs = Configurations::new();
        configs.insert("file".into(), provider_with(&[("a", router.clone())]));

        let mut errors = Vec::new();
        let resolved = resolve_router("a", "file", &router, &configs, &mut errors);

        assert_eq!(resolved, router);
        assert!(matches!(
            &errors[..],
            [MergeError::UnresolvedBase { router, .. }] if router == "a"
        ));
    }

    #[test]
    fn test_resolve_router_without_base() {
        let router = rule("Host(`own`)");
        let mut errors = Vec::new();
        let resolved = resolve_router("a", "file", &router, &Configurations::new(), &mut errors);

        assert_eq!(resolved, router);
        assert!(errors.is_empty());
    }
}
