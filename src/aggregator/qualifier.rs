//! Provider-qualified resource names.
//!
//! A resource named `web` by provider `docker` is published as `web@docker`.
//! References may use either form; the bare form means "same provider".

/// Separator between a local name and its provider.
pub const PROVIDER_SEPARATOR: char = '@';

/// Build the globally unique name of `name` as defined by `provider`.
pub fn qualify(provider: &str, name: &str) -> String {
    format!("{}{}{}", name, PROVIDER_SEPARATOR, provider)
}

/// Split a reference on its first `@` into the local name and the explicit provider, if any.
///
/// Everything after the first `@` is the provider, so `a@b@c` names router `a`
/// of provider `b@c`. [`merge`](crate::aggregator::merge) accepts such provider
/// names as given; only the loader rejects them.
pub fn split_reference(reference: &str) -> (&str, Option<&str>) {
    match reference.split_once(PROVIDER_SEPARATOR) {
        Some((name, provider)) => (name, Some(provider)),
        None => (reference, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("docker", "web"), "web@docker");
        assert_eq!(qualify("file", ""), "@file");
    }

    #[test]
    fn test_split_reference() {
        assert_eq!(split_reference("web@docker"), ("web", Some("docker")));
        assert_eq!(split_reference("web"), ("web", None));
        assert_eq!(split_reference("web@"), ("web", Some("")));
    }

    #[test]
    fn test_split_on_first_separator() {
        assert_eq!(split_reference("a@b@c"), ("a", Some("b@c")));
    }

    #[test]
    fn test_split_inverts_qualify() {
        let qualified = qualify("kubernetes", "api");
        assert_eq!(split_reference(&qualified), ("api", Some("kubernetes")));
    }
}
