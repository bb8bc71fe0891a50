//! Free-function shortcuts for templates and views.
//!
//! These collapse the [`Resolution`] and any builder error into an `Option`,
//! so a broken route renders as a missing link instead of failing the request.
//! Misconfigured targets are logged at `warn`, any other builder error at
//! `error`.

use crate::resolver::{Resolution, Resolver};

/// Resolves `name` with no extra parameters.
///
/// ```
/// use named_routes_urls::registry::RouteRegistry;
/// use named_routes_urls::resolver::Resolver;
/// use named_routes_urls::shortcuts::url;
/// use named_routes_urls::target::RouteSpec;
///
/// let mut registry = RouteRegistry::new();
/// registry.register([("articles", RouteSpec::resource("articles"))]);
/// let resolver = Resolver::new(registry);
///
/// assert_eq!(url(&resolver, "edit_article_path(7)").as_deref(), Some("/articles/edit/7"));
/// assert_eq!(url(&resolver, "nope_path"), None);
/// ```
pub fn url(resolver: &Resolver, name: &str) -> Option<String> {
    resolve_route(resolver, name, &[])
}

/// Resolves `name` with extra positional parameters.
pub fn resolve_route(resolver: &Resolver, name: &str, params: &[&str]) -> Option<String> {
    match resolver.resolve_route(name, params) {
        Ok(Resolution::Found(url)) => Some(url),
        Ok(Resolution::NotFound) => None,
        Err(err) if err.is_configuration() => {
            tracing::warn!(route = name, error = %err, "named route is misconfigured");
            None
        }
        Err(err) => {
            tracing::error!(route = name, error = %err, "failed to render named route");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use named_routes_core::{RouteError, RouteResult};

    use super::*;
    use crate::registry::RouteRegistry;
    use crate::target::{RouteSpec, RouteTarget};

    fn resolver() -> Resolver {
        let mut registry = RouteRegistry::new();
        registry.register([("login", RouteSpec::target("users", "login"))]);
        registry.connect("broken", RouteTarget::default());
        Resolver::new(registry)
    }

    #[test]
    fn test_url_found() {
        assert_eq!(url(&resolver(), "login_path").as_deref(), Some("/users/login"));
    }

    #[test]
    fn test_url_empty_passes_through() {
        assert_eq!(url(&resolver(), "").as_deref(), Some(""));
    }

    #[test]
    fn test_url_not_found() {
        assert_eq!(url(&resolver(), "logout_path"), None);
    }

    #[test]
    fn test_url_builder_error_collapses_to_none() {
        assert_eq!(url(&resolver(), "broken_path"), None);
    }

    #[test]
    fn test_url_other_builder_error_collapses_to_none() {
        let resolver = resolver().with_url_builder(|_: &RouteTarget| -> RouteResult<String> {
            Err(RouteError::SerializationError("template engine down".into()))
        });
        assert_eq!(url(&resolver, "login_path"), None);
        assert_eq!(url(&resolver, "").as_deref(), Some(""));
    }

    #[test]
    fn test_resolve_route_with_params() {
        assert_eq!(
            resolve_route(&resolver(), "login_path", &["next", "home"]).as_deref(),
            Some("/users/login/next/home")
        );
    }
}
