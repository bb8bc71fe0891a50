//! Resolving route names into paths and URLs.
//!
//! A [`Resolver`] combines a frozen [`RouteRegistry`], a [`UrlBuilder`] and a
//! [`HostProvider`]. Resolution looks the parsed action up in the registry,
//! renders the target, and then decorates the result in a fixed order:
//!
//! 1. the prefix (`/admin`) is prepended to the rendered path,
//! 2. for `_url` tokens, `http://<host>` is prepended,
//! 3. parameters are appended as `/`-separated segments.
//!
//! An unknown name is [`Resolution::NotFound`], never an error.

use std::fmt;
use std::sync::Arc;

use named_routes_core::logging::resolve_span;
use named_routes_core::{RouteError, RouteResult};

use crate::builder::{PatternUrlBuilder, UrlBuilder};
use crate::host::{HostProvider, StaticHost};
use crate::listing::RouteListing;
use crate::parser::{parse, ParsedRouteToken};
use crate::registry::RouteRegistry;

/// The scheme used for absolute URLs.
pub const URL_SCHEME: &str = "http";

/// The outcome of resolving a route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The fully assembled path or URL.
    Found(String),
    /// No route is registered under the parsed action.
    NotFound,
}

impl Resolution {
    /// Returns `true` for [`Resolution::Found`].
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the resolved string, if found.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }

    /// Converts into an `Option`, discarding the miss.
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }

    /// Converts a miss into [`RouteError::NotFound`] naming `name`, for callers
    /// that treat an unknown route as a bug.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] for [`Resolution::NotFound`].
    pub fn into_result(self, name: &str) -> RouteResult<String> {
        match self {
            Self::Found(url) => Ok(url),
            Self::NotFound => Err(RouteError::NotFound(format!("named route '{name}'"))),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(url) => f.write_str(url),
            Self::NotFound => Ok(()),
        }
    }
}

/// Resolves route-name tokens against a registry.
///
/// Cloning is cheap: the registry, builder and host provider are shared.
/// Use [`with_host`](Self::with_host) on a clone to resolve absolute URLs
/// against the host of the request being served.
///
/// # Examples
///
/// ```
/// use named_routes_urls::host::StaticHost;
/// use named_routes_urls::registry::RouteRegistry;
/// use named_routes_urls::resolver::{Resolution, Resolver};
/// use named_routes_urls::target::RouteSpec;
///
/// let mut registry = RouteRegistry::new();
/// registry.register([("login", RouteSpec::target("users", "login"))]);
///
/// let resolver = Resolver::new(registry).with_host(StaticHost::new("example.com"));
///
/// assert_eq!(
///     resolver.resolve_route("login_path", &[]).unwrap(),
///     Resolution::Found("/users/login".to_string())
/// );
/// assert_eq!(
///     resolver.resolve_route("login_url", &[]).unwrap(),
///     Resolution::Found("http://example.com/users/login".to_string())
/// );
/// assert_eq!(
///     resolver.resolve_route("admin.login_path", &[]).unwrap(),
///     Resolution::Found("/admin/users/login".to_string())
/// );
/// assert_eq!(resolver.resolve_route("missing_path", &[]).unwrap(), Resolution::NotFound);
/// ```
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<RouteRegistry>,
    builder: Arc<dyn UrlBuilder>,
    host: Arc<dyn HostProvider>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Freezes `registry` into a resolver using a [`PatternUrlBuilder`] with
    /// no templates and the `localhost` host.
    pub fn new(registry: RouteRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    /// Creates a resolver over an already shared registry.
    pub fn from_shared(registry: Arc<RouteRegistry>) -> Self {
        Self {
            registry,
            builder: Arc::new(PatternUrlBuilder::new()),
            host: Arc::new(StaticHost::default()),
        }
    }

    /// Replaces the URL builder.
    #[must_use]
    pub fn with_url_builder(mut self, builder: impl UrlBuilder + 'static) -> Self {
        self.builder = Arc::new(builder);
        self
    }

    /// Replaces the host provider.
    #[must_use]
    pub fn with_host(mut self, host: impl HostProvider + 'static) -> Self {
        self.host = Arc::new(host);
        self
    }

    /// Returns the registry this resolver reads from.
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Resolves a route-name token such as `admin.edit_user_path(1)`.
    ///
    /// An empty `name` is returned unchanged. Extra `params` are appended
    /// after any parameters written in the token itself.
    ///
    /// # Errors
    ///
    /// Only errors from the URL builder are returned; an unknown route is
    /// [`Resolution::NotFound`].
    pub fn resolve_route(&self, name: &str, params: &[&str]) -> RouteResult<Resolution> {
        if name.is_empty() {
            return Ok(Resolution::Found(String::new()));
        }

        let span = resolve_span(name);
        let _guard = span.enter();

        let mut parsed = parse(name);
        parsed.params.extend(params.iter().map(|p| (*p).to_string()));
        self.resolve(&parsed)
    }

    /// Resolves an already parsed token.
    ///
    /// # Errors
    ///
    /// Returns whatever error the URL builder produces for the found target.
    pub fn resolve(&self, parsed: &ParsedRouteToken) -> RouteResult<Resolution> {
        let target = match self.registry.get(&parsed.action) {
            Some(target) if !parsed.action.is_empty() => target,
            _ => {
                tracing::debug!(action = %parsed.action, "named route not found");
                return Ok(Resolution::NotFound);
            }
        };

        let mut url = self.builder.render(target)?;

        if let Some(prefix) = &parsed.prefix {
            url = format!("/{prefix}{url}");
        }

        if parsed.output.is_url() {
            url = format!("{URL_SCHEME}://{}{url}", self.host.current_host());
        }

        if !parsed.params.is_empty() {
            url.push('/');
            url.push_str(&parsed.params.join("/"));
        }

        tracing::debug!(action = %parsed.action, output = %parsed.output, %url, "resolved named route");
        Ok(Resolution::Found(url))
    }

    /// Lists every registered route with its rendered path, in name order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the URL builder.
    pub fn list_routes(&self) -> RouteResult<Vec<RouteListing>> {
        self.registry
            .iter()
            .map(|(name, target)| -> RouteResult<RouteListing> {
                Ok(RouteListing {
                    name: name.to_string(),
                    url: self.builder.render(target)?,
                    controller: target.controller().unwrap_or_default().to_string(),
                    action: target.action().unwrap_or_default().to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use named_routes_core::{RouteError, RouteResult};

    use super::*;
    use crate::parser::OutputKind;
    use crate::target::{RouteSpec, RouteTarget};

    fn resolver() -> Resolver {
        let mut registry = RouteRegistry::new();
        registry.register([
            ("login", RouteSpec::target("users", "login")),
            ("articles", RouteSpec::resource("articles")),
        ]);
        Resolver::new(registry).with_host(StaticHost::new("example.com"))
    }

    fn found(url: &str) -> Resolution {
        Resolution::Found(url.to_string())
    }

    #[test]
    fn test_resolve_path() {
        let r = resolver();
        assert_eq!(r.resolve_route("login_path", &[]).unwrap(), found("/users/login"));
    }

    #[test]
    fn test_resolve_url() {
        let r = resolver();
        assert_eq!(
            r.resolve_route("login_url", &[]).unwrap(),
            found("http://example.com/users/login")
        );
    }

    #[test]
    fn test_resolve_prefix() {
        let r = resolver();
        assert_eq!(
            r.resolve_route("admin.login_path", &[]).unwrap(),
            found("/admin/users/login")
        );
    }

    #[test]
    fn test_resolve_prefix_url_and_params_order() {
        let r = resolver();
        assert_eq!(
            r.resolve_route("admin.view_article_url(3,4)", &[]).unwrap(),
            found("http://example.com/admin/articles/view/3/4")
        );
    }

    #[test]
    fn test_resolve_params() {
        let r = resolver();
        assert_eq!(
            r.resolve_route("view_article_path(1,2,3,4)", &[]).unwrap(),
            found("/articles/view/1/2/3/4")
        );
    }

    #[test]
    fn test_resolve_explicit_params_follow_token_params() {
        let r = resolver();
        assert_eq!(
            r.resolve_route("edit_article_path(1)", &["draft"]).unwrap(),
            found("/articles/edit/1/draft")
        );
        assert_eq!(
            r.resolve_route("edit_article_path", &["9"]).unwrap(),
            found("/articles/edit/9")
        );
    }

    #[test]
    fn test_resolve_not_found() {
        let r = resolver();
        assert_eq!(r.resolve_route("nonexistent_path", &[]).unwrap(), Resolution::NotFound);
        assert_eq!(r.resolve_route("login", &[]).unwrap(), Resolution::NotFound);
        assert_eq!(r.resolve_route("a.b.login_path", &[]).unwrap(), Resolution::NotFound);
    }

    #[test]
    fn test_resolve_empty_name_passes_through() {
        let r = resolver();
        assert_eq!(r.resolve_route("", &[]).unwrap(), found(""));
        assert_eq!(r.resolve_route("", &["1"]).unwrap(), found(""));
    }

    #[test]
    fn test_resolve_unrecognized_suffix_renders_bare_path() {
        let r = resolver();
        assert_eq!(r.resolve_route("login_link", &[]).unwrap(), found("/users/login"));
        assert_eq!(
            r.resolve_route("admin.login_link(5)", &[]).unwrap(),
            found("/admin/users/login/5")
        );
    }

    #[test]
    fn test_resolve_empty_action_never_matches() {
        let mut registry = RouteRegistry::new();
        registry.connect("", RouteTarget::new("pages", "home"));
        let r = Resolver::new(registry);
        assert_eq!(r.resolve_route("path", &[]).unwrap(), Resolution::NotFound);
        assert_eq!(r.resolve_route("_path", &[]).unwrap(), Resolution::NotFound);
    }

    #[test]
    fn test_resolve_parsed_directly() {
        let r = resolver();
        let parsed = ParsedRouteToken {
            prefix: Some("api".into()),
            output: OutputKind::Path,
            action: "articles".into(),
            params: vec!["page".into(), "2".into()],
        };
        assert_eq!(r.resolve(&parsed).unwrap(), found("/api/articles/page/2"));
    }

    #[test]
    fn test_resolve_propagates_builder_errors() {
        let mut registry = RouteRegistry::new();
        registry.connect("broken", RouteTarget::default().with("action", "x"));
        let r = Resolver::new(registry);
        let err = r.resolve_route("broken_path", &[]).unwrap_err();
        assert!(matches!(err, RouteError::ImproperlyConfigured(_)));
    }

    #[test]
    fn test_custom_url_builder() {
        let mut registry = RouteRegistry::new();
        registry.register([("login", RouteSpec::target("users", "login"))]);
        let r = Resolver::new(registry).with_url_builder(|t: &RouteTarget| -> RouteResult<String> {
            Ok(format!("/{}.php?a={}", t.controller().unwrap_or_default(), t.action().unwrap_or_default()))
        });
        assert_eq!(
            r.resolve_route("login_path", &[]).unwrap(),
            found("/users.php?a=login")
        );
    }

    #[test]
    fn test_with_host_on_clone_leaves_original_untouched() {
        let r = resolver();
        let per_request = r.clone().with_host(StaticHost::new("tenant.example.com"));
        assert_eq!(
            per_request.resolve_route("login_url", &[]).unwrap(),
            found("http://tenant.example.com/users/login")
        );
        assert_eq!(
            r.resolve_route("login_url", &[]).unwrap(),
            found("http://example.com/users/login")
        );
    }

    #[test]
    fn test_list_routes() {
        let r = resolver();
        let listing = r.list_routes().unwrap();
        let names: Vec<&str> = listing.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "add_article",
                "articles",
                "delete_article",
                "edit_article",
                "login",
                "view_article"
            ]
        );
        let login = listing.iter().find(|l| l.name == "login").unwrap();
        assert_eq!(login.url, "/users/login");
        assert_eq!(login.controller, "users");
        assert_eq!(login.action, "login");
        let index = listing.iter().find(|l| l.name == "articles").unwrap();
        assert_eq!(index.url, "/articles");
    }

    #[test]
    fn test_resolution_helpers() {
        let hit = found("/x");
        assert!(hit.is_found());
        assert_eq!(hit.as_str(), Some("/x"));
        assert_eq!(hit.to_string(), "/x");
        assert_eq!(hit.into_option(), Some("/x".to_string()));

        assert!(!Resolution::NotFound.is_found());
        assert_eq!(Resolution::NotFound.as_str(), None);
        assert_eq!(Resolution::NotFound.to_string(), "");
        assert_eq!(Resolution::NotFound.into_option(), None);
    }

    #[test]
    fn test_resolution_into_result() {
        let r = resolver();
        assert_eq!(
            r.resolve_route("login_path", &[]).unwrap().into_result("login_path").unwrap(),
            "/users/login"
        );

        let err = r
            .resolve_route("logout_path", &[])
            .unwrap()
            .into_result("logout_path")
            .unwrap_err();
        assert!(matches!(err, RouteError::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: named route 'logout_path'");
    }
}
