//! Building a resolver from [`Settings`].
//!
//! The `routes` table is registered (resource shorthands expanded), the
//! `patterns` list is connected to a [`PatternUrlBuilder`] in order, and
//! `server_name` becomes the host of absolute URLs.
//!
//! ```
//! use named_routes_core::settings_loader::from_toml_str;
//! use named_routes_urls::bootstrap::resolver_from_settings;
//!
//! let settings = from_toml_str(r#"
//!     server_name = "example.com"
//!
//!     [routes.login]
//!     controller = "users"
//!     action = "login"
//!
//!     [[patterns]]
//!     path = "/login"
//!     controller = "users"
//!     action = "login"
//! "#).unwrap();
//!
//! let resolver = resolver_from_settings(&settings).unwrap();
//! assert_eq!(
//!     resolver.resolve_route("login_url", &[]).unwrap().into_option().as_deref(),
//!     Some("http://example.com/login")
//! );
//! ```

use named_routes_core::{RouteResult, Settings};

use crate::builder::PatternUrlBuilder;
use crate::host::StaticHost;
use crate::registry::RouteRegistry;
use crate::resolver::Resolver;
use crate::target::{RouteSpec, RouteTarget};

/// Builds a registry from `settings.routes`.
pub fn registry_from_settings(settings: &Settings) -> RouteRegistry {
    let mut registry = RouteRegistry::new();
    registry.register(settings.routes.iter().map(|(name, fields)| {
        (
            name.clone(),
            RouteSpec::from(RouteTarget::from(fields.clone())),
        )
    }));
    registry
}

/// Builds a URL builder from `settings.patterns`.
///
/// # Errors
///
/// Returns an error if a pattern has no controller or an invalid template.
pub fn url_builder_from_settings(settings: &Settings) -> RouteResult<PatternUrlBuilder> {
    let mut builder = PatternUrlBuilder::new();
    for pattern in &settings.patterns {
        builder.connect(&pattern.path, RouteTarget::from(pattern.target.clone()))?;
    }
    Ok(builder)
}

/// Builds a complete resolver from settings.
///
/// # Errors
///
/// Returns an error if any connected pattern is invalid.
pub fn resolver_from_settings(settings: &Settings) -> RouteResult<Resolver> {
    let registry = registry_from_settings(settings);
    let builder = url_builder_from_settings(settings)?;
    tracing::info!(
        routes = registry.len(),
        patterns = builder.len(),
        server_name = %settings.server_name,
        "named routes configured"
    );

    Ok(Resolver::new(registry)
        .with_url_builder(builder)
        .with_host(StaticHost::new(settings.server_name.clone())))
}
