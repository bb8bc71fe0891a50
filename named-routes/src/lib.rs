//! # named-routes
//!
//! The facade crate: re-exports the core and URL crates so applications can
//! depend on `named-routes` alone.
//!
//! ```
//! use named_routes::prelude::*;
//!
//! let mut registry = RouteRegistry::new();
//! registry.register([("login", RouteSpec::target("users", "login"))]);
//! let resolver = Resolver::new(registry).with_host(StaticHost::new("example.com"));
//!
//! assert_eq!(url(&resolver, "login_url").as_deref(), Some("http://example.com/users/login"));
//! ```

/// Core types: settings, settings loading, logging, inflection, errors.
pub use named_routes_core as core;

/// Route registry, parser, URL builder and resolver.
pub use named_routes_urls as urls;

// Third-party re-exports
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// The most commonly used items.
pub mod prelude {
    pub use named_routes_core::{EnglishInflector, Inflector, RouteError, RouteResult, Settings};
    pub use named_routes_urls::bootstrap::resolver_from_settings;
    pub use named_routes_urls::{
        url, HostProvider, PatternUrlBuilder, RequestHost, Resolution, Resolver, RouteRegistry,
        RouteSpec, RouteTarget, StaticHost, UrlBuilder,
    };
}
