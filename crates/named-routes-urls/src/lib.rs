//! # named-routes-urls
//!
//! Named routes: refer to routes by mnemonic names such as `login_path`
//! instead of hard-coded URL strings.
//!
//! - [`target`]: route targets and registration specs
//! - [`registry`]: the name → target table, with resource expansion
//! - [`parser`]: decomposes tokens like `admin.edit_user_path(1,2)`
//! - [`builder`]: renders targets into paths (the [`UrlBuilder`] seam)
//! - [`host`]: host-name lookup for absolute URLs
//! - [`resolver`]: ties the above together
//! - [`listing`]: introspection view of all routes
//! - [`bootstrap`]: builds a resolver from [`Settings`](named_routes_core::Settings)
//! - [`shortcuts`]: the `url()` free function
//!
//! # Examples
//!
//! ```
//! use named_routes_urls::builder::PatternUrlBuilder;
//! use named_routes_urls::host::StaticHost;
//! use named_routes_urls::registry::RouteRegistry;
//! use named_routes_urls::resolver::Resolver;
//! use named_routes_urls::shortcuts::url;
//! use named_routes_urls::target::{RouteSpec, RouteTarget};
//!
//! let mut registry = RouteRegistry::new();
//! registry.register([
//!     ("login", RouteSpec::target("users", "login")),
//!     ("users", RouteSpec::resource("users")),
//! ]);
//!
//! let mut builder = PatternUrlBuilder::new();
//! builder.connect("/login", RouteTarget::new("users", "login")).unwrap();
//!
//! let resolver = Resolver::new(registry)
//!     .with_url_builder(builder)
//!     .with_host(StaticHost::new("example.com"));
//!
//! assert_eq!(url(&resolver, "login_path").as_deref(), Some("/login"));
//! assert_eq!(url(&resolver, "login_url").as_deref(), Some("http://example.com/login"));
//! assert_eq!(url(&resolver, "admin.edit_user_path(1)").as_deref(), Some("/admin/users/edit/1"));
//! ```

pub mod bootstrap;
pub mod builder;
pub mod host;
pub mod listing;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod shortcuts;
pub mod target;

pub use builder::{PatternUrlBuilder, UrlBuilder};
pub use host::{HostProvider, RequestHost, StaticHost};
pub use listing::RouteListing;
pub use parser::{parse, OutputKind, ParsedRouteToken};
pub use registry::RouteRegistry;
pub use resolver::{Resolution, Resolver};
pub use shortcuts::url;
pub use target::{RouteSpec, RouteTarget};
