//! The named-route registry.
//!
//! [`RouteRegistry`] maps route names (e.g. `login`, `edit_user`) to
//! [`RouteTarget`]s. It is built during application bootstrap and then frozen
//! behind an `Arc` for the [`Resolver`](crate::resolver::Resolver); nothing
//! mutates it while requests are being served.
//!
//! Registration is a merge: new names are added and existing names are
//! overwritten by the later value.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use named_routes_core::{EnglishInflector, Inflector};

use crate::target::{RouteSpec, RouteTarget};

/// Actions synthesized for every resource shorthand, in registration order.
pub const RESOURCE_ACTIONS: [&str; 4] = ["view", "add", "edit", "delete"];

/// The action the bare resource name points at.
pub const INDEX_ACTION: &str = "index";

/// Name → target table for named routes.
///
/// # Examples
///
/// ```
/// use named_routes_urls::registry::RouteRegistry;
/// use named_routes_urls::target::{RouteSpec, RouteTarget};
///
/// let mut registry = RouteRegistry::new();
/// registry.register([
///     ("users", RouteSpec::resource("users")),
///     ("login", RouteSpec::target("users", "login")),
/// ]);
///
/// assert_eq!(registry.get("users"), Some(&RouteTarget::new("users", "index")));
/// assert_eq!(registry.get("edit_user"), Some(&RouteTarget::new("users", "edit")));
/// assert_eq!(registry.len(), 6);
/// ```
pub struct RouteRegistry {
    routes: BTreeMap<String, RouteTarget>,
    inflector: Arc<dyn Inflector>,
}

impl fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteRegistry {
    /// Creates an empty registry that singularizes resource names with
    /// [`EnglishInflector`].
    pub fn new() -> Self {
        Self::with_inflector(Arc::new(EnglishInflector))
    }

    /// Creates an empty registry using a custom inflector for resource expansion.
    pub fn with_inflector(inflector: Arc<dyn Inflector>) -> Self {
        Self {
            routes: BTreeMap::new(),
            inflector,
        }
    }

    /// Registers a batch of named routes.
    ///
    /// Explicit targets are stored under their name unchanged. A resource
    /// shorthand `R` with controller `C` expands into
    /// `view_<singular R>`, `add_<singular R>`, `edit_<singular R>` and
    /// `delete_<singular R>` (each `{C, <verb>}`) plus `R` itself as
    /// `{C, index}`.
    ///
    /// Within one batch, names produced by resource expansion take precedence
    /// over explicit entries of the same name. The batch is then merged into
    /// the registry, overwriting colliding names.
    pub fn register<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, RouteSpec)>,
        K: Into<String>,
    {
        let mut batch: BTreeMap<String, RouteTarget> = BTreeMap::new();
        let mut resources: Vec<(String, String)> = Vec::new();

        for (name, spec) in entries {
            let name = name.into();
            match spec {
                RouteSpec::Target(target) => {
                    batch.insert(name, target);
                }
                RouteSpec::Resource { controller } => resources.push((name, controller)),
            }
        }

        for (resource, controller) in resources {
            let singular = self.inflector.singularize(&resource);
            for action in RESOURCE_ACTIONS {
                batch.insert(
                    format!("{action}_{singular}"),
                    RouteTarget::new(controller.as_str(), action),
                );
            }
            tracing::debug!(%resource, %singular, %controller, "expanded resource routes");
            batch.insert(resource, RouteTarget::new(controller, INDEX_ACTION));
        }

        for (name, target) in batch {
            self.insert(name, target);
        }
    }

    /// Registers a single explicit route, overwriting any previous target.
    pub fn connect(&mut self, name: impl Into<String>, target: RouteTarget) {
        self.insert(name.into(), target);
    }

    fn insert(&mut self, name: String, target: RouteTarget) {
        tracing::debug!(route = %name, target = %target, "registered named route");
        if let Some(previous) = self.routes.insert(name, target) {
            tracing::trace!(previous = %previous, "replaced existing named route");
        }
    }

    /// Returns the target registered under `name`.
    pub fn get(&self, name: &str) -> Option<&RouteTarget> {
        self.routes.get(name)
    }

    /// Returns `true` if a route is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over `(name, target)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteTarget)> {
        self.routes.iter().map(|(name, target)| (name.as_str(), target))
    }

    /// Returns the registered names in order.
    pub fn names(&self) -> Vec<&str> {
        self.routes.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseInflector;

    impl Inflector for UppercaseInflector {
        fn singularize(&self, word: &str) -> String {
            word.trim_end_matches('s').to_uppercase()
        }

        fn pluralize(&self, word: &str) -> String {
            format!("{word}S")
        }
    }

    #[test]
    fn test_register_resource_expands_crud_routes() {
        let mut registry = RouteRegistry::new();
        registry.register([("users", RouteSpec::resource("users"))]);

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get("users"), Some(&RouteTarget::new("users", "index")));
        for action in RESOURCE_ACTIONS {
            let name = format!("{action}_user");
            assert_eq!(
                registry.get(&name),
                Some(&RouteTarget::new("users", action)),
                "missing {name}"
            );
        }
    }

    #[test]
    fn test_register_resource_uses_inflector() {
        let mut registry = RouteRegistry::new();
        registry.register([("categories", RouteSpec::resource("blog_categories"))]);

        assert_eq!(
            registry.get("view_category"),
            Some(&RouteTarget::new("blog_categories", "view"))
        );
        assert_eq!(
            registry.get("categories"),
            Some(&RouteTarget::new("blog_categories", "index"))
        );
    }

    #[test]
    fn test_register_resource_singular_names_for_menus_and_taxes() {
        let mut registry = RouteRegistry::new();
        registry.register([
            ("menus", RouteSpec::resource("menus")),
            ("taxes", RouteSpec::resource("taxes")),
        ]);

        for action in RESOURCE_ACTIONS {
            assert_eq!(
                registry.get(&format!("{action}_menu")),
                Some(&RouteTarget::new("menus", action))
            );
            assert_eq!(
                registry.get(&format!("{action}_tax")),
                Some(&RouteTarget::new("taxes", action))
            );
        }
        assert!(!registry.contains("view_menus"));
        assert!(!registry.contains("view_taxi"));
    }

    #[test]
    fn test_register_with_custom_inflector() {
        let mut registry = RouteRegistry::with_inflector(Arc::new(UppercaseInflector));
        registry.register([("posts", RouteSpec::resource("posts"))]);
        assert!(registry.contains("edit_POST"));
        assert!(!registry.contains("edit_post"));
    }

    #[test]
    fn test_register_explicit_passes_through() {
        let mut registry = RouteRegistry::new();
        let target = RouteTarget::new("users", "login").with("lang", "en");
        registry.register([("login", RouteSpec::Target(target.clone()))]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("login"), Some(&target));
    }

    #[test]
    fn test_register_merges_last_write_wins() {
        let mut registry = RouteRegistry::new();
        registry.register([("login", RouteSpec::target("users", "login"))]);
        registry.register([
            ("login", RouteSpec::target("accounts", "sign_in")),
            ("logout", RouteSpec::target("accounts", "sign_out")),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("login"),
            Some(&RouteTarget::new("accounts", "sign_in"))
        );
    }

    #[test]
    fn test_register_twice_is_idempotent() {
        let entries = || {
            vec![
                ("users", RouteSpec::resource("users")),
                ("login", RouteSpec::target("users", "login")),
            ]
        };

        let mut registry = RouteRegistry::new();
        registry.register(entries());
        let first: Vec<(String, RouteTarget)> = registry
            .iter()
            .map(|(n, t)| (n.to_string(), t.clone()))
            .collect();

        registry.register(entries());
        let second: Vec<(String, RouteTarget)> = registry
            .iter()
            .map(|(n, t)| (n.to_string(), t.clone()))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_resource_expansion_beats_explicit_entry_in_same_batch() {
        let mut registry = RouteRegistry::new();
        registry.register([
            ("view_user", RouteSpec::target("profiles", "show")),
            ("users", RouteSpec::resource("users")),
        ]);
        assert_eq!(
            registry.get("view_user"),
            Some(&RouteTarget::new("users", "view"))
        );
    }

    #[test]
    fn test_explicit_entry_in_later_batch_overrides_expansion() {
        let mut registry = RouteRegistry::new();
        registry.register([("users", RouteSpec::resource("users"))]);
        registry.register([("view_user", RouteSpec::target("profiles", "show"))]);
        assert_eq!(
            registry.get("view_user"),
            Some(&RouteTarget::new("profiles", "show"))
        );
    }

    #[test]
    fn test_malformed_spec_is_stored_without_error() {
        let mut registry = RouteRegistry::new();
        let broken = RouteTarget::default().with("action", "orphan");
        registry.register([("orphan", RouteSpec::from(broken.clone()))]);
        assert_eq!(registry.get("orphan"), Some(&broken));
    }

    #[test]
    fn test_connect_and_names() {
        let mut registry = RouteRegistry::default();
        assert!(registry.is_empty());
        registry.connect("root", RouteTarget::new("pages", "home"));
        registry.connect("about", RouteTarget::new("pages", "about"));
        assert_eq!(registry.names(), vec!["about", "root"]);
        assert!(format!("{registry:?}").contains("RouteRegistry"));
    }
}
