//! Introspection view of the registered routes.

use serde::Serialize;

use named_routes_core::RouteResult;

/// One row of [`Resolver::list_routes`](crate::resolver::Resolver::list_routes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteListing {
    /// The registered route name.
    pub name: String,
    /// The rendered path (no prefix, host or parameters).
    pub url: String,
    /// The target controller, empty if unset.
    pub controller: String,
    /// The target action, empty if unset.
    pub action: String,
}

/// Serializes a route listing as pretty-printed JSON.
pub fn to_json(listing: &[RouteListing]) -> RouteResult<String> {
    Ok(serde_json::to_string_pretty(listing)?)
}
