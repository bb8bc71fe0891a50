//! Route targets and registration specs.
//!
//! A [`RouteTarget`] is what the URL builder needs to render a route: a small
//! string map holding a `controller`, an `action`, and any extra keys the
//! builder understands. The registry never interprets these values itself.
//!
//! A [`RouteSpec`] is a value handed to
//! [`RouteRegistry::register`](crate::registry::RouteRegistry::register):
//! either an explicit target or a resource shorthand.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The key holding the controller name.
pub const CONTROLLER: &str = "controller";
/// The key holding the action name.
pub const ACTION: &str = "action";

/// The description of what a named route points at.
///
/// # Examples
///
/// ```
/// use named_routes_urls::target::RouteTarget;
///
/// let target = RouteTarget::new("users", "login");
/// assert_eq!(target.controller(), Some("users"));
/// assert_eq!(target.action(), Some("login"));
///
/// let target = target.with("slug", "hello-world");
/// assert_eq!(target.get("slug"), Some("hello-world"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTarget {
    fields: BTreeMap<String, String>,
}

impl RouteTarget {
    /// Creates a target with a controller and an action.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self::default()
            .with(CONTROLLER, controller)
            .with(ACTION, action)
    }

    /// Creates a target with a controller only.
    pub fn controller_only(controller: impl Into<String>) -> Self {
        Self::default().with(CONTROLLER, controller)
    }

    /// Returns this target with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the controller, if set.
    pub fn controller(&self) -> Option<&str> {
        self.get(CONTROLLER)
    }

    /// Returns the action, if set.
    pub fn action(&self) -> Option<&str> {
        self.get(ACTION)
    }

    /// Iterates over all fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over fields other than `controller` and `action`.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| *k != CONTROLLER && *k != ACTION)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the target has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}",
            self.controller().unwrap_or("?"),
            self.action().unwrap_or("?")
        )
    }
}

impl From<BTreeMap<String, String>> for RouteTarget {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteTarget {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A value passed to route registration.
///
/// Converting a [`RouteTarget`] into a `RouteSpec` classifies it: a target
/// with a `controller` and no `action` is a resource shorthand, everything
/// else is kept as an explicit target (missing fields surface when the route
/// is rendered).
///
/// # Examples
///
/// ```
/// use named_routes_urls::target::{RouteSpec, RouteTarget};
///
/// let spec = RouteSpec::from(RouteTarget::controller_only("users"));
/// assert_eq!(spec, RouteSpec::resource("users"));
///
/// let spec = RouteSpec::from(RouteTarget::new("users", "login"));
/// assert!(matches!(spec, RouteSpec::Target(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RouteTarget")]
pub enum RouteSpec {
    /// An explicit target, registered as-is.
    Target(RouteTarget),
    /// A resource shorthand: the registered name is the plural resource name.
    Resource {
        /// The controller serving the resource.
        controller: String,
    },
}

impl RouteSpec {
    /// Creates a resource shorthand for `controller`.
    pub fn resource(controller: impl Into<String>) -> Self {
        Self::Resource {
            controller: controller.into(),
        }
    }

    /// Creates an explicit controller/action target.
    pub fn target(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Target(RouteTarget::new(controller, action))
    }
}

impl From<RouteTarget> for RouteSpec {
    fn from(target: RouteTarget) -> Self {
        match (target.controller(), target.action()) {
            (Some(controller), None) => Self::resource(controller),
            _ => Self::Target(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_accessors() {
        let target = RouteTarget::new("users", "login").with("lang", "en");
        assert_eq!(target.controller(), Some("users"));
        assert_eq!(target.action(), Some("login"));
        assert_eq!(target.get("lang"), Some("en"));
        assert_eq!(target.len(), 3);
        assert_eq!(target.extras().collect::<Vec<_>>(), vec![("lang", "en")]);
    }

    #[test]
    fn test_target_display() {
        assert_eq!(RouteTarget::new("users", "login").to_string(), "users#login");
        assert_eq!(RouteTarget::default().to_string(), "?#?");
    }

    #[test]
    fn test_target_from_iter() {
        let target: RouteTarget = [("controller", "pages"), ("action", "home")]
            .into_iter()
            .collect();
        assert_eq!(target, RouteTarget::new("pages", "home"));
    }

    #[test]
    fn test_target_serde_is_a_plain_map() {
        let target = RouteTarget::new("users", "login");
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json, serde_json::json!({"action": "login", "controller": "users"}));
    }

    #[test]
    fn test_spec_classification() {
        assert_eq!(
            RouteSpec::from(RouteTarget::controller_only("users")),
            RouteSpec::resource("users")
        );
        assert_eq!(
            RouteSpec::from(RouteTarget::new("users", "login")),
            RouteSpec::target("users", "login")
        );
        // Neither controller nor action: passes through as an explicit target.
        let bare = RouteTarget::default().with("action", "login");
        assert_eq!(RouteSpec::from(bare.clone()), RouteSpec::Target(bare));
    }

    #[test]
    fn test_spec_deserialize() {
        let spec: RouteSpec = serde_json::from_str(r#"{"controller": "articles"}"#).unwrap();
        assert_eq!(spec, RouteSpec::resource("articles"));

        let spec: RouteSpec =
            serde_json::from_str(r#"{"controller": "users", "action": "login"}"#).unwrap();
        assert_eq!(spec, RouteSpec::target("users", "login"));
    }
}
