//! Settings for the named-routes workspace.
//!
//! [`Settings`] holds everything needed to bootstrap a resolver: the server
//! name used for absolute URLs, the named routes to register, and the path
//! patterns connected to the default URL builder. Unlike a process-wide
//! settings object, a `Settings` value is loaded once at startup and passed
//! explicitly to whatever builds the resolver.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// The key/value description of a route target as it appears in configuration
/// (`controller`, `action`, plus any extra keys the URL builder understands).
pub type TargetConfig = BTreeMap<String, String>;

/// A path template connected to the default URL builder.
///
/// ```toml
/// [[patterns]]
/// path = "/login"
/// controller = "users"
/// action = "login"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// The path template, e.g. `/login` or `/articles/<slug>`.
    pub path: String,
    /// The target fields this template renders.
    #[serde(flatten)]
    pub target: TargetConfig,
}

/// The complete set of named-routes settings.
///
/// # Examples
///
/// ```
/// use named_routes_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.server_name, "localhost");
/// assert!(settings.routes.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The host name inserted into absolute (`_url`) routes.
    pub server_name: String,

    // ── Routes ───────────────────────────────────────────────────────

    /// Named routes, keyed by route name. A table with a `controller` and no
    /// `action` is a resource shorthand.
    pub routes: BTreeMap<String, TargetConfig>,
    /// Path templates for the default URL builder, matched in order.
    pub patterns: Vec<PatternConfig>,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            server_name: "localhost".to_string(),
            routes: BTreeMap::new(),
            patterns: Vec::new(),
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}
