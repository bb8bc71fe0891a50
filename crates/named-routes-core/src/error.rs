//! Core error types for the named-routes workspace.
//!
//! [`RouteError`] covers the failures that can escape route registration,
//! resolution and configuration loading. An unknown route name is *not* one of
//! them: resolution reports a miss through its own outcome type and only
//! returns an error when a collaborator (such as the URL builder) fails.

use thiserror::Error;

/// The primary error type for the named-routes workspace.
#[derive(Error, Debug)]
pub enum RouteError {
    // ── Lookup ───────────────────────────────────────────────────────

    /// A route or connected pattern could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A route target or pattern cannot be used as configured (for example a
    /// target without a controller).
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RouteError {
    /// Returns `true` for errors caused by how routes were configured rather
    /// than by the environment.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_) | Self::ImproperlyConfigured(_)
        )
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, RouteError>`.
pub type RouteResult<T> = Result<T, RouteError>;
