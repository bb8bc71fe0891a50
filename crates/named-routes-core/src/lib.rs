//! # named-routes-core
//!
//! Core types, settings, logging, and error types for the named-routes
//! workspace. This crate knows nothing about route resolution itself and
//! provides the foundation for `named-routes-urls`.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`utils`] - Text helpers, including the English [`Inflector`](utils::inflect::Inflector)
//! - [`settings`] - Route configuration (server name, named routes, path patterns)
//! - [`settings_loader`] - Loading settings from TOML, JSON and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{RouteError, RouteResult};
pub use settings::Settings;
pub use utils::inflect::{EnglishInflector, Inflector};
