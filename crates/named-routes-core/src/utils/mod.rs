//! Utility functions for the named-routes workspace.
//!
//! This module provides:
//! - [`inflect`]: English singular/plural inflection used for resource expansion.

pub mod inflect;
